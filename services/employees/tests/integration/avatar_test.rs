use vet_domain::id::EmployeeId;
use vet_employees::domain::repository::AvatarRepository;
use vet_employees::domain::types::{Filter, UpsertOutcome};
use vet_employees::error::EmployeesServiceError;
use vet_employees::usecase::avatar::{
    AvatarUpload, DeleteAvatarUseCase, GetAvatarUseCase, ReplaceAvatarUseCase,
    UpsertAvatarUseCase,
};

use crate::helpers::{MockAvatarRepo, MockStorage};

const MAX_IMAGE_SIZE: usize = 1024;

fn employee() -> EmployeeId {
    "62d24f2801ad56f85d5fd0f2".parse().unwrap()
}

fn upload(filename: &str) -> AvatarUpload {
    AvatarUpload {
        filename: filename.into(),
        content_type: Some("image/png".into()),
        data: vec![0x89, 0x50, 0x4e, 0x47],
    }
}

fn upsert(
    repo: &MockAvatarRepo,
    storage: &MockStorage,
) -> UpsertAvatarUseCase<MockAvatarRepo, MockStorage> {
    UpsertAvatarUseCase {
        repo: repo.clone(),
        storage: storage.clone(),
        max_image_size: MAX_IMAGE_SIZE,
    }
}

#[tokio::test]
async fn should_create_then_update_single_avatar() {
    let repo = MockAvatarRepo::default();
    let storage = MockStorage::default();
    let uc = upsert(&repo, &storage);

    let (first, outcome) = uc.execute(employee(), upload("me.png")).await.unwrap();
    assert_eq!(outcome, UpsertOutcome::Created);
    assert_eq!(first.path, "62d24f2801ad56f85d5fd0f2/me.png");

    let (second, outcome) = uc.execute(employee(), upload("new.jpg")).await.unwrap();
    assert_eq!(outcome, UpsertOutcome::Updated);
    assert_eq!(second.id, first.id, "update must keep the document id");
    assert_eq!(second.path, "62d24f2801ad56f85d5fd0f2/new.jpg");

    let count = repo
        .count_documents(&Filter::EmployeeId(employee()))
        .await
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(storage.upload_count(), 2);
}

#[tokio::test]
async fn should_write_nothing_when_upload_fails() {
    let repo = MockAvatarRepo::default();
    let uc = UpsertAvatarUseCase {
        repo: repo.clone(),
        storage: MockStorage::failing_uploads(),
        max_image_size: MAX_IMAGE_SIZE,
    };

    let result = uc.execute(employee(), upload("me.png")).await;

    assert!(
        matches!(result, Err(EmployeesServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
    assert!(repo.avatars.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_delete_uploaded_object_when_document_write_fails() {
    let repo = MockAvatarRepo::failing_writes();
    let storage = MockStorage::default();
    let uc = upsert(&repo, &storage);

    let result = uc.execute(employee(), upload("me.png")).await;

    assert!(matches!(result, Err(EmployeesServiceError::Internal(_))));
    assert_eq!(storage.upload_count(), 1);
    assert!(
        storage.keys().is_empty(),
        "orphaned object should have been deleted, found {:?}",
        storage.keys()
    );
}

#[tokio::test]
async fn should_reject_missing_and_oversized_images_before_upload() {
    let repo = MockAvatarRepo::default();
    let storage = MockStorage::default();
    let uc = upsert(&repo, &storage);

    let mut empty = upload("me.png");
    empty.data.clear();
    let result = uc.execute(employee(), empty).await;
    assert!(matches!(result, Err(EmployeesServiceError::MissingImage)));

    let mut large = upload("me.png");
    large.data = vec![0; MAX_IMAGE_SIZE + 1];
    let result = uc.execute(employee(), large).await;
    assert!(matches!(
        result,
        Err(EmployeesServiceError::ImageTooLarge { max: MAX_IMAGE_SIZE })
    ));

    assert_eq!(storage.upload_count(), 0);
}

#[tokio::test]
async fn should_not_replace_missing_avatar() {
    let storage = MockStorage::default();
    let uc = ReplaceAvatarUseCase {
        repo: MockAvatarRepo::default(),
        storage: storage.clone(),
        max_image_size: MAX_IMAGE_SIZE,
    };

    let result = uc.execute(employee(), upload("me.png")).await;

    assert!(
        matches!(result, Err(EmployeesServiceError::AvatarNotFound)),
        "expected AvatarNotFound, got {result:?}"
    );
    assert_eq!(storage.upload_count(), 0, "existence is checked before upload");
}

#[tokio::test]
async fn should_replace_existing_avatar() {
    let repo = MockAvatarRepo::default();
    let storage = MockStorage::default();
    upsert(&repo, &storage)
        .execute(employee(), upload("old.png"))
        .await
        .unwrap();

    let uc = ReplaceAvatarUseCase {
        repo: repo.clone(),
        storage: storage.clone(),
        max_image_size: MAX_IMAGE_SIZE,
    };
    let avatar = uc.execute(employee(), upload("fresh.png")).await.unwrap();

    assert_eq!(avatar.path, "62d24f2801ad56f85d5fd0f2/fresh.png");
    assert_eq!(repo.avatars.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_delete_object_and_document() {
    let repo = MockAvatarRepo::default();
    let storage = MockStorage::default();
    upsert(&repo, &storage)
        .execute(employee(), upload("me.png"))
        .await
        .unwrap();

    let uc = DeleteAvatarUseCase {
        repo: repo.clone(),
        storage: storage.clone(),
    };
    uc.execute(employee()).await.unwrap();

    assert!(repo.avatars.lock().unwrap().is_empty());
    assert!(storage.keys().is_empty());

    let again = uc.execute(employee()).await;
    assert!(matches!(again, Err(EmployeesServiceError::AvatarNotFound)));
}

#[tokio::test]
async fn should_return_not_found_for_unknown_avatar() {
    let uc = GetAvatarUseCase {
        repo: MockAvatarRepo::default(),
    };

    let result = uc.execute(employee()).await;

    assert!(matches!(result, Err(EmployeesServiceError::AvatarNotFound)));
}
