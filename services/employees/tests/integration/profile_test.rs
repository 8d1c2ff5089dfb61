use vet_domain::id::EmployeeId;
use vet_domain::pagination::Pager;
use vet_domain::profile::{EmployeeRole, Gender};
use vet_employees::error::EmployeesServiceError;
use vet_employees::usecase::profile::{
    CreateProfileInput, CreateProfileUseCase, GetProfileUseCase, ListProfilesUseCase,
    UpdateProfileInput, UpdateProfileUseCase,
};

use crate::helpers::{MockProfileRepo, MockPublisher, test_profile};

fn employee() -> EmployeeId {
    "62d24f2801ad56f85d5fd0f2".parse().unwrap()
}

#[tokio::test]
async fn should_publish_once_when_roles_are_updated() {
    let repo = MockProfileRepo::new(vec![test_profile(employee())]);
    let events = MockPublisher::default();
    let uc = UpdateProfileUseCase {
        repo: repo.clone(),
        events: events.clone(),
    };

    let profile = uc
        .execute(
            employee(),
            UpdateProfileInput {
                roles: Some(vec![EmployeeRole::Employee, EmployeeRole::SuperAdmin]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(
        profile.roles,
        vec![EmployeeRole::Employee, EmployeeRole::SuperAdmin]
    );
    let messages = events.messages();
    assert_eq!(messages.len(), 1, "expected exactly one publish");
    assert_eq!(messages[0].employee_id, "62d24f2801ad56f85d5fd0f2");
    assert_eq!(messages[0].roles, vec!["employee", "super-admin"]);
}

#[tokio::test]
async fn should_not_publish_when_roles_are_empty_or_absent() {
    let repo = MockProfileRepo::new(vec![test_profile(employee())]);
    let events = MockPublisher::default();
    let uc = UpdateProfileUseCase {
        repo: repo.clone(),
        events: events.clone(),
    };

    uc.execute(
        employee(),
        UpdateProfileInput {
            roles: Some(vec![]),
            name: Some("Ana María".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    uc.execute(
        employee(),
        UpdateProfileInput {
            gender: Some(Gender::NotSpecified),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(events.messages().is_empty());
    let stored = repo.profiles.lock().unwrap()[0].clone();
    assert_eq!(stored.name, "Ana María");
    assert_eq!(stored.gender, Gender::NotSpecified);
    assert_eq!(stored.roles, vec![EmployeeRole::Employee]);
}

#[tokio::test]
async fn should_return_updated_profile_when_publish_fails() {
    let repo = MockProfileRepo::new(vec![test_profile(employee())]);
    let uc = UpdateProfileUseCase {
        repo,
        events: MockPublisher::failing(),
    };

    let result = uc
        .execute(
            employee(),
            UpdateProfileInput {
                roles: Some(vec![EmployeeRole::SuperAdmin]),
                ..Default::default()
            },
        )
        .await;

    let profile = result.expect("publish failure must not fail the update");
    assert_eq!(profile.roles, vec![EmployeeRole::SuperAdmin]);
}

#[tokio::test]
async fn should_ignore_blank_fields_in_partial_update() {
    let repo = MockProfileRepo::new(vec![test_profile(employee())]);
    let uc = UpdateProfileUseCase {
        repo: repo.clone(),
        events: MockPublisher::default(),
    };

    let profile = uc
        .execute(
            employee(),
            UpdateProfileInput {
                email: Some(String::new()),
                last_name: Some("".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(profile.email, "ana.ruiz@clinic.mx");
    assert_eq!(profile.last_name, "Ruiz");
}

#[tokio::test]
async fn should_reject_malformed_email_without_touching_store() {
    let original = test_profile(employee());
    let repo = MockProfileRepo::new(vec![original.clone()]);
    let uc = UpdateProfileUseCase {
        repo: repo.clone(),
        events: MockPublisher::default(),
    };

    let result = uc
        .execute(
            employee(),
            UpdateProfileInput {
                email: Some("ana-at-clinic".into()),
                ..Default::default()
            },
        )
        .await;

    assert!(
        matches!(result, Err(EmployeesServiceError::Validation(_))),
        "expected Validation, got {result:?}"
    );
    assert_eq!(repo.profiles.lock().unwrap()[0], original);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_profile() {
    let uc = GetProfileUseCase {
        repo: MockProfileRepo::default(),
    };

    let result = uc.execute(employee()).await;

    assert!(
        matches!(result, Err(EmployeesServiceError::ProfileNotFound)),
        "expected ProfileNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_not_publish_when_profile_is_missing() {
    let events = MockPublisher::default();
    let uc = UpdateProfileUseCase {
        repo: MockProfileRepo::default(),
        events: events.clone(),
    };

    let result = uc
        .execute(
            employee(),
            UpdateProfileInput {
                roles: Some(vec![EmployeeRole::Employee]),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(EmployeesServiceError::ProfileNotFound)));
    assert!(events.messages().is_empty());
}

#[tokio::test]
async fn should_create_profile_once_per_employee() {
    let repo = MockProfileRepo::default();
    let uc = CreateProfileUseCase { repo: repo.clone() };
    let input = || CreateProfileInput {
        email: "luis@clinic.mx".into(),
        name: "Luis".into(),
        last_name: "Pérez".into(),
        gender: Gender::Male,
        phone_number: "5550001111".into(),
        birthday: "1988-01-30".into(),
        roles: vec![EmployeeRole::Employee],
    };

    let created = uc.execute(employee(), input()).await.unwrap();
    assert_eq!(created.employee_id, employee());
    assert_eq!(created.created_at, created.updated_at);

    let again = uc.execute(employee(), input()).await;
    assert!(
        matches!(again, Err(EmployeesServiceError::ProfileAlreadyExists)),
        "expected ProfileAlreadyExists, got {again:?}"
    );
    assert_eq!(repo.profiles.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_page_profiles_with_markers() {
    let profiles = (0..15)
        .map(|_| test_profile(EmployeeId(bson::oid::ObjectId::new())))
        .collect();
    let uc = ListProfilesUseCase {
        repo: MockProfileRepo::new(profiles),
    };

    let first = uc.execute(Pager { offset: 0, limit: 10 }).await.unwrap();
    assert_eq!(first.data.len(), 10);
    assert_eq!((first.next, first.previous, first.total), (1, 0, 15));

    let past_end = uc.execute(Pager { offset: 5, limit: 10 }).await.unwrap();
    assert!(past_end.data.is_empty());
    assert_eq!(past_end.next, 0);
}

#[tokio::test]
async fn should_reject_invalid_pager() {
    let uc = ListProfilesUseCase {
        repo: MockProfileRepo::default(),
    };

    let result = uc.execute(Pager { offset: 0, limit: 50 }).await;

    assert!(matches!(result, Err(EmployeesServiceError::InvalidPager(_))));
}
