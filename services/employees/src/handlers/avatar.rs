use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use vet_identity::EmployeeIdentity;

use crate::domain::repository::ObjectStorage;
use crate::domain::types::{Avatar, UpsertOutcome};
use crate::error::EmployeesServiceError;
use crate::state::AppState;
use crate::usecase::avatar::{
    AvatarUpload, DeleteAvatarUseCase, GetAvatarUseCase, ReplaceAvatarUseCase,
    UpsertAvatarUseCase,
};

const IMAGE_FIELD: &str = "image";

/// Avatar as returned to clients; `path` is the public URL of the object.
#[derive(Serialize)]
pub struct AvatarResponse {
    pub id: String,
    pub employee_id: String,
    pub path: String,
    #[serde(serialize_with = "vet_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vet_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl AvatarResponse {
    fn new(avatar: Avatar, storage: &impl ObjectStorage) -> Self {
        Self {
            id: avatar.id.to_string(),
            employee_id: avatar.employee_id.to_string(),
            path: storage.public_url(&avatar.path),
            created_at: avatar.created_at,
            updated_at: avatar.updated_at,
        }
    }
}

/// Read the `image` field. Other fields are skipped.
async fn read_image(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<AvatarUpload, EmployeesServiceError> {
    let mut multipart = multipart?;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_owned();
        let content_type = field.content_type().map(str::to_owned);
        let data = field.bytes().await?;
        return Ok(AvatarUpload {
            filename,
            content_type,
            data: data.to_vec(),
        });
    }
    Err(EmployeesServiceError::MissingImage)
}

// ── POST /avatar ─────────────────────────────────────────────────────────────

pub async fn upsert_avatar(
    identity: EmployeeIdentity,
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<AvatarResponse>), EmployeesServiceError> {
    let upload = read_image(multipart).await?;
    let usecase = UpsertAvatarUseCase {
        repo: state.avatar_repo(),
        storage: state.storage.clone(),
        max_image_size: state.max_image_size,
    };
    let (avatar, outcome) = usecase.execute(identity.employee_id, upload).await?;
    let status = match outcome {
        UpsertOutcome::Created => StatusCode::CREATED,
        UpsertOutcome::Updated => StatusCode::OK,
    };
    Ok((status, Json(AvatarResponse::new(avatar, &state.storage))))
}

// ── GET /avatar/me ───────────────────────────────────────────────────────────

pub async fn get_my_avatar(
    identity: EmployeeIdentity,
    State(state): State<AppState>,
) -> Result<Json<AvatarResponse>, EmployeesServiceError> {
    let usecase = GetAvatarUseCase {
        repo: state.avatar_repo(),
    };
    let avatar = usecase.execute(identity.employee_id).await?;
    Ok(Json(AvatarResponse::new(avatar, &state.storage)))
}

// ── PATCH /avatar/me ─────────────────────────────────────────────────────────

pub async fn replace_my_avatar(
    identity: EmployeeIdentity,
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AvatarResponse>, EmployeesServiceError> {
    let upload = read_image(multipart).await?;
    let usecase = ReplaceAvatarUseCase {
        repo: state.avatar_repo(),
        storage: state.storage.clone(),
        max_image_size: state.max_image_size,
    };
    let avatar = usecase.execute(identity.employee_id, upload).await?;
    Ok(Json(AvatarResponse::new(avatar, &state.storage)))
}

// ── DELETE /avatar/me ────────────────────────────────────────────────────────

pub async fn delete_my_avatar(
    identity: EmployeeIdentity,
    State(state): State<AppState>,
) -> Result<StatusCode, EmployeesServiceError> {
    let usecase = DeleteAvatarUseCase {
        repo: state.avatar_repo(),
        storage: state.storage.clone(),
    };
    usecase.execute(identity.employee_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
