use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use vet_domain::pagination::PagerResult;
use vet_domain::profile::{EmployeeRole, Gender};
use vet_identity::EmployeeIdentity;

use crate::domain::types::Profile;
use crate::error::EmployeesServiceError;
use crate::handlers::{parse_employee_id, parse_pager};
use crate::state::AppState;
use crate::usecase::profile::{
    CreateProfileInput, CreateProfileUseCase, GetProfileUseCase, ListProfilesUseCase,
    UpdateProfileInput, UpdateProfileUseCase,
};

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub employee_id: String,
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub gender: Gender,
    pub phone_number: String,
    pub birthday: String,
    pub roles: Vec<EmployeeRole>,
    #[serde(serialize_with = "vet_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vet_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            employee_id: profile.employee_id.to_string(),
            email: profile.email,
            name: profile.name,
            last_name: profile.last_name,
            gender: profile.gender,
            phone_number: profile.phone_number,
            birthday: profile.birthday,
            roles: profile.roles,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

// ── GET /profiles ────────────────────────────────────────────────────────────

pub async fn list_profiles(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<PagerResult<ProfileResponse>>, EmployeesServiceError> {
    let pager = parse_pager(raw_query)?;
    let usecase = ListProfilesUseCase {
        repo: state.profile_repo(),
    };
    let page = usecase.execute(pager).await?;
    Ok(Json(page.map(ProfileResponse::from)))
}

// ── GET /profiles/me ─────────────────────────────────────────────────────────

pub async fn get_my_profile(
    identity: EmployeeIdentity,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, EmployeesServiceError> {
    let usecase = GetProfileUseCase {
        repo: state.profile_repo(),
    };
    let profile = usecase.execute(identity.employee_id).await?;
    Ok(Json(profile.into()))
}

// ── GET /profiles/{id} ───────────────────────────────────────────────────────

pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProfileResponse>, EmployeesServiceError> {
    let employee_id = parse_employee_id(&id)?;
    let usecase = GetProfileUseCase {
        repo: state.profile_repo(),
    };
    let profile = usecase.execute(employee_id).await?;
    Ok(Json(profile.into()))
}

// ── POST /profiles ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateProfileRequest {
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub gender: Gender,
    pub phone_number: String,
    pub birthday: String,
    #[serde(default)]
    pub roles: Vec<EmployeeRole>,
}

pub async fn create_profile(
    identity: EmployeeIdentity,
    State(state): State<AppState>,
    body: Result<Json<CreateProfileRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProfileResponse>), EmployeesServiceError> {
    let Json(body) = body?;
    let usecase = CreateProfileUseCase {
        repo: state.profile_repo(),
    };
    let profile = usecase
        .execute(
            identity.employee_id,
            CreateProfileInput {
                email: body.email,
                name: body.name,
                last_name: body.last_name,
                gender: body.gender,
                phone_number: body.phone_number,
                birthday: body.birthday,
                roles: body.roles,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(profile.into())))
}

// ── PATCH /profiles/me, PATCH /profiles/{id} ─────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub phone_number: Option<String>,
    pub birthday: Option<String>,
    pub roles: Option<Vec<EmployeeRole>>,
}

impl From<UpdateProfileRequest> for UpdateProfileInput {
    fn from(body: UpdateProfileRequest) -> Self {
        Self {
            email: body.email,
            name: body.name,
            last_name: body.last_name,
            gender: body.gender,
            phone_number: body.phone_number,
            birthday: body.birthday,
            roles: body.roles,
        }
    }
}

pub async fn update_my_profile(
    identity: EmployeeIdentity,
    State(state): State<AppState>,
    body: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<Json<ProfileResponse>, EmployeesServiceError> {
    let Json(body) = body?;
    let usecase = UpdateProfileUseCase {
        repo: state.profile_repo(),
        events: state.events.clone(),
    };
    let profile = usecase.execute(identity.employee_id, body.into()).await?;
    Ok(Json(profile.into()))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<Json<ProfileResponse>, EmployeesServiceError> {
    let employee_id = parse_employee_id(&id)?;
    let Json(body) = body?;
    let usecase = UpdateProfileUseCase {
        repo: state.profile_repo(),
        events: state.events.clone(),
    };
    let profile = usecase.execute(employee_id, body.into()).await?;
    Ok(Json(profile.into()))
}
