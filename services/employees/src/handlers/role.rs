use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::types::Role;
use crate::error::EmployeesServiceError;
use crate::handlers::parse_record_id;
use crate::state::AppState;
use crate::usecase::role::{
    CreateRoleInput, CreateRoleUseCase, ListRolesUseCase, UpdateRoleInput, UpdateRoleUseCase,
};

#[derive(Serialize)]
pub struct RoleResponse {
    pub id: String,
    pub name: String,
    pub active: bool,
    #[serde(serialize_with = "vet_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vet_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id.to_string(),
            name: role.name,
            active: role.active,
            created_at: role.created_at,
            updated_at: role.updated_at,
        }
    }
}

// ── GET /roles ───────────────────────────────────────────────────────────────

pub async fn list_roles(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoleResponse>>, EmployeesServiceError> {
    let usecase = ListRolesUseCase {
        repo: state.role_repo(),
    };
    let roles = usecase.execute().await?;
    Ok(Json(roles.into_iter().map(RoleResponse::from).collect()))
}

// ── POST /roles ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateRoleRequest {
    #[serde(default)]
    pub name: String,
}

pub async fn create_role(
    State(state): State<AppState>,
    body: Result<Json<CreateRoleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RoleResponse>), EmployeesServiceError> {
    let Json(body) = body?;
    let usecase = CreateRoleUseCase {
        repo: state.role_repo(),
    };
    let role = usecase.execute(CreateRoleInput { name: body.name }).await?;
    Ok((StatusCode::CREATED, Json(role.into())))
}

// ── PATCH /roles/{id} ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateRoleRequest {
    pub name: Option<String>,
    pub active: Option<bool>,
}

pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateRoleRequest>, JsonRejection>,
) -> Result<Json<RoleResponse>, EmployeesServiceError> {
    let id = parse_record_id(&id)?;
    let Json(body) = body?;
    let usecase = UpdateRoleUseCase {
        repo: state.role_repo(),
    };
    let role = usecase
        .execute(
            id,
            UpdateRoleInput {
                name: body.name,
                active: body.active,
            },
        )
        .await?;
    Ok(Json(role.into()))
}
