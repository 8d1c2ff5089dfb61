use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use vet_domain::pagination::PagerResult;

use crate::domain::types::CatalogPosition;
use crate::error::EmployeesServiceError;
use crate::handlers::{parse_pager, parse_record_id};
use crate::state::AppState;
use crate::usecase::catalog_position::{
    CreateCatalogPositionInput, CreateCatalogPositionUseCase, DeleteCatalogPositionUseCase,
    GetCatalogPositionUseCase, ListCatalogPositionsUseCase, UpdateCatalogPositionInput,
    UpdateCatalogPositionUseCase,
};

#[derive(Serialize)]
pub struct CatalogPositionResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub active: bool,
    #[serde(serialize_with = "vet_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vet_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<CatalogPosition> for CatalogPositionResponse {
    fn from(position: CatalogPosition) -> Self {
        Self {
            id: position.id.to_string(),
            name: position.name,
            description: position.description,
            active: position.active,
            created_at: position.created_at,
            updated_at: position.updated_at,
        }
    }
}

// ── GET /catalog-positions ───────────────────────────────────────────────────

pub async fn list_catalog_positions(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<PagerResult<CatalogPositionResponse>>, EmployeesServiceError> {
    let pager = parse_pager(raw_query)?;
    let usecase = ListCatalogPositionsUseCase {
        repo: state.catalog_position_repo(),
    };
    let page = usecase.execute(pager).await?;
    Ok(Json(page.map(CatalogPositionResponse::from)))
}

// ── GET /catalog-positions/{id} ──────────────────────────────────────────────

pub async fn get_catalog_position(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogPositionResponse>, EmployeesServiceError> {
    let id = parse_record_id(&id)?;
    let usecase = GetCatalogPositionUseCase {
        repo: state.catalog_position_repo(),
    };
    let position = usecase.execute(id).await?;
    Ok(Json(position.into()))
}

// ── POST /catalog-positions ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCatalogPositionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

pub async fn create_catalog_position(
    State(state): State<AppState>,
    body: Result<Json<CreateCatalogPositionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CatalogPositionResponse>), EmployeesServiceError> {
    let Json(body) = body?;
    let usecase = CreateCatalogPositionUseCase {
        repo: state.catalog_position_repo(),
    };
    let position = usecase
        .execute(CreateCatalogPositionInput {
            name: body.name,
            description: body.description,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(position.into())))
}

// ── PATCH /catalog-positions/{id} ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateCatalogPositionRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

pub async fn update_catalog_position(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateCatalogPositionRequest>, JsonRejection>,
) -> Result<Json<CatalogPositionResponse>, EmployeesServiceError> {
    let id = parse_record_id(&id)?;
    let Json(body) = body?;
    let usecase = UpdateCatalogPositionUseCase {
        repo: state.catalog_position_repo(),
    };
    let position = usecase
        .execute(
            id,
            UpdateCatalogPositionInput {
                name: body.name,
                description: body.description,
                active: body.active,
            },
        )
        .await?;
    Ok(Json(position.into()))
}

// ── DELETE /catalog-positions/{id} ───────────────────────────────────────────

pub async fn delete_catalog_position(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, EmployeesServiceError> {
    let id = parse_record_id(&id)?;
    let usecase = DeleteCatalogPositionUseCase {
        repo: state.catalog_position_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
