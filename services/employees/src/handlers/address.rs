use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use vet_identity::EmployeeIdentity;

use crate::domain::types::Address;
use crate::error::EmployeesServiceError;
use crate::state::AppState;
use crate::usecase::address::{
    CreateAddressInput, CreateAddressUseCase, GetAddressUseCase, UpdateAddressInput,
    UpdateAddressUseCase,
};

#[derive(Serialize)]
pub struct AddressResponse {
    pub id: String,
    pub employee_id: String,
    pub municipality: String,
    pub postal_code: String,
    pub street: String,
    pub colony: String,
    pub number: String,
    #[serde(serialize_with = "vet_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vet_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id.to_string(),
            employee_id: address.employee_id.to_string(),
            municipality: address.municipality,
            postal_code: address.postal_code,
            street: address.street,
            colony: address.colony,
            number: address.number,
            created_at: address.created_at,
            updated_at: address.updated_at,
        }
    }
}

// ── GET /address/me ──────────────────────────────────────────────────────────

pub async fn get_my_address(
    identity: EmployeeIdentity,
    State(state): State<AppState>,
) -> Result<Json<AddressResponse>, EmployeesServiceError> {
    let usecase = GetAddressUseCase {
        repo: state.address_repo(),
    };
    let address = usecase.execute(identity.employee_id).await?;
    Ok(Json(address.into()))
}

// ── POST /address ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateAddressRequest {
    pub municipality: String,
    pub postal_code: String,
    pub street: String,
    pub colony: String,
    pub number: String,
}

pub async fn create_address(
    identity: EmployeeIdentity,
    State(state): State<AppState>,
    body: Result<Json<CreateAddressRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AddressResponse>), EmployeesServiceError> {
    let Json(body) = body?;
    let usecase = CreateAddressUseCase {
        repo: state.address_repo(),
    };
    let address = usecase
        .execute(
            identity.employee_id,
            CreateAddressInput {
                municipality: body.municipality,
                postal_code: body.postal_code,
                street: body.street,
                colony: body.colony,
                number: body.number,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(address.into())))
}

// ── PATCH /address/me ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateAddressRequest {
    pub municipality: Option<String>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub colony: Option<String>,
    pub number: Option<String>,
}

pub async fn update_my_address(
    identity: EmployeeIdentity,
    State(state): State<AppState>,
    body: Result<Json<UpdateAddressRequest>, JsonRejection>,
) -> Result<Json<AddressResponse>, EmployeesServiceError> {
    let Json(body) = body?;
    let usecase = UpdateAddressUseCase {
        repo: state.address_repo(),
    };
    let address = usecase
        .execute(
            identity.employee_id,
            UpdateAddressInput {
                municipality: body.municipality,
                postal_code: body.postal_code,
                street: body.street,
                colony: body.colony,
                number: body.number,
            },
        )
        .await?;
    Ok(Json(address.into()))
}
