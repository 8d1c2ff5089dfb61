use chrono::Utc;
use validator::Validate;

use vet_domain::id::{EmployeeId, RecordId};

use crate::domain::repository::AddressRepository;
use crate::domain::types::{Address, AddressPatch, Filter, non_blank};
use crate::error::EmployeesServiceError;

// ── GetAddress ───────────────────────────────────────────────────────────────

pub struct GetAddressUseCase<R: AddressRepository> {
    pub repo: R,
}

impl<R: AddressRepository> GetAddressUseCase<R> {
    pub async fn execute(&self, employee_id: EmployeeId) -> Result<Address, EmployeesServiceError> {
        self.repo
            .get(&Filter::EmployeeId(employee_id))
            .await?
            .ok_or(EmployeesServiceError::AddressNotFound)
    }
}

// ── CreateAddress ────────────────────────────────────────────────────────────

#[derive(Debug, Validate)]
pub struct CreateAddressInput {
    #[validate(length(min = 1))]
    pub municipality: String,
    #[validate(length(min = 1))]
    pub postal_code: String,
    #[validate(length(min = 1))]
    pub street: String,
    #[validate(length(min = 1))]
    pub colony: String,
    #[validate(length(min = 1))]
    pub number: String,
}

pub struct CreateAddressUseCase<R: AddressRepository> {
    pub repo: R,
}

impl<R: AddressRepository> CreateAddressUseCase<R> {
    pub async fn execute(
        &self,
        employee_id: EmployeeId,
        input: CreateAddressInput,
    ) -> Result<Address, EmployeesServiceError> {
        input.validate()?;
        let now = Utc::now();
        let address = Address {
            id: RecordId::generate(),
            employee_id,
            municipality: input.municipality,
            postal_code: input.postal_code,
            street: input.street,
            colony: input.colony,
            number: input.number,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&address).await
    }
}

// ── UpdateAddress ────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct UpdateAddressInput {
    pub municipality: Option<String>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub colony: Option<String>,
    pub number: Option<String>,
}

pub struct UpdateAddressUseCase<R: AddressRepository> {
    pub repo: R,
}

impl<R: AddressRepository> UpdateAddressUseCase<R> {
    pub async fn execute(
        &self,
        employee_id: EmployeeId,
        input: UpdateAddressInput,
    ) -> Result<Address, EmployeesServiceError> {
        let patch = AddressPatch {
            municipality: non_blank(input.municipality),
            postal_code: non_blank(input.postal_code),
            street: non_blank(input.street),
            colony: non_blank(input.colony),
            number: non_blank(input.number),
            updated_at: Utc::now(),
        };
        self.repo
            .update(&Filter::EmployeeId(employee_id), &patch)
            .await?
            .ok_or(EmployeesServiceError::AddressNotFound)
    }
}
