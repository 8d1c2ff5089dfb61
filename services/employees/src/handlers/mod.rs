pub mod address;
pub mod avatar;
pub mod catalog_position;
pub mod health;
pub mod profile;
pub mod role;

use vet_domain::id::{EmployeeId, RecordId};
use vet_domain::pagination::Pager;

use crate::error::EmployeesServiceError;

/// Parse `?offset=&limit=`. Absent parameters default to 0.
pub(crate) fn parse_pager(raw_query: Option<String>) -> Result<Pager, EmployeesServiceError> {
    let pager = raw_query
        .as_deref()
        .map(serde_qs::from_str::<Pager>)
        .transpose()
        .map_err(|e| EmployeesServiceError::InvalidQuery(e.to_string()))?
        .unwrap_or_default();
    Ok(pager)
}

pub(crate) fn parse_record_id(raw: &str) -> Result<RecordId, EmployeesServiceError> {
    raw.parse().map_err(|_| EmployeesServiceError::InvalidId)
}

pub(crate) fn parse_employee_id(raw: &str) -> Result<EmployeeId, EmployeesServiceError> {
    raw.parse().map_err(|_| EmployeesServiceError::InvalidId)
}
