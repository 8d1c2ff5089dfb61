use chrono::{DateTime, Utc};
use serde::Serialize;

use vet_domain::id::{EmployeeId, RecordId};
use vet_domain::profile::{EmployeeRole, Gender};

/// Employee profile, one per employee id.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: RecordId,
    pub employee_id: EmployeeId,
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub gender: Gender,
    pub phone_number: String,
    pub birthday: String,
    pub roles: Vec<EmployeeRole>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields to `$set` on a profile. `None` leaves the stored value untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub phone_number: Option<String>,
    pub birthday: Option<String>,
    pub roles: Option<Vec<EmployeeRole>>,
    pub updated_at: DateTime<Utc>,
}

/// Role catalog entry. Profiles reference roles by name only.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: RecordId,
    pub name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RolePatch {
    pub name: Option<String>,
    pub active: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

/// Postal address of an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: RecordId,
    pub employee_id: EmployeeId,
    pub municipality: String,
    pub postal_code: String,
    pub street: String,
    pub colony: String,
    pub number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddressPatch {
    pub municipality: Option<String>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub colony: Option<String>,
    pub number: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Avatar pointer; `path` is the object-store key, not a URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    pub id: RecordId,
    pub employee_id: EmployeeId,
    pub path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvatarPatch {
    pub path: String,
    pub updated_at: DateTime<Utc>,
}

/// Lookup entry of the positions catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPosition {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPositionPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

/// Document selector understood by every repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Id(RecordId),
    EmployeeId(EmployeeId),
    /// Case-insensitive exact match on `name`.
    Name(String),
}

/// Which branch the avatar upload took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// Payload published when a profile's roles change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdateMessage {
    pub employee_id: String,
    pub roles: Vec<String>,
}

impl ProfileUpdateMessage {
    pub fn new(employee_id: EmployeeId, roles: &[EmployeeRole]) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            roles: roles.iter().map(|r| r.as_str().to_owned()).collect(),
        }
    }
}

/// Treat blank strings as "not supplied" in partial payloads.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
