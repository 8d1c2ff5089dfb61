//! Identity propagated by the gateway in front of the veterinary employee services.

pub mod identity;

pub use identity::{EmployeeIdentity, USER_ID_HEADER};
