//! Persisted document shapes of the employees service, one module per collection.
//!
//! Field names are the stored (snake_case) names; `_id` is an ObjectId and
//! timestamps are BSON datetimes.

pub mod addresses;
pub mod avatars;
pub mod catalog_positions;
pub mod profiles;
pub mod roles;
