//! Test utilities for the veterinary employee services.
//!
//! Provides `MockIdentity` and a multipart body builder.
//! Import in `#[cfg(test)]` blocks and `tests/` only, never in production code.

pub mod identity;
pub mod multipart;
