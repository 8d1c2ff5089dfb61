//! Domain types shared across the veterinary employee workspace.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers as well as the shared extractors.

pub mod id;
pub mod pagination;
pub mod profile;
