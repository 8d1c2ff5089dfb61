pub mod address;
pub mod avatar;
pub mod catalog_position;
pub mod profile;
pub mod role;
