#![allow(async_fn_in_trait)]

use vet_domain::pagination::Pager;

use crate::domain::types::{
    Address, AddressPatch, Avatar, AvatarPatch, CatalogPosition, CatalogPositionPatch, Filter,
    Profile, ProfilePatch, ProfileUpdateMessage, Role, RolePatch,
};
use crate::error::EmployeesServiceError;

/// Repository for employee profiles.
pub trait ProfileRepository: Send + Sync {
    async fn get(&self, filter: &Filter) -> Result<Option<Profile>, EmployeesServiceError>;
    async fn get_all(&self, pager: &Pager) -> Result<Vec<Profile>, EmployeesServiceError>;
    async fn create(&self, profile: &Profile) -> Result<Profile, EmployeesServiceError>;
    /// Apply `patch` to the first match. Returns the post-update document.
    async fn update(
        &self,
        filter: &Filter,
        patch: &ProfilePatch,
    ) -> Result<Option<Profile>, EmployeesServiceError>;
    async fn count_documents(&self, filter: &Filter) -> Result<u64, EmployeesServiceError>;
}

/// Repository for the role catalog.
pub trait RoleRepository: Send + Sync {
    async fn get(&self, filter: &Filter) -> Result<Option<Role>, EmployeesServiceError>;
    async fn list(&self) -> Result<Vec<Role>, EmployeesServiceError>;
    async fn create(&self, role: &Role) -> Result<Role, EmployeesServiceError>;
    async fn update(
        &self,
        filter: &Filter,
        patch: &RolePatch,
    ) -> Result<Option<Role>, EmployeesServiceError>;
    async fn count_documents(&self, filter: &Filter) -> Result<u64, EmployeesServiceError>;
}

/// Repository for employee addresses.
pub trait AddressRepository: Send + Sync {
    async fn get(&self, filter: &Filter) -> Result<Option<Address>, EmployeesServiceError>;
    async fn create(&self, address: &Address) -> Result<Address, EmployeesServiceError>;
    async fn update(
        &self,
        filter: &Filter,
        patch: &AddressPatch,
    ) -> Result<Option<Address>, EmployeesServiceError>;
    async fn count_documents(&self, filter: &Filter) -> Result<u64, EmployeesServiceError>;
}

/// Repository for avatar pointers.
pub trait AvatarRepository: Send + Sync {
    async fn get(&self, filter: &Filter) -> Result<Option<Avatar>, EmployeesServiceError>;
    async fn create(&self, avatar: &Avatar) -> Result<Avatar, EmployeesServiceError>;
    async fn update(
        &self,
        filter: &Filter,
        patch: &AvatarPatch,
    ) -> Result<Option<Avatar>, EmployeesServiceError>;
    /// Delete the first match. Returns `true` if a document was deleted.
    async fn delete(&self, filter: &Filter) -> Result<bool, EmployeesServiceError>;
    async fn count_documents(&self, filter: &Filter) -> Result<u64, EmployeesServiceError>;
}

/// Repository for the positions catalog.
pub trait CatalogPositionRepository: Send + Sync {
    async fn get(&self, filter: &Filter)
    -> Result<Option<CatalogPosition>, EmployeesServiceError>;
    async fn get_all(&self, pager: &Pager) -> Result<Vec<CatalogPosition>, EmployeesServiceError>;
    async fn create(
        &self,
        position: &CatalogPosition,
    ) -> Result<CatalogPosition, EmployeesServiceError>;
    async fn update(
        &self,
        filter: &Filter,
        patch: &CatalogPositionPatch,
    ) -> Result<Option<CatalogPosition>, EmployeesServiceError>;
    /// Delete the first match. Returns `true` if a document was deleted.
    async fn delete(&self, filter: &Filter) -> Result<bool, EmployeesServiceError>;
    async fn count_documents(&self, filter: &Filter) -> Result<u64, EmployeesServiceError>;
}

/// Port for the avatar object store.
pub trait ObjectStorage: Send + Sync {
    async fn upload(
        &self,
        key: &str,
        content_type: Option<&str>,
        body: Vec<u8>,
    ) -> Result<(), EmployeesServiceError>;
    async fn delete(&self, key: &str) -> Result<(), EmployeesServiceError>;
    /// Publicly reachable URL of `key`.
    fn public_url(&self, key: &str) -> String;
}

/// Port for profile-update notifications on the message bus.
pub trait ProfileEventPublisher: Send + Sync {
    async fn publish_profile_update(
        &self,
        message: &ProfileUpdateMessage,
    ) -> Result<(), EmployeesServiceError>;
}
