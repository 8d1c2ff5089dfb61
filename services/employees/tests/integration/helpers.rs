#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::Utc;

use vet_domain::id::{EmployeeId, RecordId};
use vet_domain::pagination::Pager;
use vet_domain::profile::{EmployeeRole, Gender};
use vet_employees::domain::repository::{
    AddressRepository, AvatarRepository, CatalogPositionRepository, ObjectStorage,
    ProfileEventPublisher, ProfileRepository, RoleRepository,
};
use vet_employees::domain::types::{
    Address, AddressPatch, Avatar, AvatarPatch, CatalogPosition, CatalogPositionPatch, Filter,
    Profile, ProfilePatch, ProfileUpdateMessage, Role, RolePatch,
};
use vet_employees::error::EmployeesServiceError;

fn matches(
    filter: &Filter,
    id: RecordId,
    employee_id: Option<EmployeeId>,
    name: Option<&str>,
) -> bool {
    match filter {
        Filter::All => true,
        Filter::Id(wanted) => *wanted == id,
        Filter::EmployeeId(wanted) => employee_id == Some(*wanted),
        Filter::Name(wanted) => name.is_some_and(|n| n.to_lowercase() == wanted.to_lowercase()),
    }
}

fn store_down() -> EmployeesServiceError {
    EmployeesServiceError::Internal(anyhow::anyhow!("store unavailable"))
}

fn page<T: Clone>(items: &[T], pager: &Pager) -> Vec<T> {
    items
        .iter()
        .skip(pager.skip() as usize)
        .take(pager.limit.max(0) as usize)
        .cloned()
        .collect()
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_profile(employee_id: EmployeeId) -> Profile {
    let now = Utc::now();
    Profile {
        id: RecordId::generate(),
        employee_id,
        email: "ana.ruiz@clinic.mx".into(),
        name: "Ana".into(),
        last_name: "Ruiz".into(),
        gender: Gender::Female,
        phone_number: "5551234567".into(),
        birthday: "1990-04-12".into(),
        roles: vec![EmployeeRole::Employee],
        created_at: now,
        updated_at: now,
    }
}

pub fn test_position(name: &str) -> CatalogPosition {
    let now = Utc::now();
    CatalogPosition {
        id: RecordId::generate(),
        name: name.into(),
        description: format!("{name} duties"),
        active: true,
        created_at: now,
        updated_at: now,
    }
}

// ── MockProfileRepo ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockProfileRepo {
    pub profiles: Arc<Mutex<Vec<Profile>>>,
}

impl MockProfileRepo {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Arc::new(Mutex::new(profiles)),
        }
    }
}

impl ProfileRepository for MockProfileRepo {
    async fn get(&self, filter: &Filter) -> Result<Option<Profile>, EmployeesServiceError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| matches(filter, p.id, Some(p.employee_id), None))
            .cloned())
    }

    async fn get_all(&self, pager: &Pager) -> Result<Vec<Profile>, EmployeesServiceError> {
        Ok(page(&self.profiles.lock().unwrap(), pager))
    }

    async fn create(&self, profile: &Profile) -> Result<Profile, EmployeesServiceError> {
        self.profiles.lock().unwrap().push(profile.clone());
        Ok(profile.clone())
    }

    async fn update(
        &self,
        filter: &Filter,
        patch: &ProfilePatch,
    ) -> Result<Option<Profile>, EmployeesServiceError> {
        let mut profiles = self.profiles.lock().unwrap();
        let Some(p) = profiles
            .iter_mut()
            .find(|p| matches(filter, p.id, Some(p.employee_id), None))
        else {
            return Ok(None);
        };
        if let Some(ref v) = patch.email {
            p.email = v.clone();
        }
        if let Some(ref v) = patch.name {
            p.name = v.clone();
        }
        if let Some(ref v) = patch.last_name {
            p.last_name = v.clone();
        }
        if let Some(v) = patch.gender {
            p.gender = v;
        }
        if let Some(ref v) = patch.phone_number {
            p.phone_number = v.clone();
        }
        if let Some(ref v) = patch.birthday {
            p.birthday = v.clone();
        }
        if let Some(ref v) = patch.roles {
            p.roles = v.clone();
        }
        p.updated_at = patch.updated_at;
        Ok(Some(p.clone()))
    }

    async fn count_documents(&self, filter: &Filter) -> Result<u64, EmployeesServiceError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .filter(|p| matches(filter, p.id, Some(p.employee_id), None))
            .count() as u64)
    }
}

// ── MockRoleRepo ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockRoleRepo {
    pub roles: Arc<Mutex<Vec<Role>>>,
}

impl RoleRepository for MockRoleRepo {
    async fn get(&self, filter: &Filter) -> Result<Option<Role>, EmployeesServiceError> {
        Ok(self
            .roles
            .lock()
            .unwrap()
            .iter()
            .find(|r| matches(filter, r.id, None, Some(&r.name)))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Role>, EmployeesServiceError> {
        Ok(self.roles.lock().unwrap().clone())
    }

    async fn create(&self, role: &Role) -> Result<Role, EmployeesServiceError> {
        self.roles.lock().unwrap().push(role.clone());
        Ok(role.clone())
    }

    async fn update(
        &self,
        filter: &Filter,
        patch: &RolePatch,
    ) -> Result<Option<Role>, EmployeesServiceError> {
        let mut roles = self.roles.lock().unwrap();
        let Some(r) = roles
            .iter_mut()
            .find(|r| matches(filter, r.id, None, Some(&r.name)))
        else {
            return Ok(None);
        };
        if let Some(ref v) = patch.name {
            r.name = v.clone();
        }
        if let Some(v) = patch.active {
            r.active = v;
        }
        r.updated_at = patch.updated_at;
        Ok(Some(r.clone()))
    }

    async fn count_documents(&self, filter: &Filter) -> Result<u64, EmployeesServiceError> {
        Ok(self
            .roles
            .lock()
            .unwrap()
            .iter()
            .filter(|r| matches(filter, r.id, None, Some(&r.name)))
            .count() as u64)
    }
}

// ── MockAddressRepo ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockAddressRepo {
    pub addresses: Arc<Mutex<Vec<Address>>>,
}

impl AddressRepository for MockAddressRepo {
    async fn get(&self, filter: &Filter) -> Result<Option<Address>, EmployeesServiceError> {
        Ok(self
            .addresses
            .lock()
            .unwrap()
            .iter()
            .find(|a| matches(filter, a.id, Some(a.employee_id), None))
            .cloned())
    }

    async fn create(&self, address: &Address) -> Result<Address, EmployeesServiceError> {
        self.addresses.lock().unwrap().push(address.clone());
        Ok(address.clone())
    }

    async fn update(
        &self,
        filter: &Filter,
        patch: &AddressPatch,
    ) -> Result<Option<Address>, EmployeesServiceError> {
        let mut addresses = self.addresses.lock().unwrap();
        let Some(a) = addresses
            .iter_mut()
            .find(|a| matches(filter, a.id, Some(a.employee_id), None))
        else {
            return Ok(None);
        };
        if let Some(ref v) = patch.municipality {
            a.municipality = v.clone();
        }
        if let Some(ref v) = patch.postal_code {
            a.postal_code = v.clone();
        }
        if let Some(ref v) = patch.street {
            a.street = v.clone();
        }
        if let Some(ref v) = patch.colony {
            a.colony = v.clone();
        }
        if let Some(ref v) = patch.number {
            a.number = v.clone();
        }
        a.updated_at = patch.updated_at;
        Ok(Some(a.clone()))
    }

    async fn count_documents(&self, filter: &Filter) -> Result<u64, EmployeesServiceError> {
        Ok(self
            .addresses
            .lock()
            .unwrap()
            .iter()
            .filter(|a| matches(filter, a.id, Some(a.employee_id), None))
            .count() as u64)
    }
}

// ── MockAvatarRepo ───────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockAvatarRepo {
    pub avatars: Arc<Mutex<Vec<Avatar>>>,
    /// Make `create` and `update` fail as if the store were down.
    pub fail_writes: bool,
}

impl MockAvatarRepo {
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }
}

impl AvatarRepository for MockAvatarRepo {
    async fn get(&self, filter: &Filter) -> Result<Option<Avatar>, EmployeesServiceError> {
        Ok(self
            .avatars
            .lock()
            .unwrap()
            .iter()
            .find(|a| matches(filter, a.id, Some(a.employee_id), None))
            .cloned())
    }

    async fn create(&self, avatar: &Avatar) -> Result<Avatar, EmployeesServiceError> {
        if self.fail_writes {
            return Err(store_down());
        }
        self.avatars.lock().unwrap().push(avatar.clone());
        Ok(avatar.clone())
    }

    async fn update(
        &self,
        filter: &Filter,
        patch: &AvatarPatch,
    ) -> Result<Option<Avatar>, EmployeesServiceError> {
        if self.fail_writes {
            return Err(store_down());
        }
        let mut avatars = self.avatars.lock().unwrap();
        let Some(a) = avatars
            .iter_mut()
            .find(|a| matches(filter, a.id, Some(a.employee_id), None))
        else {
            return Ok(None);
        };
        a.path = patch.path.clone();
        a.updated_at = patch.updated_at;
        Ok(Some(a.clone()))
    }

    async fn delete(&self, filter: &Filter) -> Result<bool, EmployeesServiceError> {
        let mut avatars = self.avatars.lock().unwrap();
        match avatars
            .iter()
            .position(|a| matches(filter, a.id, Some(a.employee_id), None))
        {
            Some(index) => {
                avatars.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count_documents(&self, filter: &Filter) -> Result<u64, EmployeesServiceError> {
        Ok(self
            .avatars
            .lock()
            .unwrap()
            .iter()
            .filter(|a| matches(filter, a.id, Some(a.employee_id), None))
            .count() as u64)
    }
}

// ── MockCatalogPositionRepo ──────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockCatalogPositionRepo {
    pub positions: Arc<Mutex<Vec<CatalogPosition>>>,
}

impl MockCatalogPositionRepo {
    pub fn new(positions: Vec<CatalogPosition>) -> Self {
        Self {
            positions: Arc::new(Mutex::new(positions)),
        }
    }
}

impl CatalogPositionRepository for MockCatalogPositionRepo {
    async fn get(
        &self,
        filter: &Filter,
    ) -> Result<Option<CatalogPosition>, EmployeesServiceError> {
        Ok(self
            .positions
            .lock()
            .unwrap()
            .iter()
            .find(|p| matches(filter, p.id, None, Some(&p.name)))
            .cloned())
    }

    async fn get_all(&self, pager: &Pager) -> Result<Vec<CatalogPosition>, EmployeesServiceError> {
        Ok(page(&self.positions.lock().unwrap(), pager))
    }

    async fn create(
        &self,
        position: &CatalogPosition,
    ) -> Result<CatalogPosition, EmployeesServiceError> {
        self.positions.lock().unwrap().push(position.clone());
        Ok(position.clone())
    }

    async fn update(
        &self,
        filter: &Filter,
        patch: &CatalogPositionPatch,
    ) -> Result<Option<CatalogPosition>, EmployeesServiceError> {
        let mut positions = self.positions.lock().unwrap();
        let Some(p) = positions
            .iter_mut()
            .find(|p| matches(filter, p.id, None, Some(&p.name)))
        else {
            return Ok(None);
        };
        if let Some(ref v) = patch.name {
            p.name = v.clone();
        }
        if let Some(ref v) = patch.description {
            p.description = v.clone();
        }
        if let Some(v) = patch.active {
            p.active = v;
        }
        p.updated_at = patch.updated_at;
        Ok(Some(p.clone()))
    }

    async fn delete(&self, filter: &Filter) -> Result<bool, EmployeesServiceError> {
        let mut positions = self.positions.lock().unwrap();
        match positions
            .iter()
            .position(|p| matches(filter, p.id, None, Some(&p.name)))
        {
            Some(index) => {
                positions.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count_documents(&self, filter: &Filter) -> Result<u64, EmployeesServiceError> {
        Ok(self
            .positions
            .lock()
            .unwrap()
            .iter()
            .filter(|p| matches(filter, p.id, None, Some(&p.name)))
            .count() as u64)
    }
}

// ── MockStorage ──────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockStorage {
    /// Keys currently held by the store.
    pub objects: Arc<Mutex<Vec<String>>>,
    pub uploads: Arc<Mutex<u32>>,
    pub fail_uploads: bool,
}

impl MockStorage {
    pub fn failing_uploads() -> Self {
        Self {
            fail_uploads: true,
            ..Self::default()
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().clone()
    }

    pub fn upload_count(&self) -> u32 {
        *self.uploads.lock().unwrap()
    }
}

impl ObjectStorage for MockStorage {
    async fn upload(
        &self,
        key: &str,
        _content_type: Option<&str>,
        _body: Vec<u8>,
    ) -> Result<(), EmployeesServiceError> {
        if self.fail_uploads {
            return Err(EmployeesServiceError::Internal(anyhow::anyhow!(
                "bucket unreachable"
            )));
        }
        *self.uploads.lock().unwrap() += 1;
        let mut objects = self.objects.lock().unwrap();
        if !objects.iter().any(|k| k == key) {
            objects.push(key.to_owned());
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), EmployeesServiceError> {
        self.objects.lock().unwrap().retain(|k| k != key);
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("http://objects.test/avatars/{key}")
    }
}

// ── MockPublisher ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockPublisher {
    pub published: Arc<Mutex<Vec<ProfileUpdateMessage>>>,
    pub fail: bool,
}

impl MockPublisher {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> Vec<ProfileUpdateMessage> {
        self.published.lock().unwrap().clone()
    }
}

impl ProfileEventPublisher for MockPublisher {
    async fn publish_profile_update(
        &self,
        message: &ProfileUpdateMessage,
    ) -> Result<(), EmployeesServiceError> {
        self.published.lock().unwrap().push(message.clone());
        if self.fail {
            return Err(EmployeesServiceError::Internal(anyhow::anyhow!(
                "broker unreachable"
            )));
        }
        Ok(())
    }
}
