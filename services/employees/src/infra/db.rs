use anyhow::Context;
use bson::{Bson, Document, doc};
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::options::ReturnDocument;

use vet_domain::pagination::Pager;
use vet_domain::profile::{EmployeeRole, Gender};
use vet_employees_schema::{addresses, avatars, catalog_positions, profiles, roles};

use crate::domain::repository::{
    AddressRepository, AvatarRepository, CatalogPositionRepository, ProfileRepository,
    RoleRepository,
};
use crate::domain::types::{
    Address, AddressPatch, Avatar, AvatarPatch, CatalogPosition, CatalogPositionPatch, Filter,
    Profile, ProfilePatch, Role, RolePatch,
};
use crate::error::EmployeesServiceError;

/// Escape regex metacharacters so `value` matches literally.
fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if "\\^$.|?*+()[]{}".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn filter_document(filter: &Filter) -> Document {
    match filter {
        Filter::All => doc! {},
        Filter::Id(id) => doc! { "_id": id.0 },
        Filter::EmployeeId(id) => doc! { "employee_id": id.0 },
        Filter::Name(name) => doc! {
            "name": { "$regex": format!("^{}$", escape_regex(name)), "$options": "i" }
        },
    }
}

/// Build a `$set` update from the supplied fields plus `updated_at`.
fn set_document(
    fields: impl IntoIterator<Item = (&'static str, Option<Bson>)>,
    updated_at: chrono::DateTime<chrono::Utc>,
) -> Document {
    let mut set = Document::new();
    for (key, value) in fields {
        if let Some(value) = value {
            set.insert(key, value);
        }
    }
    set.insert("updated_at", bson::DateTime::from_chrono(updated_at));
    doc! { "$set": set }
}

// ── Profiles ─────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MongoProfileRepository {
    pub collection: Collection<profiles::Model>,
}

impl MongoProfileRepository {
    fn to_domain(model: profiles::Model) -> Result<Profile, EmployeesServiceError> {
        let gender = model
            .gender
            .parse::<Gender>()
            .with_context(|| format!("profile {} has an invalid gender", model.id))?;
        let roles = model
            .roles
            .iter()
            .map(|r| r.parse::<EmployeeRole>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("profile {} has an invalid role", model.id))?;
        Ok(Profile {
            id: model.id.into(),
            employee_id: model.employee_id.into(),
            email: model.email,
            name: model.name,
            last_name: model.last_name,
            gender,
            phone_number: model.phone_number,
            birthday: model.birthday,
            roles,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    fn to_model(profile: &Profile) -> profiles::Model {
        profiles::Model {
            id: profile.id.0,
            employee_id: profile.employee_id.0,
            email: profile.email.clone(),
            name: profile.name.clone(),
            last_name: profile.last_name.clone(),
            gender: profile.gender.as_str().to_owned(),
            phone_number: profile.phone_number.clone(),
            birthday: profile.birthday.clone(),
            roles: profile.roles.iter().map(|r| r.as_str().to_owned()).collect(),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }

    fn update_document(patch: &ProfilePatch) -> Document {
        set_document(
            [
                ("email", patch.email.clone().map(Bson::String)),
                ("name", patch.name.clone().map(Bson::String)),
                ("last_name", patch.last_name.clone().map(Bson::String)),
                ("gender", patch.gender.map(|g| Bson::String(g.as_str().to_owned()))),
                ("phone_number", patch.phone_number.clone().map(Bson::String)),
                ("birthday", patch.birthday.clone().map(Bson::String)),
                (
                    "roles",
                    patch.roles.as_ref().map(|roles| {
                        Bson::Array(
                            roles
                                .iter()
                                .map(|r| Bson::String(r.as_str().to_owned()))
                                .collect(),
                        )
                    }),
                ),
            ],
            patch.updated_at,
        )
    }
}

impl ProfileRepository for MongoProfileRepository {
    async fn get(&self, filter: &Filter) -> Result<Option<Profile>, EmployeesServiceError> {
        self.collection
            .find_one(filter_document(filter))
            .await
            .context("find profile")?
            .map(Self::to_domain)
            .transpose()
    }

    async fn get_all(&self, pager: &Pager) -> Result<Vec<Profile>, EmployeesServiceError> {
        let models: Vec<profiles::Model> = self
            .collection
            .find(doc! {})
            .skip(pager.skip())
            .limit(pager.limit)
            .await
            .context("list profiles")?
            .try_collect()
            .await
            .context("read profiles cursor")?;
        models.into_iter().map(Self::to_domain).collect()
    }

    async fn create(&self, profile: &Profile) -> Result<Profile, EmployeesServiceError> {
        self.collection
            .insert_one(Self::to_model(profile))
            .await
            .context("insert profile")?;
        Ok(profile.clone())
    }

    async fn update(
        &self,
        filter: &Filter,
        patch: &ProfilePatch,
    ) -> Result<Option<Profile>, EmployeesServiceError> {
        self.collection
            .find_one_and_update(filter_document(filter), Self::update_document(patch))
            .return_document(ReturnDocument::After)
            .await
            .context("update profile")?
            .map(Self::to_domain)
            .transpose()
    }

    async fn count_documents(&self, filter: &Filter) -> Result<u64, EmployeesServiceError> {
        Ok(self
            .collection
            .count_documents(filter_document(filter))
            .await
            .context("count profiles")?)
    }
}

// ── Roles ────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MongoRoleRepository {
    pub collection: Collection<roles::Model>,
}

fn role_from_model(model: roles::Model) -> Role {
    Role {
        id: model.id.into(),
        name: model.name,
        active: model.active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

impl RoleRepository for MongoRoleRepository {
    async fn get(&self, filter: &Filter) -> Result<Option<Role>, EmployeesServiceError> {
        let model = self
            .collection
            .find_one(filter_document(filter))
            .await
            .context("find role")?;
        Ok(model.map(role_from_model))
    }

    async fn list(&self) -> Result<Vec<Role>, EmployeesServiceError> {
        let models: Vec<roles::Model> = self
            .collection
            .find(doc! {})
            .await
            .context("list roles")?
            .try_collect()
            .await
            .context("read roles cursor")?;
        Ok(models.into_iter().map(role_from_model).collect())
    }

    async fn create(&self, role: &Role) -> Result<Role, EmployeesServiceError> {
        let model = roles::Model {
            id: role.id.0,
            name: role.name.clone(),
            active: role.active,
            created_at: role.created_at,
            updated_at: role.updated_at,
        };
        self.collection
            .insert_one(model)
            .await
            .context("insert role")?;
        Ok(role.clone())
    }

    async fn update(
        &self,
        filter: &Filter,
        patch: &RolePatch,
    ) -> Result<Option<Role>, EmployeesServiceError> {
        let update = set_document(
            [
                ("name", patch.name.clone().map(Bson::String)),
                ("active", patch.active.map(Bson::Boolean)),
            ],
            patch.updated_at,
        );
        let model = self
            .collection
            .find_one_and_update(filter_document(filter), update)
            .return_document(ReturnDocument::After)
            .await
            .context("update role")?;
        Ok(model.map(role_from_model))
    }

    async fn count_documents(&self, filter: &Filter) -> Result<u64, EmployeesServiceError> {
        Ok(self
            .collection
            .count_documents(filter_document(filter))
            .await
            .context("count roles")?)
    }
}

// ── Addresses ────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MongoAddressRepository {
    pub collection: Collection<addresses::Model>,
}

fn address_from_model(model: addresses::Model) -> Address {
    Address {
        id: model.id.into(),
        employee_id: model.employee_id.into(),
        municipality: model.municipality,
        postal_code: model.postal_code,
        street: model.street,
        colony: model.colony,
        number: model.number,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

impl AddressRepository for MongoAddressRepository {
    async fn get(&self, filter: &Filter) -> Result<Option<Address>, EmployeesServiceError> {
        let model = self
            .collection
            .find_one(filter_document(filter))
            .await
            .context("find address")?;
        Ok(model.map(address_from_model))
    }

    async fn create(&self, address: &Address) -> Result<Address, EmployeesServiceError> {
        let model = addresses::Model {
            id: address.id.0,
            employee_id: address.employee_id.0,
            municipality: address.municipality.clone(),
            postal_code: address.postal_code.clone(),
            street: address.street.clone(),
            colony: address.colony.clone(),
            number: address.number.clone(),
            created_at: address.created_at,
            updated_at: address.updated_at,
        };
        self.collection
            .insert_one(model)
            .await
            .context("insert address")?;
        Ok(address.clone())
    }

    async fn update(
        &self,
        filter: &Filter,
        patch: &AddressPatch,
    ) -> Result<Option<Address>, EmployeesServiceError> {
        let update = set_document(
            [
                ("municipality", patch.municipality.clone().map(Bson::String)),
                ("postal_code", patch.postal_code.clone().map(Bson::String)),
                ("street", patch.street.clone().map(Bson::String)),
                ("colony", patch.colony.clone().map(Bson::String)),
                ("number", patch.number.clone().map(Bson::String)),
            ],
            patch.updated_at,
        );
        let model = self
            .collection
            .find_one_and_update(filter_document(filter), update)
            .return_document(ReturnDocument::After)
            .await
            .context("update address")?;
        Ok(model.map(address_from_model))
    }

    async fn count_documents(&self, filter: &Filter) -> Result<u64, EmployeesServiceError> {
        Ok(self
            .collection
            .count_documents(filter_document(filter))
            .await
            .context("count addresses")?)
    }
}

// ── Avatars ──────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MongoAvatarRepository {
    pub collection: Collection<avatars::Model>,
}

fn avatar_from_model(model: avatars::Model) -> Avatar {
    Avatar {
        id: model.id.into(),
        employee_id: model.employee_id.into(),
        path: model.path,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

impl AvatarRepository for MongoAvatarRepository {
    async fn get(&self, filter: &Filter) -> Result<Option<Avatar>, EmployeesServiceError> {
        let model = self
            .collection
            .find_one(filter_document(filter))
            .await
            .context("find avatar")?;
        Ok(model.map(avatar_from_model))
    }

    async fn create(&self, avatar: &Avatar) -> Result<Avatar, EmployeesServiceError> {
        let model = avatars::Model {
            id: avatar.id.0,
            employee_id: avatar.employee_id.0,
            path: avatar.path.clone(),
            created_at: avatar.created_at,
            updated_at: avatar.updated_at,
        };
        self.collection
            .insert_one(model)
            .await
            .context("insert avatar")?;
        Ok(avatar.clone())
    }

    async fn update(
        &self,
        filter: &Filter,
        patch: &AvatarPatch,
    ) -> Result<Option<Avatar>, EmployeesServiceError> {
        let update = set_document(
            [("path", Some(Bson::String(patch.path.clone())))],
            patch.updated_at,
        );
        let model = self
            .collection
            .find_one_and_update(filter_document(filter), update)
            .return_document(ReturnDocument::After)
            .await
            .context("update avatar")?;
        Ok(model.map(avatar_from_model))
    }

    async fn delete(&self, filter: &Filter) -> Result<bool, EmployeesServiceError> {
        let result = self
            .collection
            .delete_one(filter_document(filter))
            .await
            .context("delete avatar")?;
        Ok(result.deleted_count > 0)
    }

    async fn count_documents(&self, filter: &Filter) -> Result<u64, EmployeesServiceError> {
        Ok(self
            .collection
            .count_documents(filter_document(filter))
            .await
            .context("count avatars")?)
    }
}

// ── Catalog positions ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MongoCatalogPositionRepository {
    pub collection: Collection<catalog_positions::Model>,
}

fn catalog_position_from_model(model: catalog_positions::Model) -> CatalogPosition {
    CatalogPosition {
        id: model.id.into(),
        name: model.name,
        description: model.description,
        active: model.active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

impl CatalogPositionRepository for MongoCatalogPositionRepository {
    async fn get(
        &self,
        filter: &Filter,
    ) -> Result<Option<CatalogPosition>, EmployeesServiceError> {
        let model = self
            .collection
            .find_one(filter_document(filter))
            .await
            .context("find catalog position")?;
        Ok(model.map(catalog_position_from_model))
    }

    async fn get_all(&self, pager: &Pager) -> Result<Vec<CatalogPosition>, EmployeesServiceError> {
        let models: Vec<catalog_positions::Model> = self
            .collection
            .find(doc! {})
            .skip(pager.skip())
            .limit(pager.limit)
            .await
            .context("list catalog positions")?
            .try_collect()
            .await
            .context("read catalog positions cursor")?;
        Ok(models.into_iter().map(catalog_position_from_model).collect())
    }

    async fn create(
        &self,
        position: &CatalogPosition,
    ) -> Result<CatalogPosition, EmployeesServiceError> {
        let model = catalog_positions::Model {
            id: position.id.0,
            name: position.name.clone(),
            description: position.description.clone(),
            active: position.active,
            created_at: position.created_at,
            updated_at: position.updated_at,
        };
        self.collection
            .insert_one(model)
            .await
            .context("insert catalog position")?;
        Ok(position.clone())
    }

    async fn update(
        &self,
        filter: &Filter,
        patch: &CatalogPositionPatch,
    ) -> Result<Option<CatalogPosition>, EmployeesServiceError> {
        let update = set_document(
            [
                ("name", patch.name.clone().map(Bson::String)),
                ("description", patch.description.clone().map(Bson::String)),
                ("active", patch.active.map(Bson::Boolean)),
            ],
            patch.updated_at,
        );
        let model = self
            .collection
            .find_one_and_update(filter_document(filter), update)
            .return_document(ReturnDocument::After)
            .await
            .context("update catalog position")?;
        Ok(model.map(catalog_position_from_model))
    }

    async fn delete(&self, filter: &Filter) -> Result<bool, EmployeesServiceError> {
        let result = self
            .collection
            .delete_one(filter_document(filter))
            .await
            .context("delete catalog position")?;
        Ok(result.deleted_count > 0)
    }

    async fn count_documents(&self, filter: &Filter) -> Result<u64, EmployeesServiceError> {
        Ok(self
            .collection
            .count_documents(filter_document(filter))
            .await
            .context("count catalog positions")?)
    }
}
