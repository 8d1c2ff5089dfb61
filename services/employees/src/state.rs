use anyhow::Context;
use mongodb::{Client, Database};

use crate::config::{Collections, EmployeesConfig};
use crate::infra::db::{
    MongoAddressRepository, MongoAvatarRepository, MongoCatalogPositionRepository,
    MongoProfileRepository, MongoRoleRepository,
};
use crate::infra::events::KafkaProfileEventPublisher;
use crate::infra::storage::S3ObjectStorage;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub collections: Collections,
    pub storage: S3ObjectStorage,
    pub events: KafkaProfileEventPublisher,
    pub max_image_size: usize,
}

impl AppState {
    /// Create the store, object-store and bus clients. The MongoDB client
    /// connects lazily on first use.
    pub async fn connect(config: &EmployeesConfig) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(&config.mongodb_host)
            .await
            .context("invalid MONGODB_HOST")?;
        Ok(Self {
            db: client.database(&config.default_db),
            collections: config.collections(),
            storage: S3ObjectStorage::from_config(config),
            events: KafkaProfileEventPublisher::connect(config)?,
            max_image_size: config.s3_max_image_size,
        })
    }

    pub fn profile_repo(&self) -> MongoProfileRepository {
        MongoProfileRepository {
            collection: self.db.collection(&self.collections.profiles),
        }
    }

    pub fn role_repo(&self) -> MongoRoleRepository {
        MongoRoleRepository {
            collection: self.db.collection(&self.collections.roles),
        }
    }

    pub fn address_repo(&self) -> MongoAddressRepository {
        MongoAddressRepository {
            collection: self.db.collection(&self.collections.addresses),
        }
    }

    pub fn avatar_repo(&self) -> MongoAvatarRepository {
        MongoAvatarRepository {
            collection: self.db.collection(&self.collections.avatars),
        }
    }

    pub fn catalog_position_repo(&self) -> MongoCatalogPositionRepository {
        MongoCatalogPositionRepository {
            collection: self.db.collection(&self.collections.catalog_positions),
        }
    }
}
