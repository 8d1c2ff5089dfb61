use serde::Deserialize;

use vet_core::config::Config;

/// Employees service configuration loaded from environment variables.
///
/// Field names map to upper-case env vars (`mongodb_host` reads `MONGODB_HOST`).
/// No `Debug` derive: the struct holds object-store secrets.
#[derive(Clone, Deserialize)]
pub struct EmployeesConfig {
    /// TCP port for the HTTP server (default 3006).
    #[serde(default = "default_server_port")]
    pub server_port: u16,
    /// Route prefix; API routes live under `{base_path}/v1`.
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// MongoDB connection URI.
    pub mongodb_host: String,
    pub default_db: String,
    #[serde(default = "default_profiles_collection")]
    pub profiles_collection: String,
    #[serde(default = "default_roles_collection")]
    pub roles_collection: String,
    #[serde(default = "default_addresses_collection")]
    pub addresses_collection: String,
    #[serde(default = "default_avatars_collection")]
    pub avatars_collection: String,
    #[serde(default = "default_catalog_positions_collection")]
    pub catalog_positions_collection: String,

    pub s3_bucket: String,
    pub s3_endpoint: String,
    #[serde(default = "default_s3_region")]
    pub s3_region: String,
    pub s3_access_key: String,
    pub s3_secret_key: String,
    /// Largest accepted avatar upload, in bytes.
    #[serde(default = "default_max_image_size")]
    pub s3_max_image_size: usize,

    /// Comma-separated bootstrap servers. Empty disables notifications.
    #[serde(default)]
    pub kafka_servers: String,
    #[serde(default = "default_kafka_group_id")]
    pub kafka_group_id: String,
    #[serde(default = "default_kafka_profile_update_topic")]
    pub kafka_profile_update_topic: String,
}

impl Config for EmployeesConfig {}

/// Collection names, resolved once from config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collections {
    pub profiles: String,
    pub roles: String,
    pub addresses: String,
    pub avatars: String,
    pub catalog_positions: String,
}

impl EmployeesConfig {
    pub fn api_prefix(&self) -> String {
        format!("{}/v1", self.base_path.trim_end_matches('/'))
    }

    pub fn collections(&self) -> Collections {
        Collections {
            profiles: self.profiles_collection.clone(),
            roles: self.roles_collection.clone(),
            addresses: self.addresses_collection.clone(),
            avatars: self.avatars_collection.clone(),
            catalog_positions: self.catalog_positions_collection.clone(),
        }
    }
}

fn default_server_port() -> u16 {
    3006
}

fn default_base_path() -> String {
    "/api/veterinary-employee".to_owned()
}

fn default_profiles_collection() -> String {
    vet_employees_schema::profiles::COLLECTION.to_owned()
}

fn default_roles_collection() -> String {
    vet_employees_schema::roles::COLLECTION.to_owned()
}

fn default_addresses_collection() -> String {
    vet_employees_schema::addresses::COLLECTION.to_owned()
}

fn default_avatars_collection() -> String {
    vet_employees_schema::avatars::COLLECTION.to_owned()
}

fn default_catalog_positions_collection() -> String {
    vet_employees_schema::catalog_positions::COLLECTION.to_owned()
}

fn default_s3_region() -> String {
    "us-east-1".to_owned()
}

fn default_max_image_size() -> usize {
    2_000_000
}

fn default_kafka_group_id() -> String {
    "veterinary-employee".to_owned()
}

fn default_kafka_profile_update_topic() -> String {
    "veterinary-employee-profile-update".to_owned()
}
