use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "profiles";

/// Employee profile document. `gender` and `roles` hold wire strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub employee_id: ObjectId,
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub gender: String,
    pub phone_number: String,
    pub birthday: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
