use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "addresses";

/// Postal address of an employee, one per `employee_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub employee_id: ObjectId,
    pub municipality: String,
    pub postal_code: String,
    pub street: String,
    pub colony: String,
    pub number: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
