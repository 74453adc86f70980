use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A customer's service request captured via the public contact form.
///
/// The `_id` is assigned by MongoDB on insert; the in-memory value is `None`
/// until then.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "serviceType", skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_utc: DateTime<Utc>,
}

impl Lead {
    pub fn new(
        name: String,
        phone: String,
        email: Option<String>,
        service_type: Option<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            id: None,
            name,
            phone,
            email,
            service_type,
            message,
            created_utc: Utc::now(),
        }
    }
}
