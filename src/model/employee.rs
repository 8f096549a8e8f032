use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employee record, stored in the `employees` collection.
///
/// The serde attributes are the storage mapping: `_id` for the
/// store-assigned identifier, camelCase field names, audit timestamps as
/// BSON datetimes. Callers see the identifier as its hex string through
/// the response DTO. `email` carries no uniqueness constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
    pub salary: Option<f64>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// New employee ready for insertion, both timestamps stamped to now.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        department: Option<String>,
        salary: Option<f64>,
    ) -> Self {
        let now = Utc::now();
        Employee {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            department,
            salary,
            created_at: now,
            updated_at: now,
        }
    }
}
