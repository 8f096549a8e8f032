use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Administrative account, stored in the `admins` table.
///
/// `id`, `created_at` and `updated_at` are owned by the repository: `id` is
/// assigned by the store on insert and the timestamps are stamped on every
/// write. `username` and `email` are unique across all admins.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Admin {
    /// New admin ready for insertion: both timestamps stamped to now,
    /// active forced on.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        full_name: Option<String>,
        role: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Admin {
            id: None,
            username: username.into(),
            email: email.into(),
            password: password.into(),
            full_name,
            role,
            active: true,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
