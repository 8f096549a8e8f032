use crate::model::admin::Admin;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create payload. Identifier, audit timestamps and the active flag are
/// server-owned and not accepted here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,

    pub full_name: Option<String>,
    pub role: Option<String>,
}

impl From<CreateAdminRequest> for Admin {
    fn from(req: CreateAdminRequest) -> Self {
        Admin::new(req.username, req.email, req.password, req.full_name, req.role)
    }
}

/// Update payload: every caller-overwritable field. What arrives here is
/// written verbatim over the stored record; `active` falls back to the
/// server default when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,

    pub full_name: Option<String>,
    pub role: Option<String>,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl From<UpdateAdminRequest> for Admin {
    fn from(req: UpdateAdminRequest) -> Self {
        Admin {
            id: None,
            username: req.username,
            email: req.email,
            password: req.password,
            full_name: req.full_name,
            role: req.role,
            active: req.active,
            created_at: None,
            updated_at: None,
        }
    }
}
