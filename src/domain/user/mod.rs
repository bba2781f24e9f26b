//! User domain: identities that belong to one or more tenants.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::require_non_empty;
use crate::error::SdkError;
use crate::shared::{RoleId, TenantId, UserId};

pub use wire::{NewUser, RoleAssignment, UserUpdate};

/// Base path of the users API.
pub const USERS_PATH: &str = "/identity/users/v1";

/// A user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    /// Active tenant.
    #[serde(default)]
    pub tenant_id: Option<TenantId>,
    #[serde(default)]
    pub tenant_ids: Vec<TenantId>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub roles: Vec<UserRole>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn has_role(&self, key: &str) -> bool {
        self.roles.iter().any(|r| r.key == key)
    }
}

/// Role reference embedded in a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    pub id: RoleId,
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
}

pub(crate) fn user_path(id: &UserId) -> Result<String, SdkError> {
    require_non_empty("user_id", id.as_str())?;
    Ok(format!("{}/{}", USERS_PATH, id.encoded()))
}

pub(crate) fn user_roles_path(id: &UserId) -> Result<String, SdkError> {
    Ok(format!("{}/roles", user_path(id)?))
}
