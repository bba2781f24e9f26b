//! Role domain: named bundles of permissions.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::require_non_empty;
use crate::error::SdkError;
use crate::shared::{PermissionId, RoleId, TenantId};

pub use wire::{NewRole, PermissionSet, RoleUpdate};

/// Base path of the roles API.
pub const ROLES_PATH: &str = "/identity/roles/v1";

/// A role as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: RoleId,
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Lower levels outrank higher ones.
    #[serde(default)]
    pub level: Option<i32>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub permissions: Vec<PermissionId>,
    /// Set for tenant-specific roles, absent for global ones.
    #[serde(default)]
    pub tenant_id: Option<TenantId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Role {
    pub fn grants(&self, permission: &PermissionId) -> bool {
        self.permissions.contains(permission)
    }
}

pub(crate) fn role_path(id: &RoleId) -> Result<String, SdkError> {
    require_non_empty("role_id", id.as_str())?;
    Ok(format!("{}/{}", ROLES_PATH, id.encoded()))
}

pub(crate) fn role_permissions_path(id: &RoleId) -> Result<String, SdkError> {
    Ok(format!("{}/permissions", role_path(id)?))
}
