//! Permission domain: fine-grained capabilities granted through roles.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::require_non_empty;
use crate::error::SdkError;
use crate::shared::PermissionId;

pub use wire::{NewPermission, PermissionUpdate};

/// Base path of the permissions API.
pub const PERMISSIONS_PATH: &str = "/identity/permissions/v1";

/// A permission as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub id: PermissionId,
    /// Dotted key, e.g. `"billing.invoices.read"`.
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub assignment_type: Option<AssignmentType>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Who may grant a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentType {
    /// Never granted to tenant roles.
    Never,
    /// Granted to every role implicitly.
    Always,
    /// Tenants may assign it to their own roles.
    Assignable,
}

impl AssignmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Never => "NEVER",
            Self::Always => "ALWAYS",
            Self::Assignable => "ASSIGNABLE",
        }
    }
}

impl std::fmt::Display for AssignmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub(crate) fn permission_path(id: &PermissionId) -> Result<String, SdkError> {
    require_non_empty("permission_id", id.as_str())?;
    Ok(format!("{}/{}", PERMISSIONS_PATH, id.encoded()))
}
