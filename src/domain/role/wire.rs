//! Request payloads for the roles API.

use serde::{Deserialize, Serialize};

use crate::domain::require_non_empty;
use crate::error::SdkError;
use crate::shared::PermissionId;

/// Body of `POST /identity/roles/v1`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRole {
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

impl NewRole {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SdkError> {
        require_non_empty("key", &self.key)?;
        require_non_empty("name", &self.name)?;
        validate_level(self.level)
    }
}

/// Body of `PATCH /identity/roles/v1/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

impl RoleUpdate {
    pub fn validate(&self) -> Result<(), SdkError> {
        if let Some(name) = &self.name {
            require_non_empty("name", name)?;
        }
        validate_level(self.level)
    }
}

/// Body of `PUT /identity/roles/v1/{id}/permissions`. Replaces the full set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    pub permission_ids: Vec<PermissionId>,
}

impl PermissionSet {
    /// An empty set is valid and clears the role's permissions.
    pub fn validate(&self) -> Result<(), SdkError> {
        for id in &self.permission_ids {
            require_non_empty("permission_id", id.as_str())?;
        }
        Ok(())
    }
}

fn validate_level(level: Option<i32>) -> Result<(), SdkError> {
    match level {
        Some(l) if l < 0 => Err(SdkError::Validation(format!(
            "level must be non-negative, got {}",
            l
        ))),
        _ => Ok(()),
    }
}
