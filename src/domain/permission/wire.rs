//! Request payloads for the permissions API.

use serde::{Deserialize, Serialize};

use crate::domain::permission::AssignmentType;
use crate::domain::require_non_empty;
use crate::error::SdkError;

/// Body of `POST /identity/permissions/v1`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPermission {
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_type: Option<AssignmentType>,
}

impl NewPermission {
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
        if self.key.chars().any(char::is_whitespace) {
            return Err(SdkError::Validation(format!(
                "permission key must not contain whitespace: {:?}",
                self.key
            )));
        }
        Ok(())
    }
}

/// Body of `PATCH /identity/permissions/v1/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_type: Option<AssignmentType>,
}

impl PermissionUpdate {
    pub fn validate(&self) -> Result<(), SdkError> {
        if let Some(name) = &self.name {
            require_non_empty("name", name)?;
        }
        if let Some(category) = &self.category_id {
            require_non_empty("category_id", category)?;
        }
        Ok(())
    }
}
