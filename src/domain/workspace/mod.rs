//! Workspace domain: vendor-wide settings.
//!
//! The same shape is read from and written to `/workspace/v1`.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

use crate::error::SdkError;

/// Path of the workspace settings endpoint.
pub const WORKSPACE_PATH: &str = "/workspace/v1";

/// Workspace settings. Unset fields are omitted on write and left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
}

impl WorkspaceSettings {
    pub fn validate(&self) -> Result<(), SdkError> {
        if let Some(name) = &self.name {
            crate::domain::require_non_empty("name", name)?;
        }
        for origin in self.allowed_origins.iter().flatten() {
            if !(origin.starts_with("https://") || origin.starts_with("http://")) {
                return Err(SdkError::Validation(format!(
                    "allowed origin must be an http(s) URL: {}",
                    origin
                )));
            }
        }
        Ok(())
    }
}
