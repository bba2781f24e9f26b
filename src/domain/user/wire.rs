//! Request payloads for the users API.

use serde::{Deserialize, Serialize};

use crate::domain::require_non_empty;
use crate::error::SdkError;
use crate::shared::RoleId;

/// Body of `POST /identity/users/v1`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub role_ids: Vec<RoleId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_invite_email: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl NewUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SdkError> {
        require_non_empty("email", &self.email)?;
        validate_email(&self.email)
    }
}

/// Body of `PUT /identity/users/v1/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl UserUpdate {
    pub fn validate(&self) -> Result<(), SdkError> {
        if let Some(name) = &self.name {
            require_non_empty("name", name)?;
        }
        if let Some(phone) = &self.phone_number {
            require_non_empty("phone_number", phone)?;
        }
        if let Some(url) = &self.profile_picture_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(SdkError::Validation(format!(
                    "profile_picture_url must be an http(s) URL: {}",
                    url
                )));
            }
        }
        Ok(())
    }
}

/// Body of `POST` / `DELETE /identity/users/v1/{id}/roles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub role_ids: Vec<RoleId>,
}

impl RoleAssignment {
    pub fn validate(&self) -> Result<(), SdkError> {
        if self.role_ids.is_empty() {
            return Err(SdkError::Validation("role_ids must not be empty".to_string()));
        }
        for id in &self.role_ids {
            require_non_empty("role_id", id.as_str())?;
        }
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), SdkError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(SdkError::Validation(format!("invalid email address: {}", email))),
    }
}
