//! Request payloads for the tenants API.

use serde::{Deserialize, Serialize};

use crate::domain::require_non_empty;
use crate::error::SdkError;
use crate::shared::TenantId;

/// Body of `POST /tenants/v1` (and of the `PUT` issued on conflict).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantRequest {
    pub tenant_id: TenantId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_reseller: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_tenant_id: Option<TenantId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl TenantRequest {
    pub fn new(tenant_id: impl Into<TenantId>, name: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SdkError> {
        require_non_empty("tenant_id", self.tenant_id.as_str())?;
        require_non_empty("name", &self.name)?;
        if self.parent_tenant_id.as_ref() == Some(&self.tenant_id) {
            return Err(SdkError::Validation(
                "a tenant cannot be its own parent".to_string(),
            ));
        }
        Ok(())
    }
}

/// Body of `PUT /tenants/v1/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl TenantUpdate {
    pub fn validate(&self) -> Result<(), SdkError> {
        if let Some(name) = &self.name {
            require_non_empty("name", name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_unset_fields() {
        let body = serde_json::to_value(TenantRequest::new("t-1", "Acme")).unwrap();
        assert_eq!(body, serde_json::json!({ "tenantId": "t-1", "name": "Acme" }));
    }

    #[test]
    fn test_request_validation() {
        assert!(TenantRequest::new("t-1", "Acme").validate().is_ok());
        assert!(TenantRequest::new("", "Acme").validate().is_err());
        assert!(TenantRequest::new("t-1", "").validate().is_err());

        let mut own_parent = TenantRequest::new("t-1", "Acme");
        own_parent.parent_tenant_id = Some(TenantId::from("t-1"));
        assert!(own_parent.validate().is_err());
    }

    #[test]
    fn test_update_rejects_blank_name() {
        let update = TenantUpdate {
            name: Some(" ".into()),
            ..TenantUpdate::default()
        };
        assert!(update.validate().is_err());
        assert!(TenantUpdate::default().validate().is_ok());
    }
}
