//! Tenant domain: accounts that own users and roles.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::require_non_empty;
use crate::error::SdkError;
use crate::shared::TenantId;

pub use wire::{TenantRequest, TenantUpdate};

/// Base path of the tenants API.
pub const TENANTS_PATH: &str = "/tenants/v1";

/// A tenant as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub tenant_id: TenantId,
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub application_url: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub is_reseller: bool,
    #[serde(default)]
    pub parent_tenant_id: Option<TenantId>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Path of a single tenant. A blank id would address the collection instead.
pub(crate) fn tenant_path(id: &TenantId) -> Result<String, SdkError> {
    require_non_empty("tenant_id", id.as_str())?;
    Ok(format!("{}/{}", TENANTS_PATH, id.encoded()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_deserializes_minimal_payload() {
        let tenant: Tenant =
            serde_json::from_str(r#"{"tenantId":"t-1","name":"Acme"}"#).unwrap();
        assert_eq!(tenant.tenant_id.as_str(), "t-1");
        assert_eq!(tenant.name, "Acme");
        assert!(!tenant.is_reseller);
        assert!(tenant.created_at.is_none());
    }

    #[test]
    fn test_tenant_deserializes_full_payload() {
        let tenant: Tenant = serde_json::from_value(serde_json::json!({
            "tenantId": "t-2",
            "name": "Sub",
            "website": "https://sub.example.com",
            "isReseller": true,
            "parentTenantId": "t-1",
            "metadata": { "tier": "gold" },
            "createdAt": "2026-03-01T12:00:00Z"
        }))
        .unwrap();
        assert!(tenant.is_reseller);
        assert_eq!(tenant.parent_tenant_id, Some(TenantId::from("t-1")));
        assert_eq!(tenant.metadata.unwrap()["tier"], "gold");
        assert!(tenant.created_at.is_some());
    }

    #[test]
    fn test_tenant_path_encodes_id() {
        assert_eq!(tenant_path(&TenantId::from("a b")).unwrap(), "/tenants/v1/a%20b");
    }

    #[test]
    fn test_tenant_path_rejects_blank_id() {
        assert!(matches!(tenant_path(&TenantId::from("")), Err(SdkError::Validation(_))));
        assert!(tenant_path(&TenantId::from("  ")).is_err());
    }
}
