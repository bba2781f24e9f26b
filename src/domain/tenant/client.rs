//! Tenants sub-client: upsert, fetch, update, delete.

use crate::client::IdpClient;
use crate::domain::delete_if_exists;
use crate::domain::tenant::{tenant_path, Tenant, TenantRequest, TenantUpdate, TENANTS_PATH};
use crate::error::SdkError;
use crate::http::{Method, RequestOptions};
use crate::shared::TenantId;

/// Sub-client for tenant operations.
pub struct Tenants<'a> {
    pub(crate) client: &'a IdpClient,
}

impl<'a> Tenants<'a> {
    /// Create a tenant, or replace it if it already exists.
    ///
    /// The backend answers 409 when the tenant id is taken; the request is
    /// then re-sent once as a `PUT`.
    pub async fn upsert(&self, request: &TenantRequest) -> Result<Tenant, SdkError> {
        request.validate()?;
        let options = RequestOptions::new().conflict_retry(Method::PUT);
        Ok(self
            .client
            .http
            .request_with(Method::POST, TENANTS_PATH, Some(request), &options)
            .await?)
    }

    /// Fetch a tenant. `None` if it does not exist.
    pub async fn get(&self, id: &TenantId) -> Result<Option<Tenant>, SdkError> {
        Ok(self
            .client
            .http
            .request_optional::<_, ()>(Method::GET, &tenant_path(id)?, None, &RequestOptions::default())
            .await?)
    }

    pub async fn list(&self) -> Result<Vec<Tenant>, SdkError> {
        Ok(self.client.http.get(TENANTS_PATH).await?)
    }

    pub async fn update(&self, id: &TenantId, update: &TenantUpdate) -> Result<Tenant, SdkError> {
        update.validate()?;
        Ok(self.client.http.put(&tenant_path(id)?, update).await?)
    }

    /// Delete a tenant. Returns `false` if it was already gone.
    pub async fn delete(&self, id: &TenantId) -> Result<bool, SdkError> {
        delete_if_exists(&self.client.http, &tenant_path(id)?, &RequestOptions::default()).await
    }
}
