//! Users sub-client: tenant-scoped user management.

use crate::client::IdpClient;
use crate::domain::delete_if_exists;
use crate::domain::user::{
    user_path, user_roles_path, NewUser, RoleAssignment, User, UserUpdate, USERS_PATH,
};
use crate::error::SdkError;
use crate::http::{Discard, Method, RequestOptions};
use crate::shared::{RoleId, TenantId, UserId};

/// Sub-client for user operations.
pub struct Users<'a> {
    pub(crate) client: &'a IdpClient,
}

impl<'a> Users<'a> {
    /// Create a user inside `tenant_id`.
    pub async fn create(&self, tenant_id: &TenantId, user: &NewUser) -> Result<User, SdkError> {
        user.validate()?;
        let options = tenant_scope(tenant_id)?;
        Ok(self
            .client
            .http
            .request_with(Method::POST, USERS_PATH, Some(user), &options)
            .await?)
    }

    /// Fetch a user. `None` if it does not exist.
    pub async fn get(&self, id: &UserId) -> Result<Option<User>, SdkError> {
        Ok(self
            .client
            .http
            .request_optional::<_, ()>(Method::GET, &user_path(id)?, None, &RequestOptions::default())
            .await?)
    }

    pub async fn update(
        &self,
        id: &UserId,
        tenant_id: &TenantId,
        update: &UserUpdate,
    ) -> Result<User, SdkError> {
        update.validate()?;
        let options = tenant_scope(tenant_id)?;
        Ok(self
            .client
            .http
            .request_with(Method::PUT, &user_path(id)?, Some(update), &options)
            .await?)
    }

    /// Delete a user. Returns `false` if it was already gone.
    pub async fn delete(&self, id: &UserId) -> Result<bool, SdkError> {
        delete_if_exists(&self.client.http, &user_path(id)?, &RequestOptions::default()).await
    }

    /// Grant roles to a user within a tenant.
    pub async fn assign_roles(
        &self,
        id: &UserId,
        tenant_id: &TenantId,
        role_ids: &[RoleId],
    ) -> Result<(), SdkError> {
        self.change_roles(Method::POST, id, tenant_id, role_ids).await
    }

    /// Revoke roles from a user within a tenant.
    pub async fn remove_roles(
        &self,
        id: &UserId,
        tenant_id: &TenantId,
        role_ids: &[RoleId],
    ) -> Result<(), SdkError> {
        self.change_roles(Method::DELETE, id, tenant_id, role_ids).await
    }

    async fn change_roles(
        &self,
        method: Method,
        id: &UserId,
        tenant_id: &TenantId,
        role_ids: &[RoleId],
    ) -> Result<(), SdkError> {
        let body = RoleAssignment {
            role_ids: role_ids.to_vec(),
        };
        body.validate()?;
        let options = tenant_scope(tenant_id)?;
        self.client
            .http
            .request_with::<Discard, _>(method, &user_roles_path(id)?, Some(&body), &options)
            .await?;
        Ok(())
    }
}

fn tenant_scope(tenant_id: &TenantId) -> Result<RequestOptions, SdkError> {
    crate::domain::require_non_empty("tenant_id", tenant_id.as_str())?;
    Ok(RequestOptions::new().tenant(tenant_id.as_str()))
}
