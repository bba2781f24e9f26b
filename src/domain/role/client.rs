//! Roles sub-client.

use crate::client::IdpClient;
use crate::domain::delete_if_exists;
use crate::domain::role::{
    role_path, role_permissions_path, NewRole, PermissionSet, Role, RoleUpdate, ROLES_PATH,
};
use crate::error::SdkError;
use crate::http::{Method, RequestOptions};
use crate::shared::{PermissionId, RoleId};

/// Sub-client for role operations.
pub struct Roles<'a> {
    pub(crate) client: &'a IdpClient,
}

impl<'a> Roles<'a> {
    pub async fn create(&self, role: &NewRole) -> Result<Role, SdkError> {
        role.validate()?;
        Ok(self.client.http.post(ROLES_PATH, role).await?)
    }

    /// Fetch a role. `None` if it does not exist.
    pub async fn get(&self, id: &RoleId) -> Result<Option<Role>, SdkError> {
        Ok(self
            .client
            .http
            .request_optional::<_, ()>(Method::GET, &role_path(id)?, None, &RequestOptions::default())
            .await?)
    }

    pub async fn list(&self) -> Result<Vec<Role>, SdkError> {
        Ok(self.client.http.get(ROLES_PATH).await?)
    }

    pub async fn update(&self, id: &RoleId, update: &RoleUpdate) -> Result<Role, SdkError> {
        update.validate()?;
        Ok(self.client.http.patch(&role_path(id)?, update).await?)
    }

    /// Replace the permissions granted by a role.
    pub async fn set_permissions(
        &self,
        id: &RoleId,
        permission_ids: &[PermissionId],
    ) -> Result<Role, SdkError> {
        let body = PermissionSet {
            permission_ids: permission_ids.to_vec(),
        };
        body.validate()?;
        Ok(self.client.http.put(&role_permissions_path(id)?, &body).await?)
    }

    /// Delete a role. Returns `false` if it was already gone.
    pub async fn delete(&self, id: &RoleId) -> Result<bool, SdkError> {
        delete_if_exists(&self.client.http, &role_path(id)?, &RequestOptions::default()).await
    }
}
