//! Permissions sub-client.

use crate::client::IdpClient;
use crate::domain::delete_if_exists;
use crate::domain::permission::{
    permission_path, NewPermission, Permission, PermissionUpdate, PERMISSIONS_PATH,
};
use crate::error::SdkError;
use crate::http::{Method, RequestOptions};
use crate::shared::PermissionId;

/// Sub-client for permission operations.
pub struct Permissions<'a> {
    pub(crate) client: &'a IdpClient,
}

impl<'a> Permissions<'a> {
    pub async fn create(&self, permission: &NewPermission) -> Result<Permission, SdkError> {
        permission.validate()?;
        Ok(self.client.http.post(PERMISSIONS_PATH, permission).await?)
    }

    /// Fetch a permission. `None` if it does not exist.
    pub async fn get(&self, id: &PermissionId) -> Result<Option<Permission>, SdkError> {
        Ok(self
            .client
            .http
            .request_optional::<_, ()>(
                Method::GET,
                &permission_path(id)?,
                None,
                &RequestOptions::default(),
            )
            .await?)
    }

    pub async fn list(&self) -> Result<Vec<Permission>, SdkError> {
        Ok(self.client.http.get(PERMISSIONS_PATH).await?)
    }

    pub async fn update(
        &self,
        id: &PermissionId,
        update: &PermissionUpdate,
    ) -> Result<Permission, SdkError> {
        update.validate()?;
        Ok(self.client.http.patch(&permission_path(id)?, update).await?)
    }

    /// Delete a permission. Returns `false` if it was already gone.
    pub async fn delete(&self, id: &PermissionId) -> Result<bool, SdkError> {
        delete_if_exists(&self.client.http, &permission_path(id)?, &RequestOptions::default())
            .await
    }
}
