//! Workspace sub-client.

use crate::client::IdpClient;
use crate::domain::workspace::{WorkspaceSettings, WORKSPACE_PATH};
use crate::error::SdkError;

/// Sub-client for workspace settings.
pub struct Workspace<'a> {
    pub(crate) client: &'a IdpClient,
}

impl<'a> Workspace<'a> {
    pub async fn get(&self) -> Result<WorkspaceSettings, SdkError> {
        Ok(self.client.http.get(WORKSPACE_PATH).await?)
    }

    pub async fn update(&self, settings: &WorkspaceSettings) -> Result<WorkspaceSettings, SdkError> {
        settings.validate()?;
        Ok(self.client.http.put(WORKSPACE_PATH, settings).await?)
    }
}
