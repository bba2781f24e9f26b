//! High-level client: `IdpClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared auth state, and accessor methods.

use crate::auth::client::Auth;
use crate::auth::{AuthSession, Credentials};
use crate::domain::permission::client::Permissions;
use crate::domain::role::client::Roles;
use crate::domain::tenant::client::Tenants;
use crate::domain::user::client::Users;
use crate::domain::workspace::client::Workspace;
use crate::error::{ConfigError, SdkError};
use crate::http::{HttpConfig, IdpHttp};
use crate::network::{DEFAULT_API_URL, ENV_API_URL, ENV_CLIENT_ID, ENV_SECRET_KEY};

use async_lock::RwLock;
use std::sync::Arc;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::permission::client::Permissions as PermissionsClient;
pub use crate::domain::role::client::Roles as RolesClient;
pub use crate::domain::tenant::client::Tenants as TenantsClient;
pub use crate::domain::user::client::Users as UsersClient;
pub use crate::domain::workspace::client::Workspace as WorkspaceClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.tenants()`, `client.users()`, etc. Cloning is cheap and clones
/// share the token, the session and the connection pool.
#[derive(Clone)]
pub struct IdpClient {
    pub(crate) http: IdpHttp,
    /// Set by `auth().login()`.
    pub(crate) session: Arc<RwLock<Option<AuthSession>>>,
}

impl IdpClient {
    pub fn builder() -> IdpClientBuilder {
        IdpClientBuilder::default()
    }

    /// The underlying REST client, for endpoints without a typed sub-client.
    pub fn http(&self) -> &IdpHttp {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn tenants(&self) -> Tenants<'_> {
        Tenants { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn roles(&self) -> Roles<'_> {
        Roles { client: self }
    }

    pub fn permissions(&self) -> Permissions<'_> {
        Permissions { client: self }
    }

    pub fn workspace(&self) -> Workspace<'_> {
        Workspace { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct IdpClientBuilder {
    base_url: String,
    http_config: HttpConfig,
    credentials: Option<Credentials>,
    token: Option<String>,
}

impl Default for IdpClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            http_config: HttpConfig::default(),
            credentials: None,
            token: None,
        }
    }
}

impl IdpClientBuilder {
    /// Read `IDP_API_URL`, `IDP_CLIENT_ID` and `IDP_SECRET_KEY` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), with a custom variable source.
    ///
    /// Client id and secret must be given together. A blank value counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut builder = Self::default();
        if let Some(url) = get(ENV_API_URL) {
            builder.base_url = url;
        }
        validate_base_url(&builder.base_url)?;

        builder.credentials = match (get(ENV_CLIENT_ID), get(ENV_SECRET_KEY)) {
            (Some(id), Some(secret)) => Some(Credentials::new(id, secret)),
            (Some(_), None) => return Err(ConfigError::Missing(ENV_SECRET_KEY)),
            (None, Some(_)) => return Err(ConfigError::Missing(ENV_CLIENT_ID)),
            (None, None) => None,
        };
        Ok(builder)
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Vendor credentials exchanged for a token by [`connect`](Self::connect).
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Pre-issued bearer token, installed on construction.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Build the client without any network I/O.
    pub fn build(self) -> Result<IdpClient, SdkError> {
        validate_base_url(&self.base_url)?;
        let http =
            IdpHttp::with_config(&self.base_url, &self.http_config)?.with_initial_token(self.token);
        Ok(IdpClient {
            http,
            session: Arc::new(RwLock::new(None)),
        })
    }

    /// Build the client and, when credentials were given, log in.
    pub async fn connect(self) -> Result<IdpClient, SdkError> {
        let credentials = self.credentials.clone();
        let client = self.build()?;
        if let Some(credentials) = credentials {
            client.auth().login(&credentials).await?;
        }
        Ok(client)
    }
}

fn validate_base_url(url: &str) -> Result<(), ConfigError> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key: ENV_API_URL,
            reason: format!("expected an http(s) URL, got {:?}", url),
        })
    }
}
