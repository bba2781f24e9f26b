//! # idp-rest
//!
//! An async Rust SDK for the admin REST API of a multi-tenant identity
//! platform: tenants, users, roles, permissions and workspace settings.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Identifier newtypes, domain types, errors, network constants
//! 2. **Auth**: Vendor credentials and token exchange
//! 3. **HTTP API**: `IdpHttp`, JSON requests with bearer auth and a one-shot 409 retry
//! 4. **High-Level Client**: `IdpClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use idp_rest::prelude::*;
//!
//! let client = IdpClient::builder()
//!     .base_url("https://api.idp.example.com")
//!     .credentials(Credentials::new("client-id", "secret"))
//!     .connect()
//!     .await?;
//!
//! let tenant = client
//!     .tenants()
//!     .upsert(&TenantRequest::new("acme", "Acme Corp"))
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared identifier newtypes.
pub mod shared;

/// Domain modules (vertical slices): types, request payloads, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and header constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: credentials, login/logout, session state.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Generic REST client with bearer auth and conflict retry.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `IdpClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{PermissionId, RoleId, TenantId, UserId};

    // Domain types
    pub use crate::domain::permission::{
        AssignmentType, NewPermission, Permission, PermissionUpdate,
    };
    pub use crate::domain::role::{NewRole, PermissionSet, Role, RoleUpdate};
    pub use crate::domain::tenant::{Tenant, TenantRequest, TenantUpdate};
    pub use crate::domain::user::{NewUser, RoleAssignment, User, UserRole, UserUpdate};
    pub use crate::domain::workspace::WorkspaceSettings;

    // Errors
    pub use crate::error::{AuthError, ConfigError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth
    pub use crate::auth::{AuthSession, Credentials};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, IdpClient, IdpClientBuilder, PermissionsClient, RolesClient, TenantsClient,
        UsersClient, WorkspaceClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{
        ApiResponse, Discard, HttpConfig, IdpHttp, Method, RequestOptions,
    };
}
