//! Network and environment constants.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.idp.example.com";

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "IDP_API_URL";

/// Environment variable holding the vendor client id.
pub const ENV_CLIENT_ID: &str = "IDP_CLIENT_ID";

/// Environment variable holding the vendor secret key.
pub const ENV_SECRET_KEY: &str = "IDP_SECRET_KEY";

/// Header scoping a request to a tenant.
pub const TENANT_ID_HEADER: &str = "x-tenant-id";

/// Header scoping a request to a user.
pub const USER_ID_HEADER: &str = "x-user-id";
