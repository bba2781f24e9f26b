//! Authentication: vendor credentials, token exchange, session state.
//!
//! ## Security Model
//!
//! - The vendor secret is only sent to `POST /auth/vendor` and is redacted
//!   from `Debug` output. Login bodies are kept out of trace logs.
//! - The bearer token returned by the backend is stored inside
//!   [`IdpHttp`](crate::http::IdpHttp) and injected as
//!   `Authorization: Bearer <token>`. There is no public accessor for it.
//! - `logout()` only forgets the token locally; vendor tokens are not
//!   revocable server-side.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Path of the vendor token exchange endpoint.
pub const VENDOR_AUTH_PATH: &str = "/auth/vendor";

// ============================================================================
// Credentials
// ============================================================================

/// Vendor API credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            secret: secret.into(),
        }
    }

    /// Reject blank credentials before any request is made.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.client_id.trim().is_empty() {
            return Err(AuthError::MissingCredentials("client_id"));
        }
        if self.secret.trim().is_empty() {
            return Err(AuthError::MissingCredentials("secret"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Auth session
// ============================================================================

/// Session metadata recorded after a successful login. Token is NEVER exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub client_id: String,
    pub authenticated_at: DateTime<Utc>,
    /// `None` when the backend did not report a lifetime.
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthSession {
    pub(crate) fn new(client_id: &str, expires_in_secs: Option<i64>, now: DateTime<Utc>) -> Self {
        Self {
            client_id: client_id.to_string(),
            authenticated_at: now,
            expires_at: expires_in_secs.map(|secs| now + Duration::seconds(secs)),
        }
    }

    /// Whether the session has expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| now >= exp)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Body of `POST /auth/vendor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub client_id: String,
    pub secret: String,
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            client_id: credentials.client_id.clone(),
            secret: credentials.secret.clone(),
        }
    }
}

/// Response of `POST /auth/vendor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("client", "super-secret");
        let dbg = format!("{:?}", creds);
        assert!(dbg.contains("client"));
        assert!(!dbg.contains("super-secret"));
    }

    #[test]
    fn test_credentials_validation() {
        assert!(Credentials::new("id", "secret").validate().is_ok());
        assert!(matches!(
            Credentials::new("", "secret").validate(),
            Err(AuthError::MissingCredentials("client_id"))
        ));
        assert!(matches!(
            Credentials::new("id", "  ").validate(),
            Err(AuthError::MissingCredentials("secret"))
        ));
    }

    #[test]
    fn test_login_request_is_camel_case() {
        let body = serde_json::to_value(LoginRequest::from(&Credentials::new("id", "s"))).unwrap();
        assert_eq!(body, serde_json::json!({ "clientId": "id", "secret": "s" }));
    }

    #[test]
    fn test_login_response_without_expiry() {
        let resp: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(resp.token, "abc");
        assert_eq!(resp.expires_in, None);
    }

    #[test]
    fn test_session_expiry() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let session = AuthSession::new("id", Some(60), now);
        assert!(!session.is_expired_at(now));
        assert!(!session.is_expired_at(now + Duration::seconds(59)));
        assert!(session.is_expired_at(now + Duration::seconds(60)));

        let forever = AuthSession::new("id", None, now);
        assert!(!forever.is_expired_at(now + Duration::days(365)));
    }
}
