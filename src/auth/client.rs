//! Auth sub-client: vendor login, logout, session state.

use chrono::Utc;

use crate::auth::{AuthSession, Credentials, LoginRequest, LoginResponse, VENDOR_AUTH_PATH};
use crate::client::IdpClient;
use crate::error::{AuthError, HttpError, SdkError};
use crate::http::{Method, RequestOptions};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a IdpClient,
}

impl<'a> Auth<'a> {
    /// Exchange vendor credentials for a bearer token.
    ///
    /// On success the token is installed on the underlying HTTP client and
    /// every later request is authenticated with it.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSession, SdkError> {
        credentials.validate()?;

        let request = LoginRequest::from(credentials);
        let options = RequestOptions::new().redact_bodies();
        let response: LoginResponse = self
            .client
            .http
            .request_with(Method::POST, VENDOR_AUTH_PATH, Some(&request), &options)
            .await
            .map_err(|e| match e {
                HttpError::Status {
                    status: 400 | 401 | 403,
                    body,
                    ..
                } => SdkError::Auth(AuthError::LoginFailed(body)),
                other => SdkError::Http(other),
            })?;

        if response.token.trim().is_empty() {
            return Err(AuthError::LoginFailed("backend returned an empty token".into()).into());
        }

        self.client.http.authenticate(response.token).await;

        let session = AuthSession::new(&credentials.client_id, response.expires_in, Utc::now());
        tracing::debug!(
            client_id = %session.client_id,
            expires_at = ?session.expires_at,
            "Authenticated"
        );
        *self.client.session.write().await = Some(session.clone());
        Ok(session)
    }

    /// Forget the token and session locally.
    pub async fn logout(&self) {
        self.client.http.clear_token().await;
        *self.client.session.write().await = None;
    }

    /// Current session, if logged in through [`login`](Self::login).
    pub async fn session(&self) -> Option<AuthSession> {
        self.client.session.read().await.clone()
    }

    /// Whether a bearer token is installed, whether from `login` or a
    /// pre-issued token.
    pub async fn is_authenticated(&self) -> bool {
        self.client.http.is_authenticated().await
    }

    /// Fail with [`AuthError::NotAuthenticated`] unless a token is installed
    /// and the recorded session (if any) has not expired.
    pub async fn ensure_authenticated(&self) -> Result<(), AuthError> {
        if !self.client.http.is_authenticated().await {
            return Err(AuthError::NotAuthenticated);
        }
        match self.client.session.read().await.as_ref() {
            Some(session) if session.is_expired() => Err(AuthError::NotAuthenticated),
            _ => Ok(()),
        }
    }
}
