//! Low-level HTTP client: `IdpHttp`.
//!
//! Generic JSON-over-REST requests with bearer auth and a single conflict
//! retry. Sub-clients in `domain/<name>/client.rs` build on this.

use crate::error::HttpError;
use crate::http::config::HttpConfig;
use crate::http::options::RequestOptions;
use crate::http::response::ApiResponse;
use crate::http::retry::{self, ArmedRetry};

use async_lock::RwLock;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

const APPLICATION_JSON: &str = "application/json";
const REDACTED: &str = "<redacted>";

/// Low-level HTTP client for the identity platform REST API.
///
/// Clones share the connection pool, the auth token and the conflict retry
/// arming.
#[derive(Clone)]
pub struct IdpHttp {
    base_url: String,
    client: Client,
    /// Bearer token. NEVER logged or exposed publicly.
    auth_token: Arc<RwLock<Option<String>>>,
    conflict_retry: ArmedRetry,
}

impl IdpHttp {
    /// Create a client with the default transport settings.
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_config(base_url, &HttpConfig::default())
    }

    pub fn with_config(base_url: &str, config: &HttpConfig) -> Result<Self, HttpError> {
        Ok(Self::with_client(base_url, config.build_client()?))
    }

    /// Wrap an existing `reqwest` client.
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            auth_token: Arc::new(RwLock::new(None)),
            conflict_retry: ArmedRetry::new(),
        }
    }

    /// Start with a token already installed (pre-issued tokens).
    pub(crate) fn with_initial_token(mut self, token: Option<String>) -> Self {
        self.auth_token = Arc::new(RwLock::new(token));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a path against the base URL. Absolute URLs pass through.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    /// Set the bearer token sent on every subsequent request.
    pub async fn authenticate(&self, token: impl Into<String>) {
        *self.auth_token.write().await = Some(token.into());
    }

    pub async fn clear_token(&self) {
        *self.auth_token.write().await = None;
    }

    pub async fn is_authenticated(&self) -> bool {
        self.auth_token.read().await.is_some()
    }

    // ── Conflict retry ───────────────────────────────────────────────────

    /// Arm a one-shot conflict retry.
    ///
    /// The next request answered with 409 is re-issued once with `method`,
    /// and the arming is cleared before the retry goes out. Prefer
    /// [`RequestOptions::conflict_retry`] when the client is shared between
    /// concurrent tasks: which in-flight request consumes a client-wide
    /// arming is unspecified.
    pub async fn conflict_retry_method(&self, method: Method) {
        self.conflict_retry.arm(method).await;
    }

    pub async fn conflict_retry_armed(&self) -> bool {
        self.conflict_retry.is_armed().await
    }

    // ── Verb helpers ─────────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.request(Method::GET, url, None::<&()>).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.request(Method::POST, url, Some(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.request(Method::PUT, url, Some(body)).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.request(Method::PATCH, url, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.request(Method::DELETE, url, None::<&()>).await
    }

    // ── Generic requests ─────────────────────────────────────────────────

    /// Send a request and decode the JSON response into `T`.
    pub async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        self.request_with(method, url, body, &RequestOptions::default())
            .await
    }

    /// Like [`request`](Self::request), with extra headers, a per-call
    /// conflict retry or a timeout.
    pub async fn request_with<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T, HttpError> {
        self.execute(method, url, body, options).await?.json()
    }

    /// Like [`request_with`](Self::request_with), but a 404 yields `Ok(None)`.
    pub async fn request_optional<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<Option<T>, HttpError> {
        match self.request_with(method, url, body, options).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Run the full request pipeline and return the raw 2xx response.
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<ApiResponse, HttpError> {
        let url = self.url(url);
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(HttpError::Serialize)?;
        let headers = self.headers(options).await?;
        let timeout = options.timeout_duration();
        let redact = options.redacts_bodies();

        let mut method = method;
        let mut response = self
            .send_once(&method, &url, payload.as_deref(), &headers, timeout, redact)
            .await?;

        if retry::is_retryable_conflict(response.status()) {
            if let Some(retry_method) =
                retry::resolve(options.conflict_retry_method(), &self.conflict_retry).await
            {
                tracing::debug!(
                    from = %method,
                    to = %retry_method,
                    url = %url,
                    "Conflict, retrying request"
                );
                method = retry_method;
                response = self
                    .send_once(&method, &url, payload.as_deref(), &headers, timeout, redact)
                    .await?;
            }
        }

        if !response.is_success() {
            return Err(HttpError::Status {
                method: method.to_string(),
                url,
                status: response.status(),
                body: response.text().into_owned(),
            });
        }

        Ok(response)
    }

    // ── Internal ─────────────────────────────────────────────────────────

    /// Default headers, then the bearer token, then per-call overrides.
    async fn headers(&self, options: &RequestOptions) -> Result<HeaderMap, HttpError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

        if let Some(token) = self.auth_token.read().await.as_ref() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                HttpError::InvalidHeader {
                    name: AUTHORIZATION.to_string(),
                    reason: e.to_string(),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in options.header_map()? {
            if let Some(name) = name {
                headers.insert(name, value);
            }
        }

        Ok(headers)
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        payload: Option<&[u8]>,
        headers: &HeaderMap,
        timeout: Option<Duration>,
        redact: bool,
    ) -> Result<ApiResponse, HttpError> {
        let mut builder = self
            .client
            .request(method.clone(), url)
            .headers(headers.clone());
        if let Some(bytes) = payload {
            builder = builder.body(bytes.to_vec());
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let request = builder.build().map_err(|source| HttpError::InvalidRequest {
            method: method.to_string(),
            url: url.to_string(),
            source,
        })?;

        tracing::trace!(
            method = %method,
            url = %url,
            body = %log_body(payload, redact),
            "Sending request"
        );

        let resp = self.client.execute(request).await.map_err(|source| {
            if source.is_timeout() {
                HttpError::Timeout {
                    method: method.to_string(),
                    url: url.to_string(),
                }
            } else {
                HttpError::Transport {
                    method: method.to_string(),
                    url: url.to_string(),
                    source,
                }
            }
        })?;

        let status = resp.status().as_u16();
        let resp_headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(|source| HttpError::Read {
            url: url.to_string(),
            source,
        })?;

        let response = ApiResponse::new(status, resp_headers, body.to_vec());
        tracing::trace!(
            method = %method,
            url = %url,
            status,
            body = %log_body(Some(response.body()), redact),
            "Received response"
        );
        Ok(response)
    }
}

fn log_body(body: Option<&[u8]>, redact: bool) -> Cow<'_, str> {
    match body {
        Some(_) if redact => Cow::Borrowed(REDACTED),
        Some(bytes) => String::from_utf8_lossy(bytes),
        None => Cow::Borrowed(""),
    }
}
