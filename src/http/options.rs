//! Per-call request options.

use crate::error::HttpError;
use crate::network::{TENANT_ID_HEADER, USER_ID_HEADER};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use std::time::Duration;

/// Options applied to a single request.
///
/// ```rust,ignore
/// let opts = RequestOptions::new()
///     .tenant("tenant-1")
///     .conflict_retry(Method::PUT);
/// let tenant: Tenant = http.request_with(Method::POST, "/tenants/v1", Some(&body), &opts).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
    conflict_retry: Option<Method>,
    timeout: Option<Duration>,
    redact_bodies: bool,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header. Applied after the client defaults, so it can override them.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Scope the request to a tenant.
    pub fn tenant(self, tenant_id: impl Into<String>) -> Self {
        self.header(TENANT_ID_HEADER, tenant_id)
    }

    /// Scope the request to a user.
    pub fn user(self, user_id: impl Into<String>) -> Self {
        self.header(USER_ID_HEADER, user_id)
    }

    /// Retry once with `method` if the server answers 409 Conflict.
    pub fn conflict_retry(mut self, method: Method) -> Self {
        self.conflict_retry = Some(method);
        self
    }

    /// Deadline for this request, enforced by the transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Keep request and response bodies out of trace logs. Used for
    /// requests that carry credentials or tokens.
    pub fn redact_bodies(mut self) -> Self {
        self.redact_bodies = true;
        self
    }

    pub fn conflict_retry_method(&self) -> Option<&Method> {
        self.conflict_retry.as_ref()
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn redacts_bodies(&self) -> bool {
        self.redact_bodies
    }

    /// Validate and collect the extra headers.
    pub(crate) fn header_map(&self) -> Result<HeaderMap, HttpError> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let header_name =
                HeaderName::try_from(name.as_str()).map_err(|e| HttpError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| HttpError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}
