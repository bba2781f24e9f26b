//! Transport configuration.

use crate::error::HttpError;

use reqwest::Client;
use std::time::Duration;

/// Settings for the `reqwest` client owned by an [`IdpHttp`](crate::http::IdpHttp).
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout. Per-call timeouts override it.
    pub request_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// Maximum idle connections kept per host.
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: format!("idp-rest/{}", env!("CARGO_PKG_VERSION")),
            pool_max_idle_per_host: 10,
        }
    }
}

impl HttpConfig {
    /// Build a `reqwest` client from this config.
    pub fn build_client(&self) -> Result<Client, HttpError> {
        Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.request_timeout)
            .user_agent(&self.user_agent)
            .pool_max_idle_per_host(self.pool_max_idle_per_host)
            .build()
            .map_err(HttpError::ClientBuild)
    }
}
