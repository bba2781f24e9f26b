//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// HTTP status of the failed request, if the failure came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// HTTP-layer errors. Each stage of the request pipeline has its own variant.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed to encode request body: {0}")]
    Serialize(#[source] serde_json::Error),

    #[cfg(feature = "http")]
    #[error("Invalid request {method} {url}: {source}")]
    InvalidRequest {
        method: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[cfg(feature = "http")]
    #[error("Request {method} {url} failed: {source}")]
    Transport {
        method: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request {method} {url} timed out")]
    Timeout { method: String, url: String },

    #[cfg(feature = "http")]
    #[error("Failed to read response body from {url}: {source}")]
    Read {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request {method} {url} failed with status {status}: {body}")]
    Status {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode response (status {status}): {source}")]
    Deserialize {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl HttpError {
    /// HTTP status of a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    /// Raw response body, for status and decode failures.
    pub fn body(&self) -> Option<&str> {
        match self {
            HttpError::Status { body, .. } | HttpError::Deserialize { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Missing credentials: {0}")]
    MissingCredentials(&'static str),

    #[error("Login failed: {0}")]
    LoginFailed(String),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing configuration value: {0}")]
    Missing(&'static str),

    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
