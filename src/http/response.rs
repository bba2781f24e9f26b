//! Raw HTTP responses and JSON decoding.

use crate::error::HttpError;

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use std::borrow::Cow;

/// Output type for callers that want the response body ignored.
///
/// Accepts any JSON value, including an empty body.
pub type Discard = serde::de::IgnoredAny;

/// A fully-read HTTP response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ApiResponse {
    pub(crate) fn new(status: u16, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, lossily decoded.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the body as JSON.
    ///
    /// An empty body decodes as `null`, so `()`, `Option<_>` and [`Discard`]
    /// accept it while struct targets fail.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        let bytes: &[u8] = if self.body.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &self.body
        };
        serde_json::from_slice(bytes).map_err(|source| HttpError::Deserialize {
            status: self.status,
            body: self.text().into_owned(),
            source,
        })
    }
}
