//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Resource types as returned by the backend
//! - `wire.rs`: Request payloads with client-side validation
//! - `client.rs`: Sub-client with the HTTP methods for the resource

pub mod permission;
pub mod role;
pub mod tenant;
pub mod user;
pub mod workspace;

use crate::error::SdkError;

/// Reject a blank required field before any request is made.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), SdkError> {
    if value.trim().is_empty() {
        return Err(SdkError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// `DELETE` that treats 404 as already gone. Returns whether something was deleted.
#[cfg(feature = "http")]
pub(crate) async fn delete_if_exists(
    http: &crate::http::IdpHttp,
    url: &str,
    options: &crate::http::RequestOptions,
) -> Result<bool, SdkError> {
    let deleted = http
        .request_optional::<crate::http::Discard, ()>(crate::http::Method::DELETE, url, None, options)
        .await?;
    Ok(deleted.is_some())
}
