//! Conflict retry: re-issue a request once with another verb after HTTP 409.
//!
//! Two sources can supply the alternate verb:
//!
//! - [`RequestOptions::conflict_retry`](crate::http::RequestOptions::conflict_retry),
//!   scoped to a single call. Preferred.
//! - The client-wide one-shot arming set with
//!   [`IdpHttp::conflict_retry_method`](crate::http::IdpHttp::conflict_retry_method).
//!   It is taken (and cleared) by the first request that receives a 409.

use async_lock::Mutex;
use reqwest::{Method, StatusCode};
use std::sync::Arc;

/// One-shot conflict retry arming, shared between clones of a client.
#[derive(Debug, Clone)]
pub(crate) struct ArmedRetry {
    slot: Arc<Mutex<Option<Method>>>,
}

impl ArmedRetry {
    pub(crate) fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Arm the retry. Replaces any previous arming.
    pub(crate) async fn arm(&self, method: Method) {
        *self.slot.lock().await = Some(method);
    }

    /// Take the armed method, leaving the slot empty.
    pub(crate) async fn take(&self) -> Option<Method> {
        self.slot.lock().await.take()
    }

    pub(crate) async fn is_armed(&self) -> bool {
        self.slot.lock().await.is_some()
    }
}

/// Whether a response status qualifies for the conflict retry.
pub(crate) fn is_retryable_conflict(status: u16) -> bool {
    status == StatusCode::CONFLICT.as_u16()
}

/// Pick the verb to retry a conflicting request with.
///
/// The per-call method wins and leaves the client-wide arming untouched.
/// Otherwise the arming is consumed.
pub(crate) async fn resolve(per_call: Option<&Method>, armed: &ArmedRetry) -> Option<Method> {
    match per_call {
        Some(method) => Some(method.clone()),
        None => armed.take().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_409_is_retryable() {
        assert!(is_retryable_conflict(409));
        assert!(!is_retryable_conflict(200));
        assert!(!is_retryable_conflict(412));
        assert!(!is_retryable_conflict(500));
    }

    #[tokio::test]
    async fn test_arming_is_consumed_once() {
        let armed = ArmedRetry::new();
        assert!(!armed.is_armed().await);

        armed.arm(Method::PATCH).await;
        assert!(armed.is_armed().await);

        assert_eq!(resolve(None, &armed).await, Some(Method::PATCH));
        assert!(!armed.is_armed().await);
        assert_eq!(resolve(None, &armed).await, None);
    }

    #[tokio::test]
    async fn test_per_call_method_preserves_arming() {
        let armed = ArmedRetry::new();
        armed.arm(Method::PUT).await;

        let chosen = resolve(Some(&Method::PATCH), &armed).await;
        assert_eq!(chosen, Some(Method::PATCH));
        assert!(armed.is_armed().await);
    }

    #[tokio::test]
    async fn test_clones_share_the_slot() {
        let armed = ArmedRetry::new();
        let other = armed.clone();
        other.arm(Method::PUT).await;
        assert_eq!(armed.take().await, Some(Method::PUT));
        assert!(!other.is_armed().await);
    }
}
