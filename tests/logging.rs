//! Trace output of the HTTP layer must never contain credentials or tokens.

use std::io;
use std::sync::{Arc, Mutex};

use serde_json::json;
use tracing_subscriber::fmt::MakeWriter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use idp_rest::prelude::*;

/// In-memory sink for formatted trace events.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_traces() -> (Captured, tracing::subscriber::DefaultGuard) {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(captured.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (captured, guard)
}

#[tokio::test]
async fn test_login_keeps_secret_and_token_out_of_traces() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/vendor"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "token": "TOKEN-XYZ", "expiresIn": 60 })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tenants/v1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "tenantId": "t-1", "name": "Acme" }])),
        )
        .mount(&server)
        .await;

    let (captured, _guard) = capture_traces();

    let client = IdpClient::builder()
        .base_url(&server.uri())
        .credentials(Credentials::new("cid", "SECRET-ABC"))
        .connect()
        .await
        .unwrap();
    client.tenants().list().await.unwrap();

    let logs = captured.contents();
    assert!(logs.contains("/auth/vendor"), "login request not traced: {logs}");
    assert!(logs.contains("<redacted>"));
    assert!(!logs.contains("SECRET-ABC"), "secret leaked: {logs}");
    assert!(!logs.contains("TOKEN-XYZ"), "token leaked: {logs}");

    // Ordinary requests still trace their bodies.
    assert!(logs.contains("Acme"));
}

#[tokio::test]
async fn test_failed_login_keeps_secret_out_of_traces() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/vendor"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid client"))
        .mount(&server)
        .await;

    let (captured, _guard) = capture_traces();

    let err = IdpClient::builder()
        .base_url(&server.uri())
        .credentials(Credentials::new("cid", "SECRET-ABC"))
        .connect()
        .await
        .err()
        .unwrap();
    assert!(matches!(err, SdkError::Auth(AuthError::LoginFailed(_))));

    let logs = captured.contents();
    assert!(logs.contains("/auth/vendor"));
    assert!(!logs.contains("SECRET-ABC"), "secret leaked: {logs}");
}
