//! Request wrapper behaviour: auth header, 401 handling, error extraction

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use reqwest::Method;
use serde_json::json;
use tenderdesk::client::ClientContext;
use tenderdesk::client::{ManualClock, MemoryStore};
use tenderdesk::shared::config::AppConfig;
use tenderdesk::shared::error::ClientError;
use tenderdesk::shared::workspace::StatusFilter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::assert_contains;
use crate::common::{tender_json, TestBackend, NOW};

#[tokio::test]
async fn test_bearer_header_only_while_logged_in() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&backend.server)
        .await;

    let client = &backend.context.client;
    assert!(client.health().await.unwrap().is_healthy());
    backend.login("free").await;
    client.health().await.unwrap();

    let requests = backend.server.received_requests().await.unwrap();
    let health: Vec<_> = requests
        .iter()
        .filter(|r| r.url.path() == "/health")
        .collect();
    assert_eq!(health.len(), 2);
    assert!(health[0].headers.get("authorization").is_none());
    assert_eq!(
        health[1]
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok()),
        Some("Bearer tok-1")
    );
    backend.context.session.logout();
}

#[tokio::test]
async fn test_unauthorized_clears_session() {
    let backend = TestBackend::start().await;
    backend.login("pro").await;
    Mock::given(method("GET"))
        .and(path("/workspace/tenders"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Token expired"})))
        .mount(&backend.server)
        .await;

    let err = backend
        .context
        .client
        .workspace_entries(3, StatusFilter::All)
        .await
        .unwrap_err();
    assert_eq!(err, ClientError::SessionExpired);
    assert!(backend.context.session.current_user().is_none());
    assert!(backend.storage.is_empty());
    backend.context.session.logout();
}

#[tokio::test]
async fn test_error_detail_string() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/tenders/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Tender not found"})))
        .mount(&backend.server)
        .await;

    let err = backend.context.client.tender(99).await.unwrap_err();
    assert_eq!(err, ClientError::request(404, "Tender not found"));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_malformed_error_body_uses_raw_text() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/tenders/1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&backend.server)
        .await;

    let err = backend.context.client.tender(1).await.unwrap_err();
    assert_eq!(err, ClientError::request(502, "<html>Bad Gateway</html>"));
}

#[tokio::test]
async fn test_validation_detail_array_is_joined() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                {"loc": ["body", "email"], "msg": "value is not a valid email address"},
                {"loc": ["body", "password"], "msg": "field required"}
            ]
        })))
        .mount(&backend.server)
        .await;

    let err = backend
        .context
        .client
        .call::<serde_json::Value>(Method::POST, "/auth/login", Some(json!({})))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ClientError::request(
            422,
            "email: value is not a valid email address; password: field required"
        )
    );
}

#[tokio::test]
async fn test_empty_success_body_decodes_as_null() {
    let backend = TestBackend::start().await;
    Mock::given(method("DELETE"))
        .and(path("/workspace/tenders/5"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&backend.server)
        .await;

    let value: serde_json::Value = backend
        .context
        .client
        .call(Method::DELETE, "/workspace/tenders/5", None)
        .await
        .unwrap();
    assert!(value.is_null());
}

#[tokio::test]
async fn test_unexpected_shape_is_decode_error() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/tenders/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&backend.server)
        .await;

    let err = backend.context.client.tender(1).await.unwrap_err();
    assert_matches!(err, ClientError::Decode(_));
}

#[tokio::test]
async fn test_loading_indicator_settles() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/tenders/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tender_json(1, "Road resurfacing")))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tenders/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&backend.server)
        .await;

    let client = &backend.context.client;
    let (ok, failed) = tokio::join!(client.tender(1), client.tender(2));
    assert_eq!(ok.unwrap().title, "Road resurfacing");
    assert!(failed.is_err());
    assert!(!client.loading().is_visible());
    assert_eq!(client.loading().in_flight(), 0);
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Port 9 (discard) is not listening on test machines
    let config = AppConfig::builder()
        .api_url("http://127.0.0.1:9")
        .build()
        .unwrap();
    let context = ClientContext::with_parts(
        config,
        std::sync::Arc::new(MemoryStore::new()),
        std::sync::Arc::new(ManualClock::new(NOW)),
    )
    .unwrap();

    let err = context.client.tender(1).await.unwrap_err();
    assert_matches!(err, ClientError::Network(_));

    let err = context.session.login("a@b.co", "secret1").await.unwrap_err();
    assert_matches!(err, ClientError::Auth(ref message) => {
        assert_contains!(message, "Could not reach the server");
    });
}
