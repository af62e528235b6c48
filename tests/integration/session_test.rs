//! Session lifecycle against a mock backend
//!
//! Login, restore, refresh and logout, including the background refresh task.

use std::time::Duration;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use tenderdesk::client::session::CheckOutcome;
use tenderdesk::client::storage::{TOKEN_EXPIRY_KEY, TOKEN_KEY};
use tenderdesk::client::KeyValueStore;
use tenderdesk::shared::error::ClientError;
use tenderdesk::shared::user::PlanTier;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::assert_ok;
use crate::common::{token_json, user_json, TestBackend, EMAIL, NOW, PASSWORD};

#[tokio::test]
async fn test_login_then_logout_clears_everything() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": EMAIL, "password": PASSWORD})))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json(
            "tok-1",
            86_400.0,
            Some(user_json("pro", true)),
        )))
        .expect(1)
        .mount(&backend.server)
        .await;

    let session = &backend.context.session;
    let user = assert_ok!(session.login(EMAIL, PASSWORD).await);
    assert_eq!(user.plan_tier, PlanTier::Pro);
    assert!(user.is_team_admin);
    assert_eq!(session.store().token().as_deref(), Some("tok-1"));
    assert_eq!(
        backend.storage.get(TOKEN_EXPIRY_KEY).unwrap(),
        Some((NOW + 86_400_000).to_string())
    );
    assert!(session.is_refresh_running());

    session.logout();
    assert!(session.store().token().is_none());
    assert!(session.current_user().is_none());
    assert!(backend.storage.is_empty());
    assert!(!session.is_refresh_running());
}

#[tokio::test]
async fn test_login_with_padded_email() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": EMAIL, "password": PASSWORD})))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json(
            "tok-1",
            3_600.0,
            Some(user_json("free", false)),
        )))
        .expect(1)
        .mount(&backend.server)
        .await;

    let padded = format!("  {} ", EMAIL);
    backend.context.session.login(&padded, PASSWORD).await.unwrap();
    assert!(backend.context.session.store().is_authenticated());
}

#[tokio::test]
async fn test_login_rejected_credentials() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Incorrect email or password"})),
        )
        .mount(&backend.server)
        .await;

    let err = backend
        .context
        .session
        .login(EMAIL, "wrong-password")
        .await
        .unwrap_err();
    assert_eq!(err, ClientError::auth("Invalid email or password"));
    assert!(backend.storage.is_empty());
    assert!(!backend.context.session.is_refresh_running());
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let backend = TestBackend::start().await;
    let err = backend.context.session.login("", PASSWORD).await.unwrap_err();
    assert_matches!(err, ClientError::Auth(_));
    let err = backend.context.session.login(EMAIL, "").await.unwrap_err();
    assert_matches!(err, ClientError::Auth(_));
    assert_eq!(backend.hits("/auth/login").await, 0);
}

#[tokio::test]
async fn test_login_fetches_user_when_token_has_none() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json("tok-2", 3_600.0, None)))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("basic", false)))
        .expect(1)
        .mount(&backend.server)
        .await;

    let user = assert_ok!(backend.context.session.login(EMAIL, PASSWORD).await);
    assert_eq!(user.plan_tier, PlanTier::Basic);
    assert_eq!(backend.storage.get(TOKEN_KEY).unwrap().as_deref(), Some("tok-2"));
}

#[tokio::test]
async fn test_register_then_login() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({
            "email": EMAIL,
            "password": PASSWORD,
            "full_name": "Thandi Mokoena"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json(
            "tok-reg",
            86_400.0,
            Some(user_json("free", true)),
        )))
        .expect(1)
        .mount(&backend.server)
        .await;
    backend.mount_login("tok-1", 86_400.0, "free").await;

    let user = backend
        .context
        .session
        .register("Thandi Mokoena", EMAIL, PASSWORD)
        .await
        .unwrap();
    assert_eq!(user.email, EMAIL);
    assert_eq!(backend.hits("/auth/login").await, 1);
    assert_eq!(backend.context.session.store().token().as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Email already registered"})),
        )
        .mount(&backend.server)
        .await;

    let err = backend
        .context
        .session
        .register("Thandi Mokoena", EMAIL, PASSWORD)
        .await
        .unwrap_err();
    assert_eq!(err, ClientError::auth("Email already registered"));
    assert_eq!(backend.hits("/auth/login").await, 0);
}

#[tokio::test]
async fn test_register_validation_never_reaches_backend() {
    let backend = TestBackend::start().await;
    let session = &backend.context.session;

    let err = session.register("Thandi", EMAIL, "short").await.unwrap_err();
    assert_matches!(err, ClientError::Validation { ref field, .. } if field == "password");

    let err = session.register("Thandi", "not-an-email", PASSWORD).await.unwrap_err();
    assert_matches!(err, ClientError::Validation { ref field, .. } if field == "email");

    let err = session.register("  ", EMAIL, PASSWORD).await.unwrap_err();
    assert_matches!(err, ClientError::Validation { ref field, .. } if field == "full_name");

    assert_eq!(backend.hits("/auth/register").await, 0);
}

#[tokio::test]
async fn test_restore_valid_token() {
    let backend = TestBackend::start().await;
    backend.persist_token("tok-saved", NOW + 3_600_000);
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer tok-saved"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("pro", false)))
        .expect(1)
        .mount(&backend.server)
        .await;

    let session = &backend.context.session;
    assert!(session.restore().await);
    assert_eq!(session.current_user().map(|u| u.id), Some(7));
    assert!(session.is_refresh_running());
    session.logout();
}

#[tokio::test]
async fn test_restore_expired_token_skips_backend() {
    let backend = TestBackend::start().await;
    backend.persist_token("tok-old", NOW - 1);
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("pro", false)))
        .expect(0)
        .mount(&backend.server)
        .await;

    assert!(!backend.context.session.restore().await);
    assert!(backend.storage.is_empty());
}

#[tokio::test]
async fn test_restore_rejected_token_clears_storage() {
    let backend = TestBackend::start().await;
    backend.persist_token("tok-revoked", NOW + 3_600_000);
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&backend.server)
        .await;

    assert!(!backend.context.session.restore().await);
    assert!(backend.storage.is_empty());
    assert!(backend.context.session.current_user().is_none());
}

#[tokio::test]
async fn test_restore_without_token() {
    let backend = TestBackend::start().await;
    assert!(!backend.context.session.restore().await);
    assert_eq!(backend.hits("/auth/me").await, 0);
}

#[tokio::test]
async fn test_check_refreshes_once_when_due() {
    let backend = TestBackend::start().await;
    // 10 minutes left is inside the 15 minute threshold
    backend.mount_login("tok-1", 600.0, "basic").await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json("tok-fresh", 86_400.0, None)))
        .expect(1)
        .mount(&backend.server)
        .await;

    let session = &backend.context.session;
    assert_ok!(session.login(EMAIL, PASSWORD).await);

    assert_eq!(session.check().await, CheckOutcome::Refreshed);
    assert_eq!(session.store().token().as_deref(), Some("tok-fresh"));
    assert_eq!(
        backend.storage.get(TOKEN_EXPIRY_KEY).unwrap(),
        Some((NOW + 86_400_000).to_string())
    );
    // User survives a refresh that carries none
    assert!(session.current_user().is_some());

    assert_eq!(session.check().await, CheckOutcome::NotDue);
    session.logout();
}

#[tokio::test]
async fn test_check_not_due() {
    let backend = TestBackend::start().await;
    backend.login("free").await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json("unused", 60.0, None)))
        .expect(0)
        .mount(&backend.server)
        .await;

    assert_eq!(backend.context.session.check().await, CheckOutcome::NotDue);
    backend.context.session.logout();
}

#[tokio::test]
async fn test_check_clears_lapsed_session() {
    let backend = TestBackend::start().await;
    backend.mount_login("tok-1", 3_600.0, "pro").await;
    let session = &backend.context.session;
    assert_ok!(session.login(EMAIL, PASSWORD).await);

    backend.clock.advance_millis(3_600_000);
    assert_eq!(session.check().await, CheckOutcome::Expired);
    assert!(backend.storage.is_empty());
    assert!(!session.is_refresh_running());
    assert_eq!(session.check().await, CheckOutcome::NoSession);
}

#[tokio::test]
async fn test_failed_refresh_keeps_token() {
    let backend = TestBackend::start().await;
    backend.mount_login("tok-1", 600.0, "pro").await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&backend.server)
        .await;

    let session = &backend.context.session;
    assert_ok!(session.login(EMAIL, PASSWORD).await);
    assert_eq!(session.check().await, CheckOutcome::RefreshFailed);
    assert_eq!(session.store().token().as_deref(), Some("tok-1"));
    session.logout();
}

#[tokio::test]
async fn test_refresh_task_runs_until_logout() {
    let backend = TestBackend::start_with(|builder| {
        builder.refresh_interval(Duration::from_millis(50))
    })
    .await;
    backend.mount_login("tok-1", 600.0, "pro").await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json("tok-next", 600.0, None)))
        .mount(&backend.server)
        .await;

    let session = &backend.context.session;
    assert_ok!(session.login(EMAIL, PASSWORD).await);
    tokio::time::sleep(Duration::from_millis(300)).await;
    let refreshed = backend.hits("/auth/refresh").await;
    assert!(refreshed >= 1, "expected the task to refresh, saw {}", refreshed);
    assert_eq!(session.store().token().as_deref(), Some("tok-next"));

    session.logout();
    assert!(!session.is_refresh_running());
    // Let any request already on the wire land before counting
    tokio::time::sleep(Duration::from_millis(50)).await;
    let after_logout = backend.hits("/auth/refresh").await;
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(backend.hits("/auth/refresh").await, after_logout);
}

#[tokio::test]
async fn test_refresh_task_stops_when_token_lapses() {
    let backend = TestBackend::start_with(|builder| {
        builder.refresh_interval(Duration::from_millis(50))
    })
    .await;
    backend.mount_login("tok-1", 3_600.0, "pro").await;

    let session = &backend.context.session;
    assert_ok!(session.login(EMAIL, PASSWORD).await);
    backend.clock.advance_millis(3_600_001);
    tokio::time::sleep(Duration::from_millis(250)).await;

    assert!(!session.is_refresh_running());
    assert!(backend.storage.is_empty());
}
