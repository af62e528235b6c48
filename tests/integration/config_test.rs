//! Configuration loading and file-backed session persistence

use std::sync::Arc;

use serial_test::serial;
use tenderdesk::client::storage::TOKEN_KEY;
use tenderdesk::client::{ClientContext, FileStore, KeyValueStore, ManualClock};
use tenderdesk::shared::config::{AppConfig, ConfigError, API_URL_ENV};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{token_json, user_json, EMAIL, NOW, PASSWORD};

#[test]
#[serial]
fn test_env_overrides_api_url() {
    std::env::set_var(API_URL_ENV, "https://tenders.example.co.za/");
    let config = AppConfig::load();
    std::env::remove_var(API_URL_ENV);

    let config = config.unwrap();
    assert_eq!(config.api_url, "https://tenders.example.co.za");
    assert_eq!(
        config.api_url("/health"),
        "https://tenders.example.co.za/health"
    );
}

#[test]
#[serial]
fn test_env_with_invalid_url_fails() {
    std::env::set_var(API_URL_ENV, "tenders.example.co.za");
    let result = AppConfig::load();
    std::env::remove_var(API_URL_ENV);

    assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
}

#[test]
fn test_config_file_overlay() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.toml");
    let session_path = dir.path().join("session.json");
    std::fs::write(
        &file,
        format!(
            "api_url = \"https://staging.example.co.za\"\nrefresh_interval_secs = 60\nstorage_path = {:?}\n",
            session_path
        ),
    )
    .unwrap();

    let config = AppConfig::builder().merge_file(&file).unwrap().build().unwrap();
    assert_eq!(config.api_url, "https://staging.example.co.za");
    assert_eq!(config.refresh_interval.as_secs(), 60);
    assert_eq!(config.storage_path.as_deref(), Some(session_path.as_path()));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = AppConfig::builder().merge_file(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[tokio::test]
async fn test_session_survives_restart_on_disk() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json(
            "tok-disk",
            86_400.0,
            Some(user_json("pro", false)),
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer tok-disk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("pro", false)))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("tenderdesk").join("session.json");
    let context_on_disk = || {
        let config = AppConfig::builder()
            .api_url(server.uri())
            .storage_path(session_file.clone())
            .build()
            .unwrap();
        ClientContext::with_parts(
            config,
            Arc::new(FileStore::new(session_file.clone())),
            Arc::new(ManualClock::new(NOW)),
        )
        .unwrap()
    };

    let first = context_on_disk();
    first.session.login(EMAIL, PASSWORD).await.unwrap();
    assert!(session_file.exists());
    // Closing the window drops the context without logging out
    drop(first);

    let second = context_on_disk();
    assert!(second.session.restore().await);
    assert_eq!(second.session.current_user().map(|u| u.email), Some(EMAIL.to_string()));

    second.session.logout();
    let store = FileStore::new(session_file.clone());
    assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
}
