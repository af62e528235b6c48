//! Mock backend helpers for integration tests
//!
//! [`TestBackend`] starts a wiremock server and wires a [`ClientContext`] to
//! it on in-memory storage and a manual clock, so tests control both what the
//! backend answers and what time it is.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tenderdesk::client::storage::{TOKEN_EXPIRY_KEY, TOKEN_KEY};
use tenderdesk::client::{ClientContext, Clock, KeyValueStore, ManualClock, MemoryStore};
use tenderdesk::shared::config::{AppConfig, AppConfigBuilder};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::{token_json, user_json, NOW};

pub struct TestBackend {
    pub server: MockServer,
    pub storage: Arc<MemoryStore>,
    pub clock: Arc<ManualClock>,
    pub context: ClientContext,
}

impl TestBackend {
    pub async fn start() -> Self {
        Self::start_with(|builder| builder).await
    }

    /// Start with extra configuration on top of the mock server URL
    pub async fn start_with(configure: impl FnOnce(AppConfigBuilder) -> AppConfigBuilder) -> Self {
        let server = MockServer::start().await;
        let builder = AppConfig::builder()
            .api_url(server.uri())
            .request_timeout(Duration::from_secs(5));
        let config = configure(builder).build().expect("valid test config");

        let storage = Arc::new(MemoryStore::new());
        let clock = Arc::new(ManualClock::new(NOW));
        let context = ClientContext::with_parts(
            config,
            storage.clone() as Arc<dyn KeyValueStore>,
            clock.clone() as Arc<dyn Clock>,
        )
        .expect("client context");

        Self {
            server,
            storage,
            clock,
            context,
        }
    }

    /// Answer `POST /auth/login` with a token carrying the user
    pub async fn mount_login(&self, token: &str, expires_in: f64, plan_tier: &str) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_json(
                token,
                expires_in,
                Some(user_json(plan_tier, false)),
            )))
            .mount(&self.server)
            .await;
    }

    /// Log in through the session manager against a mounted login endpoint
    pub async fn login(&self, plan_tier: &str) {
        self.mount_login("tok-1", 86_400.0, plan_tier).await;
        self.context
            .session
            .login(super::fixtures::EMAIL, super::fixtures::PASSWORD)
            .await
            .expect("login");
    }

    /// Persist a token as a previous run would have
    pub fn persist_token(&self, token: &str, expiry_millis: i64) {
        self.storage.set(TOKEN_KEY, token).expect("store token");
        self.storage
            .set(TOKEN_EXPIRY_KEY, &expiry_millis.to_string())
            .expect("store expiry");
    }

    /// Number of requests the server has seen for `path`
    pub async fn hits(&self, wanted: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == wanted)
            .count()
    }
}

/// Generic `{success, message}` acknowledgement
pub fn success(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"success": true, "message": message}))
}
