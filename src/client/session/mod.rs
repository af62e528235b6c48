//! Session Manager
//!
//! Owns the authentication lifecycle:
//!
//! ```text
//!             restore() ok / login() ok
//!   ┌──────────────┐ ───────────────────────▶ ┌───────────────┐
//!   │ logged out   │                          │ authenticated │ ◀─┐ refresh()
//!   └──────────────┘ ◀─────────────────────── └───────────────┘ ──┘
//!        logout(), 401 from any call, token lapsed
//! ```
//!
//! While authenticated, a background [`RefreshTask`] checks the token every
//! `interval` and refreshes it once less than `threshold` of its lifetime is
//! left. Refresh failures are logged and otherwise ignored; the old token
//! keeps working until it lapses, at which point the session is cleared.

pub mod refresh;
pub mod store;

use std::sync::{Arc, Mutex};

use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::client::http::ApiClient;
use crate::shared::auth::{LoginRequest, RegisterRequest, TokenResponse};
use crate::shared::error::ClientError;
use crate::shared::profile::is_plausible_email;
use crate::shared::user::UserRecord;

pub use refresh::{CheckOutcome, RefreshPolicy, RefreshTask};
pub use store::{PersistedToken, Session, SessionSnapshot, SessionStore};

const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Clone)]
pub struct SessionManager {
    client: ApiClient,
    policy: RefreshPolicy,
    refresh_task: Arc<Mutex<Option<RefreshTask>>>,
}

impl SessionManager {
    /// Manager using the refresh timings from the client's configuration
    pub fn new(client: ApiClient) -> Self {
        let policy = RefreshPolicy::from(client.config());
        Self::with_policy(client, policy)
    }

    pub fn with_policy(client: ApiClient, policy: RefreshPolicy) -> Self {
        Self {
            client,
            policy,
            refresh_task: Arc::new(Mutex::new(None)),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        self.client.session()
    }

    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.store().snapshot()
    }

    pub fn current_user(&self) -> Option<UserRecord> {
        self.store().current_user()
    }

    /// Resume a persisted session at startup; returns whether it succeeded
    pub async fn restore(&self) -> bool {
        let store = self.store();
        match store.load_persisted() {
            PersistedToken::Missing => {
                debug!("No persisted session");
                false
            }
            PersistedToken::Expired => {
                info!("Persisted session has expired");
                store.clear();
                false
            }
            PersistedToken::Valid {
                token,
                expiry_millis,
            } => {
                store.adopt_token(token, expiry_millis);
                match self.client.get_me().await {
                    Ok(user) => {
                        info!(user_id = user.id, "Restored persisted session");
                        store.set_user(user);
                        self.start_refresh();
                        true
                    }
                    Err(e) => {
                        warn!(error = %e, "Could not restore persisted session");
                        store.clear();
                        false
                    }
                }
            }
        }
    }

    /// Log in and establish a session
    pub async fn login(&self, email: &str, password: &str) -> Result<UserRecord, ClientError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ClientError::auth("Email and password are required"));
        }

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let token = self
            .client
            .post_login(&request)
            .await
            .map_err(into_auth_error)?;

        let user = self.establish(token).await?;
        info!(user_id = user.id, "Logged in");
        Ok(user)
    }

    /// Register a new account, then log in with it
    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, ClientError> {
        let full_name = full_name.trim();
        let email = email.trim();
        if full_name.is_empty() {
            return Err(ClientError::validation("full_name", "Full name is required"));
        }
        if !is_plausible_email(email) {
            return Err(ClientError::validation(
                "email",
                "Please enter a valid email address",
            ));
        }
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ClientError::validation(
                "password",
                "Password must be at least 6 characters",
            ));
        }

        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
        };
        self.client
            .post_register(&request)
            .await
            .map_err(into_auth_error)?;
        info!(%email, "Registered new account");

        self.login(email, password).await
    }

    /// Replace the token; failures are logged and swallowed
    pub async fn refresh(&self) -> bool {
        if self.store().token().is_none() {
            return false;
        }
        match self.client.post_refresh().await {
            Ok(token) => {
                let expiry = token.expiry_from(self.store().now_millis());
                self.store().replace_token(token.access_token, expiry);
                if let Some(user) = token.user {
                    self.store().set_user(user);
                }
                info!(expiry_millis = expiry, "Token refreshed");
                true
            }
            Err(e) => {
                warn!(error = %e, "Token refresh failed, keeping current token");
                false
            }
        }
    }

    /// One periodic check: clear a lapsed session, refresh one about to lapse
    pub async fn check(&self) -> CheckOutcome {
        let Some(remaining) = self.store().remaining_millis() else {
            return CheckOutcome::NoSession;
        };
        if remaining <= 0 {
            info!("Token lapsed, logging out");
            self.logout();
            return CheckOutcome::Expired;
        }
        if !self.policy.is_due(remaining) {
            return CheckOutcome::NotDue;
        }
        if self.refresh().await {
            CheckOutcome::Refreshed
        } else {
            CheckOutcome::RefreshFailed
        }
    }

    /// Clear the session everywhere and stop the refresh task
    pub fn logout(&self) {
        if let Some(task) = self.lock_task().take() {
            task.stop();
        }
        self.store().clear();
        info!("Logged out");
    }

    /// Whether the refresh task is currently scheduled
    pub fn is_refresh_running(&self) -> bool {
        self.lock_task()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    async fn establish(&self, token: TokenResponse) -> Result<UserRecord, ClientError> {
        let expiry = token.expiry_from(self.store().now_millis());
        let user = match token.user {
            Some(user) => user,
            None => {
                // Older backends omit the user from the token response
                self.store().adopt_token(token.access_token.clone(), expiry);
                match self.client.get_me().await {
                    Ok(user) => user,
                    Err(e) => {
                        self.store().clear();
                        return Err(into_auth_error(e));
                    }
                }
            }
        };
        self.store()
            .establish(user.clone(), token.access_token, expiry);
        self.start_refresh();
        Ok(user)
    }

    /// Spawn the refresh loop, replacing any previous one.
    /// Must run inside a tokio runtime.
    fn start_refresh(&self) {
        let manager = self.clone();
        let interval = self.policy.interval;
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let outcome = manager.check().await;
                debug!(?outcome, "Token lifetime check");
                if !outcome.keeps_running() {
                    break;
                }
            }
        });
        *self.lock_task() = Some(RefreshTask::new(handle));
    }

    fn lock_task(&self) -> std::sync::MutexGuard<'_, Option<RefreshTask>> {
        self.refresh_task.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("store", self.store())
            .field("policy", &self.policy)
            .finish()
    }
}

/// Login and registration failures all surface as `Auth`
fn into_auth_error(error: ClientError) -> ClientError {
    match error {
        ClientError::SessionExpired => ClientError::auth("Invalid email or password"),
        ClientError::Request { message, .. } => ClientError::auth(message),
        ClientError::Network(message) => {
            ClientError::auth(format!("Could not reach the server: {}", message))
        }
        ClientError::Decode(message) => {
            ClientError::auth(format!("Unexpected response from the server: {}", message))
        }
        other => other,
    }
}
