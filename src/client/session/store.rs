//! In-memory session state and its persisted mirror
//!
//! [`SessionStore`] is the only place that mutates the session. Readers never
//! see a user without a live token: every accessor checks the expiry first and
//! clears the session when it has lapsed.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use crate::client::clock::Clock;
use crate::client::storage::{KeyValueStore, TOKEN_EXPIRY_KEY, TOKEN_KEY};
use crate::shared::user::UserRecord;

/// Raw session contents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserRecord>,
    pub access_token: Option<String>,
    pub token_expiry_millis: Option<i64>,
}

impl Session {
    fn is_expired_at(&self, now_millis: i64) -> bool {
        match self.token_expiry_millis {
            Some(expiry) => expiry <= now_millis,
            None => true,
        }
    }
}

/// Consistent view of the session handed to panels and the router
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub user: Option<UserRecord>,
    pub token_expiry_millis: Option<i64>,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_team_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_team_admin)
    }
}

/// Token read back from durable storage at startup
#[derive(Debug, Clone, PartialEq)]
pub enum PersistedToken {
    Missing,
    Expired,
    Valid { token: String, expiry_millis: i64 },
}

pub struct SessionStore {
    state: RwLock<Session>,
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(Session::default()),
            storage,
            clock,
        }
    }

    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Clear the session if its token has lapsed; returns whether it is live
    fn ensure_live(&self) -> bool {
        let now = self.now_millis();
        {
            let state = self.read();
            if state.access_token.is_none() {
                return false;
            }
            if !state.is_expired_at(now) {
                return true;
            }
        }
        self.clear_if_expired(now)
    }

    /// Re-check under the write lock, so a session installed after the read
    /// check is never wiped
    fn clear_if_expired(&self, now_millis: i64) -> bool {
        let mut state = self.write();
        if state.access_token.is_none() {
            return false;
        }
        if !state.is_expired_at(now_millis) {
            return true;
        }
        info!("Session token expired, logging out");
        *state = Session::default();
        self.wipe_storage();
        false
    }

    /// Bearer token to attach to requests, if the session is live
    pub fn token(&self) -> Option<String> {
        if !self.ensure_live() {
            return None;
        }
        self.read().access_token.clone()
    }

    /// Current user; absent unless the token is live
    pub fn current_user(&self) -> Option<UserRecord> {
        if !self.ensure_live() {
            return None;
        }
        self.read().user.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        if !self.ensure_live() {
            return SessionSnapshot::default();
        }
        let state = self.read();
        SessionSnapshot {
            user: state.user.clone(),
            token_expiry_millis: state.token_expiry_millis,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Milliseconds of token lifetime left; `None` without a token
    pub fn remaining_millis(&self) -> Option<i64> {
        let state = self.read();
        state.access_token.as_ref()?;
        state
            .token_expiry_millis
            .map(|expiry| expiry.saturating_sub(self.now_millis()))
    }

    /// Install a freshly issued session
    pub fn establish(&self, user: UserRecord, token: String, expiry_millis: i64) {
        info!(user_id = user.id, team_id = user.team_id, "Session established");
        let mut state = self.write();
        self.persist(&token, expiry_millis);
        state.user = Some(user);
        state.access_token = Some(token);
        state.token_expiry_millis = Some(expiry_millis);
    }

    /// Adopt a persisted token whose user is not yet known
    pub fn adopt_token(&self, token: String, expiry_millis: i64) {
        let mut state = self.write();
        state.user = None;
        state.access_token = Some(token);
        state.token_expiry_millis = Some(expiry_millis);
    }

    /// Replace the token and expiry, keeping the user
    pub fn replace_token(&self, token: String, expiry_millis: i64) {
        let mut state = self.write();
        self.persist(&token, expiry_millis);
        state.access_token = Some(token);
        state.token_expiry_millis = Some(expiry_millis);
    }

    /// Replace the user snapshot wholesale
    pub fn set_user(&self, user: UserRecord) {
        let mut state = self.write();
        if state.access_token.is_some() {
            state.user = Some(user);
        } else {
            warn!("Ignoring user record without an active token");
        }
    }

    /// Forget everything, in memory and on disk
    pub fn clear(&self) {
        let mut state = self.write();
        *state = Session::default();
        self.wipe_storage();
        debug!("Session cleared");
    }

    /// Persisted entries are only touched while the write lock is held
    fn wipe_storage(&self) {
        for key in [TOKEN_KEY, TOKEN_EXPIRY_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!(key, error = %e, "Failed to remove persisted session entry");
            }
        }
    }

    /// Read the persisted token and classify it against the current time
    pub fn load_persisted(&self) -> PersistedToken {
        let token = self.storage.get(TOKEN_KEY);
        let expiry = self.storage.get(TOKEN_EXPIRY_KEY);
        let (token, expiry) = match (token, expiry) {
            (Ok(Some(token)), Ok(Some(expiry))) => (token, expiry),
            (Ok(None), _) => return PersistedToken::Missing,
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "Failed to read persisted session");
                return PersistedToken::Missing;
            }
            // A token without an expiry cannot be trusted
            (Ok(Some(_)), Ok(None)) => return PersistedToken::Expired,
        };
        match expiry.trim().parse::<i64>() {
            Ok(expiry_millis) if expiry_millis > self.now_millis() => PersistedToken::Valid {
                token,
                expiry_millis,
            },
            _ => PersistedToken::Expired,
        }
    }

    fn persist(&self, token: &str, expiry_millis: i64) {
        if let Err(e) = self.storage.set(TOKEN_KEY, token) {
            warn!(error = %e, "Failed to persist session token");
        }
        if let Err(e) = self
            .storage
            .set(TOKEN_EXPIRY_KEY, &expiry_millis.to_string())
        {
            warn!(error = %e, "Failed to persist session expiry");
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("SessionStore")
            .field("user", &state.user.as_ref().map(|u| u.id))
            .field("has_token", &state.access_token.is_some())
            .field("token_expiry_millis", &state.token_expiry_millis)
            .finish()
    }
}
