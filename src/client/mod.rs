//! Backend client
//!
//! UI-independent layer between the panels and the REST backend:
//!
//! - [`http::ApiClient`] issues every request and maps failures to
//!   [`ClientError`](crate::shared::error::ClientError)
//! - [`api`] holds one typed wrapper per backend endpoint
//! - [`session::SessionManager`] owns login, logout, restore and token refresh
//! - [`router::Router`] decides which view a navigation request lands on
//!
//! [`ClientContext::build`] wires these together for the running app.

pub mod api;
pub mod clock;
pub mod http;
pub mod loading;
pub mod router;
pub mod session;
pub mod storage;

use std::sync::Arc;

use tracing::info;

use crate::shared::config::AppConfig;
use crate::shared::error::ClientError;

pub use clock::{Clock, ManualClock, SystemClock};
pub use http::ApiClient;
pub use loading::{LoadingGuard, LoadingIndicator};
pub use router::{Navigation, Router, View};
pub use session::{SessionManager, SessionSnapshot, SessionStore};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

/// Everything a frontend needs to talk to the backend
#[derive(Clone, Debug)]
pub struct ClientContext {
    pub client: ApiClient,
    pub session: SessionManager,
    pub router: Router,
}

impl ClientContext {
    /// Wire the client on durable file storage and the system clock
    pub fn build(config: AppConfig) -> Result<Self, ClientError> {
        let storage: Arc<dyn KeyValueStore> = match &config.storage_path {
            Some(path) => Arc::new(FileStore::new(path.clone())),
            None => Arc::new(FileStore::in_data_dir()),
        };
        Self::with_parts(config, storage, Arc::new(SystemClock))
    }

    /// Wire the client on caller-supplied storage and clock
    pub fn with_parts(
        config: AppConfig,
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ClientError> {
        info!(api_url = %config.api_url, "Initialising backend client");
        let store = Arc::new(SessionStore::new(storage, clock));
        let client = ApiClient::new(config, store, LoadingIndicator::new())?;
        let session = SessionManager::new(client.clone());
        Ok(Self {
            client,
            session,
            router: Router::new(),
        })
    }
}
