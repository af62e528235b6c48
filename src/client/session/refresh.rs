//! Periodic token refresh
//!
//! A [`RefreshTask`] wakes every `interval` and runs one check through the
//! session manager. It ends on its own once the session is gone, and is
//! aborted when dropped or stopped.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::shared::config::AppConfig;

/// When to check, and how close to expiry a token must be to get refreshed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    pub interval: Duration,
    pub threshold: Duration,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5 * 60),
            threshold: Duration::from_secs(15 * 60),
        }
    }
}

impl From<&AppConfig> for RefreshPolicy {
    fn from(config: &AppConfig) -> Self {
        Self {
            interval: config.refresh_interval,
            threshold: config.refresh_threshold,
        }
    }
}

impl RefreshPolicy {
    /// Whether a token with `remaining_millis` left is due for refresh
    pub fn is_due(&self, remaining_millis: i64) -> bool {
        remaining_millis < self.threshold.as_millis() as i64
    }
}

/// Result of one periodic check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// No session; the task should stop
    NoSession,
    /// The token had lapsed and the session was cleared
    Expired,
    /// Plenty of lifetime left
    NotDue,
    /// Token replaced
    Refreshed,
    /// Refresh attempted and failed; the old token stays until it lapses
    RefreshFailed,
}

impl CheckOutcome {
    pub fn keeps_running(self) -> bool {
        !matches!(self, CheckOutcome::NoSession | CheckOutcome::Expired)
    }
}

/// Handle to the running refresh loop
#[derive(Debug)]
pub struct RefreshTask {
    handle: JoinHandle<()>,
}

impl RefreshTask {
    pub(crate) fn new(handle: JoinHandle<()>) -> Self {
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn stop(self) {
        debug!("Stopping token refresh task");
        self.handle.abort();
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
