//! Panel view-models
//!
//! Each panel keeps the data it shows, its form inputs and the background
//! requests it has in flight. Nothing in here touches egui, so the display
//! logic (labels, validation, ordering) is unit-tested directly.

pub mod admin;
pub mod analytics;
pub mod auth;
pub mod dashboard;
pub mod profile;
pub mod search;
pub mod workspace;

pub use admin::AdminPanel;
pub use analytics::AnalyticsPanel;
pub use auth::{AuthForm, AuthMode};
pub use dashboard::DashboardPanel;
pub use profile::ProfilePanel;
pub use search::SearchPanel;
pub use workspace::WorkspacePanel;

use crate::shared::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Banner shown above the current view until dismissed or replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

impl From<&ClientError> for Notice {
    fn from(error: &ClientError) -> Self {
        Notice::error(error.to_string())
    }
}

/// Parse an optional numeric form field; blank means absent
pub(crate) fn parse_optional<T: std::str::FromStr>(
    input: &str,
    field: &str,
    message: &str,
) -> Result<Option<T>, ClientError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse()
        .map(Some)
        .map_err(|_| ClientError::validation(field, message))
}
