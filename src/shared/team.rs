//! Team management and admin types

use serde::{Deserialize, Serialize};

use crate::shared::error::ClientError;
use crate::shared::profile::is_plausible_email;
use crate::shared::user::Limit;

/// Role offered in a team invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Member,
    Admin,
}

/// Body of `POST /team/invite`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamInvite {
    pub email: String,
    pub role: TeamRole,
}

impl TeamInvite {
    pub fn validate(&self) -> Result<(), ClientError> {
        if !is_plausible_email(&self.email) {
            return Err(ClientError::validation(
                "email",
                "Please enter a valid email address",
            ));
        }
        Ok(())
    }
}

/// `{success, data}` envelope used by the admin routes
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdminEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: T,
}

/// One entry of the admin activity feed
///
/// Entries come from two backend stores with different field names, so the
/// timestamp and action are looked up under several keys.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ActivityEntry(pub serde_json::Map<String, serde_json::Value>);

impl ActivityEntry {
    pub fn timestamp(&self) -> Option<&str> {
        ["timestamp", "created_at", "last_updated_at"]
            .iter()
            .find_map(|key| self.0.get(*key).and_then(|v| v.as_str()))
    }

    pub fn action(&self) -> &str {
        ["action", "type", "event"]
            .iter()
            .find_map(|key| self.0.get(*key).and_then(|v| v.as_str()))
            .unwrap_or("activity")
    }

    pub fn user_id(&self) -> Option<i64> {
        self.0.get("user_id").and_then(|v| v.as_i64())
    }
}

/// Team usage against its plan, from `GET /team/limits`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamLimits {
    pub user_count: u32,
    pub workspace_count: u32,
    pub max_users: Limit,
    pub max_workspace: Limit,
    #[serde(default)]
    pub can_add_user: bool,
    #[serde(default)]
    pub can_add_workspace: bool,
}

/// Backend health report from `GET /health`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") || self.status.eq_ignore_ascii_case("ok")
    }
}
