//! Team admin dashboard

use serde_json::Value;

use crate::client::api::admin::SYNC_LIMIT_RANGE;
use crate::egui_app::state::pending::Pending;
use crate::shared::error::ClientError;
use crate::shared::team::{ActivityEntry, TeamInvite, TeamRole};
use crate::shared::user::UserRecord;
use crate::shared::workspace::SuccessResponse;

pub const DEFAULT_SYNC_LIMIT: u32 = 50;
pub const ACTIVITY_LIMIT: u32 = 50;

#[derive(Debug)]
pub struct AdminPanel {
    pub sync_limit: u32,
    pub stats: Option<Value>,
    pub activity: Vec<ActivityEntry>,
    pub members: Vec<UserRecord>,
    pub invite_email: String,
    pub invite_role: TeamRole,
    pub pending_sync: Pending<Result<SuccessResponse, ClientError>>,
    pub pending_stats: Pending<Result<Value, ClientError>>,
    pub pending_activity: Pending<Result<Vec<ActivityEntry>, ClientError>>,
    pub pending_members: Pending<Result<Vec<UserRecord>, ClientError>>,
    pub pending_invite: Pending<Result<SuccessResponse, ClientError>>,
}

impl Default for AdminPanel {
    fn default() -> Self {
        Self {
            sync_limit: DEFAULT_SYNC_LIMIT,
            stats: None,
            activity: Vec::new(),
            members: Vec::new(),
            invite_email: String::new(),
            invite_role: TeamRole::Member,
            pending_sync: Pending::default(),
            pending_stats: Pending::default(),
            pending_activity: Pending::default(),
            pending_members: Pending::default(),
            pending_invite: Pending::default(),
        }
    }
}

impl AdminPanel {
    pub fn is_syncing(&self) -> bool {
        self.pending_sync.is_busy()
    }

    pub fn invite(&self) -> Result<TeamInvite, ClientError> {
        let invite = TeamInvite {
            email: self.invite_email.trim().to_string(),
            role: self.invite_role,
        };
        invite.validate()?;
        Ok(invite)
    }

    pub fn clamp_sync_limit(&mut self) {
        self.sync_limit = self
            .sync_limit
            .clamp(*SYNC_LIMIT_RANGE.start(), *SYNC_LIMIT_RANGE.end());
    }

    /// Stats flattened into `("section.key", value)` rows
    pub fn stats_rows(&self) -> Vec<(String, String)> {
        let mut rows = Vec::new();
        if let Some(stats) = &self.stats {
            flatten("", stats, &mut rows);
        }
        rows.sort();
        rows
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn flatten(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, value) in map {
                let key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&key, value, rows);
            }
        }
        Value::String(s) => rows.push((prefix.to_string(), s.clone())),
        Value::Null => rows.push((prefix.to_string(), "-".to_string())),
        other => rows.push((prefix.to_string(), other.to_string())),
    }
}
