use reqwest::Method;

use crate::client::http::ApiClient;
use crate::shared::error::ClientError;
use crate::shared::team::{ActivityEntry, AdminEnvelope, HealthStatus, TeamInvite, TeamLimits};
use crate::shared::user::UserRecord;
use crate::shared::workspace::SuccessResponse;

/// Bounds the backend accepts for a tender sync
pub const SYNC_LIMIT_RANGE: std::ops::RangeInclusive<u32> = 1..=500;

impl ApiClient {
    /// Ask the backend to pull up to `limit` tenders from the OCDS feed
    ///
    /// The sync runs in the background on the server; the response only
    /// acknowledges that it started.
    pub async fn sync_tenders(&self, limit: u32) -> Result<SuccessResponse, ClientError> {
        if !SYNC_LIMIT_RANGE.contains(&limit) {
            return Err(ClientError::validation(
                "limit",
                "Sync limit must be between 1 and 500",
            ));
        }
        let query = [("limit", limit.to_string())];
        self.call_with_query(Method::POST, "/admin/sync-tenders", &query, None)
            .await
    }

    pub async fn admin_stats(&self) -> Result<serde_json::Value, ClientError> {
        let envelope: AdminEnvelope<serde_json::Value> =
            self.call(Method::GET, "/admin/stats", None).await?;
        Ok(envelope.data)
    }

    pub async fn admin_activity(&self, limit: u32) -> Result<Vec<ActivityEntry>, ClientError> {
        let query = [("limit", limit.to_string())];
        let envelope: AdminEnvelope<Vec<ActivityEntry>> = self
            .call_with_query(Method::GET, "/admin/activity", &query, None)
            .await?;
        Ok(envelope.data)
    }

    pub async fn team_members(&self) -> Result<Vec<UserRecord>, ClientError> {
        self.call(Method::GET, "/team/members", None).await
    }

    /// Team usage against its plan limits
    pub async fn team_limits(&self) -> Result<TeamLimits, ClientError> {
        self.require_user()?;
        self.call(Method::GET, "/team/limits", None).await
    }

    pub async fn invite_member(&self, invite: &TeamInvite) -> Result<SuccessResponse, ClientError> {
        invite.validate()?;
        let body = serde_json::to_value(invite)?;
        self.call(Method::POST, "/team/invite", Some(body)).await
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.call(Method::GET, "/health", None).await
    }
}
