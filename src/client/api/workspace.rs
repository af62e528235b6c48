use reqwest::Method;

use crate::client::http::ApiClient;
use crate::shared::error::ClientError;
use crate::shared::workspace::{
    NewWorkspaceEntry, StatusFilter, SuccessResponse, WorkspaceEntry, WorkspaceStatus,
    WorkspaceUpdate,
};

const NOTES_MAX_CHARS: usize = 1000;

impl ApiClient {
    pub async fn workspace_entries(
        &self,
        team_id: i64,
        filter: StatusFilter,
    ) -> Result<Vec<WorkspaceEntry>, ClientError> {
        let query = [
            ("team_id", team_id.to_string()),
            ("status", filter.as_query().to_string()),
        ];
        self.call_with_query(Method::GET, "/workspace/tenders", &query, None)
            .await
    }

    /// Start tracking a tender for the current user's team
    pub async fn track_tender(
        &self,
        tender_id: i64,
        status: WorkspaceStatus,
        notes: Option<String>,
    ) -> Result<SuccessResponse, ClientError> {
        let user = self.require_user()?;
        check_notes(notes.as_deref())?;
        let entry = NewWorkspaceEntry {
            team_id: user.team_id,
            tender_id,
            status,
            notes,
        };
        let body = serde_json::to_value(&entry)?;
        self.call(Method::POST, "/workspace/tenders", Some(body)).await
    }

    pub async fn update_workspace_entry(
        &self,
        entry_id: i64,
        update: &WorkspaceUpdate,
    ) -> Result<SuccessResponse, ClientError> {
        check_notes(update.notes.as_deref())?;
        let body = serde_json::to_value(update)?;
        let endpoint = format!("/workspace/tenders/{}", entry_id);
        self.call(Method::PUT, &endpoint, Some(body)).await
    }

    pub async fn remove_workspace_entry(&self, entry_id: i64) -> Result<SuccessResponse, ClientError> {
        let endpoint = format!("/workspace/tenders/{}", entry_id);
        self.call(Method::DELETE, &endpoint, None).await
    }
}

fn check_notes(notes: Option<&str>) -> Result<(), ClientError> {
    if notes.is_some_and(|n| n.chars().count() > NOTES_MAX_CHARS) {
        return Err(ClientError::validation(
            "notes",
            "Notes must be at most 1000 characters",
        ));
    }
    Ok(())
}
