//! Workspace types
//!
//! A workspace entry tracks one tender for one team.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::tender::Tender;

/// Tracking status of a workspace entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceStatus {
    Pending,
    Interested,
    NotEligible,
    Submitted,
}

impl WorkspaceStatus {
    pub const ALL: [WorkspaceStatus; 4] = [
        WorkspaceStatus::Pending,
        WorkspaceStatus::Interested,
        WorkspaceStatus::NotEligible,
        WorkspaceStatus::Submitted,
    ];

    /// Value used in query strings
    pub fn as_str(self) -> &'static str {
        match self {
            WorkspaceStatus::Pending => "pending",
            WorkspaceStatus::Interested => "interested",
            WorkspaceStatus::NotEligible => "not_eligible",
            WorkspaceStatus::Submitted => "submitted",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkspaceStatus::Pending => "Pending",
            WorkspaceStatus::Interested => "Interested",
            WorkspaceStatus::NotEligible => "Not eligible",
            WorkspaceStatus::Submitted => "Submitted",
        }
    }
}

impl fmt::Display for WorkspaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status filter for listing the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(WorkspaceStatus),
}

impl StatusFilter {
    /// Query value; the backend treats `all` as no filter
    pub fn as_query(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(self, status: WorkspaceStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }
}

/// Tracked tender as listed by `GET /workspace/tenders`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkspaceEntry {
    pub id: i64,
    pub team_id: i64,
    pub tender_id: i64,
    pub status: WorkspaceStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub match_score: Option<f64>,
    pub last_updated_by: i64,
    pub last_updated_at: String,
    pub tender: Tender,
}

/// Body of `POST /workspace/tenders`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewWorkspaceEntry {
    pub team_id: i64,
    pub tender_id: i64,
    pub status: WorkspaceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of `PUT /workspace/tenders/{id}`; only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkspaceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkspaceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Generic `{success, message, data}` acknowledgement
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SuccessResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

fn default_success() -> bool {
    true
}
