//! Dashboard: greeting, plan, profile status, backend health, recent releases

use crate::egui_app::state::pending::Pending;
use crate::shared::error::ClientError;
use crate::shared::insights::EnrichedRelease;
use crate::shared::profile::CompanyProfile;
use crate::shared::team::{HealthStatus, TeamLimits};
use crate::shared::user::{Limit, PlanFeatures, UserRecord};

/// Number of enriched releases shown on the dashboard
pub const RECENT_RELEASES: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileStatus {
    #[default]
    Unknown,
    Missing,
    Complete { company_name: String },
}

#[derive(Debug, Default)]
pub struct DashboardPanel {
    pub health: Option<HealthStatus>,
    pub releases: Vec<EnrichedRelease>,
    pub profile: ProfileStatus,
    /// Team usage; absent until loaded or when the backend cannot report it
    pub limits: Option<TeamLimits>,
    pub pending_health: Pending<Result<HealthStatus, ClientError>>,
    pub pending_releases: Pending<Result<Vec<EnrichedRelease>, ClientError>>,
    pub pending_profile: Pending<Result<Option<CompanyProfile>, ClientError>>,
    pub pending_limits: Pending<Result<TeamLimits, ClientError>>,
}

/// One usage bar on the plan card
#[derive(Debug, Clone, PartialEq)]
pub struct UsageRow {
    pub label: &'static str,
    /// "used / limit"
    pub text: String,
    /// `None` when the limit is unlimited
    pub fraction: Option<f32>,
    pub at_limit: bool,
}

impl UsageRow {
    fn new(label: &'static str, used: u32, limit: Limit, can_add: bool) -> Self {
        Self {
            label,
            text: format!("{} / {}", used, limit),
            fraction: limit.fraction(used),
            at_limit: !can_add,
        }
    }
}

impl DashboardPanel {
    pub fn is_loading(&self) -> bool {
        self.pending_health.is_busy()
            || self.pending_releases.is_busy()
            || self.pending_profile.is_busy()
            || self.pending_limits.is_busy()
    }

    /// Team members and workspace size against the plan
    pub fn usage_rows(&self) -> Vec<UsageRow> {
        let Some(limits) = &self.limits else {
            return Vec::new();
        };
        vec![
            UsageRow::new(
                "Team members",
                limits.user_count,
                limits.max_users,
                limits.can_add_user,
            ),
            UsageRow::new(
                "Workspace tenders",
                limits.workspace_count,
                limits.max_workspace,
                limits.can_add_workspace,
            ),
        ]
    }

    pub fn apply_profile(&mut self, profile: Option<CompanyProfile>) {
        self.profile = match profile {
            Some(profile) => ProfileStatus::Complete {
                company_name: profile.company_name,
            },
            None => ProfileStatus::Missing,
        };
    }

    pub fn health_label(&self) -> &'static str {
        match &self.health {
            Some(health) if health.is_healthy() => "Backend online",
            Some(_) => "Backend degraded",
            None => "Backend status unknown",
        }
    }
}

pub fn greeting(user: Option<&UserRecord>) -> String {
    match user {
        Some(user) => format!("Welcome back, {}", user.first_name()),
        None => "Welcome to TenderDesk".to_string(),
    }
}

/// Feature rows for the plan card
pub fn feature_rows(features: &PlanFeatures) -> Vec<(&'static str, String)> {
    let flag = |on: bool| if on { "Included" } else { "Not included" }.to_string();
    vec![
        ("AI summaries", flag(features.ai_summary)),
        ("Readiness checks", flag(features.readiness_check)),
        ("Workspace export", flag(features.export)),
        ("Team members", features.max_users.to_string()),
        ("Searches per day", features.max_searches.to_string()),
        ("Workspace size", features.workspace_size.to_string()),
    ]
}
