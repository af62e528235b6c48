//! User and plan types
//!
//! The backend returns the team's plan tier alongside every user record, and
//! the client uses it to gate features before issuing any request.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Subscription tier of a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Basic,
    Pro,
}

impl PlanTier {
    /// Feature table for this tier
    pub fn features(self) -> PlanFeatures {
        match self {
            PlanTier::Free => PlanFeatures {
                ai_summary: false,
                readiness_check: false,
                export: false,
                max_users: Limit::Limited(1),
                max_searches: Limit::Limited(3),
                workspace_size: Limit::Limited(10),
            },
            PlanTier::Basic => PlanFeatures {
                ai_summary: true,
                readiness_check: true,
                export: false,
                max_users: Limit::Limited(3),
                max_searches: Limit::Unlimited,
                workspace_size: Limit::Limited(50),
            },
            PlanTier::Pro => PlanFeatures {
                ai_summary: true,
                readiness_check: true,
                export: true,
                max_users: Limit::Unlimited,
                max_searches: Limit::Unlimited,
                workspace_size: Limit::Unlimited,
            },
        }
    }

    /// Whether this tier includes a gated feature
    pub fn allows(self, feature: PlanFeature) -> bool {
        let features = self.features();
        match feature {
            PlanFeature::AiSummary => features.ai_summary,
            PlanFeature::ReadinessCheck => features.readiness_check,
            PlanFeature::Export => features.export,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            PlanTier::Free => "Free",
            PlanTier::Basic => "Basic",
            PlanTier::Pro => "Pro",
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Features that are switched on or off by plan tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFeature {
    AiSummary,
    ReadinessCheck,
    Export,
}

impl PlanFeature {
    /// Message shown when the current plan lacks the feature
    pub fn upgrade_message(self) -> &'static str {
        match self {
            PlanFeature::AiSummary => {
                "AI summaries are available on the Basic and Pro plans. Upgrade your plan to unlock them."
            }
            PlanFeature::ReadinessCheck => {
                "Readiness checks are available on the Basic and Pro plans. Upgrade your plan to unlock them."
            }
            PlanFeature::Export => {
                "Workspace export is available on the Pro plan. Upgrade your plan to unlock it."
            }
        }
    }
}

/// Upper bound on a plan resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Limited(u32),
    Unlimited,
}

impl Limit {
    /// Share of the limit used, clamped to 1.0; `None` when unlimited
    pub fn fraction(self, used: u32) -> Option<f32> {
        match self {
            Limit::Limited(0) => Some(1.0),
            Limit::Limited(n) => Some((used as f32 / n as f32).min(1.0)),
            Limit::Unlimited => None,
        }
    }
}

/// Accepts a count, or `null`, an infinite float or `"Infinity"` for no limit
impl<'de> Deserialize<'de> for Limit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        match value {
            None | Some(serde_json::Value::Null) => Ok(Limit::Unlimited),
            Some(serde_json::Value::Number(n)) => {
                if let Some(count) = n.as_u64() {
                    return Ok(u32::try_from(count).map_or(Limit::Unlimited, Limit::Limited));
                }
                match n.as_f64() {
                    Some(f) if f.is_infinite() && f > 0.0 => Ok(Limit::Unlimited),
                    Some(f) if f >= 0.0 && f <= u32::MAX as f64 => Ok(Limit::Limited(f as u32)),
                    _ => Err(D::Error::custom(format!("invalid limit {}", n))),
                }
            }
            Some(serde_json::Value::String(s))
                if matches!(s.to_ascii_lowercase().as_str(), "inf" | "infinity" | "unlimited") =>
            {
                Ok(Limit::Unlimited)
            }
            Some(other) => Err(D::Error::custom(format!("invalid limit {}", other))),
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Limited(n) => write!(f, "{}", n),
            Limit::Unlimited => f.write_str("Unlimited"),
        }
    }
}

/// Features and limits that come with a plan tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanFeatures {
    pub ai_summary: bool,
    pub readiness_check: bool,
    pub export: bool,
    pub max_users: Limit,
    pub max_searches: Limit,
    pub workspace_size: Limit,
}

/// Authenticated user as returned by `/auth/me` and `/auth/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub team_id: i64,
    pub is_team_admin: bool,
    pub plan_tier: PlanTier,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub has_company_profile: Option<bool>,
}

impl UserRecord {
    /// Features available to this user's team
    pub fn features(&self) -> PlanFeatures {
        self.plan_tier.features()
    }

    /// First name for greetings, falling back to the full name
    pub fn first_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.full_name)
    }
}
