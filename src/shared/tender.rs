//! Tender and search types

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::ClientError;
use crate::shared::profile::Province;

/// Tender as returned by search and workspace endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tender {
    pub id: i64,
    pub tender_id: String,
    pub title: String,
    pub description: String,
    pub province: String,
    pub submission_deadline: String,
    pub buyer_organization: String,
    pub budget_range: String,
    #[serde(default)]
    pub budget_min: Option<f64>,
    #[serde(default)]
    pub budget_max: Option<f64>,
    pub source_url: String,
    #[serde(default)]
    pub document_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Tender {
    /// Submission deadline, if the backend sent a parseable timestamp
    pub fn deadline(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.submission_deadline)
    }

    /// Whole days left until the deadline, negative once it has passed
    pub fn days_until_deadline(&self, now: NaiveDateTime) -> Option<i64> {
        self.deadline()
            .map(|deadline| (deadline.date() - now.date()).num_days())
    }

    /// Short label such as "Closes in 5 days"
    pub fn deadline_label(&self, now: NaiveDateTime) -> String {
        match self.days_until_deadline(now) {
            Some(days) if days < 0 => "Closed".to_string(),
            Some(0) => "Closes today".to_string(),
            Some(1) => "Closes tomorrow".to_string(),
            Some(days) => format!("Closes in {} days", days),
            None => format!("Deadline: {}", self.submission_deadline),
        }
    }
}

/// Parse a backend timestamp; accepts RFC 3339, naive ISO-8601 and bare dates
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Body of `POST /tenders/search`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchRequest {
    pub keywords: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<Province>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_organization: Option<String>,
    /// Only tenders closing within this many days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_window: Option<u32>,
}

impl SearchRequest {
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.keywords.chars().count() > 100 {
            return Err(ClientError::validation(
                "keywords",
                "Keywords must be at most 100 characters",
            ));
        }
        for (field, value) in [("budget_min", self.budget_min), ("budget_max", self.budget_max)] {
            if value.is_some_and(|v| v < 0.0) {
                return Err(ClientError::validation(field, "Budget cannot be negative"));
            }
        }
        if let (Some(min), Some(max)) = (self.budget_min, self.budget_max) {
            if max < min {
                return Err(ClientError::validation(
                    "budget_max",
                    "Maximum budget must be at least the minimum budget",
                ));
            }
        }
        if let Some(days) = self.deadline_window {
            if !(1..=365).contains(&days) {
                return Err(ClientError::validation(
                    "deadline_window",
                    "Deadline window must be between 1 and 365 days",
                ));
            }
        }
        Ok(())
    }
}

/// Response of `POST /tenders/search`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub count: Option<usize>,
    pub results: Vec<Tender>,
}
