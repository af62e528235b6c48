//! AI and analytics types
//!
//! Summaries and readiness reports are computed by the backend; the client
//! only requests and displays them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/summary/extract`
///
/// The backend falls back to the tender's own document when
/// `document_url` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRequest {
    pub tender_id: i64,
    pub document_url: String,
}

/// AI-generated summary of a tender document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TenderSummary {
    pub summary: String,
    #[serde(default)]
    pub key_points: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub industry_sector: Option<String>,
    #[serde(default)]
    pub complexity_score: Option<u8>,
    #[serde(default)]
    pub tender_id: Option<i64>,
}

/// Body of `POST /api/readiness/check`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessRequest {
    pub tender_id: i64,
    pub company_profile_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChecklistItem {
    pub criterion: String,
    pub met: bool,
    #[serde(default)]
    pub weight: Option<f64>,
}

/// Suitability of the team's profile for one tender
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReadinessReport {
    pub suitability_score: f64,
    pub checklist: Vec<ChecklistItem>,
    pub recommendation: String,
    #[serde(default)]
    pub scoring_breakdown: Option<BTreeMap<String, f64>>,
}

impl ReadinessReport {
    /// Number of checklist criteria met
    pub fn criteria_met(&self) -> usize {
        self.checklist.iter().filter(|item| item.met).count()
    }

    /// Coarse band used to colour the score
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.suitability_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            ScoreBand::High
        } else if score >= 40.0 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }
}

/// Tender with its stored AI summary, from `GET /api/enriched-releases`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnrichedRelease {
    pub tender_id: String,
    pub title: String,
    pub description: String,
    pub province: String,
    #[serde(default)]
    pub submission_deadline: Option<String>,
    pub buyer_organization: String,
    pub budget_range: String,
    pub ai_summary: String,
    #[serde(default)]
    pub key_points: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub industry_sector: Option<String>,
    #[serde(default)]
    pub complexity_score: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpendByBuyer {
    pub buyer: String,
    pub tender_count: u64,
    pub estimated_total_spend: f64,
}

/// Response of `GET /api/analytics/spend-by-buyer`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpendAnalytics {
    pub analytics: Vec<SpendByBuyer>,
}

impl SpendAnalytics {
    /// Rows ordered by estimated spend, largest first
    pub fn ranked(&self) -> Vec<&SpendByBuyer> {
        let mut rows: Vec<&SpendByBuyer> = self.analytics.iter().collect();
        rows.sort_by(|a, b| b.estimated_total_spend.total_cmp(&a.estimated_total_spend));
        rows
    }

    pub fn total_spend(&self) -> f64 {
        self.analytics.iter().map(|row| row.estimated_total_spend).sum()
    }
}

/// One AI-generated analytics record
///
/// The industry, complexity, competition and success-prediction feeds each
/// return differently shaped objects, so records stay as raw maps and are
/// read through a few well-known keys.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct InsightRecord(pub serde_json::Map<String, serde_json::Value>);

const TITLE_KEYS: [&str; 5] = [
    "industry",
    "complexity_level",
    "buyer_organization",
    "tender_title",
    "title",
];
const ADVICE_KEYS: [&str; 2] = ["recommendation", "recommended_approach"];
const HIDDEN_KEYS: [&str; 2] = ["insight_type", "tender_id"];

impl InsightRecord {
    pub fn title(&self) -> &str {
        self.first_str(&TITLE_KEYS).unwrap_or("Insight")
    }

    /// Recommendation text, when the record carries one
    pub fn advice(&self) -> Option<&str> {
        self.first_str(&ADVICE_KEYS)
    }

    /// Remaining scalar and list fields as display pairs, in key order
    pub fn facts(&self) -> Vec<(String, String)> {
        let title_key = TITLE_KEYS.iter().find(|key| self.0.contains_key(**key));
        let mut facts: Vec<(String, String)> = self
            .0
            .iter()
            .filter(|(key, _)| {
                Some(&key.as_str()) != title_key
                    && !ADVICE_KEYS.contains(&key.as_str())
                    && !HIDDEN_KEYS.contains(&key.as_str())
            })
            .filter_map(|(key, value)| Some((humanize_key(key), format_fact(key, value)?)))
            .collect();
        facts.sort();
        facts
    }

    fn first_str(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .find_map(|key| self.0.get(*key).and_then(|v| v.as_str()))
    }
}

/// `{analytics: [...]}` envelope of the AI analytics feeds
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InsightReport {
    pub analytics: Vec<InsightRecord>,
}

/// `tender_count` -> `Tender count`
fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => spaced,
    }
}

fn format_fact(key: &str, value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;
    let money = ["budget", "spend", "market_size", "value"]
        .iter()
        .any(|word| key.contains(word));
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(if *b { "Yes" } else { "No" }.to_string()),
        Value::Number(n) => {
            let f = n.as_f64()?;
            Some(if money {
                format_rand(f)
            } else if key.contains("percentage") {
                format!("{:.1}%", f)
            } else if f.fract() == 0.0 {
                format!("{:.0}", f)
            } else {
                format!("{:.1}", f)
            })
        }
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Null | Value::Object(_) => None,
    }
}

/// File produced by the export routes
///
/// The backend wraps the payload instead of streaming it, so the CSV or JSON
/// text arrives in `content`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportFile {
    pub filename: String,
    pub content: String,
    #[serde(default)]
    pub content_type: Option<String>,
}

impl ExportFile {
    /// Decode the export envelope; a body that is not one is taken as the
    /// file content itself
    pub fn from_body(body: String, fallback_name: &str) -> Self {
        match serde_json::from_str::<ExportFile>(&body) {
            Ok(file) => file,
            Err(_) => ExportFile {
                filename: fallback_name.to_string(),
                content: body,
                content_type: None,
            },
        }
    }
}

/// Format a rand amount as "R 1 234 567"
pub fn format_rand(amount: f64) -> String {
    let whole = amount.round().abs() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if amount < 0.0 {
        format!("-R {}", grouped)
    } else {
        format!("R {}", grouped)
    }
}
