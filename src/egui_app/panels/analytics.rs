//! Spend-by-buyer table, AI insight feeds and enriched releases

use crate::egui_app::state::pending::Pending;
use crate::shared::error::ClientError;
use crate::shared::insights::{format_rand, EnrichedRelease, InsightRecord, SpendAnalytics};

pub const RELEASE_LIMIT: u32 = 20;

/// AI analytics feeds shown under the spend table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightFeed {
    IndustryTrends,
    Complexity,
    Competition,
    SuccessPredictions,
}

impl InsightFeed {
    pub const ALL: [InsightFeed; 4] = [
        InsightFeed::IndustryTrends,
        InsightFeed::Complexity,
        InsightFeed::Competition,
        InsightFeed::SuccessPredictions,
    ];

    pub fn title(self) -> &'static str {
        match self {
            InsightFeed::IndustryTrends => "Industry trends",
            InsightFeed::Complexity => "Complexity analysis",
            InsightFeed::Competition => "Competition insights",
            InsightFeed::SuccessPredictions => "Success predictions",
        }
    }

    pub fn empty_hint(self) -> &'static str {
        match self {
            InsightFeed::SuccessPredictions => {
                "No predictions yet. Complete your company profile to see them."
            }
            _ => "No insights available yet",
        }
    }
}

/// Records and request slot of one feed
#[derive(Debug, Default)]
pub struct InsightSection {
    pub records: Vec<InsightRecord>,
    pub loaded: bool,
    pub pending: Pending<Result<Vec<InsightRecord>, ClientError>>,
}

impl InsightSection {
    pub fn apply(&mut self, records: Vec<InsightRecord>) {
        self.records = records;
        self.loaded = true;
    }
}

/// One display row of the spend table
#[derive(Debug, Clone, PartialEq)]
pub struct SpendRow {
    pub rank: usize,
    pub buyer: String,
    pub tender_count: u64,
    pub spend: String,
    /// Fraction of the total spend, 0.0..=1.0
    pub share: f32,
}

#[derive(Debug, Default)]
pub struct AnalyticsPanel {
    pub spend: Option<SpendAnalytics>,
    pub releases: Vec<EnrichedRelease>,
    pub pending_spend: Pending<Result<SpendAnalytics, ClientError>>,
    pub pending_releases: Pending<Result<Vec<EnrichedRelease>, ClientError>>,
    pub industry: InsightSection,
    pub complexity: InsightSection,
    pub competition: InsightSection,
    pub predictions: InsightSection,
}

impl AnalyticsPanel {
    pub fn is_loading(&self) -> bool {
        self.pending_spend.is_busy()
            || self.pending_releases.is_busy()
            || InsightFeed::ALL
                .iter()
                .any(|feed| self.section(*feed).pending.is_busy())
    }

    pub fn section(&self, feed: InsightFeed) -> &InsightSection {
        match feed {
            InsightFeed::IndustryTrends => &self.industry,
            InsightFeed::Complexity => &self.complexity,
            InsightFeed::Competition => &self.competition,
            InsightFeed::SuccessPredictions => &self.predictions,
        }
    }

    pub fn section_mut(&mut self, feed: InsightFeed) -> &mut InsightSection {
        match feed {
            InsightFeed::IndustryTrends => &mut self.industry,
            InsightFeed::Complexity => &mut self.complexity,
            InsightFeed::Competition => &mut self.competition,
            InsightFeed::SuccessPredictions => &mut self.predictions,
        }
    }

    pub fn rows(&self) -> Vec<SpendRow> {
        let Some(spend) = &self.spend else {
            return Vec::new();
        };
        let total = spend.total_spend();
        spend
            .ranked()
            .into_iter()
            .enumerate()
            .map(|(i, row)| SpendRow {
                rank: i + 1,
                buyer: row.buyer.clone(),
                tender_count: row.tender_count,
                spend: format_rand(row.estimated_total_spend),
                share: if total > 0.0 {
                    (row.estimated_total_spend / total) as f32
                } else {
                    0.0
                },
            })
            .collect()
    }

    pub fn total_label(&self) -> Option<String> {
        self.spend
            .as_ref()
            .map(|spend| format!("Total estimated spend: {}", format_rand(spend.total_spend())))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
