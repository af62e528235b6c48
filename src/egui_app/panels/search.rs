//! Tender search with per-result actions

use std::collections::HashMap;

use crate::egui_app::panels::parse_optional;
use crate::egui_app::state::pending::Pending;
use crate::shared::error::ClientError;
use crate::shared::insights::{ReadinessReport, TenderSummary};
use crate::shared::profile::Province;
use crate::shared::tender::{SearchRequest, SearchResponse, Tender};
use crate::shared::workspace::SuccessResponse;

/// Raw form inputs; numbers stay text until submitted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchForm {
    pub keywords: String,
    pub province: Option<Province>,
    pub budget_min: String,
    pub budget_max: String,
    pub buyer: String,
    pub deadline_window: String,
}

impl SearchForm {
    pub fn to_request(&self) -> Result<SearchRequest, ClientError> {
        let buyer = self.buyer.trim();
        let request = SearchRequest {
            keywords: self.keywords.trim().to_string(),
            province: self.province,
            budget_min: parse_optional(
                &self.budget_min,
                "budget_min",
                "Minimum budget must be a number",
            )?,
            budget_max: parse_optional(
                &self.budget_max,
                "budget_max",
                "Maximum budget must be a number",
            )?,
            buyer_organization: (!buyer.is_empty()).then(|| buyer.to_string()),
            deadline_window: parse_optional(
                &self.deadline_window,
                "deadline_window",
                "Deadline window must be a whole number of days",
            )?,
        };
        request.validate()?;
        Ok(request)
    }
}

#[derive(Debug, Default)]
pub struct SearchPanel {
    pub form: SearchForm,
    /// `None` until the first search completes
    pub results: Option<Vec<Tender>>,
    pub summaries: HashMap<i64, TenderSummary>,
    pub readiness: HashMap<i64, ReadinessReport>,
    pub pending_search: Pending<Result<SearchResponse, ClientError>>,
    pub pending_track: Pending<Result<SuccessResponse, ClientError>>,
    pub pending_summary: Pending<Result<(i64, TenderSummary), ClientError>>,
    pub pending_readiness: Pending<Result<(i64, ReadinessReport), ClientError>>,
}

impl SearchPanel {
    pub fn is_searching(&self) -> bool {
        self.pending_search.is_busy()
    }

    pub fn apply_results(&mut self, response: SearchResponse) {
        self.summaries.clear();
        self.readiness.clear();
        self.results = Some(response.results);
    }

    pub fn cards(&self) -> &[Tender] {
        self.results.as_deref().unwrap_or_default()
    }

    pub fn count_label(&self) -> String {
        match &self.results {
            None => "No search performed".to_string(),
            Some(results) => format!("{} results found", results.len()),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
