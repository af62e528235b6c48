//! AI features, analytics and export
//!
//! AI summary, readiness check and both exports are plan-gated; the gate is
//! checked before any request is built.

use reqwest::Method;

use crate::client::http::ApiClient;
use crate::shared::error::ClientError;
use crate::shared::insights::{
    EnrichedRelease, ExportFile, InsightRecord, InsightReport, ReadinessReport,
    ReadinessRequest, SpendAnalytics, SummaryRequest, TenderSummary,
};
use crate::shared::tender::Tender;
use crate::shared::user::PlanFeature;

impl ApiClient {
    pub async fn extract_summary(&self, tender: &Tender) -> Result<TenderSummary, ClientError> {
        self.require_feature(PlanFeature::AiSummary)?;
        let request = SummaryRequest {
            tender_id: tender.id,
            document_url: tender.document_url.clone().unwrap_or_default(),
        };
        let body = serde_json::to_value(&request)?;
        self.call(Method::POST, "/api/summary/extract", Some(body)).await
    }

    pub async fn check_readiness(
        &self,
        tender_id: i64,
        company_profile_id: Option<i64>,
    ) -> Result<ReadinessReport, ClientError> {
        self.require_feature(PlanFeature::ReadinessCheck)?;
        let request = ReadinessRequest {
            tender_id,
            company_profile_id,
        };
        let body = serde_json::to_value(&request)?;
        self.call(Method::POST, "/api/readiness/check", Some(body)).await
    }

    pub async fn enriched_releases(&self, limit: u32) -> Result<Vec<EnrichedRelease>, ClientError> {
        let query = [("limit", limit.to_string())];
        self.call_with_query(Method::GET, "/api/enriched-releases", &query, None)
            .await
    }

    pub async fn spend_by_buyer(&self) -> Result<SpendAnalytics, ClientError> {
        self.call(Method::GET, "/api/analytics/spend-by-buyer", None).await
    }

    pub async fn industry_trends(&self) -> Result<Vec<InsightRecord>, ClientError> {
        self.insight_feed("/api/analytics/industry-trends").await
    }

    pub async fn complexity_analysis(&self) -> Result<Vec<InsightRecord>, ClientError> {
        self.insight_feed("/api/analytics/complexity-analysis").await
    }

    pub async fn competition_insights(&self) -> Result<Vec<InsightRecord>, ClientError> {
        self.insight_feed("/api/analytics/competition-insights").await
    }

    /// Predicted bid outcomes for open tenders in the team's sector
    ///
    /// Needs a session and a company profile on the backend.
    pub async fn success_predictions(&self) -> Result<Vec<InsightRecord>, ClientError> {
        self.require_user()?;
        self.insight_feed("/api/analytics/success-predictions").await
    }

    async fn insight_feed(&self, endpoint: &str) -> Result<Vec<InsightRecord>, ClientError> {
        let report: InsightReport = self.call(Method::GET, endpoint, None).await?;
        Ok(report.analytics)
    }

    /// Workspace as a CSV file
    pub async fn export_workspace_csv(&self) -> Result<ExportFile, ClientError> {
        self.require_feature(PlanFeature::Export)?;
        let body = self.call_text(Method::GET, "/export/workspace/csv").await?;
        Ok(ExportFile::from_body(body, "workspace_export.csv"))
    }

    /// Stored readiness scores of the team as a JSON file
    pub async fn export_readiness_scores(&self) -> Result<ExportFile, ClientError> {
        self.require_feature(PlanFeature::Export)?;
        let body = self.call_text(Method::GET, "/export/readiness-scores").await?;
        Ok(ExportFile::from_body(body, "readiness_scores.json"))
    }
}
