use reqwest::Method;

use crate::client::http::ApiClient;
use crate::shared::error::ClientError;
use crate::shared::profile::{CompanyProfile, CompanyProfileDraft};

impl ApiClient {
    /// Company profile of a team; `Ok(None)` when it has not been created yet
    pub async fn company_profile(&self, team_id: i64) -> Result<Option<CompanyProfile>, ClientError> {
        let endpoint = format!("/company-profiles/{}", team_id);
        match self.call(Method::GET, &endpoint, None).await {
            Ok(profile) => Ok(Some(profile)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Create or replace the team's company profile
    pub async fn save_company_profile(
        &self,
        draft: &CompanyProfileDraft,
    ) -> Result<CompanyProfile, ClientError> {
        draft.validate()?;
        let body = serde_json::to_value(draft)?;
        self.call(Method::POST, "/company-profiles", Some(body)).await
    }
}
