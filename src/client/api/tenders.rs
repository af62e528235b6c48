use reqwest::Method;

use crate::client::http::ApiClient;
use crate::shared::error::ClientError;
use crate::shared::tender::{SearchRequest, SearchResponse, Tender};

impl ApiClient {
    pub async fn search_tenders(&self, request: &SearchRequest) -> Result<SearchResponse, ClientError> {
        request.validate()?;
        let body = serde_json::to_value(request)?;
        self.call(Method::POST, "/tenders/search", Some(body)).await
    }

    pub async fn tender(&self, id: i64) -> Result<Tender, ClientError> {
        self.call(Method::GET, &format!("/tenders/{}", id), None).await
    }
}
