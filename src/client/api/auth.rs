//! Raw authentication calls
//!
//! These only talk to the backend; storing the resulting session is the
//! session manager's job.

use reqwest::Method;

use crate::client::http::ApiClient;
use crate::shared::auth::{LoginRequest, RegisterRequest, TokenResponse};
use crate::shared::error::ClientError;
use crate::shared::user::UserRecord;

impl ApiClient {
    pub async fn post_login(&self, request: &LoginRequest) -> Result<TokenResponse, ClientError> {
        let body = serde_json::to_value(request)?;
        self.call(Method::POST, "/auth/login", Some(body)).await
    }

    /// Register a user; the response body is not needed since the caller
    /// logs in afterwards
    pub async fn post_register(&self, request: &RegisterRequest) -> Result<(), ClientError> {
        let body = serde_json::to_value(request)?;
        let _: serde_json::Value = self.call(Method::POST, "/auth/register", Some(body)).await?;
        Ok(())
    }

    pub async fn post_refresh(&self) -> Result<TokenResponse, ClientError> {
        self.call(Method::POST, "/auth/refresh", None).await
    }

    pub async fn get_me(&self) -> Result<UserRecord, ClientError> {
        self.call(Method::GET, "/auth/me", None).await
    }
}
