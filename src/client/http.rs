//! HTTP Client Wrapper
//!
//! Every backend request goes through [`ApiClient::call`] (or one of its
//! variants). The wrapper:
//!
//! - serializes the body as JSON for mutating methods,
//! - attaches `Authorization: Bearer <token>` while the session is live,
//! - clears the session and fails with [`ClientError::SessionExpired`] on 401,
//! - turns other non-2xx answers into [`ClientError::Request`] using the
//!   `detail`/`message` field of the body, or the raw body text,
//! - keeps the global loading indicator visible for the whole call.

use std::sync::Arc;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::client::loading::LoadingIndicator;
use crate::client::session::store::SessionStore;
use crate::shared::config::AppConfig;
use crate::shared::error::ClientError;

/// Shared handle to the backend; cheap to clone
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<AppConfig>,
    http: Client,
    session: Arc<SessionStore>,
    loading: LoadingIndicator,
}

impl ApiClient {
    pub fn new(
        config: AppConfig,
        session: Arc<SessionStore>,
        loading: LoadingIndicator,
    ) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            config: Arc::new(config),
            http,
            session,
            loading,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn loading(&self) -> &LoadingIndicator {
        &self.loading
    }

    /// Issue a request and decode the JSON response
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ClientError> {
        let text = self.send(method, endpoint, &[], body).await?;
        decode(&text)
    }

    /// Like [`ApiClient::call`], with query parameters appended to the URL
    pub async fn call_with_query<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<T, ClientError> {
        let text = self.send(method, endpoint, query, body).await?;
        decode(&text)
    }

    /// Issue a request and return the raw response text
    pub async fn call_text(&self, method: Method, endpoint: &str) -> Result<String, ClientError> {
        self.send(method, endpoint, &[], None).await
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<String, ClientError> {
        let _loading = self.loading.begin();
        let url = self.config.api_url(endpoint);
        debug!(%method, %url, "Sending request");

        let mut request = self.http.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            if is_mutating(&method) {
                request = request.json(&body);
            }
        }

        let response = request.send().await.map_err(|e| {
            warn!(%method, %url, error = %e, "Request failed before a response");
            ClientError::Network(e.to_string())
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!(%method, %url, "Backend rejected the session, logging out");
            self.session.clear();
            return Err(ClientError::SessionExpired);
        }

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = extract_error_message(status, &text);
            debug!(%method, %url, status = status.as_u16(), %message, "Request returned an error");
            return Err(ClientError::request(status.as_u16(), message));
        }

        debug!(%method, %url, status = status.as_u16(), "Request succeeded");
        Ok(text)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_url", &self.config.api_url)
            .finish_non_exhaustive()
    }
}

fn is_mutating(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

/// Decode a success body; an empty body decodes as JSON `null`
fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ClientError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ClientError::Decode(e.to_string()))
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<serde_json::Value>,
}

/// Human-readable message for a failed response
///
/// Prefers `detail`, then `message`; FastAPI validation errors (a list of
/// objects with `msg`) are joined. Falls back to the raw body, then to the
/// status reason.
pub(crate) fn extract_error_message(status: StatusCode, text: &str) -> String {
    if let Ok(body) = serde_json::from_str::<ErrorBody>(text) {
        let message = body
            .detail
            .as_ref()
            .and_then(describe_detail)
            .or_else(|| body.message.as_ref().and_then(describe_detail));
        if let Some(message) = message {
            return message;
        }
    }
    let raw = text.trim();
    if !raw.is_empty() {
        return raw.to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
}

fn describe_detail(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s.clone()),
                    serde_json::Value::Object(obj) => {
                        let msg = obj.get("msg").and_then(|m| m.as_str())?;
                        let field = obj
                            .get("loc")
                            .and_then(|loc| loc.as_array())
                            .and_then(|loc| loc.last())
                            .and_then(|last| last.as_str());
                        Some(match field {
                            Some(field) => format!("{}: {}", field, msg),
                            None => msg.to_string(),
                        })
                    }
                    _ => None,
                })
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
