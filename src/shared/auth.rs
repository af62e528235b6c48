//! Authentication wire types

use serde::{Deserialize, Serialize};

use crate::shared::user::UserRecord;

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Token issued by `/auth/login`, `/auth/register` and `/auth/refresh`
///
/// `expires_in` is in seconds; the backend sends it as a float.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub expires_in: f64,
    #[serde(default)]
    pub user: Option<UserRecord>,
}

impl TokenResponse {
    /// Absolute expiry in epoch milliseconds, given the current time
    ///
    /// Saturates at `i64::MAX` for absurdly long lifetimes.
    pub fn expiry_from(&self, now_millis: i64) -> i64 {
        now_millis.saturating_add((self.expires_in * 1000.0) as i64)
    }
}
