//! Client Error Types
//!
//! Every fallible operation the client performs against the backend surfaces
//! one of these errors. Panels decide how to present them; the only variant
//! that is never shown as an alert is [`ClientError::SessionExpired`], which
//! sends the user back to the login view instead.
//!
//! # Error Categories
//!
//! - `Auth` - bad credentials, or login could not reach the backend
//! - `SessionExpired` - the backend answered 401 and the session was cleared
//! - `Request` - any other non-2xx answer, with a human-readable message
//! - `Network` - the request never produced an HTTP response
//! - `Decode` - a 2xx answer whose body did not match the expected shape
//! - `Validation` - a form failed client-side checks before any request
//! - `PlanRestricted` - the team's plan does not include the feature
//! - `Io` - a local file (such as a CSV export) could not be written
//!
//! # Usage
//!
//! ```rust
//! use tenderdesk::shared::error::ClientError;
//!
//! let error = ClientError::validation("email", "Please enter a valid email address");
//! assert!(!error.is_session_expired());
//! ```
use thiserror::Error;

/// Errors surfaced by the client library
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClientError {
    /// Login or registration was rejected, or could not be attempted
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The backend rejected the bearer token; the session has been cleared
    #[error("Your session has expired. Please log in again.")]
    SessionExpired,

    /// Non-2xx response other than 401
    #[error("{message}")]
    Request {
        /// HTTP status code
        status: u16,
        /// Message extracted from the error body
        message: String,
    },

    /// Transport-level failure (connect, timeout, TLS, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// Successful response whose body could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Client-side form validation failure
    #[error("{message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The current plan tier does not include this feature
    #[error("{0}")]
    PlanRestricted(String),

    /// Local file I/O failed
    #[error("File error: {0}")]
    Io(String),
}

impl ClientError {
    /// Create a new authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Create a new request error
    pub fn request(status: u16, message: impl Into<String>) -> Self {
        Self::Request {
            status,
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new plan restriction error
    pub fn plan_restricted(message: impl Into<String>) -> Self {
        Self::PlanRestricted(message.into())
    }

    /// Whether this error means the user has to log in again
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::SessionExpired => Some(401),
            _ => None,
        }
    }

    /// Whether the backend answered 404
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
