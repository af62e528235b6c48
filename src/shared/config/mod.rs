//! Application configuration module
//!
//! Configuration is resolved from three layers, lowest precedence first:
//! built-in defaults, `config.toml` in the platform config directory, and
//! the `TENDERDESK_API_URL` environment variable.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Default backend URL
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the backend URL
pub const API_URL_ENV: &str = "TENDERDESK_API_URL";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);
const DEFAULT_REFRESH_THRESHOLD: Duration = Duration::from_secs(15 * 60);

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL, without trailing slash
    pub api_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// How often the session manager checks token lifetime
    pub refresh_interval: Duration,
    /// Remaining lifetime below which the token is refreshed
    pub refresh_threshold: Duration,
    /// Location of the session storage file; `None` uses the data directory
    pub storage_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            refresh_threshold: DEFAULT_REFRESH_THRESHOLD,
            storage_path: None,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the config file and environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Some(path) = Self::config_file_path() {
            if path.exists() {
                builder = builder.merge_file(&path)?;
            }
        }
        if let Ok(url) = std::env::var(API_URL_ENV) {
            builder = builder.api_url(url);
        }
        builder.build()
    }

    /// Platform-specific path of `config.toml`
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tenderdesk").join("config.toml"))
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.api_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.api_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                self.api_url,
                url.scheme()
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue("request_timeout must be positive"));
        }
        if self.refresh_interval.is_zero() {
            return Err(ConfigError::InvalidValue("refresh_interval must be positive"));
        }
        Ok(())
    }
}

/// On-disk representation of `config.toml`; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    api_url: Option<String>,
    request_timeout_secs: Option<u64>,
    refresh_interval_secs: Option<u64>,
    refresh_threshold_secs: Option<u64>,
    storage_path: Option<PathBuf>,
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    api_url: Option<String>,
    request_timeout: Option<Duration>,
    refresh_interval: Option<Duration>,
    refresh_threshold: Option<Duration>,
    storage_path: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Set the backend URL
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set the per-request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the token check interval
    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = Some(interval);
        self
    }

    /// Set the refresh threshold
    pub fn refresh_threshold(mut self, threshold: Duration) -> Self {
        self.refresh_threshold = Some(threshold);
        self
    }

    /// Set the session storage file
    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// Overlay values from a TOML file
    pub fn merge_file(self, path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        self.merge_toml(&raw)
    }

    /// Overlay values from TOML text
    pub fn merge_toml(mut self, raw: &str) -> Result<Self, ConfigError> {
        let file: FileConfig =
            toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if let Some(url) = file.api_url {
            self.api_url = Some(url);
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(secs) = file.refresh_interval_secs {
            self.refresh_interval = Some(Duration::from_secs(secs));
        }
        if let Some(secs) = file.refresh_threshold_secs {
            self.refresh_threshold = Some(Duration::from_secs(secs));
        }
        if let Some(path) = file.storage_path {
            self.storage_path = Some(path);
        }
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            api_url: self
                .api_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            refresh_interval: self.refresh_interval.unwrap_or(defaults.refresh_interval),
            refresh_threshold: self.refresh_threshold.unwrap_or(defaults.refresh_threshold),
            storage_path: self.storage_path,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
    #[error("failed to read config file: {0}")]
    Io(String),
    #[error("failed to parse config file: {0}")]
    Parse(String),
}
