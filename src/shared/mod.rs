//! Shared Module
//!
//! Types exchanged with the tender backend, plus the error taxonomy and
//! configuration used by the rest of the crate. Nothing in here performs I/O
//! except [`config::AppConfig::load`].
//!
//! # Overview
//!
//! Wire types mirror the backend's JSON field names (snake_case) so they can
//! be derived directly with serde. Enumerations that the backend validates
//! (plan tiers, provinces, industry sectors, workspace statuses) are strong
//! Rust enums; free-form backend fields stay as strings.

/// Authentication request/response bodies
pub mod auth;

/// Application configuration
pub mod config;

/// Client error taxonomy
pub mod error;

/// AI summaries, readiness reports and analytics
pub mod insights;

/// Company profile types
pub mod profile;

/// Team management and admin types
pub mod team;

/// Tender and search types
pub mod tender;

/// User records and plan tiers
pub mod user;

/// Workspace entries
pub mod workspace;

pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::ClientError;
pub use profile::{CompanyProfile, CompanyProfileDraft, IndustrySector, Province};
pub use tender::{SearchRequest, SearchResponse, Tender};
pub use user::{Limit, PlanFeature, PlanFeatures, PlanTier, UserRecord};
pub use workspace::{StatusFilter, WorkspaceEntry, WorkspaceStatus};
