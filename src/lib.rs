//! TenderDesk - Main Library
//!
//! Desktop client for the TenderDesk procurement service: tender search, a
//! per-team workspace of tracked tenders, company profiles, AI summaries,
//! readiness scoring and a team admin dashboard. All business logic lives in
//! the backend; this crate handles sessions, REST calls and rendering.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire models, the client error taxonomy, configuration
//!
//! - **`client`** - UI-independent backend client
//!   - HTTP wrapper with bearer auth and typed errors
//!   - Typed endpoint wrappers
//!   - Session manager with persisted token and background refresh
//!   - View router with authentication and role gates
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Application state and panel view-models
//!   - Login, dashboard, search, workspace, profile, analytics and admin views
//!
//! # Usage
//!
//! ```rust,no_run
//! use tenderdesk::client::ClientContext;
//! use tenderdesk::shared::config::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let context = ClientContext::build(AppConfig::load()?)?;
//! if !context.session.restore().await {
//!     context.session.login("owner@example.co.za", "secret-pass").await?;
//! }
//! let user = context.session.current_user();
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - **Client**: `ApiClient` and `SessionManager` are cheap to clone and
//!   share session state behind `Arc<RwLock<_>>`
//! - **Native**: egui is single-threaded immediate mode GUI; network work runs
//!   on a tokio runtime and reports back over `std::sync::mpsc` channels

/// Shared types and data structures
pub mod shared;

/// Backend client: HTTP, sessions, routing
pub mod client;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
