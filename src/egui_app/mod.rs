//! egui Native Desktop App Module
//!
//! The desktop front end for TenderDesk. Network work runs on the tokio
//! runtime owned by [`AppState`]; results come back over channels polled once
//! per frame.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs    - Module exports and documentation
//! ├── main.rs   - Main application entry point
//! ├── state/    - AppState, pending request slots
//! ├── panels/   - Per-view state and form validation
//! ├── views/    - Rendering for each view
//! └── theme/    - Colors and frame styles
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop app:
//! // cargo run --bin tenderdesk
//! ```

pub mod panels;
pub mod state;
pub mod theme;
pub mod views;

pub use panels::Notice;
pub use state::AppState;
