//! Theme Module
//!
//! This module provides the color scheme and styling for the TenderDesk
//! desktop client. It includes:
//!
//! - Color constants for the slate/teal theme
//! - Styling helper functions for consistent UI appearance
//! - Frame builders for cards, bars and the notice banner
//!
//! # Usage
//!
//! ```rust,ignore
//! use tenderdesk::egui_app::theme::{colors, styles};
//!
//! // Apply global theme
//! styles::apply_global_theme(ctx);
//!
//! // Use frame builders
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_SECONDARY, "Closes in 5 days");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
