//! Color Constants for the TenderDesk Theme
//!
//! A dark slate scheme with a teal accent. Status and score colors are shared
//! between the workspace, search cards and the readiness report.

use eframe::egui::Color32;

/// Top bar background - Deep slate
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x16, 0x1E, 0x2B);

/// Navigation bar background - Slate
pub const NAV_BG: Color32 = Color32::from_rgb(0x1C, 0x26, 0x36);

/// Dark background for main areas
pub const BG_DARK: Color32 = Color32::from_rgb(0x21, 0x2B, 0x3B);

/// Card background - Lighter slate
pub const CARD_BG: Color32 = Color32::from_rgb(0x2A, 0x36, 0x49);

/// Card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0x3A, 0x48, 0x5E);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x33, 0x40, 0x55);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE8, 0xEE, 0xF5);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x16, 0x1E, 0x2B);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9A, 0xA8, 0xBC);

/// Accent color for highlights - Teal
pub const ACCENT: Color32 = Color32::from_rgb(0x1F, 0xA8, 0x9A);

/// Button primary background
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x1F, 0xA8, 0x9A);

/// Button primary hover
pub const BUTTON_PRIMARY_HOVER: Color32 = Color32::from_rgb(0x2B, 0xBF, 0xB0);

/// Selected navigation item background
pub const SELECTED_ITEM: Color32 = Color32::from_rgb(0x2F, 0x4B, 0x5C);

/// Hover item background
pub const HOVER_ITEM: Color32 = Color32::from_rgb(0x2A, 0x3A, 0x4E);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0x3A, 0x48, 0x5E);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Warning color - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Info color - Blue
pub const INFO: Color32 = Color32::from_rgb(0x64, 0xB5, 0xF6);

/// Locked feature marker - Gray
pub const LOCKED: Color32 = Color32::from_rgb(0x78, 0x84, 0x96);
