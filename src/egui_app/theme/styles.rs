//! Theme Styling Functions
//!
//! Helpers for applying the color scheme consistently across views.

use eframe::egui::{self, Color32, CornerRadius, Stroke};

use super::colors;
use crate::egui_app::panels::NoticeKind;
use crate::shared::insights::ScoreBand;
use crate::shared::workspace::WorkspaceStatus;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    // Window styling
    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);

    // Panel styling
    style.visuals.panel_fill = colors::BG_DARK;
    style.visuals.extreme_bg_color = colors::INPUT_BG;
    style.visuals.override_text_color = Some(colors::TEXT_LIGHT);

    // Widget styling
    style.visuals.widgets.noninteractive.bg_fill = colors::CARD_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);
    style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors::SEPARATOR);

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.weak_bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.hovered.bg_fill = colors::HOVER_ITEM;
    style.visuals.widgets.hovered.weak_bg_fill = colors::HOVER_ITEM;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.active.bg_fill = colors::BUTTON_PRIMARY;
    style.visuals.widgets.active.weak_bg_fill = colors::BUTTON_PRIMARY;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    // Selection color
    style.visuals.selection.bg_fill = colors::SELECTED_ITEM;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the navigation bar
pub fn nav_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::NAV_BG)
        .inner_margin(egui::Margin::symmetric(8, 12))
}

/// Create a frame style for the main content area
pub fn main_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(16))
}

/// Create a frame for cards (tenders, stats, forms)
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
}

/// Create a frame for the notice banner
pub fn notice_frame(kind: NoticeKind) -> egui::Frame {
    let accent = notice_color(kind);
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), 40))
        .stroke(Stroke::new(1.0, accent))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 8))
}

pub fn notice_color(kind: NoticeKind) -> Color32 {
    match kind {
        NoticeKind::Info => colors::INFO,
        NoticeKind::Success => colors::SUCCESS,
        NoticeKind::Error => colors::ERROR,
    }
}

pub fn status_color(status: WorkspaceStatus) -> Color32 {
    match status {
        WorkspaceStatus::Pending => colors::TEXT_SECONDARY,
        WorkspaceStatus::Interested => colors::INFO,
        WorkspaceStatus::NotEligible => colors::ERROR,
        WorkspaceStatus::Submitted => colors::SUCCESS,
    }
}

pub fn band_color(band: ScoreBand) -> Color32 {
    match band {
        ScoreBand::High => colors::SUCCESS,
        ScoreBand::Medium => colors::WARNING,
        ScoreBand::Low => colors::ERROR,
    }
}

/// Primary action button
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(colors::TEXT_LIGHT))
        .fill(colors::BUTTON_PRIMARY)
        .corner_radius(CornerRadius::same(6))
}

/// Section heading inside a view
pub fn heading(text: &str) -> egui::RichText {
    egui::RichText::new(text.to_string())
        .size(20.0)
        .strong()
        .color(colors::TEXT_LIGHT)
}
