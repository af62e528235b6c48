use eframe::egui;

use crate::client::View;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod admin_view;
pub mod analytics_view;
pub mod auth_view;
pub mod dashboard_view;
pub mod profile_view;
pub mod search_view;
pub mod workspace_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState, frame: &mut eframe::Frame) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            let _frame = frame;

            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("📑 TenderDesk").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);

                    if let Some(user) = state.user.clone() {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        ui.add_space(8.0);
                        ui.colored_label(colors::ACCENT, user.plan_tier.label());
                        ui.colored_label(colors::TEXT_LIGHT, &user.full_name);
                        if let Some(team) = &user.team_name {
                            ui.colored_label(colors::TEXT_SECONDARY, team);
                        }
                    } else if !state.is_restoring() && !state.current_view.is_auth_form() {
                        if ui.button("Log in").clicked() {
                            state.navigate(View::Login);
                        }
                    }

                    // Global loading indicator
                    if state.is_loading() || state.is_restoring() {
                        ui.add_space(12.0);
                        ui.spinner();
                    }
                });
            });
        });
}

pub fn render_nav_bar(ctx: &egui::Context, state: &mut AppState) {
    if state.current_view.is_auth_form() {
        return;
    }

    egui::SidePanel::left("nav_panel")
        .frame(styles::nav_frame())
        .resizable(false)
        .exact_width(170.0)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                let is_admin = state.user.as_ref().is_some_and(|u| u.is_team_admin);
                for view in View::NAVIGABLE {
                    if view.requires_admin() && !is_admin {
                        continue;
                    }
                    let selected = state.current_view == view;
                    let text = egui::RichText::new(view.title()).color(if selected {
                        colors::TEXT_LIGHT
                    } else {
                        colors::TEXT_SECONDARY
                    });
                    let button = egui::Button::new(text)
                        .fill(if selected {
                            colors::SELECTED_ITEM
                        } else {
                            colors::NAV_BG
                        })
                        .min_size(egui::vec2(ui.available_width(), 32.0));
                    if ui.add(button).clicked() {
                        state.navigate(view);
                    }
                    ui.add_space(4.0);
                }
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::main_frame())
        .show(ctx, |ui| {
            render_notice(ui, state);

            match state.current_view {
                View::Login | View::Register => auth_view::render(ui, state),
                View::Dashboard => dashboard_view::render(ui, state),
                View::Search => search_view::render(ui, state),
                View::Workspace => workspace_view::render(ui, state),
                View::Profile => profile_view::render(ui, state),
                View::Analytics => analytics_view::render(ui, state),
                View::Admin => admin_view::render(ui, state),
            }
        });
}

fn render_notice(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(notice) = state.notice.clone() else {
        return;
    };
    let mut dismissed = false;
    styles::notice_frame(notice.kind).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.colored_label(styles::notice_color(notice.kind), &notice.text);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✕").clicked() {
                    dismissed = true;
                }
            });
        });
    });
    if dismissed {
        state.dismiss_notice();
    }
    ui.add_space(12.0);
}

/// Centered spinner with a caption
pub(crate) fn loading_row(ui: &mut egui::Ui, caption: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.colored_label(colors::TEXT_SECONDARY, caption);
    });
}
