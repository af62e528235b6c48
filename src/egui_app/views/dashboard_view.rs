use eframe::egui;

use crate::client::View;
use crate::egui_app::panels::dashboard::{feature_rows, greeting, ProfileStatus};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::loading_row;
use crate::shared::insights::EnrichedRelease;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(styles::heading(&greeting(state.user.as_ref())));
    ui.add_space(4.0);

    let health_color = match &state.dashboard.health {
        Some(health) if health.is_healthy() => colors::SUCCESS,
        Some(_) => colors::WARNING,
        None => colors::TEXT_SECONDARY,
    };
    ui.colored_label(health_color, format!("● {}", state.dashboard.health_label()));
    ui.add_space(12.0);

    let Some(user) = state.user.clone() else {
        styles::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.colored_label(
                colors::TEXT_SECONDARY,
                "Log in to search tenders, track them with your team and get AI summaries.",
            );
            ui.add_space(8.0);
            if ui.add(styles::primary_button("Log in")).clicked() {
                state.navigate(View::Login);
            }
        });
        return;
    };

    ui.horizontal_top(|ui| {
        styles::card_frame().show(ui, |ui| {
            ui.set_min_width(260.0);
            ui.label(egui::RichText::new(format!("{} plan", user.plan_tier)).strong());
            ui.add_space(6.0);
            egui::Grid::new("plan_features").num_columns(2).show(ui, |ui| {
                for (name, value) in feature_rows(&user.features()) {
                    ui.colored_label(colors::TEXT_SECONDARY, name);
                    ui.label(value);
                    ui.end_row();
                }
            });

            let usage = state.dashboard.usage_rows();
            if !usage.is_empty() {
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Usage").strong());
                for row in usage {
                    ui.horizontal(|ui| {
                        ui.colored_label(colors::TEXT_SECONDARY, row.label);
                        match row.fraction {
                            Some(fraction) => {
                                let bar = egui::ProgressBar::new(fraction)
                                    .desired_width(120.0)
                                    .text(row.text);
                                let bar = if row.at_limit {
                                    bar.fill(colors::WARNING)
                                } else {
                                    bar
                                };
                                ui.add(bar);
                            }
                            None => {
                                ui.label(row.text);
                            }
                        }
                    });
                }
            }
        });

        styles::card_frame().show(ui, |ui| {
            ui.set_min_width(260.0);
            ui.label(egui::RichText::new("Company profile").strong());
            ui.add_space(6.0);
            let profile = state.dashboard.profile.clone();
            match profile {
                ProfileStatus::Unknown => loading_row(ui, "Checking profile..."),
                ProfileStatus::Missing => {
                    ui.colored_label(colors::WARNING, "No company profile yet");
                    ui.colored_label(
                        colors::TEXT_SECONDARY,
                        "Readiness checks score tenders against your profile.",
                    );
                    if ui.add(styles::primary_button("Create profile")).clicked() {
                        state.navigate(View::Profile);
                    }
                }
                ProfileStatus::Complete { company_name } => {
                    ui.colored_label(colors::SUCCESS, company_name);
                    if ui.button("Edit profile").clicked() {
                        state.navigate(View::Profile);
                    }
                }
            }
        });
    });

    ui.add_space(16.0);
    ui.horizontal(|ui| {
        ui.label(styles::heading("Recent releases"));
        if ui.button("⟳").on_hover_text("Reload").clicked() {
            state.load_dashboard();
        }
    });
    ui.add_space(6.0);

    if state.dashboard.is_loading() && state.dashboard.releases.is_empty() {
        loading_row(ui, "Loading releases...");
        return;
    }
    if state.dashboard.releases.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "No enriched releases yet");
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for release in &state.dashboard.releases {
                render_release(ui, release);
                ui.add_space(8.0);
            }
        });
}

/// Card for an enriched release; shared with the analytics view
pub(crate) fn render_release(ui: &mut egui::Ui, release: &EnrichedRelease) {
    styles::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new(&release.title).strong());
        ui.horizontal_wrapped(|ui| {
            ui.colored_label(colors::TEXT_SECONDARY, &release.buyer_organization);
            ui.colored_label(colors::TEXT_SECONDARY, "·");
            ui.colored_label(colors::TEXT_SECONDARY, &release.province);
            ui.colored_label(colors::TEXT_SECONDARY, "·");
            ui.colored_label(colors::TEXT_SECONDARY, &release.budget_range);
            if let Some(sector) = &release.industry_sector {
                ui.colored_label(colors::ACCENT, sector);
            }
        });
        ui.add_space(4.0);
        ui.label(&release.ai_summary);
    });
}
