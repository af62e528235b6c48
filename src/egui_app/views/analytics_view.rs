use eframe::egui;

use crate::egui_app::panels::analytics::{InsightFeed, InsightSection};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::dashboard_view::render_release;
use crate::egui_app::views::loading_row;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(styles::heading("Spend by buyer"));
        if ui.button("⟳").on_hover_text("Reload").clicked() {
            state.load_analytics();
        }
    });
    ui.add_space(8.0);

    if state.analytics.is_loading() && state.analytics.spend.is_none() {
        loading_row(ui, "Loading analytics...");
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let rows = state.analytics.rows();
            if rows.is_empty() {
                ui.colored_label(colors::TEXT_SECONDARY, "No spend data yet");
            } else {
                styles::card_frame().show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    egui::Grid::new("spend_by_buyer")
                        .num_columns(5)
                        .striped(true)
                        .spacing([16.0, 6.0])
                        .show(ui, |ui| {
                            for header in ["#", "Buyer", "Tenders", "Estimated spend", "Share"] {
                                ui.colored_label(colors::TEXT_SECONDARY, header);
                            }
                            ui.end_row();

                            for row in &rows {
                                ui.label(row.rank.to_string());
                                ui.label(&row.buyer);
                                ui.label(row.tender_count.to_string());
                                ui.label(&row.spend);
                                ui.add(
                                    egui::ProgressBar::new(row.share)
                                        .desired_width(120.0)
                                        .text(format!("{:.0}%", row.share * 100.0)),
                                );
                                ui.end_row();
                            }
                        });
                    if let Some(total) = state.analytics.total_label() {
                        ui.add_space(6.0);
                        ui.colored_label(colors::ACCENT, total);
                    }
                });
            }

            for feed in InsightFeed::ALL {
                ui.add_space(16.0);
                render_insights(ui, feed, state.analytics.section(feed));
            }

            ui.add_space(16.0);
            ui.label(styles::heading("Enriched releases"));
            ui.add_space(6.0);
            if state.analytics.releases.is_empty() {
                ui.colored_label(colors::TEXT_SECONDARY, "No enriched releases yet");
            }
            for release in &state.analytics.releases {
                render_release(ui, release);
                ui.add_space(8.0);
            }
        });
}

fn render_insights(ui: &mut egui::Ui, feed: InsightFeed, section: &InsightSection) {
    egui::CollapsingHeader::new(styles::heading(feed.title()))
        .id_salt(feed.title())
        .default_open(feed == InsightFeed::IndustryTrends)
        .show(ui, |ui| {
            if section.pending.is_busy() && !section.loaded {
                loading_row(ui, "Loading insights...");
                return;
            }
            if section.records.is_empty() {
                ui.colored_label(colors::TEXT_SECONDARY, feed.empty_hint());
                return;
            }
            for (i, record) in section.records.iter().enumerate() {
                styles::card_frame().show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new(record.title()).strong());
                    egui::Grid::new((feed.title(), i))
                        .num_columns(2)
                        .spacing([16.0, 4.0])
                        .show(ui, |ui| {
                            for (key, value) in record.facts() {
                                ui.colored_label(colors::TEXT_SECONDARY, key);
                                ui.label(value);
                                ui.end_row();
                            }
                        });
                    if let Some(advice) = record.advice() {
                        ui.add_space(4.0);
                        ui.colored_label(colors::ACCENT, advice);
                    }
                });
                ui.add_space(6.0);
            }
        });
}
