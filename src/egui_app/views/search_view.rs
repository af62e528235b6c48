use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::loading_row;
use crate::shared::insights::{ReadinessReport, TenderSummary};
use crate::shared::profile::Province;
use crate::shared::tender::Tender;
use crate::shared::user::PlanFeature;

/// Button pressed on a result card, applied once the list is drawn
enum CardAction {
    Track(i64),
    Summary(Tender),
    Readiness(i64),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(styles::heading("Search tenders"));
    ui.add_space(8.0);

    render_form(ui, state);
    ui.add_space(12.0);

    if state.search.is_searching() {
        loading_row(ui, "Searching...");
    } else {
        ui.colored_label(colors::TEXT_SECONDARY, state.search.count_label());
    }
    ui.add_space(8.0);

    let plan = state.user.as_ref().map(|u| u.plan_tier);
    let allows = |feature: PlanFeature| plan.is_some_and(|p| p.allows(feature));
    let now = chrono::Local::now().naive_local();

    let mut action = None;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for tender in state.search.cards() {
                styles::card_frame().show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&tender.title).strong().size(16.0));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.colored_label(colors::WARNING, tender.deadline_label(now));
                        });
                    });
                    ui.horizontal_wrapped(|ui| {
                        ui.colored_label(colors::TEXT_SECONDARY, &tender.buyer_organization);
                        ui.colored_label(colors::TEXT_SECONDARY, "·");
                        ui.colored_label(colors::TEXT_SECONDARY, &tender.province);
                        ui.colored_label(colors::TEXT_SECONDARY, "·");
                        ui.colored_label(colors::TEXT_SECONDARY, &tender.budget_range);
                        ui.colored_label(colors::TEXT_SECONDARY, "·");
                        ui.colored_label(colors::TEXT_SECONDARY, &tender.tender_id);
                    });
                    ui.add_space(4.0);
                    ui.label(&tender.description);
                    ui.add_space(6.0);

                    ui.horizontal(|ui| {
                        if ui.add(styles::primary_button("Track")).clicked() {
                            action = Some(CardAction::Track(tender.id));
                        }
                        if feature_button(ui, "AI summary", allows(PlanFeature::AiSummary)) {
                            action = Some(CardAction::Summary(tender.clone()));
                        }
                        if feature_button(ui, "Readiness check", allows(PlanFeature::ReadinessCheck)) {
                            action = Some(CardAction::Readiness(tender.id));
                        }
                        if !tender.source_url.is_empty() {
                            ui.hyperlink_to("Source", &tender.source_url);
                        }
                    });

                    if let Some(summary) = state.search.summaries.get(&tender.id) {
                        render_summary(ui, summary);
                    }
                    if let Some(report) = state.search.readiness.get(&tender.id) {
                        render_readiness(ui, report);
                    }
                });
                ui.add_space(8.0);
            }
        });

    match action {
        Some(CardAction::Track(id)) => state.track_tender(id),
        Some(CardAction::Summary(tender)) => state.request_summary(tender),
        Some(CardAction::Readiness(id)) => state.request_readiness(id),
        None => {}
    }
}

fn render_form(ui: &mut egui::Ui, state: &mut AppState) {
    let mut submit = false;
    styles::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        let form = &mut state.search.form;

        ui.horizontal(|ui| {
            ui.label("Keywords");
            let response = ui.add(
                egui::TextEdit::singleline(&mut form.keywords)
                    .hint_text("e.g. road maintenance")
                    .desired_width(320.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }

            ui.label("Province");
            egui::ComboBox::from_id_salt("search_province")
                .selected_text(form.province.map_or("Any", Province::name))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut form.province, None, "Any");
                    for province in Province::ALL {
                        ui.selectable_value(&mut form.province, Some(province), province.name());
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("Budget (R)");
            ui.add(
                egui::TextEdit::singleline(&mut form.budget_min)
                    .hint_text("min")
                    .desired_width(100.0),
            );
            ui.add(
                egui::TextEdit::singleline(&mut form.budget_max)
                    .hint_text("max")
                    .desired_width(100.0),
            );
            ui.label("Buyer");
            ui.add(egui::TextEdit::singleline(&mut form.buyer).desired_width(180.0));
            ui.label("Closing within");
            ui.add(
                egui::TextEdit::singleline(&mut form.deadline_window)
                    .hint_text("days")
                    .desired_width(60.0),
            );
        });

        ui.add_space(6.0);
        if ui.add(styles::primary_button("Search")).clicked() {
            submit = true;
        }
    });

    if submit {
        state.submit_search();
    }
}

/// Button for a plan-gated feature; locked ones stay clickable so the upgrade message shows
fn feature_button(ui: &mut egui::Ui, label: &str, unlocked: bool) -> bool {
    let response = if unlocked {
        ui.button(label)
    } else {
        ui.button(egui::RichText::new(format!("🔒 {}", label)).color(colors::LOCKED))
    };
    response.clicked()
}

fn render_summary(ui: &mut egui::Ui, summary: &TenderSummary) {
    ui.add_space(6.0);
    ui.separator();
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("AI summary").strong().color(colors::ACCENT));
        if let Some(sector) = &summary.industry_sector {
            ui.colored_label(colors::TEXT_SECONDARY, sector);
        }
        if let Some(score) = summary.complexity_score {
            ui.colored_label(colors::TEXT_SECONDARY, format!("Complexity {}/10", score));
        }
    });
    ui.label(&summary.summary);
    for (key, value) in &summary.key_points {
        let value = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        ui.horizontal_wrapped(|ui| {
            ui.colored_label(colors::TEXT_SECONDARY, format!("{}:", key));
            ui.label(value);
        });
    }
}

fn render_readiness(ui: &mut egui::Ui, report: &ReadinessReport) {
    ui.add_space(6.0);
    ui.separator();
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Readiness").strong().color(colors::ACCENT));
        ui.colored_label(
            styles::band_color(report.band()),
            format!("{:.0}%", report.suitability_score),
        );
        ui.colored_label(
            colors::TEXT_SECONDARY,
            format!("{}/{} criteria met", report.criteria_met(), report.checklist.len()),
        );
    });
    for item in &report.checklist {
        let (mark, color) = if item.met {
            ("✔", colors::SUCCESS)
        } else {
            ("✘", colors::ERROR)
        };
        ui.horizontal(|ui| {
            ui.colored_label(color, mark);
            ui.label(&item.criterion);
        });
    }
    ui.colored_label(colors::TEXT_SECONDARY, &report.recommendation);
}
