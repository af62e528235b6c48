use eframe::egui;

use crate::egui_app::panels::profile::ProfileState;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::loading_row;
use crate::shared::profile::{IndustrySector, Province};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(styles::heading("Company profile"));
    ui.add_space(4.0);

    let status_color = match state.profile.state {
        ProfileState::Missing => colors::WARNING,
        ProfileState::Loaded(_) => colors::SUCCESS,
        ProfileState::NotLoaded => colors::TEXT_SECONDARY,
    };
    ui.colored_label(status_color, state.profile.status_label());
    ui.add_space(8.0);

    if state.profile.pending_load.is_busy() {
        loading_row(ui, "Loading profile...");
        return;
    }

    let mut save = false;
    let mut add_certification = false;
    let panel = &mut state.profile;
    let invalid = panel.invalid_field.clone();
    let label = |ui: &mut egui::Ui, text: &str, field: &str| {
        let color = if invalid.as_deref() == Some(field) {
            colors::ERROR
        } else {
            colors::TEXT_SECONDARY
        };
        ui.colored_label(color, text);
    };

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let Some(draft) = panel.draft.as_mut() else {
                return;
            };

            styles::card_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                egui::Grid::new("profile_form")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        label(ui, "Company name", "company_name");
                        ui.add(
                            egui::TextEdit::singleline(&mut draft.company_name).desired_width(360.0),
                        );
                        ui.end_row();

                        label(ui, "Industry sector", "industry_sector");
                        egui::ComboBox::from_id_salt("profile_sector")
                            .selected_text(draft.industry_sector.name())
                            .show_ui(ui, |ui| {
                                for sector in IndustrySector::ALL {
                                    ui.selectable_value(
                                        &mut draft.industry_sector,
                                        sector,
                                        sector.name(),
                                    );
                                }
                            });
                        ui.end_row();

                        label(ui, "Services provided", "services_provided");
                        ui.add(
                            egui::TextEdit::multiline(&mut draft.services_provided)
                                .desired_rows(4)
                                .desired_width(360.0),
                        );
                        ui.end_row();

                        label(ui, "Years of experience", "years_experience");
                        ui.add(egui::TextEdit::singleline(&mut panel.years_input).desired_width(60.0));
                        ui.end_row();

                        label(ui, "Contact email", "contact_email");
                        ui.add(
                            egui::TextEdit::singleline(&mut draft.contact_email).desired_width(360.0),
                        );
                        ui.end_row();

                        label(ui, "Contact phone", "contact_phone");
                        ui.add(
                            egui::TextEdit::singleline(&mut draft.contact_phone).desired_width(200.0),
                        );
                        ui.end_row();
                    });
            });
            ui.add_space(8.0);

            styles::card_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                label(ui, "Geographic coverage", "geographic_coverage");
                ui.horizontal_wrapped(|ui| {
                    for province in Province::ALL {
                        let mut covered = draft.geographic_coverage.contains(&province);
                        if ui.checkbox(&mut covered, province.name()).changed() {
                            if covered {
                                draft.geographic_coverage.insert(province);
                            } else {
                                draft.geographic_coverage.remove(&province);
                            }
                        }
                    }
                });
            });
            ui.add_space(8.0);

            let mut removed = None;
            styles::card_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                label(ui, "Certifications", "certifications");
                for (name, value) in &draft.certifications {
                    ui.horizontal(|ui| {
                        ui.label(name);
                        match value {
                            serde_json::Value::String(s) => {
                                ui.colored_label(colors::TEXT_SECONDARY, s);
                            }
                            serde_json::Value::Bool(true) => {}
                            other => {
                                ui.colored_label(colors::TEXT_SECONDARY, other.to_string());
                            }
                        }
                        if ui.small_button("✕").clicked() {
                            removed = Some(name.clone());
                        }
                    });
                }
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut panel.certification_name)
                            .hint_text("Certification (e.g. CIDB)")
                            .desired_width(200.0),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut panel.certification_value)
                            .hint_text("Grade or number (optional)")
                            .desired_width(200.0),
                    );
                    if ui.button("Add").clicked() {
                        add_certification = true;
                    }
                });
            });
            if let Some(name) = removed {
                draft.certifications.remove(&name);
            }

            ui.add_space(12.0);
            let saving = panel.pending_save.is_busy();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!saving, styles::primary_button("Save profile"))
                    .clicked()
                {
                    save = true;
                }
                if saving {
                    ui.spinner();
                }
            });
        });

    if add_certification {
        state.profile.add_certification();
    }
    if save {
        state.save_profile();
    }
}
