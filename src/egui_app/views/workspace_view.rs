use eframe::egui;

use crate::egui_app::panels::workspace::ExportKind;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::loading_row;
use crate::shared::user::PlanFeature;
use crate::shared::workspace::{StatusFilter, WorkspaceStatus};

enum EntryAction {
    SetStatus(i64, WorkspaceStatus),
    SaveNotes(i64),
    Remove(i64),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(styles::heading("Workspace"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let can_export = state
                .user
                .as_ref()
                .is_some_and(|u| u.plan_tier.allows(PlanFeature::Export));
            let exporting = state.workspace.pending_export.is_busy();
            // right to left, so readiness export sits at the far edge
            for kind in [ExportKind::ReadinessScores, ExportKind::WorkspaceCsv] {
                let label = if can_export {
                    kind.label().to_string()
                } else {
                    format!("🔒 {}", kind.label())
                };
                if ui
                    .add_enabled(!exporting, egui::Button::new(label))
                    .clicked()
                {
                    state.export(kind);
                }
            }
            if ui.button("⟳").on_hover_text("Reload").clicked() {
                state.load_workspace();
            }
        });
    });
    ui.add_space(8.0);

    let mut filter = state.workspace.filter;
    ui.horizontal(|ui| {
        ui.label("Status");
        ui.selectable_value(&mut filter, StatusFilter::All, StatusFilter::All.label());
        for status in WorkspaceStatus::ALL {
            ui.selectable_value(&mut filter, StatusFilter::Only(status), status.label());
        }
    });
    state.set_workspace_filter(filter);
    ui.add_space(8.0);

    if state.workspace.is_loading() && !state.workspace.loaded {
        loading_row(ui, "Loading workspace...");
        return;
    }
    ui.colored_label(colors::TEXT_SECONDARY, state.workspace.summary_label());
    ui.add_space(8.0);

    let now = chrono::Local::now().naive_local();
    let mut action = None;
    let panel = &mut state.workspace;
    let entries: Vec<_> = panel.visible().cloned().collect();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for entry in &entries {
                let notes_changed = panel.notes_changed(entry);
                styles::card_frame().show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&entry.tender.title).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Remove").clicked() {
                                action = Some(EntryAction::Remove(entry.id));
                            }
                            let mut status = entry.status;
                            egui::ComboBox::from_id_salt(("entry_status", entry.id))
                                .selected_text(
                                    egui::RichText::new(status.label())
                                        .color(styles::status_color(status)),
                                )
                                .show_ui(ui, |ui| {
                                    for option in WorkspaceStatus::ALL {
                                        ui.selectable_value(&mut status, option, option.label());
                                    }
                                });
                            if status != entry.status {
                                action = Some(EntryAction::SetStatus(entry.id, status));
                            }
                        });
                    });
                    ui.horizontal_wrapped(|ui| {
                        ui.colored_label(colors::TEXT_SECONDARY, &entry.tender.buyer_organization);
                        ui.colored_label(colors::TEXT_SECONDARY, "·");
                        ui.colored_label(colors::WARNING, entry.tender.deadline_label(now));
                        if let Some(score) = entry.match_score {
                            ui.colored_label(colors::TEXT_SECONDARY, "·");
                            ui.colored_label(colors::ACCENT, format!("Match {:.0}%", score));
                        }
                    });
                    ui.add_space(6.0);

                    let draft = panel.note_drafts.entry(entry.id).or_default();
                    ui.add(
                        egui::TextEdit::multiline(draft)
                            .hint_text("Notes for your team")
                            .desired_rows(2)
                            .desired_width(f32::INFINITY),
                    );
                    if notes_changed && ui.button("Save notes").clicked() {
                        action = Some(EntryAction::SaveNotes(entry.id));
                    }
                });
                ui.add_space(8.0);
            }
        });

    match action {
        Some(EntryAction::SetStatus(id, status)) => state.update_entry_status(id, status),
        Some(EntryAction::SaveNotes(id)) => state.save_entry_notes(id),
        Some(EntryAction::Remove(id)) => state.remove_entry(id),
        None => {}
    }
}
