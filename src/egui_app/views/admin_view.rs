use eframe::egui;

use crate::client::api::admin::SYNC_LIMIT_RANGE;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::team::TeamRole;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(styles::heading("Admin"));
        if ui.button("⟳").on_hover_text("Reload").clicked() {
            state.load_admin();
        }
    });
    ui.add_space(8.0);

    let mut sync = false;
    let mut invite = false;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let panel = &mut state.admin;

            styles::card_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(egui::RichText::new("Tender sync").strong());
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    "Pull the latest releases from the OCDS feed. The sync runs in the background.",
                );
                ui.horizontal(|ui| {
                    ui.label("Releases");
                    ui.add(egui::DragValue::new(&mut panel.sync_limit).range(SYNC_LIMIT_RANGE));
                    let syncing = panel.is_syncing();
                    if ui
                        .add_enabled(!syncing, styles::primary_button("Sync tenders"))
                        .clicked()
                    {
                        sync = true;
                    }
                    if syncing {
                        ui.spinner();
                    }
                });
            });
            ui.add_space(8.0);

            styles::card_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(egui::RichText::new("System stats").strong());
                let rows = panel.stats_rows();
                if rows.is_empty() {
                    ui.colored_label(colors::TEXT_SECONDARY, "No stats loaded");
                }
                egui::Grid::new("admin_stats").num_columns(2).show(ui, |ui| {
                    for (key, value) in rows {
                        ui.colored_label(colors::TEXT_SECONDARY, key);
                        ui.label(value);
                        ui.end_row();
                    }
                });
            });
            ui.add_space(8.0);

            styles::card_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(egui::RichText::new("Team members").strong());
                egui::Grid::new("team_members")
                    .num_columns(3)
                    .striped(true)
                    .show(ui, |ui| {
                        for member in &panel.members {
                            ui.label(&member.full_name);
                            ui.colored_label(colors::TEXT_SECONDARY, &member.email);
                            if member.is_team_admin {
                                ui.colored_label(colors::ACCENT, "Admin");
                            } else {
                                ui.label("Member");
                            }
                            ui.end_row();
                        }
                    });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut panel.invite_email)
                            .hint_text("colleague@company.co.za")
                            .desired_width(240.0),
                    );
                    egui::ComboBox::from_id_salt("invite_role")
                        .selected_text(match panel.invite_role {
                            TeamRole::Member => "Member",
                            TeamRole::Admin => "Admin",
                        })
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut panel.invite_role, TeamRole::Member, "Member");
                            ui.selectable_value(&mut panel.invite_role, TeamRole::Admin, "Admin");
                        });
                    if ui.button("Invite").clicked() {
                        invite = true;
                    }
                });
            });
            ui.add_space(8.0);

            styles::card_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(egui::RichText::new("Recent activity").strong());
                if panel.activity.is_empty() {
                    ui.colored_label(colors::TEXT_SECONDARY, "No recent activity");
                }
                for entry in &panel.activity {
                    ui.horizontal(|ui| {
                        ui.colored_label(
                            colors::TEXT_SECONDARY,
                            entry.timestamp().unwrap_or("-"),
                        );
                        ui.label(entry.action());
                        if let Some(user_id) = entry.user_id() {
                            ui.colored_label(colors::TEXT_SECONDARY, format!("user #{}", user_id));
                        }
                    });
                }
            });
        });

    if sync {
        state.sync_tenders();
    }
    if invite {
        state.send_invite();
    }
}
