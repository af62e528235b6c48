use eframe::egui;

use crate::client::View;
use crate::egui_app::panels::AuthMode;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    let is_register = state.auth.mode == AuthMode::Register;

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            // Vertical centering
            let total_height = if is_register { 380.0 } else { 280.0 };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("📑 TenderDesk")
                    .size(32.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            ui.label(
                egui::RichText::new(if is_register { "Create Account" } else { "Welcome Back" })
                    .size(24.0)
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            if let Some(ref error) = state.auth.error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            let input_width = 280.0;
            let label_width = 90.0;
            let indent = (available_rect.width() - input_width - label_width - 20.0) / 2.0;

            let field = |ui: &mut egui::Ui, label: &str, value: &mut String, password: bool| {
                ui.horizontal(|ui| {
                    ui.add_space(indent);
                    ui.add_sized(
                        [label_width, 24.0],
                        egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
                    );
                    ui.add_sized(
                        [input_width, 28.0],
                        egui::TextEdit::singleline(value)
                            .password(password)
                            .text_color(colors::TEXT_LIGHT),
                    );
                });
                ui.add_space(8.0);
            };

            if is_register {
                field(ui, "Full name:", &mut state.auth.full_name, false);
            }
            field(ui, "Email:", &mut state.auth.email, false);
            field(ui, "Password:", &mut state.auth.password, true);
            if is_register {
                field(ui, "Confirm:", &mut state.auth.confirm_password, true);
            }

            ui.add_space(20.0);

            let loading = state.auth.is_loading();
            ui.horizontal(|ui| {
                let button_width = 120.0;
                let total_buttons_width = button_width * 2.0 + 10.0;
                ui.add_space((available_rect.width() - total_buttons_width) / 2.0);

                let submit = egui::Button::new(
                    egui::RichText::new(if is_register { "Sign Up" } else { "Login" })
                        .color(colors::TEXT_LIGHT),
                )
                .fill(colors::ACCENT);
                if ui
                    .add_enabled_ui(!loading, |ui| ui.add_sized([button_width, 32.0], submit))
                    .inner
                    .clicked()
                {
                    if is_register {
                        state.handle_register();
                    } else {
                        state.handle_login();
                    }
                }

                ui.add_space(10.0);

                let toggle = egui::Button::new(
                    egui::RichText::new(if is_register { "Back to Login" } else { "Create Account" })
                        .color(colors::TEXT_SECONDARY),
                );
                if ui.add_sized([button_width, 32.0], toggle).clicked() {
                    state.auth.toggle_mode();
                    state.current_view = if is_register { View::Login } else { View::Register };
                }
            });

            if loading {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0) / 2.0);
                    ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }
        });
    });
}
