/**
 * TenderDesk Desktop App - Main Entry Point
 *
 * Loads configuration, restores any saved session and hands the
 * application state to eframe.
 */
use std::time::Duration;

use eframe::egui;
use tenderdesk::egui_app::theme::styles;
use tenderdesk::egui_app::{views, AppState};
use tenderdesk::shared::config::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tenderdesk=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::load()?;
    tracing::info!("Starting TenderDesk against {}", config.api_url);
    let state = AppState::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "TenderDesk",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(TenderDeskApp { state }))
        }),
    )?;
    Ok(())
}

struct TenderDeskApp {
    state: AppState,
}

impl eframe::App for TenderDeskApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.state.check_results();

        views::render_top_bar(ctx, &mut self.state, frame);
        views::render_nav_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // Keep polling while requests are in flight
        if self.state.is_loading() || self.state.is_restoring() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
