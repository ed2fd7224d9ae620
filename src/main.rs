mod app;
mod callback;
mod chart;
mod color;
mod config;
mod data;
mod handlers;
mod layout;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use app::LaunchDashApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // The dataset is read exactly once; without it there is nothing to show.
    let dataset = data::loader::load_file(&config.dataset_path)?;
    if dataset.is_empty() {
        log::warn!(
            "{} has no rows; charts will be empty",
            config.dataset_path.display()
        );
    }
    log::info!(
        "Loaded {} launches from sites {:?}, payload range {:?} kg",
        dataset.len(),
        dataset.sites,
        dataset.payload_bounds()
    );

    let state = AppState::new(Arc::new(dataset), &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard window: {e}"))
}
