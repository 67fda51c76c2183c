mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;

use app::LaunchDashApp;
use config::Config;
use state::AppState;

fn main() {
    env_logger::init();

    let config = Config::parse();
    if let Err(e) = run(config) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    config.validate().context("invalid configuration")?;

    let dataset = data::loader::load_file(&config.data)?;
    log::info!(
        "Loaded {} launches from {} across sites {:?}, payload bounds {:?}",
        dataset.len(),
        config.data.display(),
        dataset.sites,
        dataset.payload_bounds()
    );

    let source_name = config
        .data
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.data.display().to_string());
    let state = AppState::new(Arc::new(dataset), source_name, config.slider());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    log::info!("Starting dashboard window");
    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow!("running dashboard: {e}"))
}
