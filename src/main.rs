#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod constants;
mod data;
mod error;
mod plot;
mod state;
mod ui;
mod widgets;

use std::path::Path;

use app::PlotGridApp;
use config::DashboardConfig;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt::init();

    #[cfg(feature = "profile-with-puffin")]
    start_puffin_server();

    let config = DashboardConfig::load_or_default(Path::new(constants::config::CONFIG_FILE));

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "plot-grid",
        options,
        Box::new(|_| Ok(Box::new(PlotGridApp::new(config)))),
    )
}

#[cfg(feature = "profile-with-puffin")]
fn start_puffin_server() {
    puffin::set_scopes_on(true);
    match puffin_http::Server::new(constants::profiler::PUFFIN_ADDR) {
        Ok(server) => {
            tracing::info!(addr = constants::profiler::PUFFIN_ADDR, "puffin server started");
            // Keep serving for the lifetime of the process
            std::mem::forget(server);
        }
        Err(e) => tracing::error!(error = %e, "failed to start puffin server"),
    }
}
