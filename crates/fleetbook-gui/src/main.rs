//! GUI entry point for fleetbook

mod app;
mod vehicle_panel;

use app::FleetbookApp;
use eframe::egui;
use fleetbook_app::config::Config;
use fleetbook_app::logging::{init_logging, Verbosity};
use fleetbook_app::repository::open_vehicle_service;
use tracing::{error, info, warn};

pub const WINDOW_TITLE: &str = "Vehicle Management System";

fn main() -> eframe::Result<()> {
    init_logging(Verbosity::Normal);

    let config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "Falling back to default configuration");
        Config::default()
    });

    let service = match open_vehicle_service(&config) {
        Ok(service) => service,
        Err(e) => {
            error!(error = %e, "Failed to open vehicle store");
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title(WINDOW_TITLE)
                .set_description(format!("Failed to open vehicle store: {}", e))
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
            std::process::exit(1);
        }
    };
    info!(store = %config.store_path().display(), "Starting GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 500.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(FleetbookApp::new(service)))),
    )
}
