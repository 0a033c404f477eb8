//! Main application structure

use eframe::egui;
use fleetbook_app::service::VehicleService;

use crate::vehicle_panel::VehiclePanel;

/// Main application state
pub struct FleetbookApp {
    /// Form and list box
    vehicle_panel: VehiclePanel,
    /// Vehicle catalog, owned for the lifetime of the window
    service: VehicleService,
}

impl FleetbookApp {
    pub fn new(service: VehicleService) -> Self {
        Self {
            vehicle_panel: VehiclePanel::new(),
            service,
        }
    }
}

impl eframe::App for FleetbookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.vehicle_panel.ui(ui, &mut self.service);
        });
    }
}
