//! Vehicle form panel: five inputs, five buttons and a list box

use eframe::egui::{self, Color32, RichText, Ui};
use fleetbook_app::form::{Action, Response, VehicleForm};
use fleetbook_app::service::{Notice, Severity, VehicleService};
use fleetbook_store::PersistenceGateway;

/// Panel state for the vehicle form
pub struct VehiclePanel {
    /// Raw text of the five inputs
    form: VehicleForm,
    /// Lines of the list box, refreshed only by the list action
    list_lines: Vec<String>,
}

impl VehiclePanel {
    pub fn new() -> Self {
        Self {
            form: VehicleForm::new(),
            list_lines: Vec::new(),
        }
    }

    pub fn ui<G: PersistenceGateway>(&mut self, ui: &mut Ui, service: &mut VehicleService<G>) {
        ui.add_space(10.0);

        self.render_inputs(ui);

        ui.add_space(8.0);

        if let Some(action) = self.render_buttons(ui) {
            if let Some(notice) = self.run(action, service) {
                show_notice(&notice);
            }
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        self.render_list_box(ui);
    }

    /// Dispatch one action. Listings go to the list box; notices are returned for display.
    fn run<G: PersistenceGateway>(
        &mut self,
        action: Action,
        service: &mut VehicleService<G>,
    ) -> Option<Notice> {
        match self.form.submit(action, service) {
            Response::Notice(notice) => Some(notice),
            Response::Listing(listing) => {
                self.list_lines = listing.into_lines();
                None
            }
        }
    }

    fn render_inputs(&mut self, ui: &mut Ui) {
        let form = &mut self.form;
        egui::Grid::new("vehicle_form")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                for (label, value) in [
                    ("Vehicle ID:", &mut form.vehicle_id),
                    ("Make:", &mut form.make),
                    ("Model:", &mut form.model),
                    ("Year:", &mut form.year),
                    ("Color:", &mut form.color),
                ] {
                    ui.label(label);
                    ui.add(egui::TextEdit::singleline(value).desired_width(200.0));
                    ui.end_row();
                }
            });
    }

    /// Returns the clicked action, if any
    fn render_buttons(&self, ui: &mut Ui) -> Option<Action> {
        let mut clicked = None;

        egui::Grid::new("vehicle_actions")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                for row in [[Action::Add, Action::View], [Action::Update, Action::Delete]] {
                    for action in row {
                        if ui.button(action.label()).clicked() {
                            clicked = Some(action);
                        }
                    }
                    ui.end_row();
                }
            });

        if ui.button(Action::List.label()).clicked() {
            clicked = Some(Action::List);
        }

        clicked
    }

    fn render_list_box(&self, ui: &mut Ui) {
        egui::ScrollArea::vertical()
            .max_height(260.0)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if self.list_lines.is_empty() {
                    ui.label(
                        RichText::new("Press \"List All Vehicles\" to show the catalog")
                            .italics()
                            .color(Color32::GRAY),
                    );
                }
                for line in &self.list_lines {
                    ui.label(RichText::new(line).monospace());
                }
            });
    }
}

impl Default for VehiclePanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Show a notice as a native modal dialog
fn show_notice(notice: &Notice) {
    let level = match notice.severity {
        Severity::Info => rfd::MessageLevel::Info,
        Severity::Warning => rfd::MessageLevel::Warning,
        Severity::Error => rfd::MessageLevel::Error,
    };

    rfd::MessageDialog::new()
        .set_level(level)
        .set_title(notice.title)
        .set_description(notice.message.clone())
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetbook_app::service::EMPTY_LISTING;
    use fleetbook_store::{MemoryGateway, VehicleStore};

    fn service() -> VehicleService<MemoryGateway> {
        VehicleService::new(VehicleStore::with_gateway(MemoryGateway::new()).unwrap())
    }

    #[test]
    fn test_list_action_fills_list_box() {
        let mut panel = VehiclePanel::new();
        let mut service = service();

        assert!(panel.run(Action::List, &mut service).is_none());
        assert_eq!(panel.list_lines, [EMPTY_LISTING]);
    }

    #[test]
    fn test_notice_leaves_list_box_alone() {
        let mut panel = VehiclePanel::new();
        let mut service = service();
        panel.run(Action::List, &mut service);

        panel.form = VehicleForm {
            vehicle_id: "V1".to_string(),
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: "2020".to_string(),
            color: "Blue".to_string(),
        };
        let notice = panel.run(Action::Add, &mut service).unwrap();

        assert_eq!(notice.message, "Vehicle added successfully.");
        assert_eq!(panel.list_lines, [EMPTY_LISTING]);
        assert_eq!(panel.form, VehicleForm::default());
    }

    #[test]
    fn test_missing_fields_warn() {
        let mut panel = VehiclePanel::new();
        let mut service = service();
        panel.form.vehicle_id = "V1".to_string();

        let notice = panel.run(Action::Add, &mut service).unwrap();
        assert_eq!(notice.title, "Input Error");
        assert_eq!(notice.message, "Please fill in all fields.");
        assert_eq!(notice.severity, Severity::Warning);
    }
}
