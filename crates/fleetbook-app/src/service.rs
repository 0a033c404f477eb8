//! Vehicle service: store operations narrated as user-facing notices

use fleetbook_store::{JsonFileGateway, PersistenceGateway, VehicleStore};
use fleetbook_types::{Error, StoreError, Vehicle, VehicleUpdate};

/// Placeholder line shown when the catalog is empty
pub const EMPTY_LISTING: &str = "No vehicles in the system.";

/// How loudly a notice should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Short status message for one action, rendered as a modal or a console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn info(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn warning(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn error(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.severity == Severity::Info
    }
}

/// Flat list view of the catalog, one display line per vehicle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    lines: Vec<String>,
}

impl Listing {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Owns the store for the lifetime of a front end and answers each action
pub struct VehicleService<G = JsonFileGateway> {
    store: VehicleStore<G>,
}

impl<G: PersistenceGateway> VehicleService<G> {
    pub fn new(store: VehicleStore<G>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &VehicleStore<G> {
        &self.store
    }

    pub fn add(&mut self, vehicle: Vehicle) -> Notice {
        const TITLE: &str = "Add Vehicle";
        match self.store.add_vehicle(vehicle) {
            Ok(()) => Notice::info(TITLE, "Vehicle added successfully."),
            Err(e) => failure(TITLE, e),
        }
    }

    pub fn view(&self, id: &str) -> Notice {
        match self.store.get_vehicle(id) {
            Some(vehicle) => Notice::info("Vehicle Details", vehicle.to_string()),
            None => Notice::warning("View Vehicle", "Vehicle not found."),
        }
    }

    pub fn update(&mut self, id: &str, update: &VehicleUpdate) -> Notice {
        const TITLE: &str = "Update Vehicle";
        match self.store.update_vehicle(id, update) {
            Ok(()) => Notice::info(TITLE, "Vehicle updated successfully."),
            Err(e) => failure(TITLE, e),
        }
    }

    pub fn delete(&mut self, id: &str) -> Notice {
        const TITLE: &str = "Delete Vehicle";
        match self.store.remove_vehicle(id) {
            Ok(_) => Notice::info(TITLE, "Vehicle deleted successfully."),
            Err(e) => failure(TITLE, e),
        }
    }

    pub fn list(&self) -> Listing {
        let lines = if self.store.is_empty() {
            vec![EMPTY_LISTING.to_string()]
        } else {
            self.store
                .all_vehicles()
                .into_iter()
                .map(ToString::to_string)
                .collect()
        };
        Listing { lines }
    }
}

fn failure(title: &'static str, err: Error) -> Notice {
    match err.as_store_error() {
        Some(StoreError::DuplicateKey(_)) => {
            Notice::warning(title, "Vehicle with this ID already exists.")
        }
        Some(StoreError::NotFound(_)) => Notice::warning(title, "Vehicle not found."),
        None => Notice::error(title, format!("Failed to save vehicles: {}", err)),
    }
}
