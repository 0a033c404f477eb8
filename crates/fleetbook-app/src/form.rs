//! Five-field vehicle form and action dispatch

use fleetbook_store::PersistenceGateway;
use fleetbook_types::{Vehicle, VehicleUpdate};
use thiserror::Error;
use tracing::debug;

use crate::service::{Listing, Notice, VehicleService};

/// One button on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    View,
    Update,
    Delete,
    List,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Add,
        Action::View,
        Action::Update,
        Action::Delete,
        Action::List,
    ];

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            Action::Add => "Add Vehicle",
            Action::View => "View Vehicle",
            Action::Update => "Update Vehicle",
            Action::Delete => "Delete Vehicle",
            Action::List => "List All Vehicles",
        }
    }
}

/// Input problems that block an add before the store is touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Please enter a valid year.")]
    InvalidYear,
}

impl FormError {
    pub fn notice(self) -> Notice {
        Notice::warning("Input Error", self.to_string())
    }
}

/// What a front end has to show after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Notice(Notice),
    Listing(Listing),
}

/// Exactly four ASCII digits
pub fn is_valid_year(year: &str) -> bool {
    year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())
}

/// Raw text of the five inputs, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleForm {
    pub vehicle_id: String,
    pub make: String,
    pub model: String,
    pub year: String,
    pub color: String,
}

impl VehicleForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the inputs for an add: all present, then a four-digit year
    pub fn validate_new(&self) -> Result<Vehicle, FormError> {
        let fields = [
            &self.vehicle_id,
            &self.make,
            &self.model,
            &self.year,
            &self.color,
        ];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(FormError::MissingFields);
        }
        if !is_valid_year(&self.year) {
            return Err(FormError::InvalidYear);
        }

        Ok(Vehicle::new(
            self.vehicle_id.clone(),
            self.make.clone(),
            self.model.clone(),
            self.year.clone(),
            self.color.clone(),
        ))
    }

    /// The non-ID fields as a partial update
    pub fn to_update(&self) -> VehicleUpdate {
        VehicleUpdate::from_fields(&self.make, &self.model, &self.year, &self.color)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Run one action against the service, then clear every field.
    pub fn submit<G: PersistenceGateway>(
        &mut self,
        action: Action,
        service: &mut VehicleService<G>,
    ) -> Response {
        debug!(action = action.label(), id = %self.vehicle_id, "Form submitted");

        let response = match action {
            Action::Add => match self.validate_new() {
                Ok(vehicle) => Response::Notice(service.add(vehicle)),
                Err(e) => Response::Notice(e.notice()),
            },
            Action::View => Response::Notice(service.view(&self.vehicle_id)),
            Action::Update => {
                Response::Notice(service.update(&self.vehicle_id, &self.to_update()))
            }
            Action::Delete => Response::Notice(service.delete(&self.vehicle_id)),
            Action::List => Response::Listing(service.list()),
        };

        self.clear();
        response
    }
}
