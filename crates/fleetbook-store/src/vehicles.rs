//! Vehicle store: the sole owner of the ID → record mapping

use std::fs;
use std::path::PathBuf;

use fleetbook_types::{Result, StoreError, Vehicle, VehicleMap, VehicleUpdate};
use tracing::{debug, error};

use crate::gateway::{JsonFileGateway, PersistenceGateway, STORE_FILE_NAME};

/// In-memory vehicle map, written through its gateway after every mutation.
///
/// A mutation whose write fails is undone before the error is returned, so the
/// map always matches the last successful save.
pub struct VehicleStore<G = JsonFileGateway> {
    gateway: G,
    vehicles: VehicleMap,
}

impl VehicleStore<JsonFileGateway> {
    /// Create or load a vehicle store in `store_dir`
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        Self::with_gateway(JsonFileGateway::new(store_dir.join(STORE_FILE_NAME)))
    }
}

impl<G: PersistenceGateway> VehicleStore<G> {
    /// Load the store through an arbitrary gateway
    pub fn with_gateway(gateway: G) -> Result<Self> {
        let vehicles = gateway.load()?;
        debug!(count = vehicles.len(), "Opened vehicle store");
        Ok(Self { gateway, vehicles })
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn persist(&self) -> Result<()> {
        match self.gateway.save(&self.vehicles) {
            Ok(()) => Ok(()),
            Err(e) => {
                error!(error = %e, "Failed to persist vehicles, change reverted");
                Err(e)
            }
        }
    }

    /// Insert a new vehicle. An existing ID is rejected, never overwritten.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<()> {
        if self.vehicles.contains_key(&vehicle.id) {
            return Err(StoreError::DuplicateKey(vehicle.id).into());
        }

        let id = vehicle.id.clone();
        self.vehicles.insert(id.clone(), vehicle);
        if let Err(e) = self.persist() {
            self.vehicles.pop();
            return Err(e);
        }

        debug!(id = %id, "Added vehicle");
        Ok(())
    }

    /// Get a vehicle by ID
    pub fn get_vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.get(id)
    }

    /// Overwrite the non-empty fields of `update` on an existing vehicle
    pub fn update_vehicle(&mut self, id: &str, update: &VehicleUpdate) -> Result<()> {
        let Some(vehicle) = self.vehicles.get_mut(id) else {
            return Err(StoreError::NotFound(id.to_string()).into());
        };

        let previous = vehicle.clone();
        vehicle.apply(update);

        if let Err(e) = self.persist() {
            if let Some(vehicle) = self.vehicles.get_mut(id) {
                *vehicle = previous;
            }
            return Err(e);
        }

        debug!(id = %id, "Updated vehicle");
        Ok(())
    }

    /// Remove a vehicle by ID, returning it
    pub fn remove_vehicle(&mut self, id: &str) -> Result<Vehicle> {
        let Some((index, key, vehicle)) = self.vehicles.shift_remove_full(id) else {
            return Err(StoreError::NotFound(id.to_string()).into());
        };

        if let Err(e) = self.persist() {
            self.vehicles.shift_insert(index, key, vehicle);
            return Err(e);
        }

        debug!(id = %id, "Removed vehicle");
        Ok(vehicle)
    }

    /// All vehicles in mapping order
    pub fn all_vehicles(&self) -> Vec<&Vehicle> {
        self.vehicles.values().collect()
    }

    /// Get total vehicle count
    pub fn count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
