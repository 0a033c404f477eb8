//! Store opening helpers

use std::path::PathBuf;

use fleetbook_store::{JsonFileGateway, VehicleStore};
use fleetbook_types::Result;
use tracing::debug;

use crate::config::Config;
use crate::service::VehicleService;

/// Open the vehicle store configured in `config`
pub fn open_vehicle_store(config: &Config) -> Result<VehicleStore> {
    open_vehicle_store_at(config.store_dir())
}

/// Open the vehicle store at a custom directory
pub fn open_vehicle_store_at(store_dir: PathBuf) -> Result<VehicleStore> {
    let store = VehicleStore::open(store_dir)?;
    debug!(
        path = %store.gateway().path().display(),
        count = store.count(),
        "Loaded vehicle catalog"
    );
    Ok(store)
}

/// Open the configured store wrapped in a service
pub fn open_vehicle_service(config: &Config) -> Result<VehicleService<JsonFileGateway>> {
    open_vehicle_store(config).map(VehicleService::new)
}
