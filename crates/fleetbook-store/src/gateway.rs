//! Load/save boundary between the vehicle map and its on-disk form

use std::cell::{Cell, RefCell};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use fleetbook_types::{Result, VehicleMap};
use tracing::{debug, warn};

/// File name of the vehicle document inside the data directory
pub const STORE_FILE_NAME: &str = "vehicles.json";

/// Round-trips the whole vehicle map
pub trait PersistenceGateway {
    /// Read the persisted map. Missing or malformed data yields an empty map.
    fn load(&self) -> Result<VehicleMap>;

    /// Overwrite the persisted map with `vehicles`
    fn save(&self, vehicles: &VehicleMap) -> Result<()>;
}

/// Single JSON document on disk, keyed by vehicle ID
#[derive(Debug, Clone)]
pub struct JsonFileGateway {
    path: PathBuf,
}

impl JsonFileGateway {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceGateway for JsonFileGateway {
    fn load(&self) -> Result<VehicleMap> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No vehicle file, starting empty");
                return Ok(VehicleMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader::<_, VehicleMap>(reader) {
            Ok(vehicles) => Ok(normalize_ids(vehicles, &self.path)),
            Err(e) if e.is_io() => Err(io::Error::from(e).into()),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Discarding malformed vehicle file, starting empty"
                );
                Ok(VehicleMap::new())
            }
        }
    }

    fn save(&self, vehicles: &VehicleMap) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, vehicles)?;
        writer.flush()?;
        debug!(path = %self.path.display(), count = vehicles.len(), "Saved vehicles");
        Ok(())
    }
}

/// The map key is the record's identity; an inner ID that disagrees is rewritten
fn normalize_ids(vehicles: VehicleMap, path: &Path) -> VehicleMap {
    vehicles
        .into_iter()
        .map(|(key, mut vehicle)| {
            if vehicle.id != key {
                warn!(
                    path = %path.display(),
                    key = %key,
                    vehicle_id = %vehicle.id,
                    "Vehicle ID differs from its key, using the key"
                );
                vehicle.id = key.clone();
            }
            (key, vehicle)
        })
        .collect()
}

/// Ephemeral gateway that keeps the last saved map in memory
#[derive(Debug, Default)]
pub struct MemoryGateway {
    snapshot: RefCell<VehicleMap>,
    saves: Cell<usize>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Copy of the last saved map
    pub fn snapshot(&self) -> VehicleMap {
        self.snapshot.borrow().clone()
    }
}

impl PersistenceGateway for MemoryGateway {
    fn load(&self) -> Result<VehicleMap> {
        Ok(self.snapshot.borrow().clone())
    }

    fn save(&self, vehicles: &VehicleMap) -> Result<()> {
        *self.snapshot.borrow_mut() = vehicles.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetbook_types::Vehicle;
    use tempfile::tempdir;

    fn sample_map() -> VehicleMap {
        let mut map = VehicleMap::new();
        for v in [
            Vehicle::new("V2", "Honda", "Civic", "2018", "Red"),
            Vehicle::new("V1", "Toyota", "Corolla", "2020", "Blue"),
            Vehicle::new("A9", "Ford", "Focus", "2015", "Grey"),
        ] {
            map.insert(v.id.clone(), v);
        }
        map
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let gateway = JsonFileGateway::new(dir.path().join(STORE_FILE_NAME));
        assert!(gateway.load().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        std::fs::write(&path, "{ this is not json").unwrap();
        let gateway = JsonFileGateway::new(path);
        assert!(gateway.load().unwrap().is_empty());
    }

    #[test]
    fn test_empty_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        std::fs::write(&path, "").unwrap();
        assert!(JsonFileGateway::new(path).load().unwrap().is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        std::fs::write(&path, r#"{"V1": {"vehicle_id": "V1", "make": "Toyota"}}"#).unwrap();
        assert!(JsonFileGateway::new(path.clone()).load().unwrap().is_empty());

        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(JsonFileGateway::new(path).load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_map_and_order() {
        let dir = tempdir().unwrap();
        let gateway = JsonFileGateway::new(dir.path().join(STORE_FILE_NAME));
        let map = sample_map();

        gateway.save(&map).unwrap();
        let loaded = gateway.load().unwrap();

        assert_eq!(loaded, map);
        let ids: Vec<_> = loaded.keys().map(String::as_str).collect();
        assert_eq!(ids, ["V2", "V1", "A9"]);
    }

    #[test]
    fn test_file_layout_is_flat_object_keyed_by_id() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        JsonFileGateway::new(path.clone()).save(&sample_map()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let record = &raw["V1"];
        assert_eq!(record["vehicle_id"], "V1");
        assert_eq!(record["make"], "Toyota");
        assert_eq!(record["model"], "Corolla");
        assert_eq!(record["year"], "2020");
        assert_eq!(record["color"], "Blue");
        assert_eq!(record.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_mismatched_inner_id_uses_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        std::fs::write(
            &path,
            r#"{"V1": {"vehicle_id": "OLD", "make": "Toyota", "model": "Corolla", "year": "2020", "color": "Blue"}}"#,
        )
        .unwrap();

        let loaded = JsonFileGateway::new(path).load().unwrap();
        assert_eq!(loaded["V1"].id, "V1");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let gateway = JsonFileGateway::new(dir.path().join("absent").join(STORE_FILE_NAME));
        assert!(gateway.save(&sample_map()).is_err());
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        std::fs::create_dir(&path).unwrap();

        assert!(JsonFileGateway::new(path).load().is_err());
    }

    #[test]
    fn test_memory_gateway_counts_saves() {
        let gateway = MemoryGateway::new();
        assert_eq!(gateway.save_count(), 0);
        gateway.save(&sample_map()).unwrap();
        assert_eq!(gateway.save_count(), 1);
        assert_eq!(gateway.load().unwrap(), sample_map());
    }
}
