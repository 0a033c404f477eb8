//! Persistent store for vehicle records

pub mod gateway;
pub mod vehicles;

pub use gateway::{JsonFileGateway, MemoryGateway, PersistenceGateway, STORE_FILE_NAME};
pub use vehicles::VehicleStore;
