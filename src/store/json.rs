//! JSON file store
//!
//! The file holds two tables, vehicles and handovers. Each handover names its
//! vehicle by id and carries its own checks, tyres and photos:
//!
//! ```json
//! {
//!   "vehicles": [{ "id": "v1", "make": "BMW", "model": "X5", "registration": "AB12CDE" }],
//!   "handovers": [{ "id": "h1", "vehicle_id": "v1", "name": "Sam", "date": "2024-03-01T09:30:00Z",
//!                   "status": "completed", "checks": [], "tyres": [], "photos": [] }]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::StoreError;
use crate::model::{
    CheckEntry, HandoverAggregate, HandoverRecord, PhotoEntry, TyreEntry, VehicleRecord,
};

use super::HandoverStore;

#[derive(Debug, Deserialize)]
struct StoreFile {
    #[serde(default)]
    vehicles: Vec<VehicleRow>,
    #[serde(default)]
    handovers: Vec<HandoverRow>,
}

#[derive(Debug, Deserialize)]
struct VehicleRow {
    id: String,
    #[serde(flatten)]
    vehicle: VehicleRecord,
}

#[derive(Debug, Deserialize)]
struct HandoverRow {
    #[serde(flatten)]
    handover: HandoverRecord,
    #[serde(default)]
    checks: Vec<CheckEntry>,
    #[serde(default)]
    tyres: Vec<TyreEntry>,
    #[serde(default)]
    photos: Vec<PhotoEntry>,
}

/// Handovers read from a JSON file on every lookup
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<StoreFile, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl HandoverStore for JsonFileStore {
    fn load_aggregate(&self, id: &str) -> Result<Option<HandoverAggregate>, StoreError> {
        let file = self.read()?;
        debug!(
            "Loaded {} vehicles and {} handovers from {}",
            file.vehicles.len(),
            file.handovers.len(),
            self.path.display()
        );

        let Some(row) = file.handovers.into_iter().find(|h| h.handover.id == id) else {
            return Ok(None);
        };

        let vehicle_ref = &row.handover.vehicle_ref;
        let vehicle = file
            .vehicles
            .into_iter()
            .find(|v| &v.id == vehicle_ref)
            .map(|v| v.vehicle)
            .ok_or_else(|| {
                StoreError::Invalid(format!(
                    "handover {} refers to unknown vehicle {}",
                    id, vehicle_ref
                ))
            })?;

        Ok(Some(HandoverAggregate {
            handover: row.handover,
            vehicle,
            checks: row.checks,
            tyres: row.tyres,
            photos: row.photos,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn store_with(content: &str) -> (tempfile::NamedTempFile, JsonFileStore) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        let store = JsonFileStore::new(file.path());
        (file, store)
    }

    const STORE: &str = r#"{
        "vehicles": [
            { "id": "v1", "make": "BMW", "model": "X5", "registration": "AB12CDE" }
        ],
        "handovers": [
            {
                "id": "h1", "vehicle_id": "v1", "name": "Sam Patel",
                "date": "2024-03-01T09:30:00Z", "mileage": 45000, "status": "completed",
                "checks": [{ "check_item": "lights", "checked": true }],
                "tyres": [{ "position": "NSF", "size": "275/40 R20" }],
                "photos": [{ "category": "damage", "blob_url": "https://img/1.jpg" }]
            },
            { "id": "h2", "vehicle_id": "missing", "name": "Jo", "date": "2024-03-02" }
        ]
    }"#;

    #[test]
    fn test_load_aggregate() {
        let (_file, store) = store_with(STORE);
        let aggregate = store.load_aggregate("h1").unwrap().unwrap();
        assert_eq!(aggregate.vehicle.registration, "AB12CDE");
        assert_eq!(aggregate.handover.inspector_name, "Sam Patel");
        assert_eq!(aggregate.checks.len(), 1);
        assert_eq!(aggregate.tyres.len(), 1);
        assert_eq!(aggregate.photos[0].remote_url, "https://img/1.jpg");
    }

    #[test]
    fn test_unknown_handover_is_none() {
        let (_file, store) = store_with(STORE);
        assert!(store.load_aggregate("nope").unwrap().is_none());
    }

    #[test]
    fn test_dangling_vehicle_is_invalid() {
        let (_file, store) = store_with(STORE);
        assert!(matches!(
            store.load_aggregate("h2"),
            Err(StoreError::Invalid(_))
        ));
    }

    #[test]
    fn test_io_and_parse_errors() {
        let missing = JsonFileStore::new("/definitely/not/here.json");
        assert!(matches!(
            missing.load_aggregate("h1"),
            Err(StoreError::Io { .. })
        ));

        let (_file, store) = store_with("{ not json");
        assert!(matches!(
            store.load_aggregate("h1"),
            Err(StoreError::Parse { .. })
        ));
    }
}
