//! JSON-file persistence around the in-memory catalog.
//!
//! The file is read whole on open and written back on [`FileCatalog::save`];
//! between the two, the in-memory map carries the uniqueness invariant.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use bldg_model::{BuildingId, BuildingRecord};

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::StoreError;
use crate::memory::InMemoryCatalog;

#[derive(Debug)]
pub struct FileCatalog {
    path: PathBuf,
    inner: InMemoryCatalog,
}

impl FileCatalog {
    /// Open a catalog file, starting empty if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let inner = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let entries: Vec<CatalogEntry> = serde_json::from_str(&contents)?;
            InMemoryCatalog::from_entries(entries)
        } else {
            InMemoryCatalog::new()
        };
        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.inner.entries()
    }

    /// Write the catalog back to its file.
    pub fn save(&self) -> Result<(), StoreError> {
        let entries = self.inner.entries();
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;
        info!(path = %self.path.display(), entries = entries.len(), "catalog saved");
        Ok(())
    }
}

impl Catalog for FileCatalog {
    fn find_by_unique_id(&self, id: &BuildingId) -> Result<Option<CatalogEntry>, StoreError> {
        self.inner.find_by_unique_id(id)
    }

    fn create(&self, record: BuildingRecord) -> Result<CatalogEntry, StoreError> {
        self.inner.create(record)
    }

    fn update(&self, record: BuildingRecord) -> Result<CatalogEntry, StoreError> {
        self.inner.update(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bldg_model::StructureType;

    fn apartment(id: &str) -> BuildingRecord {
        BuildingRecord {
            unique_id: BuildingId::new(id).unwrap(),
            name: "ハイツ月見".to_string(),
            address: Some("月見町3-4".to_string()),
            structure_type: StructureType::Apartment,
            room_number: Some("101".to_string()),
            rent_amount: Some(65_000),
            size: Some("28.35".parse().unwrap()),
        }
    }

    #[test]
    fn save_and_reopen_round_trips() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("catalog.json");

        let catalog = FileCatalog::open(&path).unwrap();
        assert!(catalog.is_empty());
        catalog.create(apartment("U1")).unwrap();
        catalog.create(apartment("U2")).unwrap();
        catalog.save().unwrap();

        let reopened = FileCatalog::open(&path).unwrap();
        assert_eq!(reopened.len(), 2);
        let entry = reopened
            .find_by_unique_id(&BuildingId::new("U1").unwrap())
            .unwrap()
            .expect("entry");
        assert_eq!(entry.record, apartment("U1"));
    }

    #[test]
    fn reopened_catalog_still_enforces_uniqueness() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("catalog.json");

        let catalog = FileCatalog::open(&path).unwrap();
        catalog.create(apartment("U1")).unwrap();
        catalog.save().unwrap();

        let reopened = FileCatalog::open(&path).unwrap();
        let error = reopened.create(apartment("U1")).unwrap_err();
        assert!(matches!(error, StoreError::Conflict(_)));
    }
}
