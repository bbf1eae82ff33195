use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use tracing::debug;

use bldg_model::{BuildingId, BuildingRecord};

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::StoreError;

/// In-memory catalog.
///
/// Uniqueness is decided under a single lock guard, so two racing creates
/// for one never-before-seen id cannot both win: the loser gets
/// [`StoreError::Conflict`] instead of corrupting state.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    entries: Mutex<BTreeMap<BuildingId, CatalogEntry>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let map = entries
            .into_iter()
            .map(|entry| (entry.record.unique_id.clone(), entry))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all entries in id order.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.entries
            .lock()
            .map(|map| map.values().cloned().collect())
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<BuildingId, CatalogEntry>>, StoreError> {
        self.entries.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl Catalog for InMemoryCatalog {
    fn find_by_unique_id(&self, id: &BuildingId) -> Result<Option<CatalogEntry>, StoreError> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn create(&self, record: BuildingRecord) -> Result<CatalogEntry, StoreError> {
        record.validate()?;
        let mut entries = self.lock()?;
        match entries.entry(record.unique_id.clone()) {
            Entry::Occupied(_) => Err(StoreError::Conflict(record.unique_id)),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let entry = CatalogEntry {
                    record,
                    created_at: now,
                    updated_at: now,
                };
                slot.insert(entry.clone());
                debug!(id = %entry.record.unique_id, "created catalog entry");
                Ok(entry)
            }
        }
    }

    fn update(&self, record: BuildingRecord) -> Result<CatalogEntry, StoreError> {
        record.validate()?;
        let mut entries = self.lock()?;
        let Some(existing) = entries.get_mut(&record.unique_id) else {
            return Err(StoreError::NotFound(record.unique_id));
        };
        existing.record = record;
        existing.updated_at = Utc::now();
        debug!(id = %existing.record.unique_id, "updated catalog entry");
        Ok(existing.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bldg_model::StructureType;

    fn house(id: &str, name: &str) -> BuildingRecord {
        BuildingRecord {
            unique_id: BuildingId::new(id).unwrap(),
            name: name.to_string(),
            address: None,
            structure_type: StructureType::House,
            room_number: None,
            rent_amount: None,
            size: None,
        }
    }

    #[test]
    fn create_then_find() {
        let catalog = InMemoryCatalog::new();
        catalog.create(house("U1", "一軒家")).unwrap();
        let found = catalog
            .find_by_unique_id(&BuildingId::new("U1").unwrap())
            .unwrap()
            .expect("entry");
        assert_eq!(found.record.name, "一軒家");
        assert_eq!(found.created_at, found.updated_at);
    }

    #[test]
    fn second_create_for_same_id_conflicts() {
        let catalog = InMemoryCatalog::new();
        catalog.create(house("U1", "最初")).unwrap();
        let error = catalog.create(house("U1", "二番目")).unwrap_err();
        assert!(matches!(error, StoreError::Conflict(_)));
        // The original entry is untouched.
        assert_eq!(catalog.entries()[0].record.name, "最初");
    }

    #[test]
    fn update_overwrites_and_clears_fields() {
        let catalog = InMemoryCatalog::new();
        let mut record = house("U1", "古い名前");
        record.address = Some("旧住所".to_string());
        record.rent_amount = Some(90_000);
        catalog.create(record).unwrap();

        // Incoming row supplies no address or rent: both must clear.
        catalog.update(house("U1", "新しい名前")).unwrap();
        let entry = catalog
            .find_by_unique_id(&BuildingId::new("U1").unwrap())
            .unwrap()
            .expect("entry");
        assert_eq!(entry.record.name, "新しい名前");
        assert_eq!(entry.record.address, None);
        assert_eq!(entry.record.rent_amount, None);
    }

    #[test]
    fn update_of_missing_id_is_not_found() {
        let catalog = InMemoryCatalog::new();
        let error = catalog.update(house("U9", "どこにもない")).unwrap_err();
        assert!(matches!(error, StoreError::NotFound(_)));
    }

    #[test]
    fn invalid_update_never_commits() {
        let catalog = InMemoryCatalog::new();
        catalog.create(house("U1", "一軒家")).unwrap();

        // Type flips to apartment without a room number: must fail, and
        // the stored record must keep its previous state.
        let mut flipped = house("U1", "一軒家");
        flipped.structure_type = StructureType::Apartment;
        let error = catalog.update(flipped).unwrap_err();
        assert!(matches!(error, StoreError::Validation(_)));

        let entry = catalog
            .find_by_unique_id(&BuildingId::new("U1").unwrap())
            .unwrap()
            .expect("entry");
        assert_eq!(entry.record.structure_type, StructureType::House);
    }
}
