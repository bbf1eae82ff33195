//! Create-or-overwrite by natural key.

use serde::Serialize;

use bldg_model::BuildingRecord;
use bldg_store::{Catalog, StoreError};

/// What the engine did with a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// Look up the record's unique id and either create a new entry or
/// overwrite every mutable field of the existing one.
///
/// The unique id is the sole matching key. Rows are applied one at a time
/// in file order, so within a batch the last row sharing an id wins.
pub fn upsert<C: Catalog>(
    catalog: &C,
    record: BuildingRecord,
) -> Result<UpsertOutcome, StoreError> {
    match catalog.find_by_unique_id(&record.unique_id)? {
        Some(_) => {
            catalog.update(record)?;
            Ok(UpsertOutcome::Updated)
        }
        None => {
            catalog.create(record)?;
            Ok(UpsertOutcome::Created)
        }
    }
}
