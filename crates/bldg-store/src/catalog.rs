use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bldg_model::{BuildingId, BuildingRecord};

use crate::error::StoreError;

/// A persisted catalog entry: the record plus bookkeeping timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub record: BuildingRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The keyed store behind the import pipeline.
///
/// Natural-key uniqueness is the store's own responsibility: a create for
/// an existing id must fail with [`StoreError::Conflict`] atomically, not
/// rely on the caller's read-then-decide. Every commit re-runs structural
/// validation, so no entry path can persist an invalid record.
pub trait Catalog {
    fn find_by_unique_id(&self, id: &BuildingId) -> Result<Option<CatalogEntry>, StoreError>;

    /// Insert a new record under its unique id.
    fn create(&self, record: BuildingRecord) -> Result<CatalogEntry, StoreError>;

    /// Overwrite every mutable field of an existing record, including
    /// clearing fields the incoming record leaves absent.
    fn update(&self, record: BuildingRecord) -> Result<CatalogEntry, StoreError>;
}
