//! The batch orchestrator: decode, normalize, validate, upsert, row by row.

use thiserror::Error;
use tracing::{info, warn};

use bldg_ingest::{ColumnMap, IngestError, RawRow, normalize_row, open_rows};
use bldg_store::{Catalog, StoreError};

use crate::outcome::{BatchOutcome, RowError, RowFailure};
use crate::source::ImportSource;
use crate::upsert::{UpsertOutcome, upsert};

/// Failures that abort a batch before any row is committed.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("open source {filename:?}: {source}")]
    Open {
        filename: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// Run one import batch over the source.
///
/// One forward pass; each row is normalized, validated, and upserted
/// independently, so a failing row is recorded and skipped while every
/// other row proceeds. Rows already committed stay committed — there is
/// no batch-wide transaction. Only an undecodable source fails the batch,
/// and that is checked before the first row.
pub fn import<C: Catalog>(
    source: &ImportSource,
    map: &ColumnMap,
    catalog: &C,
) -> Result<BatchOutcome, ImportError> {
    let reader = source.open().map_err(|error| ImportError::Open {
        filename: source.filename().to_string(),
        source: error,
    })?;
    let rows = open_rows(reader, map)?;
    info!(filename = source.filename(), "import started");

    let mut outcome = BatchOutcome::default();
    for (idx, row) in rows.enumerate() {
        let row_index = idx + 1;
        match process_row(row, map, catalog) {
            Ok(UpsertOutcome::Created) => outcome.created += 1,
            Ok(UpsertOutcome::Updated) => outcome.updated += 1,
            Err(reason) => {
                warn!(row = row_index, %reason, "row skipped");
                outcome.skipped += 1;
                outcome.errors.push(RowError { row_index, reason });
            }
        }
    }

    info!(
        created = outcome.created,
        updated = outcome.updated,
        skipped = outcome.skipped,
        "import finished"
    );
    Ok(outcome)
}

fn process_row<C: Catalog>(
    row: Result<RawRow, csv::Error>,
    map: &ColumnMap,
    catalog: &C,
) -> Result<UpsertOutcome, RowFailure> {
    let row = row.map_err(|error| RowFailure::Decode(error.to_string()))?;
    let candidate = normalize_row(&row, map)?;
    let record = candidate.into_validated()?;
    upsert(catalog, record).map_err(|error| match error {
        StoreError::Validation(inner) => RowFailure::Invalid(inner),
        other => RowFailure::Store(other.to_string()),
    })
}
