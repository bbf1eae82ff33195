//! The batch outcome: failure handling as ordinary data flow.

use serde::Serialize;
use thiserror::Error;

use bldg_ingest::NormalizeError;
use bldg_model::ValidationError;

/// Why one row was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum RowFailure {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Malformed(#[from] NormalizeError),

    /// The decoder rejected the row mid-stream.
    #[error("row could not be decoded: {0}")]
    Decode(String),

    /// The store refused the commit (uniqueness conflict or any other
    /// storage failure). Treated like every other row failure.
    #[error("storage rejected row: {0}")]
    Store(String),
}

/// One skipped row: its 1-based position among the data rows, plus why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowError {
    pub row_index: usize,
    pub reason: RowFailure,
}

/// Aggregate result of one import run. Counts plus the error list are the
/// full observable outcome; callers may log it or surface it later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
    pub errors: Vec<RowError>,
}

impl BatchOutcome {
    pub fn rows_seen(&self) -> usize {
        self.created + self.updated + self.skipped
    }

    pub fn has_failures(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serializes_with_reasons() {
        let outcome = BatchOutcome {
            created: 2,
            updated: 1,
            skipped: 1,
            errors: vec![RowError {
                row_index: 3,
                reason: RowFailure::Invalid(ValidationError::MissingName),
            }],
        };
        let json = serde_json::to_string(&outcome).expect("serialize outcome");
        assert!(json.contains("\"row_index\":3"));
        assert!(json.contains("MissingName"));
        assert_eq!(outcome.rows_seen(), 4);
        assert!(outcome.has_failures());
    }
}
