use serde::Serialize;
use thiserror::Error;

/// Failures that abort a batch before any row is processed.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("csv decode: {0}")]
    Csv(#[from] csv::Error),

    /// The header row recognized none of the mapped columns, so the
    /// source cannot be this feed at all.
    #[error("header row does not match any known column")]
    UnrecognizedHeader,
}

/// Per-row coercion failures. The offending row is skipped and the batch
/// continues.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum NormalizeError {
    #[error("rent amount {value:?} is not an integer")]
    InvalidRent { value: String },

    #[error("size {value:?} is not a decimal number")]
    InvalidSize { value: String },
}
