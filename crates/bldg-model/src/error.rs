use serde::Serialize;
use thiserror::Error;

use crate::structure::StructureType;

/// Reasons the structural validator rejects a record.
///
/// Checks run in this order and stop at the first failure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ValidationError {
    #[error("unique id is missing or blank")]
    MissingIdentity,

    #[error("name is missing or blank")]
    MissingName,

    #[error("structure type {value:?} is not a recognized building type")]
    InvalidType { value: String },

    #[error("room number is required for {0}")]
    MissingRoomNumber(StructureType),
}
