use thiserror::Error;

use bldg_model::{BuildingId, ValidationError};

#[derive(Debug, Error)]
pub enum StoreError {
    /// A create lost the uniqueness race: the id is already taken.
    #[error("building {0} already exists")]
    Conflict(BuildingId),

    #[error("building {0} does not exist")]
    NotFound(BuildingId),

    /// The record breaks a structural invariant; nothing was committed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("catalog lock poisoned")]
    Poisoned,

    #[error("catalog io: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog serialization: {0}")]
    Serde(#[from] serde_json::Error),
}
