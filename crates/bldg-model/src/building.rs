use serde::{Deserialize, Serialize};

use crate::area::FloorArea;
use crate::error::ValidationError;
use crate::ids::BuildingId;
use crate::structure::StructureType;
use crate::validate;

/// A row as it comes out of the normalizer: every field still optional,
/// numeric fields already coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub unique_id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    /// Raw cell text; matched against the fixed enumeration by the validator.
    pub structure_type: Option<String>,
    pub room_number: Option<String>,
    pub rent_amount: Option<i64>,
    pub size: Option<FloorArea>,
}

impl CandidateRecord {
    /// Run the structural validator and promote this candidate.
    pub fn into_validated(self) -> Result<BuildingRecord, ValidationError> {
        validate::validate(self)
    }
}

/// The catalog entity. Constructed only through validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingRecord {
    pub unique_id: BuildingId,
    pub name: String,
    pub address: Option<String>,
    pub structure_type: StructureType,
    /// Free text; unit designators such as `A-101-B` are legal.
    pub room_number: Option<String>,
    pub rent_amount: Option<i64>,
    pub size: Option<FloorArea>,
}

impl BuildingRecord {
    /// Re-check the invariants that must hold for every persisted record.
    ///
    /// Stores call this before committing, so an update that flips the
    /// structure type without supplying a room number fails instead of
    /// persisting an invalid state.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::check_record(self)
    }
}
