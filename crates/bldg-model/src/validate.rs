//! Structural validation.
//!
//! One authority for every entry path: candidates coming out of the row
//! normalizer and records being committed by a catalog store both pass
//! through here, so the conditional room-number invariant cannot be
//! bypassed.

use crate::building::{BuildingRecord, CandidateRecord};
use crate::error::ValidationError;
use crate::ids::BuildingId;
use crate::structure::StructureType;

/// Validate a candidate and promote it to a [`BuildingRecord`].
///
/// Checks run in order and stop at the first failure: identity, name,
/// structure type, then the conditional room-number rule.
pub fn validate(candidate: CandidateRecord) -> Result<BuildingRecord, ValidationError> {
    let unique_id = match candidate.unique_id {
        Some(raw) => BuildingId::new(raw)?,
        None => return Err(ValidationError::MissingIdentity),
    };
    let name = match candidate.name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(ValidationError::MissingName),
    };
    let structure_type = parse_structure_type(candidate.structure_type.as_deref())?;
    let room_number = check_room_number(structure_type, candidate.room_number)?;

    Ok(BuildingRecord {
        unique_id,
        name,
        address: candidate.address,
        structure_type,
        room_number,
        rent_amount: candidate.rent_amount,
        size: candidate.size,
    })
}

/// Invariants re-checked on already-typed records before every commit.
pub(crate) fn check_record(record: &BuildingRecord) -> Result<(), ValidationError> {
    if record.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    let present = record
        .room_number
        .as_deref()
        .is_some_and(|room| !room.trim().is_empty());
    if !present && record.structure_type.requires_room_number() {
        return Err(ValidationError::MissingRoomNumber(record.structure_type));
    }
    Ok(())
}

fn parse_structure_type(raw: Option<&str>) -> Result<StructureType, ValidationError> {
    let raw = raw.unwrap_or("");
    raw.parse().map_err(|_| ValidationError::InvalidType {
        value: raw.to_string(),
    })
}

fn check_room_number(
    structure_type: StructureType,
    room_number: Option<String>,
) -> Result<Option<String>, ValidationError> {
    let present = room_number
        .as_deref()
        .is_some_and(|room| !room.trim().is_empty());
    if present {
        return Ok(room_number);
    }
    if structure_type.requires_room_number() {
        return Err(ValidationError::MissingRoomNumber(structure_type));
    }
    Ok(None)
}
