//! Row normalization: raw header-keyed text into a candidate record.

use bldg_model::CandidateRecord;

use crate::columns::{ColumnMap, Field};
use crate::error::NormalizeError;
use crate::reader::RawRow;

/// Resolve one raw row into a candidate record via the column map.
///
/// Header absence and blank text are equivalent: both yield an absent
/// field. Numeric fields are coerced here; a bad value fails the row.
/// The structure type passes through as raw text for the validator.
pub fn normalize_row(row: &RawRow, map: &ColumnMap) -> Result<CandidateRecord, NormalizeError> {
    let text = |field: Field| text_field(row, map, field);

    let rent_amount = match text(Field::RentAmount) {
        Some(raw) => Some(
            raw.parse::<i64>()
                .map_err(|_| NormalizeError::InvalidRent { value: raw })?,
        ),
        None => None,
    };
    let size = match text(Field::Size) {
        Some(raw) => Some(
            raw.parse()
                .map_err(|_| NormalizeError::InvalidSize { value: raw })?,
        ),
        None => None,
    };

    Ok(CandidateRecord {
        unique_id: text(Field::UniqueId),
        name: text(Field::Name),
        address: text(Field::Address),
        structure_type: text(Field::StructureType),
        room_number: text(Field::RoomNumber),
        rent_amount,
        size,
    })
}

fn text_field(row: &RawRow, map: &ColumnMap, field: Field) -> Option<String> {
    let raw = row.get(map.header(field))?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
