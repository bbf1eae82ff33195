//! Canonical field names and the header vocabulary of source files.
//!
//! The map is configuration, not row data: swapping it (for a different
//! localization) must not touch any other component. Lookup is by exact
//! header text; there is no fuzzy matching.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Internal, format-independent names for the seven building attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    UniqueId,
    Name,
    Address,
    StructureType,
    RoomNumber,
    RentAmount,
    Size,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::UniqueId,
        Field::Name,
        Field::Address,
        Field::StructureType,
        Field::RoomNumber,
        Field::RentAmount,
        Field::Size,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::UniqueId => "unique_id",
            Field::Name => "name",
            Field::Address => "address",
            Field::StructureType => "structure_type",
            Field::RoomNumber => "room_number",
            Field::RentAmount => "rent_amount",
            Field::Size => "size",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps canonical fields to the literal header text a source file uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    pub unique_id: String,
    pub name: String,
    pub address: String,
    pub structure_type: String,
    pub room_number: String,
    pub rent_amount: String,
    pub size: String,
}

impl ColumnMap {
    /// Headers used by the production feed.
    pub fn japanese() -> Self {
        Self {
            unique_id: "ユニークID".to_string(),
            name: "物件名".to_string(),
            address: "住所".to_string(),
            structure_type: "建物の種類".to_string(),
            room_number: "部屋番号".to_string(),
            rent_amount: "賃料".to_string(),
            size: "広さ".to_string(),
        }
    }

    /// Headers used by local fixtures and ad-hoc exports.
    pub fn english() -> Self {
        Self {
            unique_id: "unique_id".to_string(),
            name: "name".to_string(),
            address: "address".to_string(),
            structure_type: "type".to_string(),
            room_number: "room_number".to_string(),
            rent_amount: "rent_amount".to_string(),
            size: "size".to_string(),
        }
    }

    /// Header text expected for a canonical field. Total over [`Field`].
    pub fn header(&self, field: Field) -> &str {
        match field {
            Field::UniqueId => &self.unique_id,
            Field::Name => &self.name,
            Field::Address => &self.address,
            Field::StructureType => &self.structure_type,
            Field::RoomNumber => &self.room_number,
            Field::RentAmount => &self.rent_amount,
            Field::Size => &self.size,
        }
    }

    /// Returns true if the given header text is one of the mapped columns.
    pub fn recognizes(&self, header: &str) -> bool {
        Field::ALL.iter().any(|field| self.header(*field) == header)
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::japanese()
    }
}
