//! The closed three-way building classification.
//!
//! The split drives the conditional room-number rule: multi-unit dwellings
//! (apartments and multi-unit residences) must carry a room number, while a
//! standalone house may omit it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Structure classification of a building.
///
/// Fixed enumeration; source files are not allowed to introduce new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StructureType {
    /// Low-rise multi-unit rental building.
    Apartment,

    /// Standalone single-household house.
    House,

    /// Larger multi-unit residence (condominium-style building).
    MultiUnitResidence,
}

impl StructureType {
    pub const ALL: [StructureType; 3] = [
        StructureType::Apartment,
        StructureType::House,
        StructureType::MultiUnitResidence,
    ];

    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureType::Apartment => "APARTMENT",
            StructureType::House => "HOUSE",
            StructureType::MultiUnitResidence => "MULTI_UNIT_RESIDENCE",
        }
    }

    /// Returns the localized value as it appears in source files.
    pub fn label_ja(&self) -> &'static str {
        match self {
            StructureType::Apartment => "アパート",
            StructureType::House => "一戸建て",
            StructureType::MultiUnitResidence => "マンション",
        }
    }

    /// Returns true if a record of this type must carry a room number.
    pub fn requires_room_number(&self) -> bool {
        !matches!(self, StructureType::House)
    }
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StructureType {
    type Err = String;

    /// Parse a structure type from raw cell text.
    /// Accepts the localized source vocabulary and the canonical names
    /// (case-insensitive, with spaces or hyphens for underscores).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace([' ', '-'], "_");

        match normalized.as_str() {
            "アパート" | "APARTMENT" => Ok(StructureType::Apartment),
            "一戸建て" | "HOUSE" => Ok(StructureType::House),
            "マンション" | "MULTI_UNIT_RESIDENCE" => Ok(StructureType::MultiUnitResidence),
            _ => Err(format!("Unknown structure type: {s}")),
        }
    }
}
