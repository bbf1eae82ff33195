pub mod area;
pub mod building;
pub mod error;
pub mod ids;
pub mod structure;
pub mod validate;

pub use area::FloorArea;
pub use building::{BuildingRecord, CandidateRecord};
pub use error::ValidationError;
pub use ids::BuildingId;
pub use structure::StructureType;
pub use validate::validate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes() {
        let record = BuildingRecord {
            unique_id: BuildingId::new("U100").unwrap(),
            name: "サンハイム".to_string(),
            address: Some("東京都渋谷区1-2-3".to_string()),
            structure_type: StructureType::MultiUnitResidence,
            room_number: Some("804".to_string()),
            rent_amount: Some(120_000),
            size: Some("54.25".parse().unwrap()),
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        assert!(json.contains("\"MULTI_UNIT_RESIDENCE\""));
        assert!(json.contains("\"54.25\""));
        let round: BuildingRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
