use bldg_model::{CandidateRecord, StructureType, ValidationError};

fn candidate(id: &str, name: &str, structure: &str, room: Option<&str>) -> CandidateRecord {
    CandidateRecord {
        unique_id: Some(id.to_string()),
        name: Some(name.to_string()),
        structure_type: Some(structure.to_string()),
        room_number: room.map(String::from),
        ..CandidateRecord::default()
    }
}

#[test]
fn validation_order_is_stable() {
    // A row failing several checks reports the earliest one.
    let all_bad = CandidateRecord {
        unique_id: Some(" ".to_string()),
        name: None,
        structure_type: Some("城".to_string()),
        ..CandidateRecord::default()
    };
    assert_eq!(
        all_bad.into_validated().unwrap_err(),
        ValidationError::MissingIdentity
    );

    let no_name = CandidateRecord {
        unique_id: Some("U7".to_string()),
        name: None,
        structure_type: Some("城".to_string()),
        ..CandidateRecord::default()
    };
    assert_eq!(
        no_name.into_validated().unwrap_err(),
        ValidationError::MissingName
    );
}

#[test]
fn identity_is_trimmed() {
    let record = candidate("  U42  ", "コーポ桜", "マンション", Some("202"))
        .into_validated()
        .unwrap();
    assert_eq!(record.unique_id.as_str(), "U42");
}

#[test]
fn both_vocabularies_validate() {
    let ja = candidate("U1", "ビルA", "アパート", Some("101"))
        .into_validated()
        .unwrap();
    let en = candidate("U2", "Building B", "APARTMENT", Some("102"))
        .into_validated()
        .unwrap();
    assert_eq!(ja.structure_type, StructureType::Apartment);
    assert_eq!(en.structure_type, StructureType::Apartment);
}

#[test]
fn record_round_trips_through_json() {
    let record = candidate("U9", "メゾン青葉", "アパート", Some("A-101-B"))
        .into_validated()
        .unwrap();
    let json = serde_json::to_string(&record).unwrap();
    let round: bldg_model::BuildingRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(round, record);
    assert_eq!(round.room_number.as_deref(), Some("A-101-B"));
}
