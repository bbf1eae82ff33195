use std::fs::File;
use std::io::Write;

use bldg_ingest::{ColumnMap, normalize_row, open_rows};

fn csv_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> File {
    let path = dir.path().join(name);
    let mut file = File::create(&path).expect("create csv");
    file.write_all(contents.as_bytes()).expect("write csv");
    File::open(&path).expect("open csv")
}

#[test]
fn streams_rows_keyed_by_header() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = csv_file(
        &dir,
        "buildings.csv",
        "ユニークID,物件名,建物の種類,部屋番号\nU1,ハイツ東,アパート,101\nU2,一軒家西,一戸建て,\n",
    );
    let map = ColumnMap::japanese();
    let reader = open_rows(file, &map).expect("open rows");
    let rows: Vec<_> = reader.collect::<Result<_, _>>().expect("read rows");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("ユニークID"), Some("U1"));
    assert_eq!(rows[1].get("部屋番号"), Some(""));

    let second = normalize_row(&rows[1], &map).expect("normalize");
    assert_eq!(second.unique_id.as_deref(), Some("U2"));
    assert_eq!(second.room_number, None);
}

#[test]
fn column_order_is_irrelevant() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = csv_file(
        &dir,
        "shuffled.csv",
        "部屋番号,建物の種類,ユニークID,物件名\n305,マンション,U3,タワー南\n",
    );
    let map = ColumnMap::japanese();
    let rows: Vec<_> = open_rows(file, &map)
        .expect("open rows")
        .collect::<Result<_, _>>()
        .expect("read rows");
    let candidate = normalize_row(&rows[0], &map).expect("normalize");
    assert_eq!(candidate.unique_id.as_deref(), Some("U3"));
    assert_eq!(candidate.room_number.as_deref(), Some("305"));
}

#[test]
fn bom_on_first_header_is_stripped() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = csv_file(
        &dir,
        "bom.csv",
        "\u{feff}ユニークID,物件名,建物の種類,部屋番号\nU4,コーポ北,アパート,202\n",
    );
    let map = ColumnMap::japanese();
    let rows: Vec<_> = open_rows(file, &map)
        .expect("open rows")
        .collect::<Result<_, _>>()
        .expect("read rows");
    assert_eq!(rows[0].get("ユニークID"), Some("U4"));
}

#[test]
fn short_rows_read_as_absent_cells() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = csv_file(
        &dir,
        "short.csv",
        "ユニークID,物件名,住所\nU5,メゾン中央\n",
    );
    let map = ColumnMap::japanese();
    let rows: Vec<_> = open_rows(file, &map)
        .expect("open rows")
        .collect::<Result<_, _>>()
        .expect("read rows");
    let candidate = normalize_row(&rows[0], &map).expect("normalize");
    assert_eq!(candidate.name.as_deref(), Some("メゾン中央"));
    assert_eq!(candidate.address, None);
}

#[test]
fn unstructured_text_is_a_batch_failure() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = csv_file(&dir, "junk.csv", "これはCSVではありません\nただのテキスト\n");
    assert!(open_rows(file, &ColumnMap::japanese()).is_err());
}

#[test]
fn english_vocabulary_is_a_configuration_change() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = csv_file(
        &dir,
        "english.csv",
        "unique_id,name,type,room_number\nU6,Riverside Flats,APARTMENT,12\n",
    );
    let map = ColumnMap::english();
    let rows: Vec<_> = open_rows(file, &map)
        .expect("open rows")
        .collect::<Result<_, _>>()
        .expect("read rows");
    let candidate = normalize_row(&rows[0], &map).expect("normalize");
    assert_eq!(candidate.structure_type.as_deref(), Some("APARTMENT"));
}
