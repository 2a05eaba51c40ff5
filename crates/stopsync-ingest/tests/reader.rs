use std::io::Write;

use stopsync_ingest::{IngestError, read_authority_registry, read_general_registry};
use stopsync_model::Direction;
use tempfile::NamedTempFile;

fn csv_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents).expect("write csv");
    file
}

#[test]
fn reads_general_registry_rows() {
    let file = csv_file(
        concat!(
            "\u{feff}stop_id,stop_name,street_name,latitude,longitude,",
            "route_number,direction,zone,extra\n",
            "N1, KL 100 Jalan Ampang ,,3.15,101.71,T100,0,1,x\n",
            ",Pasar Seni,Jln Sultan,3.14,101.69,U80 (OS),1,2,y\n",
        )
        .as_bytes(),
    );
    let rows = read_general_registry(file.path()).expect("read");
    assert_eq!(rows.len(), 2);

    let first = &rows[0];
    assert_eq!(first.stop_id.as_deref(), Some("N1"));
    assert_eq!(first.stop_name.as_deref(), Some("KL 100 Jalan Ampang"));
    assert_eq!(first.street_name, None);
    assert_eq!(first.latitude, 3.15);
    assert_eq!(first.route_number, "T100");
    assert_eq!(first.direction, Direction::Outbound);
    assert_eq!(first.zone, "1");

    let second = &rows[1];
    assert_eq!(second.stop_id, None);
    assert_eq!(second.street_name.as_deref(), Some("Jln Sultan"));
    assert_eq!(second.direction, Direction::Inbound);
}

#[test]
fn optional_columns_may_be_absent() {
    let file = csv_file(
        b"stop_id,stop_name,latitude,longitude,route_number,direction\n\
          N1,Pasar Seni,3.14,101.69,U80,loop\n",
    );
    let rows = read_general_registry(file.path()).expect("read");
    assert_eq!(rows[0].street_name, None);
    assert_eq!(rows[0].zone, "");
    assert_eq!(rows[0].direction, Direction::Other("loop".to_string()));
}

#[test]
fn reads_authority_registry() {
    let file = csv_file(
        b"stop_id,stop_code,stop_name\n\
          1000100,KL100,\n\
          1000200,,KJ15 Masjid Jamek\n",
    );
    let records = read_authority_registry(file.path()).expect("read");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].registry_id, "1000100");
    assert_eq!(records[0].stop_code.as_deref(), Some("KL100"));
    assert_eq!(records[0].stop_name, None);
    assert_eq!(records[1].stop_code, None);
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_authority_registry(&dir.path().join("stops_mrt.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn missing_required_column_is_reported() {
    let file = csv_file(b"stop_id,stop_name,latitude,longitude,direction\nN1,A,3.1,101.6,0\n");
    let err = read_general_registry(file.path()).unwrap_err();
    match err {
        IngestError::MissingColumn { column, .. } => assert_eq!(column, "route_number"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unparsable_coordinate_is_a_csv_error() {
    let file = csv_file(
        b"stop_id,stop_name,latitude,longitude,route_number,direction\n\
          N1,Pasar Seni,north,101.69,U80,0\n",
    );
    let err = read_general_registry(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::Csv { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn utf16_files_are_rejected() {
    let file = csv_file(&[0xFF, 0xFE, b's', 0, b't', 0]);
    let err = read_authority_registry(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedEncoding { encoding: "UTF-16 LE", .. }));
}
