use stopsync_model::{Direction, ProcessingOptions, RouteLink, StopRecord};

#[test]
fn route_link_serializes_direction_as_source_token() {
    let link = RouteLink {
        route_number: "T100".to_string(),
        stop_id: Some("1002013".to_string()),
        direction: Direction::Inbound,
        zone: "1".to_string(),
        sequence: 3,
    };
    let json = serde_json::to_value(&link).expect("serialize link");
    assert_eq!(json["direction"], "1");
    assert_eq!(json["sequence"], 3);

    let round: RouteLink = serde_json::from_value(json).expect("deserialize link");
    assert_eq!(round, link);
}

#[test]
fn unresolved_stop_id_serializes_as_null() {
    let link = RouteLink {
        route_number: "10".to_string(),
        stop_id: None,
        direction: Direction::Outbound,
        zone: "A".to_string(),
        sequence: 1,
    };
    let json = serde_json::to_value(&link).expect("serialize link");
    assert!(json["stop_id"].is_null());
}

#[test]
fn stop_record_fields_follow_output_order() {
    let stop = StopRecord {
        stop_id: "1002013".to_string(),
        stop_code: Some("KL123".to_string()),
        stop_name: Some("Jalan Ampang".to_string()),
        street_name: None,
        latitude: 3.1,
        longitude: 101.7,
    };
    let json = serde_json::to_string(&stop).expect("serialize stop");
    let order: Vec<usize> = [
        "stop_id",
        "stop_code",
        "stop_name",
        "street_name",
        "latitude",
        "longitude",
    ]
    .iter()
    .map(|key| json.find(key).expect("column present"))
    .collect();
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn options_round_trip() {
    let options = ProcessingOptions::default();
    let json = serde_json::to_string(&options).expect("serialize options");
    let round: ProcessingOptions = serde_json::from_str(&json).expect("deserialize options");
    assert_eq!(round.native_id_prefix, "1");
    assert_eq!(round.excluded_route_marker.as_deref(), Some("(OS)"));
}
