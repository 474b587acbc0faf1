//! Integration tests for route loading.

use std::io::Write;

use relayview::route::{Route, RouteError};

#[test]
fn loads_a_route_document_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "name": "Disk Relay",
            "leg_list": [
                {{
                    "leg_num": 1, "dist": 1.0, "climb_total": 100.0, "difficulty": 1,
                    "portions": [ {{ "start_elev": 0.0, "end_dist": 1.0, "end_elev": 100.0 }} ]
                }}
            ]
        }}"#
    )
    .unwrap();

    let route = Route::load(file.path()).unwrap();
    assert_eq!(route.name, "Disk Relay");
    assert_eq!(route.legs.len(), 1);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Route::load("/nonexistent/legs.json").unwrap_err();
    assert!(matches!(err, RouteError::Io(_)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let err = Route::load(file.path()).unwrap_err();
    assert!(matches!(err, RouteError::Parse(_)));
}

#[test]
fn bundled_route_statistics_are_consistent() {
    let route = Route::bundled();
    let stats = route.stats();

    assert_eq!(stats.max_difficulty, 5);
    assert_eq!(stats.total_distance, 35.75);
    assert_eq!(stats.max_elevation, 2780.0);
}

#[test]
fn legs_without_portions_are_rejected() {
    let doc = r#"{
        "leg_list": [
            { "leg_num": 1, "dist": 1.0, "climb_total": 0.0, "difficulty": 1, "portions": [] }
        ]
    }"#;
    let err = Route::from_json(doc).unwrap_err();
    assert!(matches!(err, RouteError::NoPortions { leg: 1 }));
}

#[test]
fn all_zero_difficulties_are_rejected() {
    let doc = r#"{
        "leg_list": [
            {
                "leg_num": 1, "dist": 1.0, "climb_total": 0.0, "difficulty": 0,
                "portions": [ { "start_elev": 0.0, "end_dist": 1.0, "end_elev": 50.0 } ]
            }
        ]
    }"#;
    let err = Route::from_json(doc).unwrap_err();
    assert!(matches!(err, RouteError::FlatDifficulty));
}

#[test]
fn negative_elevation_is_rejected() {
    let doc = r#"{
        "leg_list": [
            {
                "leg_num": 1, "dist": 1.0, "climb_total": 0.0, "difficulty": 1,
                "portions": [ { "start_elev": 0.0, "end_dist": 1.0, "end_elev": -5.0 } ]
            }
        ]
    }"#;
    let err = Route::from_json(doc).unwrap_err();
    assert!(matches!(err, RouteError::Negative { leg: 1 }));
}
