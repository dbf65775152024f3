use std::sync::Arc;

use layover::{dataset::Dataset, repository::Repository};

fn data_path() -> String {
    format!("{}/data/airports.json", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn load_from_file_test() {
    let dataset = Dataset::new().from_file(data_path());
    let airports = dataset.airports().unwrap();

    assert_eq!(airports.len(), 10);
    for airport in airports.iter() {
        if airport.name.is_empty() {
            panic!("name should never be empty");
        }
        if airport.city.is_empty() {
            panic!("city should never be empty");
        }
        if airport.transit_options.is_empty() {
            panic!("{} should have transit options", airport.name);
        }
    }
}

#[test]
fn load_is_cached_test() {
    let dataset = Dataset::new().from_file(data_path());
    assert!(!dataset.is_cached());
    let first = dataset.airports().unwrap();
    assert!(dataset.is_cached());
    let second = dataset.airports().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn invalidate_rereads_test() {
    let mut dataset = Dataset::new().from_file(data_path());
    let first = dataset.airports().unwrap();
    dataset.invalidate();
    assert!(!dataset.is_cached());
    let second = dataset.airports().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.len(), second.len());
}

#[test]
fn missing_file_test() {
    let dataset = Dataset::new().from_file("/definitely/not/here/airports.json");
    let err = dataset.airports().unwrap_err();
    assert!(matches!(err, layover::dataset::Error::Io(_)));
    assert!(err.is_data_load());
}

#[test]
fn malformed_json_test() {
    let dataset = Dataset::new().from_json(r#"{"airports": [ {"name": "X", "#);
    let err = dataset.airports().unwrap_err();
    assert!(matches!(err, layover::dataset::Error::Json(_)));
    assert!(err.is_data_load());
    assert!(!err.is_schema());
}

#[test]
fn missing_field_is_schema_error_test() {
    let json = r#"{"airports": [{
        "name": "X", "city": "Y", "distance_km": 10,
        "city_coords": {"lat": 1.0, "lon": 2.0},
        "transit_options": [{"mode": "cab", "transit_type": "taxi", "travel_time_minutes": 10, "frequency": "often"}]
    }]}"#;
    let err = Dataset::new().from_json(json).airports().unwrap_err();
    assert!(err.is_schema());
    assert!(err.to_string().contains("fare_euros"));
}

#[test]
fn wrong_type_is_schema_error_test() {
    let json = r#"{"airports": [{
        "name": "X", "city": "Y", "distance_km": "far",
        "city_coords": {"lat": 1.0, "lon": 2.0},
        "transit_options": []
    }]}"#;
    let err = Dataset::new().from_json(json).airports().unwrap_err();
    assert!(err.is_schema());
}

#[test]
fn negative_fare_rejects_load_test() {
    let json = r#"{"airports": [{
        "name": "X", "city": "Y", "distance_km": 10,
        "city_coords": {"lat": 1.0, "lon": 2.0},
        "transit_options": [{"mode": "cab", "transit_type": "taxi", "travel_time_minutes": 10, "frequency": 4, "fare_euros": -1}]
    }]}"#;
    let dataset = Dataset::new().from_json(json);
    assert!(dataset.airports().is_ok());
    let err = Repository::new().load_dataset(&dataset).unwrap_err();
    assert!(err.is_schema());
    assert!(err.to_string().contains("airport 'X'"));
}

#[test]
fn empty_storage_test() {
    let repository = Repository::new().load_dataset(&Dataset::new()).unwrap();
    assert!(repository.airports.is_empty());
    assert!(repository.rows.is_empty());
    assert!(repository.fare_spread.is_empty());
    assert!(repository.taxi_price.is_empty());
}
