use layover::{
    dataset::{Dataset, Frequency},
    repository::{Repository, flatten},
};

fn repository() -> Repository {
    let path = format!("{}/data/airports.json", env!("CARGO_MANIFEST_DIR"));
    Repository::new()
        .load_dataset(&Dataset::new().from_file(path))
        .unwrap()
}

#[test]
fn row_count_matches_options_test() {
    let repository = repository();
    let expected: usize = repository
        .airports
        .iter()
        .map(|airport| airport.transit_options.len())
        .sum();
    assert_eq!(repository.rows.len(), expected);
    assert_eq!(repository.rows.len(), 31);
}

#[test]
fn rows_follow_source_order_test() {
    let repository = repository();
    let mut rows = repository.rows.iter();
    for airport in repository.airports.iter() {
        for option in airport.transit_options.iter() {
            let row = rows.next().unwrap();
            assert_eq!(row.airport_name, airport.name);
            assert_eq!(row.city, airport.city);
            assert_eq!(row.distance_km, airport.distance_km);
            assert_eq!(row.city_lat, airport.city_coordinate.latitude);
            assert_eq!(row.city_lon, airport.city_coordinate.longitude);
            assert_eq!(row.mode, option.mode);
            assert_eq!(row.transit_type, option.transit_type);
            assert_eq!(row.fare_euros, option.fare_euros);
            assert_eq!(row.frequency, option.frequency);
        }
    }
    assert!(rows.next().is_none());
}

#[test]
fn flatten_is_deterministic_test() {
    let repository = repository();
    assert_eq!(flatten(&repository.airports), flatten(&repository.airports));
}

#[test]
fn numeric_frequency_survives_test() {
    let repository = repository();
    let elizabeth = repository
        .rows
        .iter()
        .find(|row| &*row.mode == "Elizabeth line")
        .unwrap();
    assert_eq!(elizabeth.frequency, Frequency::Number(6.0));
    assert_eq!(elizabeth.frequency.to_string(), "6");
}

#[test]
fn sample_is_clamped_test() {
    let repository = repository();
    assert_eq!(repository.sample(3).len(), 3);
    assert_eq!(&*repository.sample(3)[0].name, "Amsterdam Airport Schiphol");
    assert_eq!(repository.sample(100).len(), 10);
}

#[test]
fn rows_csv_test() {
    let repository = repository();
    let mut buffer: Vec<u8> = Vec::new();
    repository.write_rows_csv(&mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "airport_name,city,distance_km,mode,transit_type,travel_time_minutes,frequency,fare_euros,city_lat,city_lon"
    );
    assert_eq!(lines.count(), 31);
}

struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn rows_csv_write_failure_test() {
    let repository = repository();
    let err: csv::Error = repository.write_rows_csv(BrokenPipe).unwrap_err();
    match err.kind() {
        csv::ErrorKind::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe),
        other => panic!("expected an io error, got {other:?}"),
    }
}
