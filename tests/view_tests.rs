use std::collections::HashSet;

use layover::{
    dataset::Dataset,
    repository::Repository,
    view::{self, Axis, map},
};

fn bundled() -> Repository {
    let path = format!("{}/data/airports.json", env!("CARGO_MANIFEST_DIR"));
    Repository::new()
        .load_dataset(&Dataset::new().from_file(path))
        .unwrap()
}

#[test]
fn scatter_default_axes_test() {
    let repository = bundled();
    let scatter = view::scatter(&repository.rows, Axis::DEFAULT_X, Axis::DEFAULT_Y);
    assert_eq!(
        scatter.title,
        "Scatterplot: Distance to City Center (km) vs. Travel Time (min)"
    );

    let points: usize = scatter.series.iter().map(|series| series.points.len()).sum();
    assert_eq!(points, repository.rows.len());

    let types: Vec<&str> = scatter
        .series
        .iter()
        .map(|series| &*series.transit_type)
        .collect();
    assert_eq!(types, vec!["train", "bus", "taxi", "Taxi", "metro"]);
}

#[test]
fn scatter_points_reference_rows_test() {
    let repository = bundled();
    let scatter = view::scatter(&repository.rows, Axis::FareEuros, Axis::DistanceKm);
    for series in scatter.series.iter() {
        for point in series.points.iter() {
            let row = &repository.rows[point.row];
            assert_eq!(row.transit_type, series.transit_type);
            assert_eq!(point.x, row.fare_euros);
            assert_eq!(point.y, row.distance_km);
        }
    }
}

#[test]
fn markers_unique_per_city_test() {
    let repository = bundled();
    let markers = view::markers(&repository.airports);
    assert_eq!(markers.len(), 9);

    let cities: HashSet<&str> = markers.iter().map(|marker| &*marker.city).collect();
    assert_eq!(cities.len(), markers.len());

    let london = markers
        .iter()
        .find(|marker| &*marker.city == "London")
        .unwrap();
    assert_eq!(&*london.name, "London Heathrow Airport");
    assert!(london.popup_html.starts_with("<b>London Heathrow Airport - London</b><br>"));
    assert_eq!(london.popup_html.matches("<tr>").count(), 5);
    assert!(london.popup_html.contains("<td>Heathrow Express</td>"));
}

#[test]
fn popup_escapes_html_test() {
    let json = r#"{"airports": [{
        "name": "<script>alert(1)</script>", "city": "A & B", "distance_km": 10,
        "city_coords": {"lat": 50.0, "lon": 10.0},
        "transit_options": [{"mode": "<i>cab</i>", "transit_type": "taxi", "travel_time_minutes": 10, "frequency": "often", "fare_euros": 20}]
    }]}"#;
    let repository = Repository::new()
        .load_dataset(&Dataset::new().from_json(json))
        .unwrap();
    let markers = view::markers(&repository.airports);
    let popup = &markers[0].popup_html;
    assert!(!popup.contains("<script>"));
    assert!(popup.contains("&lt;script&gt;"));
    assert!(popup.contains("A &amp; B"));
    assert!(popup.contains("&lt;i&gt;cab&lt;/i&gt;"));
}

#[test]
fn map_defaults_test() {
    assert_eq!(map::DEFAULT_CENTER.latitude, 54.0);
    assert_eq!(map::DEFAULT_CENTER.longitude, 15.0);
    assert_eq!(map::DEFAULT_ZOOM, 4);
}
