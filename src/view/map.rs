use std::{collections::HashSet, fmt::Write, sync::Arc};

use html_escape::encode_text;
use serde::Serialize;

use crate::{repository::Airport, shared::geo::Coordinate};

pub const DEFAULT_CENTER: Coordinate = Coordinate {
    latitude: 54.0,
    longitude: 15.0,
};
pub const DEFAULT_ZOOM: u8 = 4;

const POPUP_STYLE: &str = "<style>\
table { width: 100%; border-collapse: collapse; }\
th, td { border: 1px solid #ddd; padding: 4px; text-align: center; }\
th { background-color: #f2f2f2; }\
</style>";

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub name: Arc<str>,
    pub city: Arc<str>,
    pub coordinate: Coordinate,
    pub popup_html: String,
}

/// One marker per city, placed on the city center. When two airports serve the
/// same city only the first one in the dataset gets a marker.
pub fn markers(airports: &[Airport]) -> Vec<Marker> {
    let mut seen: HashSet<&str> = HashSet::new();
    airports
        .iter()
        .filter(|airport| seen.insert(&airport.city))
        .map(|airport| Marker {
            name: airport.name.clone(),
            city: airport.city.clone(),
            coordinate: airport.city_coordinate,
            popup_html: popup_html(airport),
        })
        .collect()
}

fn popup_html(airport: &Airport) -> String {
    let mut html = format!(
        "<b>{} - {}</b><br>{POPUP_STYLE}<table><tr>\
         <th>Mode</th><th>Type</th><th>Time (min)</th><th>Fare (€)</th><th>Freq.</th></tr>",
        encode_text(&airport.name),
        encode_text(&airport.city),
    );
    for option in airport.transit_options.iter() {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            encode_text(&option.mode),
            encode_text(&option.transit_type),
            option.travel_time_minutes,
            option.fare_euros,
            encode_text(&option.frequency.to_string()),
        );
    }
    html.push_str("</table>");
    html
}
