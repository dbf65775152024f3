use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "lat", alias = "latitude")]
    pub latitude: f64,
    #[serde(rename = "lon", alias = "longitude")]
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl Coordinate {
    /// True when both components are finite and inside the WGS84 range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[test]
fn coordinate_json_keys_test() {
    let parsed: Coordinate = serde_json::from_str(r#"{"lat": 48.85, "lon": 2.35}"#).unwrap();
    assert_eq!(parsed, coordinate(48.85, 2.35));
    let json = serde_json::to_string(&parsed).unwrap();
    assert_eq!(json, r#"{"lat":48.85,"lon":2.35}"#);
}

#[test]
fn coordinate_range_test() {
    assert!(coordinate(59.33, 18.06).is_valid());
    assert!(!coordinate(91.0, 18.06).is_valid());
    assert!(!coordinate(f64::NAN, 0.0).is_valid());
}

#[cfg(test)]
fn coordinate(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate {
        latitude,
        longitude,
    }
}
