use serde::{Deserialize, Serialize};

use crate::repository::FlatRow;

/// A numeric column of the flat table that can be put on a scatter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    DistanceKm,
    TravelTimeMinutes,
    FareEuros,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::DistanceKm, Axis::TravelTimeMinutes, Axis::FareEuros];
    pub const DEFAULT_X: Axis = Axis::DistanceKm;
    pub const DEFAULT_Y: Axis = Axis::TravelTimeMinutes;

    pub fn column(&self) -> &'static str {
        match self {
            Axis::DistanceKm => "distance_km",
            Axis::TravelTimeMinutes => "travel_time_minutes",
            Axis::FareEuros => "fare_euros",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Axis::DistanceKm => "Distance to City Center (km)",
            Axis::TravelTimeMinutes => "Travel Time (min)",
            Axis::FareEuros => "Fare (Euros)",
        }
    }

    pub fn value(&self, row: &FlatRow) -> f64 {
        match self {
            Axis::DistanceKm => row.distance_km,
            Axis::TravelTimeMinutes => row.travel_time_minutes,
            Axis::FareEuros => row.fare_euros,
        }
    }
}

#[test]
fn axis_column_matches_serde_name_test() {
    for axis in Axis::ALL {
        let json = serde_json::to_string(&axis).unwrap();
        assert_eq!(json, format!("\"{}\"", axis.column()));
    }
}

#[test]
fn axis_unknown_column_test() {
    let axis: Result<Axis, _> = serde_json::from_str("\"city_lat\"");
    assert!(axis.is_err());
}
