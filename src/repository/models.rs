use std::sync::Arc;

use serde::Serialize;

use crate::{
    dataset::{self, AirportRecord, Frequency, TransitOptionRecord},
    shared::geo::Coordinate,
};

#[derive(Debug, Clone, Serialize)]
pub struct TransitOption {
    pub mode: Arc<str>,
    pub transit_type: Arc<str>,
    pub travel_time_minutes: f64,
    pub frequency: Frequency,
    pub fare_euros: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Airport {
    pub name: Arc<str>,
    pub city: Arc<str>,
    pub distance_km: f64,
    #[serde(rename = "city_coords")]
    pub city_coordinate: Coordinate,
    pub transit_options: Box<[TransitOption]>,
}

/// One airport × transit option pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatRow {
    pub airport_name: Arc<str>,
    pub city: Arc<str>,
    pub distance_km: f64,
    pub mode: Arc<str>,
    pub transit_type: Arc<str>,
    pub travel_time_minutes: f64,
    pub frequency: Frequency,
    pub fare_euros: f64,
    pub city_lat: f64,
    pub city_lon: f64,
}

impl FlatRow {
    pub fn new(airport: &Airport, option: &TransitOption) -> Self {
        Self {
            airport_name: airport.name.clone(),
            city: airport.city.clone(),
            distance_km: airport.distance_km,
            mode: option.mode.clone(),
            transit_type: option.transit_type.clone(),
            travel_time_minutes: option.travel_time_minutes,
            frequency: option.frequency.clone(),
            fare_euros: option.fare_euros,
            city_lat: airport.city_coordinate.latitude,
            city_lon: airport.city_coordinate.longitude,
        }
    }
}

impl TryFrom<AirportRecord> for Airport {
    type Error = dataset::Error;

    fn try_from(value: AirportRecord) -> Result<Self, Self::Error> {
        non_negative(&value.name, "distance_km", value.distance_km)?;
        if !value.city_coords.is_valid() {
            return Err(dataset::Error::Schema(format!(
                "airport '{}': city_coords ({}) out of range",
                value.name, value.city_coords
            )));
        }
        let transit_options = value
            .transit_options
            .into_iter()
            .map(|option| TransitOption::try_from_record(&value.name, option))
            .collect::<Result<Box<[_]>, _>>()?;
        Ok(Self {
            name: value.name.into(),
            city: value.city.into(),
            distance_km: value.distance_km,
            city_coordinate: value.city_coords,
            transit_options,
        })
    }
}

impl TransitOption {
    fn try_from_record(airport: &str, value: TransitOptionRecord) -> Result<Self, dataset::Error> {
        non_negative(airport, "travel_time_minutes", value.travel_time_minutes)?;
        non_negative(airport, "fare_euros", value.fare_euros)?;
        Ok(Self {
            mode: value.mode.into(),
            transit_type: value.transit_type.into(),
            travel_time_minutes: value.travel_time_minutes,
            frequency: value.frequency,
            fare_euros: value.fare_euros,
        })
    }
}

fn non_negative(airport: &str, field: &str, value: f64) -> Result<(), dataset::Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(dataset::Error::Schema(format!(
            "airport '{airport}': {field} must be a non-negative number, got {value}"
        )))
    }
}
