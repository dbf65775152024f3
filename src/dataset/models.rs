use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::shared::geo::Coordinate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatasetRecord {
    pub airports: Vec<AirportRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AirportRecord {
    pub name: String,
    pub city: String,
    pub distance_km: f64,
    pub city_coords: Coordinate,
    pub transit_options: Vec<TransitOptionRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TransitOptionRecord {
    pub mode: String,
    pub transit_type: String,
    pub travel_time_minutes: f64,
    pub frequency: Frequency,
    pub fare_euros: f64,
}

/// How often a transit option runs. Only ever displayed, never computed on.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Frequency {
    Number(f64),
    Text(String),
}

impl Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Number(value) => write!(f, "{value}"),
            Frequency::Text(value) => f.write_str(value),
        }
    }
}
