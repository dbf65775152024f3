use layover::{
    prelude::*,
    view::{ScatterSeries, map},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisDto {
    pub key: Axis,
    pub label: String,
}

impl AxisDto {
    pub fn from(axis: Axis) -> Self {
        Self {
            key: axis,
            label: axis.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxesDto {
    pub options: Vec<AxisDto>,
    pub default_x: Axis,
    pub default_y: Axis,
}

impl Default for AxesDto {
    fn default() -> Self {
        Self {
            options: Axis::ALL.into_iter().map(AxisDto::from).collect(),
            default_x: Axis::DEFAULT_X,
            default_y: Axis::DEFAULT_Y,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScatterParams {
    pub x: Option<Axis>,
    pub y: Option<Axis>,
}

/// Everything shown when hovering a point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoverDto {
    pub airport_name: String,
    pub city: String,
    pub distance_km: f64,
    pub mode: String,
    pub transit_type: String,
    pub travel_time_minutes: f64,
    pub frequency: String,
    pub fare_euros: f64,
}

impl HoverDto {
    pub fn from(row: &FlatRow) -> Self {
        Self {
            airport_name: row.airport_name.to_string(),
            city: row.city.to_string(),
            distance_km: row.distance_km,
            mode: row.mode.to_string(),
            transit_type: row.transit_type.to_string(),
            travel_time_minutes: row.travel_time_minutes,
            frequency: row.frequency.to_string(),
            fare_euros: row.fare_euros,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesDto {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub hover: Vec<HoverDto>,
}

impl SeriesDto {
    pub fn from(series: &ScatterSeries, rows: &[FlatRow]) -> Self {
        Self {
            name: series.transit_type.to_string(),
            x: series.points.iter().map(|point| point.x).collect(),
            y: series.points.iter().map(|point| point.y).collect(),
            hover: series
                .points
                .iter()
                .map(|point| HoverDto::from(&rows[point.row]))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterDto {
    pub title: String,
    pub x: AxisDto,
    pub y: AxisDto,
    pub series: Vec<SeriesDto>,
}

impl ScatterDto {
    pub fn from(scatter: &Scatter, rows: &[FlatRow]) -> Self {
        Self {
            title: scatter.title.clone(),
            x: AxisDto::from(scatter.x),
            y: AxisDto::from(scatter.y),
            series: scatter
                .series
                .iter()
                .map(|series| SeriesDto::from(series, rows))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerDto {
    pub name: String,
    pub city: String,
    pub coordinate: Coordinate,
    pub popup_html: String,
}

impl MarkerDto {
    pub fn from(marker: Marker) -> Self {
        Self {
            name: marker.name.to_string(),
            city: marker.city.to_string(),
            coordinate: marker.coordinate,
            popup_html: marker.popup_html,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDto {
    pub center: Coordinate,
    pub zoom: u8,
    pub markers: Vec<MarkerDto>,
}

impl MapDto {
    pub fn from(airports: &[Airport]) -> Self {
        Self {
            center: map::DEFAULT_CENTER,
            zoom: map::DEFAULT_ZOOM,
            markers: layover::view::markers(airports)
                .into_iter()
                .map(MarkerDto::from)
                .collect(),
        }
    }
}
