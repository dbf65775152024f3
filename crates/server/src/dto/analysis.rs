use chrono::{DateTime, Utc};
use layover::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareSpreadRowDto {
    pub airport_name: String,
    pub city: String,
    pub min_fare: f64,
    pub max_fare: f64,
    pub fare_diff: f64,
}

impl FareSpreadRowDto {
    pub fn from(row: &FareSpreadRow) -> Self {
        Self {
            airport_name: row.airport_name.to_string(),
            city: row.city.to_string(),
            min_fare: row.min_fare,
            max_fare: row.max_fare,
            fare_diff: row.fare_diff,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareSpreadDto {
    pub rows: Vec<FareSpreadRowDto>,
    /// Sentence about the airport with the widest spread, absent when there are no rows.
    pub headline: Option<String>,
}

impl FareSpreadDto {
    pub fn from(rows: &[FareSpreadRow]) -> Self {
        let headline = rows.first().map(|top| {
            format!(
                "The largest fare difference is at {} in {}, where fares range from €{:.2} to €{:.2} (a difference of €{:.2}).",
                top.airport_name, top.city, top.min_fare, top.max_fare, top.fare_diff
            )
        });
        Self {
            rows: rows.iter().map(FareSpreadRowDto::from).collect(),
            headline,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxiPriceRowDto {
    pub airport_name: String,
    pub city: String,
    pub distance_km: f64,
    pub fare_euros: f64,
    pub price_per_km: f64,
}

impl TaxiPriceRowDto {
    pub fn from(row: &TaxiPriceRow) -> Self {
        Self {
            airport_name: row.airport_name.to_string(),
            city: row.city.to_string(),
            distance_km: row.distance_km,
            fare_euros: row.fare_euros,
            price_per_km: round_cents(row.price_per_km),
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryDto {
    pub airports: usize,
    pub rows: usize,
    pub taxi_airports: usize,
    pub loaded_at: String,
}

impl SummaryDto {
    pub fn from(repository: &Repository, loaded_at: DateTime<Utc>) -> Self {
        Self {
            airports: repository.airports.len(),
            rows: repository.rows.len(),
            taxi_airports: repository.taxi_price.len(),
            loaded_at: loaded_at.to_rfc3339(),
        }
    }
}

#[test]
fn round_cents_test() {
    assert_eq!(round_cents(3.3333333), 3.33);
    assert_eq!(round_cents(2.0833333), 2.08);
    assert_eq!(round_cents(5.0), 5.0);
}

#[test]
fn headline_test() {
    let rows = vec![FareSpreadRow {
        airport_name: "X".into(),
        city: "Y".into(),
        min_fare: 10.0,
        max_fare: 30.0,
        fare_diff: 20.0,
    }];
    let dto = FareSpreadDto::from(&rows);
    assert_eq!(
        dto.headline.as_deref(),
        Some(
            "The largest fare difference is at X in Y, where fares range from €10.00 to €30.00 (a difference of €20.00)."
        )
    );
    assert!(FareSpreadDto::from(&[]).headline.is_none());
}
