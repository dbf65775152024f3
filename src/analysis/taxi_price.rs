use std::sync::Arc;

use serde::Serialize;
use tracing::trace;

use crate::{analysis::group_by_airport, repository::FlatRow};

pub const TAXI_TRANSIT_TYPE: &str = "taxi";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxiPriceRow {
    pub airport_name: Arc<str>,
    pub city: Arc<str>,
    pub distance_km: f64,
    pub fare_euros: f64,
    pub price_per_km: f64,
}

#[derive(Default)]
struct TaxiTotals {
    count: usize,
    distance_km: f64,
    fare_euros: f64,
    price_per_km: f64,
}

/// Mean taxi fare per kilometer for every airport with a usable taxi option,
/// most expensive first.
///
/// `price_per_km` is the mean of the per-row ratios, not the ratio of the
/// means. Rows whose ratio is not finite (a zero distance) are dropped before
/// grouping, so an airport whose only taxi row has `distance_km == 0` is absent.
pub fn taxi_price_per_km_analysis(rows: &[FlatRow]) -> Vec<TaxiPriceRow> {
    let taxi_rows = rows
        .iter()
        .filter(|row| row.transit_type.to_lowercase() == TAXI_TRANSIT_TYPE)
        .filter(|row| {
            let price_per_km = price_per_km(row);
            if !price_per_km.is_finite() {
                trace!(
                    "Skipping taxi row at {} ({}): price per km is {price_per_km}",
                    row.airport_name, row.city
                );
            }
            price_per_km.is_finite()
        });

    let groups = group_by_airport(taxi_rows, |totals: &mut TaxiTotals, row| {
        totals.count += 1;
        totals.distance_km += row.distance_km;
        totals.fare_euros += row.fare_euros;
        totals.price_per_km += price_per_km(row);
    });

    let mut result: Vec<TaxiPriceRow> = groups
        .into_iter()
        .map(|((airport_name, city), totals)| {
            let count = totals.count as f64;
            TaxiPriceRow {
                airport_name,
                city,
                distance_km: totals.distance_km / count,
                fare_euros: totals.fare_euros / count,
                price_per_km: totals.price_per_km / count,
            }
        })
        .collect();
    result.sort_by(|a, b| b.price_per_km.total_cmp(&a.price_per_km));
    result
}

fn price_per_km(row: &FlatRow) -> f64 {
    row.fare_euros / row.distance_km
}
