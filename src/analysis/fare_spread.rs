use std::sync::Arc;

use serde::Serialize;

use crate::{analysis::group_by_airport, repository::FlatRow};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareSpreadRow {
    pub airport_name: Arc<str>,
    pub city: Arc<str>,
    pub min_fare: f64,
    pub max_fare: f64,
    pub fare_diff: f64,
}

struct FareRange {
    min: f64,
    max: f64,
}

impl Default for FareRange {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

/// Cheapest and priciest fare per airport, largest spread first.
pub fn fare_difference_analysis(rows: &[FlatRow]) -> Vec<FareSpreadRow> {
    let groups = group_by_airport(rows, |range: &mut FareRange, row| {
        range.min = range.min.min(row.fare_euros);
        range.max = range.max.max(row.fare_euros);
    });

    let mut result: Vec<FareSpreadRow> = groups
        .into_iter()
        .map(|((airport_name, city), range)| FareSpreadRow {
            airport_name,
            city,
            min_fare: range.min,
            max_fare: range.max,
            fare_diff: range.max - range.min,
        })
        .collect();
    result.sort_by(|a, b| b.fare_diff.total_cmp(&a.fare_diff));
    result
}
