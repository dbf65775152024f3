use std::{collections::HashMap, sync::Arc};

use serde::Serialize;

use crate::{repository::FlatRow, view::Axis};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Index into the flat table, for hover details.
    pub row: usize,
}

/// All points sharing one transit type; drawn in one color.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterSeries {
    pub transit_type: Arc<str>,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scatter {
    pub title: String,
    pub x: Axis,
    pub y: Axis,
    pub series: Vec<ScatterSeries>,
}

/// Splits the table into one series per transit type, in order of first appearance.
pub fn scatter(rows: &[FlatRow], x: Axis, y: Axis) -> Scatter {
    let mut lookup: HashMap<Arc<str>, usize> = HashMap::new();
    let mut series: Vec<ScatterSeries> = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        let index = *lookup.entry(row.transit_type.clone()).or_insert_with(|| {
            series.push(ScatterSeries {
                transit_type: row.transit_type.clone(),
                points: Vec::new(),
            });
            series.len() - 1
        });
        series[index].points.push(ScatterPoint {
            x: x.value(row),
            y: y.value(row),
            row: i,
        });
    }

    Scatter {
        title: format!("Scatterplot: {} vs. {}", x.label(), y.label()),
        x,
        y,
        series,
    }
}
