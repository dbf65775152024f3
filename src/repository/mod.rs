use std::io;

mod models;
pub use models::*;
use tracing::info;

use crate::{
    analysis::{self, FareSpreadRow, TaxiPriceRow},
    dataset::{self, Dataset},
};

/// Everything derived from one load of the dataset. Never mutated once built.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub airports: Box<[Airport]>,
    pub rows: Box<[FlatRow]>,
    pub fare_spread: Box<[FareSpreadRow]>,
    pub taxi_price: Box<[TaxiPriceRow]>,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// Validates the loaded airports, flattens them and runs both analyses.
    /// A single malformed airport rejects the whole load.
    pub fn load_dataset(mut self, dataset: &Dataset) -> Result<Self, dataset::Error> {
        let airports: Vec<Airport> = dataset
            .airports()?
            .iter()
            .cloned()
            .map(Airport::try_from)
            .collect::<Result<_, _>>()?;
        self.airports = airports.into();

        self.rows = flatten(&self.airports).into();
        self.fare_spread = analysis::fare_difference_analysis(&self.rows).into();
        self.taxi_price = analysis::taxi_price_per_km_analysis(&self.rows).into();
        info!(
            "Built repository: {} airports, {} rows, {} taxi airports",
            self.airports.len(),
            self.rows.len(),
            self.taxi_price.len()
        );
        Ok(self)
    }

    /// The first `count` airports in source order.
    pub fn sample(&self, count: usize) -> &[Airport] {
        &self.airports[..count.min(self.airports.len())]
    }

    pub fn write_rows_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut writer = csv::Writer::from_writer(writer);
        for row in self.rows.iter() {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// One row per airport × transit option, airports and options in source order.
pub fn flatten(airports: &[Airport]) -> Vec<FlatRow> {
    airports
        .iter()
        .flat_map(|airport| {
            airport
                .transit_options
                .iter()
                .map(move |option| FlatRow::new(airport, option))
        })
        .collect()
}
