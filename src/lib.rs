pub mod analysis;
pub mod dataset;
pub mod repository;
pub mod shared;
pub mod view;

pub mod prelude {
    pub use crate::analysis::{
        FareSpreadRow, TaxiPriceRow, fare_difference_analysis, taxi_price_per_km_analysis,
    };
    pub use crate::dataset::{self, Dataset};
    pub use crate::repository::{Airport, FlatRow, Repository, TransitOption, flatten};
    pub use crate::shared::geo::Coordinate;
    pub use crate::view::{Axis, Marker, Scatter};
}
