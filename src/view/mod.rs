//! Shapes handed to the chart and map front end.

mod axis;
pub mod map;
mod scatter;

pub use axis::*;
pub use map::{Marker, markers};
pub use scatter::*;

/// How many raw airports the data view shows by default.
pub const RAW_SAMPLE_SIZE: usize = 3;
