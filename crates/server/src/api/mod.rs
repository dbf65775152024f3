mod analysis;
mod data;
mod dataset;
mod explore;

pub use analysis::*;
pub use data::*;
pub use dataset::*;
pub use explore::*;
