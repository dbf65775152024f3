mod analysis;
mod explore;

pub use analysis::*;
pub use explore::*;
