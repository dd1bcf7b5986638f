pub mod calculations;
pub mod constants;

pub use calculations::{batch_breakdown, compute, contributions, BatchBreakdown};
pub use constants::*;
