mod stats;

pub use stats::{DerivedStats, derive_stats};
