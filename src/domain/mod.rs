// Domain types and value objects
mod sample;
mod timeframe;

// Re-export commonly used types
pub use sample::{PriceSeries, Sample};
pub use timeframe::Timeframe;
