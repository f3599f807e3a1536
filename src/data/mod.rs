mod fetcher;

pub use fetcher::{HttpProvider, PriceHistoryProvider};
