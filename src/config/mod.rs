//! Configuration module for the price-scope application.

mod api;
mod debug;

pub use api::{API, ApiConfig};
pub use debug::DF;
