// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod ui;

// Re-export commonly used types outside of crate
pub use app::App;
pub use data::{HttpProvider, PriceHistoryProvider};
pub use domain::{PriceSeries, Sample, Timeframe};
pub use error::DashboardError;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the price-history service
    #[arg(long)]
    pub api_url: Option<String>,

    /// Ticker symbol to load on startup
    #[arg(long)]
    pub symbol: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
