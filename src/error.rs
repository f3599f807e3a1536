use std::{error::Error, fmt};

/// Everything that can stop the dashboard from showing fresh numbers.
///
/// All three variants are handled identically at the app boundary: a
/// user-visible message, with whatever was on screen before left in place.
#[derive(Debug)]
pub enum DashboardError {
    /// Network failure, non-2xx status, or a body that doesn't decode.
    Fetch(String),
    /// Stats derivation attempted on a series with no samples.
    EmptySeries,
    /// Change-percent baseline (first sample's price) is zero.
    ZeroBaseline,
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DashboardError::Fetch(msg) => write!(f, "fetch failed: {}", msg),
            DashboardError::EmptySeries => write!(f, "no price history returned"),
            DashboardError::ZeroBaseline => {
                write!(f, "first closing price is zero, change percent undefined")
            }
        }
    }
}

impl Error for DashboardError {}
