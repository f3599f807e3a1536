use crate::domain::PriceSeries;
use crate::error::DashboardError;

/// Summary statistics over one fetched history. Recomputed whole whenever
/// the series changes, never patched field by field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedStats {
    pub current_price: f64,
    /// Last price minus first price, over the whole fetched series.
    pub change_absolute: f64,
    pub change_percent: f64,
    pub high_price: f64,
    pub low_price: f64,
}

/// Derive summary statistics from a series. Pure and deterministic.
///
/// Fails instead of crashing on the two degenerate inputs: an empty series
/// (`EmptySeries`) and a zero first price (`ZeroBaseline`, chosen over
/// letting the percent go to ±inf/NaN).
pub fn derive_stats(series: &PriceSeries) -> Result<DerivedStats, DashboardError> {
    let (first, last) = match (series.first(), series.last()) {
        (Some(f), Some(l)) => (f.price, l.price),
        _ => return Err(DashboardError::EmptySeries),
    };

    let change_absolute = last - first;
    if first.abs() < f64::EPSILON {
        return Err(DashboardError::ZeroBaseline);
    }
    let change_percent = change_absolute / first * 100.0;

    let mut high_price = f64::MIN;
    let mut low_price = f64::MAX;
    for sample in series.samples() {
        high_price = high_price.max(sample.price);
        low_price = low_price.min(sample.price);
    }

    Ok(DerivedStats {
        current_price: last,
        change_absolute,
        change_percent,
        high_price,
        low_price,
    })
}
