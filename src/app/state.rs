use anyhow::Result;

use crate::analysis::{DerivedStats, derive_stats};
use crate::config::DF;
use crate::domain::{PriceSeries, Sample, Timeframe};

/// What the fetch thread sends back: which request this answers, and how it
/// went.
pub(crate) struct FetchReply {
    pub(crate) generation: u64,
    pub(crate) outcome: Result<PriceSeries>,
}

/// Trim and uppercase user-submitted ticker text. Empty after trimming
/// means "nothing submitted".
pub(crate) fn normalize_symbol(raw: &str) -> Option<String> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() { None } else { Some(symbol) }
}

/// The single source of truth driving rendering.
///
/// Idle → Loading → {Ready, Failed}, folded into flags: `loading` marks the
/// Loading state, `error` marks Failed. A failed fetch keeps the previous
/// series and stats on screen; only the banner changes.
pub(crate) struct ViewState {
    pub(crate) symbol: String,
    pub(crate) timeframe: Timeframe,
    pub(crate) series: PriceSeries,
    pub(crate) stats: Option<DerivedStats>,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
    /// Generation of the most recently issued fetch. Replies carrying any
    /// older generation lost the race and are dropped, so a slow response
    /// for a previous symbol can never overwrite a newer one.
    last_issued: u64,
}

impl ViewState {
    pub(crate) fn new(symbol: String) -> Self {
        Self {
            symbol,
            timeframe: Timeframe::default(),
            series: PriceSeries::default(),
            stats: None,
            loading: false,
            error: None,
            last_issued: 0,
        }
    }

    /// Enter Loading for a new symbol. Returns the generation to tag the
    /// outgoing request with.
    pub(crate) fn begin_fetch(&mut self, symbol: String) -> u64 {
        self.symbol = symbol;
        self.loading = true;
        self.error = None;
        self.last_issued += 1;
        if DF.log_transitions {
            log::info!("LOADING {} (generation {})", self.symbol, self.last_issued);
        }
        self.last_issued
    }

    /// Apply a fetch reply, entering Ready or Failed. Stale replies are
    /// ignored entirely; whatever is loading stays loading.
    pub(crate) fn apply_fetch(&mut self, reply: FetchReply) {
        if reply.generation != self.last_issued {
            if DF.log_transitions {
                log::info!(
                    "dropping stale reply (generation {} vs {})",
                    reply.generation,
                    self.last_issued
                );
            }
            return;
        }

        self.loading = false;
        let series = match reply.outcome {
            Ok(series) => series,
            Err(e) => {
                self.fail(e.to_string());
                return;
            }
        };

        // An unusable series (empty, zero baseline) fails exactly like a
        // network error: message up, stale data stays.
        match derive_stats(&series) {
            Ok(stats) => {
                self.series = series;
                self.stats = Some(stats);
                self.error = None;
                if DF.log_transitions {
                    log::info!("READY {} with {} samples", self.symbol, self.series.len());
                }
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn fail(&mut self, message: String) {
        if DF.log_transitions {
            log::warn!("FAILED {}: {}", self.symbol, message);
        }
        self.error = Some(format!(
            "Failed to fetch stock data ({}). Please check the ticker symbol.",
            message
        ));
    }

    /// The chart's slice of the series for the selected timeframe. Derived
    /// on demand, never stored.
    pub(crate) fn windowed(&self) -> &[Sample] {
        self.series.windowed(self.timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use chrono::NaiveDate;

    fn series(prices: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let samples = prices
            .iter()
            .enumerate()
            .map(|(i, &p)| Sample::new(start + chrono::Days::new(i as u64), p))
            .collect();
        PriceSeries::from_unordered(samples)
    }

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol("  msft "), Some("MSFT".to_string()));
        assert_eq!(normalize_symbol("AAPL"), Some("AAPL".to_string()));
        assert_eq!(normalize_symbol("   "), None);
        assert_eq!(normalize_symbol(""), None);
    }

    #[test]
    fn test_successful_fetch_reaches_ready() {
        let mut view = ViewState::new("AAPL".to_string());
        let generation = view.begin_fetch("AAPL".to_string());
        assert!(view.loading);
        assert!(view.error.is_none());

        view.apply_fetch(FetchReply {
            generation,
            outcome: Ok(series(&[150.0, 155.0])),
        });

        assert!(!view.loading);
        assert!(view.error.is_none());
        assert_eq!(view.series.len(), 2);
        let stats = view.stats.unwrap();
        assert_eq!(stats.current_price, 155.0);
        assert_eq!(stats.change_absolute, 5.0);
    }

    #[test]
    fn test_failed_fetch_keeps_stale_data() {
        let mut view = ViewState::new("AAPL".to_string());
        let generation = view.begin_fetch("AAPL".to_string());
        view.apply_fetch(FetchReply {
            generation,
            outcome: Ok(series(&[100.0, 110.0, 90.0])),
        });
        let stale_stats = view.stats.unwrap();

        let generation = view.begin_fetch("NOPE".to_string());
        view.apply_fetch(FetchReply {
            generation,
            outcome: Err(anyhow!("connection refused")),
        });

        assert!(!view.loading);
        assert!(view.error.as_deref().unwrap_or("").contains("ticker"));
        // Previous history still on screen
        assert_eq!(view.series.len(), 3);
        assert_eq!(view.stats.unwrap(), stale_stats);
    }

    #[test]
    fn test_stale_reply_is_dropped() {
        let mut view = ViewState::new("A".to_string());
        let old_generation = view.begin_fetch("A".to_string());
        let new_generation = view.begin_fetch("B".to_string());

        // B answers first
        view.apply_fetch(FetchReply {
            generation: new_generation,
            outcome: Ok(series(&[10.0, 20.0])),
        });
        // A's slow reply must not clobber B's result
        view.apply_fetch(FetchReply {
            generation: old_generation,
            outcome: Ok(series(&[1.0])),
        });

        assert_eq!(view.symbol, "B");
        assert_eq!(view.series.len(), 2);
        assert_eq!(view.stats.unwrap().current_price, 20.0);
    }

    #[test]
    fn test_stale_error_reply_is_dropped_while_loading() {
        let mut view = ViewState::new("A".to_string());
        let old_generation = view.begin_fetch("A".to_string());
        let _new_generation = view.begin_fetch("B".to_string());

        view.apply_fetch(FetchReply {
            generation: old_generation,
            outcome: Err(anyhow!("timed out")),
        });

        // Still waiting for B
        assert!(view.loading);
        assert!(view.error.is_none());
    }

    #[test]
    fn test_empty_series_treated_like_fetch_failure() {
        let mut view = ViewState::new("AAPL".to_string());
        let generation = view.begin_fetch("AAPL".to_string());
        view.apply_fetch(FetchReply {
            generation,
            outcome: Ok(PriceSeries::default()),
        });

        assert!(!view.loading);
        assert!(view.error.is_some());
        assert!(view.stats.is_none());
    }

    #[test]
    fn test_timeframe_drives_windowed_view() {
        let mut view = ViewState::new("AAPL".to_string());
        let generation = view.begin_fetch("AAPL".to_string());
        view.apply_fetch(FetchReply {
            generation,
            outcome: Ok(series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0])),
        });

        view.timeframe = Timeframe::Week;
        assert_eq!(view.windowed().len(), 7);
        view.timeframe = Timeframe::Month;
        assert_eq!(view.windowed().len(), 10);
        view.timeframe = Timeframe::Day;
        assert_eq!(view.windowed().last().unwrap().price, 10.0);
    }
}
