use chrono::NaiveDate;

use crate::domain::Timeframe;

/// One closing price on one calendar day. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub date: NaiveDate,
    pub price: f64,
}

impl Sample {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Sample { date, price }
    }
}

/// Closing-price history for one symbol, ascending by date.
///
/// The backend is trusted not to send duplicate dates, but never trusted on
/// ordering: `from_unordered` sorts, so a series is ascending by
/// construction. Replaced wholesale on every successful fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    samples: Vec<Sample>,
}

impl PriceSeries {
    /// Build a series from samples in whatever order the wire delivered
    /// them. JSON object key order is not chronological order.
    pub fn from_unordered(mut samples: Vec<Sample>) -> Self {
        samples.sort_by_key(|s| s.date);
        PriceSeries { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// The suffix of the series selected by a timeframe, newest samples
    /// last. Slice semantics: a series shorter than the window comes back
    /// whole, never an error.
    pub fn windowed(&self, timeframe: Timeframe) -> &[Sample] {
        match timeframe.window() {
            Some(n) => {
                let start = self.samples.len().saturating_sub(n);
                &self.samples[start..]
            }
            None => &self.samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, n).unwrap()
    }

    fn series_of(n: u32) -> PriceSeries {
        let samples = (1..=n).map(|i| Sample::new(day(i), 100.0 + i as f64)).collect();
        PriceSeries::from_unordered(samples)
    }

    #[test]
    fn test_from_unordered_sorts_by_date() {
        let s = PriceSeries::from_unordered(vec![
            Sample::new(day(3), 90.0),
            Sample::new(day(1), 100.0),
            Sample::new(day(2), 110.0),
        ]);
        let dates: Vec<NaiveDate> = s.samples().iter().map(|s| s.date).collect();
        assert_eq!(dates, vec![day(1), day(2), day(3)]);
        assert_eq!(s.first().unwrap().price, 100.0);
        assert_eq!(s.last().unwrap().price, 90.0);
    }

    #[test]
    fn test_window_lengths_match_timeframe_policy() {
        let s = series_of(20);
        assert_eq!(s.windowed(Timeframe::Day).len(), 1);
        assert_eq!(s.windowed(Timeframe::Week).len(), 7);
        assert_eq!(s.windowed(Timeframe::Month).len(), 20); // identity
        assert_eq!(s.windowed(Timeframe::ThreeMonths).len(), 20);
        assert_eq!(s.windowed(Timeframe::Year).len(), 20);
    }

    #[test]
    fn test_year_window_caps_long_series_at_365() {
        let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let samples = (0..500)
            .map(|i| Sample::new(start + chrono::Days::new(i), 50.0 + i as f64))
            .collect();
        let s = PriceSeries::from_unordered(samples);
        assert_eq!(s.windowed(Timeframe::Year).len(), 365);
        assert_eq!(s.windowed(Timeframe::ThreeMonths).len(), 90);
        assert_eq!(s.windowed(Timeframe::Month).len(), 500);
    }

    #[test]
    fn test_windowed_takes_the_suffix() {
        let s = series_of(10);
        let week = s.windowed(Timeframe::Week);
        assert_eq!(week.first().unwrap().date, day(4));
        assert_eq!(week.last().unwrap().date, day(10));
    }

    #[test]
    fn test_windowed_short_series_returned_whole() {
        let s = series_of(3);
        assert_eq!(s.windowed(Timeframe::Week).len(), 3);
        assert_eq!(s.windowed(Timeframe::Year).len(), 3);
        assert_eq!(s.windowed(Timeframe::Day).len(), 1);
    }

    #[test]
    fn test_windowed_empty_series() {
        let s = PriceSeries::default();
        assert!(s.windowed(Timeframe::Day).is_empty());
        assert!(s.windowed(Timeframe::Month).is_empty());
    }
}
