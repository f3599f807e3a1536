use strum_macros::{Display, EnumIter};

/// How much of the fetched history the chart shows.
///
/// Each timeframe is a suffix length over the series, not a calendar
/// filter. `Month` shows the entire series: the backend already serves
/// roughly one month of history, so the "1M" button has always meant
/// "everything we have". Whether it should become a real 30-day window is
/// an open product question; until answered, the historical behavior
/// stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Default)]
pub enum Timeframe {
    #[strum(serialize = "1D")]
    Day,
    #[strum(serialize = "1W")]
    Week,
    #[default]
    #[strum(serialize = "1M")]
    Month,
    #[strum(serialize = "3M")]
    ThreeMonths,
    #[strum(serialize = "1Y")]
    Year,
}

impl Timeframe {
    /// Number of trailing samples to keep; `None` means the whole series.
    pub fn window(&self) -> Option<usize> {
        match self {
            Self::Day => Some(1),
            Self::Week => Some(7),
            Self::Month => None,
            Self::ThreeMonths => Some(90),
            Self::Year => Some(365),
        }
    }
}
