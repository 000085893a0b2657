//! A collection of time-series bars for a specific symbol and interval.

use crate::models::{bar::Bar, interval::Interval};

/// Represents one observation window of data for a single instrument.
///
/// Bars are ordered by timestamp, oldest first. An empty `bars` vector is a
/// valid response (the vendor had nothing for the window) and is treated as a
/// skip condition by the batch runner, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// The instrument this data represents (e.g., "GCU25.CMX", "EURUSD=X").
    pub symbol: String,
    /// The time interval for each bar in the series.
    pub interval: Interval,
    /// The collection of OHLCV bars.
    pub bars: Vec<Bar>,
}

impl BarSeries {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The most recent bar, if any.
    pub fn last_bar(&self) -> Option<&Bar> {
        self.bars.last()
    }
}
