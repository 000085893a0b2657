//! Trailing moving-average trend reading.

use serde::Serialize;

use crate::models::bar::Bar;

/// Window length for the trailing simple moving average of closes.
pub const SMA_PERIOD: usize = 20;

/// Direction of the last close relative to its trailing 20-period SMA.
///
/// `Undetermined` means the window is too short for the average to exist at
/// all. It is a distinct state, not a bearish one: a thin series must never
/// trip the short side of the setup evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Bullish,
    Bearish,
    Undetermined,
}

impl Trend {
    /// Reads the trend off a window: last close above the SMA of the trailing
    /// [`SMA_PERIOD`] closes is bullish, at or below is bearish, fewer than
    /// [`SMA_PERIOD`] bars is undetermined.
    pub fn from_bars(bars: &[Bar]) -> Trend {
        if bars.len() < SMA_PERIOD {
            return Trend::Undetermined;
        }

        let tail = &bars[bars.len() - SMA_PERIOD..];
        let sma = tail.iter().map(|b| b.close).sum::<f64>() / SMA_PERIOD as f64;
        let last_close = bars[bars.len() - 1].close;

        if last_close > sma {
            Trend::Bullish
        } else {
            Trend::Bearish
        }
    }
}
