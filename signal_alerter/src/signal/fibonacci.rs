//! Fibonacci retracement levels over one observation window.

use serde::Serialize;

use crate::models::bar::Bar;

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// The five retracement levels for a window, each rounded to 4 decimal
/// places.
///
/// `level_0` is the window's highest high and `level_100` its lowest low; the
/// intermediate levels are measured up from the low (`low + r * (high - low)`
/// for r = 0.25, 0.5, 0.75). So by price, `level_0 >= level_75 >= level_50 >=
/// level_25 >= level_100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FibonacciLevels {
    /// Ratio 0.0: the highest high of the window.
    pub level_0: f64,
    /// Ratio 0.25: one quarter of the range above the low.
    pub level_25: f64,
    /// Ratio 0.5: the midpoint of the range.
    pub level_50: f64,
    /// Ratio 0.75: three quarters of the range above the low.
    pub level_75: f64,
    /// Ratio 1.0: the lowest low of the window.
    pub level_100: f64,
}

impl FibonacciLevels {
    /// Computes the levels for a window, or `None` when the window is empty.
    pub fn from_bars(bars: &[Bar]) -> Option<Self> {
        if bars.is_empty() {
            return None;
        }

        let highest_high = bars.iter().map(|b| b.high).fold(f64::MIN, f64::max);
        let lowest_low = bars.iter().map(|b| b.low).fold(f64::MAX, f64::min);
        let range = highest_high - lowest_low;

        Some(Self {
            level_0: round4(highest_high),
            level_25: round4(lowest_low + 0.25 * range),
            level_50: round4(lowest_low + 0.5 * range),
            level_75: round4(lowest_low + 0.75 * range),
            level_100: round4(lowest_low),
        })
    }
}
