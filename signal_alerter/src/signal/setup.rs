//! Setup evaluation: retracement proximity gated by trend direction.

use serde::Serialize;

use crate::models::bar::Bar;
use crate::signal::{FibonacciLevels, Trend};

/// Relative distance below which the last close counts as "near" a level.
pub const PROXIMITY_THRESHOLD: f64 = 0.01;

/// Risk-reward multiple applied to the distance between entry and stop.
const REWARD_MULTIPLE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Buy,
    Sell,
}

/// A proposed trade derived from signal conditions. Ephemeral: formatted,
/// sent, and forgotten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TradeSetup {
    pub direction: Direction,
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    /// Distance between entry and stop, in price units.
    pub risk: f64,
    /// Distance between entry and take-profit, in price units.
    pub reward: f64,
}

/// Whether `price` sits within [`PROXIMITY_THRESHOLD`] of `level`, relative
/// to the level.
pub fn is_near_level(price: f64, level: f64) -> bool {
    // A zero level makes this infinity (or NaN), which fails the strict
    // comparison, so no alert.
    (price - level).abs() / level < PROXIMITY_THRESHOLD
}

/// Evaluates the window for a trade setup.
///
/// A bullish trend with the last close within 1% of the 0.25 level yields a
/// long setup stopped at the window low; a bearish trend within 1% of the
/// 0.75 level yields a short stopped at the window high. Both use a fixed 1:2
/// risk-reward. The buy branch is checked first, so in the degenerate
/// near-zero-range case where both proximities hold, the long wins.
/// [`Trend::Undetermined`] matches neither branch.
pub fn evaluate_setup(bars: &[Bar], levels: &FibonacciLevels, trend: Trend) -> Option<TradeSetup> {
    let current_price = bars.last()?.close;

    let near_25 = is_near_level(current_price, levels.level_25);
    let near_75 = is_near_level(current_price, levels.level_75);

    match trend {
        Trend::Bullish if near_25 => {
            let entry = levels.level_25;
            let stop_loss = levels.level_100;
            let risk = entry - stop_loss;
            let take_profit = entry + REWARD_MULTIPLE * risk;
            Some(TradeSetup {
                direction: Direction::Buy,
                entry,
                stop_loss,
                take_profit,
                risk,
                reward: take_profit - entry,
            })
        }
        Trend::Bearish if near_75 => {
            let entry = levels.level_75;
            let stop_loss = levels.level_0;
            let risk = stop_loss - entry;
            let take_profit = entry - REWARD_MULTIPLE * risk;
            Some(TradeSetup {
                direction: Direction::Sell,
                entry,
                stop_loss,
                take_profit,
                risk,
                reward: entry - take_profit,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    /// 25 bars spanning high 120 / low 80, with a chosen last close and a
    /// trailing-20 close average of 89 (the boundary-scenario fixture).
    fn scenario_bars(last_close: f64) -> Vec<Bar> {
        let start = Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap();
        let mut bars: Vec<Bar> = (0..24)
            .map(|i| Bar {
                timestamp: start + Duration::minutes(15 * i),
                open: 90.0,
                high: if i == 4 { 120.0 } else { 100.0 },
                low: if i == 7 { 80.0 } else { 85.0 },
                close: 89.0,
                volume: 100.0,
            })
            .collect();
        // Last bar: keep the trailing-20 average at 89 by offsetting the
        // final close against an adjusted neighbor.
        let filler = 89.0 * 20.0 - 89.0 * 18.0 - last_close;
        bars[23].close = filler;
        bars.push(Bar {
            timestamp: start + Duration::minutes(15 * 24),
            open: last_close,
            high: 100.0,
            low: 85.0,
            close: last_close,
            volume: 100.0,
        });
        bars
    }

    fn scenario_levels() -> FibonacciLevels {
        FibonacciLevels {
            level_0: 120.0,
            level_25: 90.0,
            level_50: 100.0,
            level_75: 110.0,
            level_100: 80.0,
        }
    }

    #[test]
    fn scenario_fixture_is_consistent() {
        let bars = scenario_bars(90.5);
        assert_eq!(bars.len(), 25);
        let levels = FibonacciLevels::from_bars(&bars).unwrap();
        assert_eq!(levels, scenario_levels());
        assert_eq!(Trend::from_bars(&bars), Trend::Bullish);
    }

    #[test]
    fn one_percent_threshold_is_strict() {
        // |91 - 90| / 90 = 0.0111... -> not near, no setup despite the trend.
        let bars = scenario_bars(91.0);
        let setup = evaluate_setup(&bars, &scenario_levels(), Trend::Bullish);
        assert!(setup.is_none());
    }

    #[test]
    fn bullish_near_25_yields_buy() {
        // |90.5 - 90| / 90 = 0.0056 -> near.
        let bars = scenario_bars(90.5);
        let setup = evaluate_setup(&bars, &scenario_levels(), Trend::Bullish).unwrap();

        assert_eq!(setup.direction, Direction::Buy);
        assert_eq!(setup.entry, 90.0);
        assert_eq!(setup.stop_loss, 80.0);
        assert_eq!(setup.take_profit, 110.0);
        assert_eq!(setup.risk, 10.0);
        assert_eq!(setup.reward, 20.0);
    }

    #[test]
    fn bearish_near_75_yields_sell() {
        let bars = scenario_bars(110.5);
        let setup = evaluate_setup(&bars, &scenario_levels(), Trend::Bearish).unwrap();

        assert_eq!(setup.direction, Direction::Sell);
        assert_eq!(setup.entry, 110.0);
        assert_eq!(setup.stop_loss, 120.0);
        assert_eq!(setup.take_profit, 90.0);
        assert_eq!(setup.risk, 10.0);
        assert_eq!(setup.reward, 20.0);
    }

    #[test]
    fn buy_invariant_holds() {
        let bars = scenario_bars(90.5);
        let setup = evaluate_setup(&bars, &scenario_levels(), Trend::Bullish).unwrap();
        assert_eq!(
            setup.take_profit - setup.entry,
            2.0 * (setup.entry - setup.stop_loss)
        );
    }

    #[test]
    fn sell_invariant_holds() {
        let bars = scenario_bars(110.5);
        let setup = evaluate_setup(&bars, &scenario_levels(), Trend::Bearish).unwrap();
        assert_eq!(
            setup.entry - setup.take_profit,
            2.0 * (setup.stop_loss - setup.entry)
        );
    }

    #[test]
    fn bullish_near_75_is_not_a_sell() {
        let bars = scenario_bars(110.5);
        assert!(evaluate_setup(&bars, &scenario_levels(), Trend::Bullish).is_none());
    }

    #[test]
    fn bearish_near_25_is_not_a_buy() {
        let bars = scenario_bars(90.5);
        assert!(evaluate_setup(&bars, &scenario_levels(), Trend::Bearish).is_none());
    }

    #[test]
    fn undetermined_trend_never_produces_a_setup() {
        // Near either level, an undetermined trend must not be read as
        // bearish (or bullish).
        for last_close in [90.5, 110.5] {
            let bars = scenario_bars(last_close);
            assert!(evaluate_setup(&bars, &scenario_levels(), Trend::Undetermined).is_none());
        }
    }

    #[test]
    fn degenerate_flat_range_prefers_the_buy() {
        // All levels collapse onto one price: both proximity checks hold.
        let levels = FibonacciLevels {
            level_0: 100.0,
            level_25: 100.0,
            level_50: 100.0,
            level_75: 100.0,
            level_100: 100.0,
        };
        let bars = scenario_bars(100.0);
        let setup = evaluate_setup(&bars, &levels, Trend::Bullish).unwrap();
        assert_eq!(setup.direction, Direction::Buy);
    }

    #[test]
    fn zero_level_disables_proximity() {
        let levels = FibonacciLevels {
            level_0: 0.0,
            level_25: 0.0,
            level_50: 0.0,
            level_75: 0.0,
            level_100: 0.0,
        };
        let bars = scenario_bars(0.0);
        assert!(evaluate_setup(&bars, &levels, Trend::Bullish).is_none());
        assert!(evaluate_setup(&bars, &levels, Trend::Bearish).is_none());
    }

    #[test]
    fn empty_window_has_no_setup() {
        assert!(evaluate_setup(&[], &scenario_levels(), Trend::Bullish).is_none());
    }
}
