//! Bar granularity and observation window, spelled the way the chart API
//! expects them in query strings. The same spelling is used in config files.

use serde::{Deserialize, Serialize};

/// The time interval covered by one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1m")]
    Minute1,
    #[serde(rename = "5m")]
    Minute5,
    #[default]
    #[serde(rename = "15m")]
    Minute15,
    #[serde(rename = "30m")]
    Minute30,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "1d")]
    Day1,
    #[serde(rename = "1wk")]
    Week1,
}

impl Interval {
    /// Query-string spelling used by the vendor.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Minute1 => "1m",
            Interval::Minute5 => "5m",
            Interval::Minute15 => "15m",
            Interval::Minute30 => "30m",
            Interval::Hour1 => "1h",
            Interval::Day1 => "1d",
            Interval::Week1 => "1wk",
        }
    }
}

/// How far back the observation window reaches from now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lookback {
    #[default]
    #[serde(rename = "1d")]
    Day1,
    #[serde(rename = "5d")]
    Day5,
    #[serde(rename = "1mo")]
    Month1,
    #[serde(rename = "3mo")]
    Month3,
    #[serde(rename = "1y")]
    Year1,
}

impl Lookback {
    /// Query-string spelling used by the vendor (`range` parameter).
    pub fn as_str(&self) -> &'static str {
        match self {
            Lookback::Day1 => "1d",
            Lookback::Day5 => "5d",
            Lookback::Month1 => "1mo",
            Lookback::Month3 => "3mo",
            Lookback::Year1 => "1y",
        }
    }
}
