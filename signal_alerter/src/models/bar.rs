//! Canonical in-memory representation of a time-series bar (OHLCV).
//!
//! This struct is the standard output for all [`DataProvider`](crate::providers::DataProvider)
//! implementations, regardless of vendor.

use chrono::{DateTime, Utc};

/// A single time-series bar (OHLCV) for a given timestamp.
///
/// Vendor-agnostic and immutable once fetched; every value the signal engine
/// consumes comes through this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// The timestamp for this bar (UTC).
    pub timestamp: DateTime<Utc>,

    /// Opening price.
    pub open: f64,

    /// Highest price during the bar interval.
    pub high: f64,

    /// Lowest price during the bar interval.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Volume traded during the bar interval.
    pub volume: f64,
}
