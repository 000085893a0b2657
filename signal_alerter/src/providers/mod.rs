//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, a unified interface for
//! fetching time-series bar data from any market data vendor.
//!
//! Each concrete provider implementation (such as the Yahoo chart API) should
//! implement [`DataProvider`] to handle vendor-specific request construction
//! and response decoding.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn DataProvider`) so the batch runner never depends on a concrete
//! vendor.

pub mod errors;
pub mod yahoo_chart;

use async_trait::async_trait;

pub use errors::ProviderError;

use crate::models::{bar_series::BarSeries, request_params::BarsRequest};

#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn fetch_bars(&self, request: &BarsRequest) -> Result<BarSeries, ProviderError>;
}
