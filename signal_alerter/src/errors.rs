use thiserror::Error;

use crate::{notify::NotifyError, providers::ProviderError};

/// The unified error type for the `signal_alerter` crate.
///
/// This is what the per-instrument pipeline returns; keeping the variants
/// typed (rather than a catch-all string) is what lets the batch runner and
/// the tests tell failure kinds apart.
#[derive(Debug, Error)]
pub enum Error {
    /// An error while fetching bar data for an instrument.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// An error while delivering an alert.
    #[error(transparent)]
    Notify(#[from] NotifyError),

    /// An error loading or parsing configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}
