use thiserror::Error;

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The vendor's API returned a specific error message (e.g., unknown
    /// symbol, non-success status).
    #[error("API error: {0}")]
    Api(String),

    /// The response body did not match the expected wire format.
    #[error("Malformed provider response: {0}")]
    Decode(String),
}
