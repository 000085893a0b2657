use thiserror::Error;

/// Errors that can occur within a `Notifier` implementation.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// A transport error while delivering the message.
    #[error("Message delivery failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The notifier could not be constructed (e.g., bot token not set).
    #[error(transparent)]
    MissingToken(#[from] shared_utils::env::MissingEnvVarError),
}
