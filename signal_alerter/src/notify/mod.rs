//! Outbound message delivery.
//!
//! [`Notifier`] is the seam between the batch runner and whatever channel
//! carries the alerts; `dyn Notifier` lets the runner stay ignorant of the
//! transport (and lets tests record messages instead of sending them).

pub mod errors;
pub mod telegram;

use async_trait::async_trait;
use tracing::info;

pub use errors::NotifyError;
pub use telegram::TelegramNotifier;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// Logs the alert instead of delivering it (`--dry-run`).
pub struct DryRunNotifier;

#[async_trait]
impl Notifier for DryRunNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        info!(message = %text, "dry run, alert not delivered");
        Ok(())
    }
}
