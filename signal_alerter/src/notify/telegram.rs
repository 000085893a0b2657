use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use shared_utils::env::get_env_var;
use tracing::debug;

use crate::notify::{Notifier, NotifyError};

const BASE_URL: &str = "https://api.telegram.org";

/// Delivers alerts via the Telegram bot API, one `sendMessage` call per
/// configured recipient.
pub struct TelegramNotifier {
    client: Client,
    token: SecretString,
    recipients: Vec<String>,
}

impl TelegramNotifier {
    /// Creates a notifier for the given recipient chat ids.
    ///
    /// Reads the bot token from the `TELEGRAM_BOT_TOKEN` environment
    /// variable.
    pub fn from_env(recipients: Vec<String>) -> Result<Self, NotifyError> {
        let token = SecretString::new(get_env_var("TELEGRAM_BOT_TOKEN")?.into());
        Ok(Self {
            client: Client::new(),
            token,
            recipients,
        })
    }

    fn send_url(&self) -> String {
        format!("{BASE_URL}/bot{}/sendMessage", self.token.expose_secret())
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        for chat_id in &self.recipients {
            let payload = json!({
                "chat_id": chat_id,
                "text": text,
                "parse_mode": "Markdown",
            });

            let response = self.client.post(self.send_url()).json(&payload).send().await?;

            // Fire-and-forget: the status is recorded but never acted on.
            debug!(chat_id = %chat_id, status = %response.status(), "sendMessage dispatched");
        }

        Ok(())
    }
}
