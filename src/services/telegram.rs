use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum NotifyError {
    #[error("telegram delivery failed: {0}")]
    Delivery(String),
}

/// Thin Telegram Bot API client. Only `sendMessage` is needed: alerts and
/// the test endpoint both deliver plain text to a chat id.
#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    bot_token: String,
}

impl TelegramClient {
    pub fn new(bot_token: String) -> Self {
        Self {
            http: Client::new(),
            bot_token,
        }
    }

    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), NotifyError> {
        let url = format!(
            "https://api.telegram.org/bot{}/sendMessage",
            self.bot_token
        );

        let res = self
            .http
            .post(&url)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        let status = res.status();
        let body: SendMessageResponse = res
            .json()
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        if !status.is_success() || !body.ok {
            let description = body
                .description
                .unwrap_or_else(|| format!("Telegram returned {status}"));
            return Err(NotifyError::Delivery(description));
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}
