//! reqwest-backed implementation of the sheet-logging webhook.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::{SheetPayload, SheetWebhook, WebhookError};

/// HTTP client for the configured Google Apps Script endpoint (or any
/// compatible webhook URL).
#[derive(Debug, Clone)]
pub struct SheetsWebhookClient {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl SheetsWebhookClient {
    /// Creates a client targeting `url` with a per-request `timeout`.
    #[must_use]
    pub fn new(url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            timeout,
        }
    }
}

#[async_trait]
impl SheetWebhook for SheetsWebhookClient {
    async fn forward(&self, payload: &SheetPayload) -> Result<(), WebhookError> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WebhookError::Timeout
                } else {
                    WebhookError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::OK {
            tracing::info!(email = %payload.email, "forwarded contact submission to sheet webhook");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "sheet webhook rejected payload");
            Err(WebhookError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}
