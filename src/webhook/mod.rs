//! Outbound sheet-logging webhook client.
//!
//! `POST /api/contact` forwards submissions to an external HTTP endpoint
//! that handles durable logging (e.g. into a spreadsheet). The endpoint is
//! an opaque collaborator: the gateway sends one JSON payload per
//! submission with a fixed timeout and no retries.

pub mod sheets;

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

pub use sheets::SheetsWebhookClient;

/// JSON payload forwarded to the webhook, one per submission.
#[derive(Debug, Clone, Serialize)]
pub struct SheetPayload {
    /// Submitter's name.
    pub name: String,
    /// Submitter's email address.
    pub email: String,
    /// Submitter's company; may be empty.
    pub company: String,
    /// Free-form message body.
    pub message: String,
}

/// Failure modes of the outbound webhook call.
///
/// [`Timeout`](WebhookError::Timeout) is kept distinct because the caller
/// surfaces a timeout-specific message; every other failure collapses to
/// a generic one.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The webhook did not answer within the configured deadline.
    #[error("webhook request timed out")]
    Timeout,

    /// The webhook answered with a non-200 status.
    #[error("webhook returned status {status}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, logged server-side only.
        body: String,
    },

    /// The request could not be sent or the response could not be read.
    #[error("webhook transport error: {0}")]
    Transport(String),
}

/// Seam for the sheet-logging webhook so handlers are testable without
/// network access.
#[async_trait]
pub trait SheetWebhook: Send + Sync + fmt::Debug {
    /// Forwards one submission payload to the webhook.
    ///
    /// Single-attempt semantics: no retry on any failure.
    ///
    /// # Errors
    ///
    /// Returns a [`WebhookError`] on timeout, non-200 response, or
    /// transport failure.
    async fn forward(&self, payload: &SheetPayload) -> Result<(), WebhookError>;
}
