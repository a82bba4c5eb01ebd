//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.
//! Server-side details for 500-class variants are logged at translation
//! time and never echoed to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::webhook::WebhookError;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "database not configured",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category          | HTTP Status                 |
/// |-----------|-------------------|-----------------------------|
/// | 1000–1999 | Validation        | 400 Bad Request             |
/// | 2000–2999 | Store availability| 503 Service Unavailable     |
/// | 3000–3999 | Server            | 500 Internal Server Error   |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The document store is not configured or unreachable.
    #[error("database not configured")]
    StoreUnavailable,

    /// Document store query or write failure.
    #[error("store error: {0}")]
    StoreError(String),

    /// The sheet-logging webhook rejected the payload or could not be
    /// reached.
    #[error("failed to send message")]
    WebhookFailed,

    /// The sheet-logging webhook did not answer within the deadline.
    #[error("timeout sending message")]
    WebhookTimeout,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::StoreUnavailable => 2001,
            Self::Internal(_) => 3000,
            Self::StoreError(_) => 3001,
            Self::WebhookFailed => 3002,
            Self::WebhookTimeout => 3003,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::StoreError(_)
            | Self::WebhookFailed
            | Self::WebhookTimeout
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message sent to the caller.
    ///
    /// Store and internal failures carry server-side details that must not
    /// leak; those collapse to a generic message here.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::StoreError(_) | Self::Internal(_) => "internal error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<WebhookError> for GatewayError {
    fn from(err: WebhookError) -> Self {
        match err {
            WebhookError::Timeout => Self::WebhookTimeout,
            WebhookError::Status { .. } | WebhookError::Transport(_) => Self::WebhookFailed,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.public_message(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            GatewayError::InvalidRequest("bad email".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::StoreUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            GatewayError::WebhookFailed.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GatewayError::WebhookTimeout.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GatewayError::StoreError("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_details_never_reach_the_caller() {
        let err = GatewayError::StoreError("connection refused at 10.0.0.5".to_string());
        assert_eq!(err.public_message(), "internal error");

        let err = GatewayError::Internal("stack trace".to_string());
        assert_eq!(err.public_message(), "internal error");
    }

    #[test]
    fn webhook_errors_translate_to_fixed_messages() {
        let err: GatewayError = WebhookError::Timeout.into();
        assert_eq!(err.public_message(), "timeout sending message");

        let err: GatewayError = WebhookError::Status {
            status: 500,
            body: "sheet quota exceeded".to_string(),
        }
        .into();
        assert_eq!(err.public_message(), "failed to send message");

        let err: GatewayError = WebhookError::Transport("dns failure".to_string()).into();
        assert_eq!(err.public_message(), "failed to send message");
    }
}
