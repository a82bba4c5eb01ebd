//! Status-check DTOs for create and list operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{StatusCheck, StatusCheckId};

/// Request body for `POST /api/status`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStatusCheckRequest {
    /// Name of the client performing the check.
    pub client_name: String,
}

/// A status check as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusCheckDto {
    /// Server-assigned unique identifier.
    #[schema(value_type = String)]
    pub id: StatusCheckId,
    /// Name of the client that performed the check.
    pub client_name: String,
    /// Server-assigned creation timestamp.
    pub timestamp: DateTime<Utc>,
}

impl From<StatusCheck> for StatusCheckDto {
    fn from(check: StatusCheck) -> Self {
        Self {
            id: check.id,
            client_name: check.client_name,
            timestamp: check.timestamp,
        }
    }
}
