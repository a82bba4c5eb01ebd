//! Contact-form DTOs for submission and listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::StoredContact;

/// Request body for `POST /api/contact`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ContactFormRequest {
    /// Submitter's name.
    pub name: String,
    /// Submitter's email address; must be syntactically valid.
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    /// Submitter's company; defaults to empty.
    #[serde(default)]
    pub company: String,
    /// Free-form message body.
    pub message: String,
}

/// Acknowledgment body for `POST /api/contact`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactResponse {
    /// Always `"success"` on the success path.
    pub status: String,
    /// Human-readable acknowledgment.
    pub message: String,
}

/// One contact submission in the `GET /api/contacts` listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactDto {
    /// Store-assigned record identifier, stringified.
    pub id: String,
    /// Submitter's name.
    pub name: String,
    /// Submitter's email address.
    pub email: String,
    /// Submitter's company; may be empty.
    pub company: String,
    /// Free-form message body.
    pub message: String,
    /// Receipt timestamp.
    pub timestamp: DateTime<Utc>,
}

impl From<StoredContact> for ContactDto {
    fn from(contact: StoredContact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            email: contact.email,
            company: contact.company,
            message: contact.message,
            timestamp: contact.timestamp,
        }
    }
}

/// Response body for `GET /api/contacts`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactListResponse {
    /// Always `"success"`.
    pub status: String,
    /// Number of submissions returned.
    pub count: usize,
    /// Submissions, newest first.
    pub contacts: Vec<ContactDto>,
}
