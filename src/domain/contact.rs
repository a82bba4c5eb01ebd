//! Contact-form submission records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact-form submission as received and forwarded.
///
/// Persisted best-effort after a successful webhook call; the store
/// assigns its own record identifier on insert (see [`StoredContact`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Submitter's name.
    pub name: String,
    /// Submitter's email address (syntactically validated upstream).
    pub email: String,
    /// Submitter's company; empty string when not provided.
    pub company: String,
    /// Free-form message body.
    pub message: String,
    /// Server-assigned receipt timestamp.
    pub timestamp: DateTime<Utc>,
}

impl ContactSubmission {
    /// Creates a submission stamped with the current time.
    #[must_use]
    pub fn new(name: String, email: String, company: String, message: String) -> Self {
        Self {
            name,
            email,
            company,
            message,
            timestamp: Utc::now(),
        }
    }
}

/// A contact submission as read back from the document store, carrying
/// the store-assigned identifier in stringified form.
///
/// The identifier is opaque and used only for display; no relational
/// linkage exists between records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredContact {
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
