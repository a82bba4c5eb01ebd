//! BSON document models for the two MongoDB collections.
//!
//! These mirror the domain types but store timestamps as real BSON dates
//! so the `timestamp` sort in list queries compares chronologically.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

use crate::domain::{ContactSubmission, StatusCheck, StatusCheckId, StoredContact};

/// A row of the `status_checks` collection.
///
/// The gateway-assigned UUID lives in `id`; MongoDB's own `_id` is
/// ignored on read and never surfaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheckDocument {
    /// Gateway-assigned identifier (UUID string).
    pub id: StatusCheckId,
    /// Name of the client that pinged the status endpoint.
    pub client_name: String,
    /// Creation timestamp, stored as a BSON date.
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
}

impl From<&StatusCheck> for StatusCheckDocument {
    fn from(check: &StatusCheck) -> Self {
        Self {
            id: check.id,
            client_name: check.client_name.clone(),
            timestamp: check.timestamp,
        }
    }
}

impl From<StatusCheckDocument> for StatusCheck {
    fn from(doc: StatusCheckDocument) -> Self {
        Self {
            id: doc.id,
            client_name: doc.client_name,
            timestamp: doc.timestamp,
        }
    }
}

/// A row of the `contacts` collection.
///
/// `_id` is assigned by MongoDB on insert and is the record identifier
/// surfaced (hex-stringified) by the contacts listing and admin page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDocument {
    /// Store-assigned record identifier; absent before insert.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ObjectId>,
    /// Submitter's name.
    pub name: String,
    /// Submitter's email address.
    pub email: String,
    /// Submitter's company; may be empty.
    pub company: String,
    /// Free-form message body.
    pub message: String,
    /// Receipt timestamp, stored as a BSON date.
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
}

impl From<&ContactSubmission> for ContactDocument {
    fn from(submission: &ContactSubmission) -> Self {
        Self {
            object_id: None,
            name: submission.name.clone(),
            email: submission.email.clone(),
            company: submission.company.clone(),
            message: submission.message.clone(),
            timestamp: submission.timestamp,
        }
    }
}

impl From<ContactDocument> for StoredContact {
    fn from(doc: ContactDocument) -> Self {
        Self {
            id: doc.object_id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: doc.name,
            email: doc.email,
            company: doc.company,
            message: doc.message,
            timestamp: doc.timestamp,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn status_check_round_trips_through_document() {
        let check = StatusCheck::new("client-a".to_string());
        let doc = StatusCheckDocument::from(&check);
        let back = StatusCheck::from(doc);
        assert_eq!(back.id, check.id);
        assert_eq!(back.client_name, check.client_name);
    }

    #[test]
    fn stored_contact_carries_hex_object_id() {
        let oid = ObjectId::new();
        let doc = ContactDocument {
            object_id: Some(oid),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: String::new(),
            message: "hello".to_string(),
            timestamp: Utc::now(),
        };
        let stored = StoredContact::from(doc);
        assert_eq!(stored.id, oid.to_hex());
    }

    #[test]
    fn unsaved_document_omits_object_id() {
        let submission = ContactSubmission::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            String::new(),
            "hello".to_string(),
        );
        let doc = ContactDocument::from(&submission);
        let Ok(bson) = mongodb::bson::to_document(&doc) else {
            panic!("document serializes");
        };
        assert!(!bson.contains_key("_id"));
    }
}
