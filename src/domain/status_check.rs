//! Status-check records and their type-safe identifier.
//!
//! [`StatusCheckId`] is a newtype wrapper around [`uuid::Uuid`] (v4)
//! providing type safety so that status-check identifiers cannot be
//! confused with other UUIDs.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a status check.
///
/// Wraps a UUID v4. Generated once at record creation time and immutable
/// thereafter. Serialized as its string form everywhere, including in the
/// document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCheckId(uuid::Uuid);

impl StatusCheckId {
    /// Creates a new random `StatusCheckId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Creates a `StatusCheckId` from an existing [`uuid::Uuid`].
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner [`uuid::Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for StatusCheckId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StatusCheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A status-check record.
///
/// Created on each `POST /api/status`, immutable once stored. The id and
/// timestamp are server-assigned at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    /// Server-assigned unique identifier.
    pub id: StatusCheckId,
    /// Name of the client that pinged the status endpoint.
    pub client_name: String,
    /// Server-assigned creation timestamp.
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Creates a new record with a fresh id and the current time.
    #[must_use]
    pub fn new(client_name: String) -> Self {
        Self {
            id: StatusCheckId::new(),
            client_name,
            timestamp: Utc::now(),
        }
    }
}
