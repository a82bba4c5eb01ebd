//! Persistence layer: the document store behind status checks and
//! contact submissions.
//!
//! The store is an optional collaborator. [`DocumentStore`] is the seam
//! handlers talk to; [`mongo::MongoStore`] is the MongoDB-backed
//! implementation and [`UnconfiguredStore`] stands in when `MONGO_URL`
//! is absent or the initial connection fails, answering every call with
//! [`GatewayError::StoreUnavailable`].

pub mod models;
pub mod mongo;

use async_trait::async_trait;

use crate::domain::{ContactSubmission, StatusCheck, StoredContact};
use crate::error::GatewayError;

pub use mongo::MongoStore;

/// Maximum number of status checks returned by a list query.
pub const STATUS_LIST_CAP: i64 = 1000;

/// Maximum number of contact submissions returned by a list query.
pub const CONTACT_LIST_CAP: i64 = 100;

/// Seam over the document store so handlers are testable without a live
/// database.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// Persists a status check.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StoreUnavailable`] when the store is not
    /// configured, or [`GatewayError::StoreError`] on write failure.
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), GatewayError>;

    /// Lists up to `limit` status checks in insertion (timestamp
    /// ascending) order.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StoreUnavailable`] when the store is not
    /// configured, or [`GatewayError::StoreError`] on query failure.
    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, GatewayError>;

    /// Persists a contact submission; the store assigns the record
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StoreUnavailable`] when the store is not
    /// configured, or [`GatewayError::StoreError`] on write failure.
    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), GatewayError>;

    /// Lists up to `limit` contact submissions, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StoreUnavailable`] when the store is not
    /// configured, or [`GatewayError::StoreError`] on query failure.
    async fn list_contacts(&self, limit: i64) -> Result<Vec<StoredContact>, GatewayError>;
}

/// Stand-in used when no document store is configured.
///
/// Every method answers [`GatewayError::StoreUnavailable`], so the
/// store-backed endpoints degrade to 503 while the rest of the service
/// keeps working.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredStore;

#[async_trait]
impl DocumentStore for UnconfiguredStore {
    async fn insert_status_check(&self, _check: &StatusCheck) -> Result<(), GatewayError> {
        Err(GatewayError::StoreUnavailable)
    }

    async fn list_status_checks(&self, _limit: i64) -> Result<Vec<StatusCheck>, GatewayError> {
        Err(GatewayError::StoreUnavailable)
    }

    async fn insert_contact(&self, _submission: &ContactSubmission) -> Result<(), GatewayError> {
        Err(GatewayError::StoreUnavailable)
    }

    async fn list_contacts(&self, _limit: i64) -> Result<Vec<StoredContact>, GatewayError> {
        Err(GatewayError::StoreUnavailable)
    }
}
