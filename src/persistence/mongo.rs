//! MongoDB implementation of the document store.

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use mongodb::{Client as MongoClient, Collection, Database};

use super::DocumentStore;
use super::models::{ContactDocument, StatusCheckDocument};
use crate::domain::{ContactSubmission, StatusCheck, StoredContact};
use crate::error::GatewayError;

/// MongoDB-backed document store.
///
/// One shared client handle, opened once at startup and released when the
/// process exits.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl std::fmt::Debug for MongoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoStore")
            .field("database", &self.db.name())
            .finish()
    }
}

impl MongoStore {
    /// Connects to MongoDB and selects the given database.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StoreError`] when the connection string is
    /// invalid or the client cannot be constructed.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, GatewayError> {
        let client = MongoClient::with_uri_str(uri)
            .await
            .map_err(|e| GatewayError::StoreError(e.to_string()))?;
        let db = client.database(database);
        tracing::info!(database = %database, "connected to MongoDB");
        Ok(Self { db })
    }

    fn status_checks(&self) -> Collection<StatusCheckDocument> {
        self.db.collection("status_checks")
    }

    fn contacts(&self) -> Collection<ContactDocument> {
        self.db.collection("contacts")
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), GatewayError> {
        self.status_checks()
            .insert_one(StatusCheckDocument::from(check), None)
            .await
            .map_err(|e| GatewayError::StoreError(e.to_string()))?;
        Ok(())
    }

    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, GatewayError> {
        let options = FindOptions::builder()
            .sort(doc! { "timestamp": 1 })
            .limit(limit)
            .build();

        let mut cursor = self
            .status_checks()
            .find(None, options)
            .await
            .map_err(|e| GatewayError::StoreError(e.to_string()))?;

        let mut checks = Vec::new();
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| GatewayError::StoreError(e.to_string()))?
        {
            checks.push(StatusCheck::from(document));
        }
        Ok(checks)
    }

    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), GatewayError> {
        self.contacts()
            .insert_one(ContactDocument::from(submission), None)
            .await
            .map_err(|e| GatewayError::StoreError(e.to_string()))?;
        Ok(())
    }

    async fn list_contacts(&self, limit: i64) -> Result<Vec<StoredContact>, GatewayError> {
        let options = FindOptions::builder()
            .sort(doc! { "timestamp": -1 })
            .limit(limit)
            .build();

        let mut cursor = self
            .contacts()
            .find(None, options)
            .await
            .map_err(|e| GatewayError::StoreError(e.to_string()))?;

        let mut contacts = Vec::new();
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| GatewayError::StoreError(e.to_string()))?
        {
            contacts.push(StoredContact::from(document));
        }
        Ok(contacts)
    }
}
