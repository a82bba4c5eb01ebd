//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::DocumentStore;
use crate::webhook::SheetWebhook;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Document store handle; an unconfigured stand-in when no store is
    /// available.
    pub store: Arc<dyn DocumentStore>,
    /// Sheet-logging webhook client.
    pub webhook: Arc<dyn SheetWebhook>,
}
