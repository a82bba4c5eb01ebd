//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All endpoints are mounted under `/api`.

pub mod dto;
pub mod handlers;

use axum::Router;
use axum::routing::get;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api", handlers::routes())
        // axum maps the nested `/` route to `/api` only; the documented
        // root path `/api/` needs its own entry.
        .route("/api/", get(handlers::system::root_handler))
        .merge(handlers::system::routes())
}
