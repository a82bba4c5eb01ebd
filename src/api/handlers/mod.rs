//! REST endpoint handlers organized by resource.

pub mod admin;
pub mod contact;
pub mod status;
pub mod system;

use axum::Router;
use axum::routing::get;

use crate::app_state::AppState;

/// Composes all resource routes under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(system::root_handler))
        .merge(status::routes())
        .merge(contact::routes())
        .route("/admin", get(admin::admin_panel))
}
