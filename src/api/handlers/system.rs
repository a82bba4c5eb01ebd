//! System endpoints: API root liveness payload and health check.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Fixed liveness payload returned by the API root.
#[derive(Debug, Serialize, ToSchema)]
struct RootResponse {
    message: String,
}

/// `GET /api/` — Fixed liveness payload.
///
/// No inputs, no side effects, no failure modes; works with or without
/// a configured store.
#[utoipa::path(
    get,
    path = "/api/",
    tag = "System",
    summary = "API root",
    description = "Returns a fixed liveness payload.",
    responses(
        (status = 200, description = "Service is up", body = RootResponse),
    )
)]
pub async fn root_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(RootResponse {
            message: "Hello World - backend up".to_string(),
        }),
    )
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// System routes mounted at the root level (not under /api).
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::api;
    use crate::app_state::AppState;
    use crate::persistence::UnconfiguredStore;
    use crate::webhook::mock::{MockOutcome, MockWebhook};

    fn app_without_store() -> axum::Router {
        let state = AppState {
            store: Arc::new(UnconfiguredStore),
            webhook: Arc::new(MockWebhook::new(MockOutcome::Ok)),
        };
        api::build_router().with_state(state)
    }

    #[tokio::test]
    async fn root_answers_without_a_store() {
        let app = app_without_store();
        let Ok(request) = Request::builder().uri("/api/").body(Body::empty()) else {
            panic!("valid request");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("handler is infallible");
        };
        assert_eq!(response.status(), StatusCode::OK);

        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body readable");
        };
        let Ok(body) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
            panic!("body is json");
        };
        assert_eq!(body["message"], "Hello World - backend up");
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let app = app_without_store();
        let Ok(request) = Request::builder().uri("/health").body(Body::empty()) else {
            panic!("valid request");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("handler is infallible");
        };
        assert_eq!(response.status(), StatusCode::OK);
    }
}
