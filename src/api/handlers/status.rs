//! Status-check handlers: create and list.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{CreateStatusCheckRequest, StatusCheckDto};
use crate::app_state::AppState;
use crate::domain::StatusCheck;
use crate::error::{ErrorResponse, GatewayError};
use crate::persistence::STATUS_LIST_CAP;

/// `POST /api/status` — Record a status check.
///
/// Assigns a fresh identifier and the current time, persists the record,
/// and returns it.
///
/// # Errors
///
/// Returns [`GatewayError::StoreUnavailable`] when no store is
/// configured.
#[utoipa::path(
    post,
    path = "/api/status",
    tag = "Status",
    summary = "Record a status check",
    description = "Creates a status check with a server-assigned id and timestamp and persists it.",
    request_body = CreateStatusCheckRequest,
    responses(
        (status = 200, description = "Stored status check", body = StatusCheckDto),
        (status = 503, description = "Document store not configured", body = ErrorResponse),
    )
)]
pub async fn create_status_check(
    State(state): State<AppState>,
    Json(req): Json<CreateStatusCheckRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let check = StatusCheck::new(req.client_name);
    state.store.insert_status_check(&check).await?;

    tracing::info!(id = %check.id, client_name = %check.client_name, "status check recorded");
    Ok((StatusCode::OK, Json(StatusCheckDto::from(check))))
}

/// `GET /api/status` — List recorded status checks.
///
/// Returns up to 1000 records in insertion (timestamp ascending) order.
///
/// # Errors
///
/// Returns [`GatewayError::StoreUnavailable`] when no store is
/// configured.
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "Status",
    summary = "List status checks",
    description = "Returns up to 1000 status checks in insertion order.",
    responses(
        (status = 200, description = "Status check list", body = Vec<StatusCheckDto>),
        (status = 503, description = "Document store not configured", body = ErrorResponse),
    )
)]
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let checks = state.store.list_status_checks(STATUS_LIST_CAP).await?;
    let dtos: Vec<StatusCheckDto> = checks.into_iter().map(StatusCheckDto::from).collect();
    Ok(Json(dtos))
}

/// Status-check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/status", post(create_status_check).get(list_status_checks))
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::api;
    use crate::app_state::AppState;
    use crate::persistence::memory::MemoryStore;
    use crate::persistence::{DocumentStore, UnconfiguredStore};
    use crate::webhook::mock::{MockOutcome, MockWebhook};

    fn app_with(store: Arc<dyn DocumentStore>) -> axum::Router {
        let state = AppState {
            store,
            webhook: Arc::new(MockWebhook::new(MockOutcome::Ok)),
        };
        api::build_router().with_state(state)
    }

    fn post_status(client_name: &str) -> Request<Body> {
        let body = serde_json::json!({ "client_name": client_name }).to_string();
        let Ok(request) = Request::builder()
            .method("POST")
            .uri("/api/status")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
        else {
            panic!("valid request");
        };
        request
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body readable");
        };
        let Ok(body) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
            panic!("body is json");
        };
        body
    }

    #[tokio::test]
    async fn created_check_shows_up_in_listing_with_unique_id() {
        let store = Arc::new(MemoryStore::new());
        let app = app_with(store);

        let Ok(first) = app.clone().oneshot(post_status("client-a")).await else {
            panic!("handler is infallible");
        };
        assert_eq!(first.status(), StatusCode::OK);
        let first = json_body(first).await;

        let Ok(second) = app.clone().oneshot(post_status("client-b")).await else {
            panic!("handler is infallible");
        };
        let second = json_body(second).await;
        assert_ne!(first["id"], second["id"]);

        let Ok(request) = Request::builder().uri("/api/status").body(Body::empty()) else {
            panic!("valid request");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("handler is infallible");
        };
        assert_eq!(response.status(), StatusCode::OK);

        let listing = json_body(response).await;
        let Some(items) = listing.as_array() else {
            panic!("listing is an array");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items.first().map(|i| &i["client_name"]), Some(&first["client_name"]));
    }

    #[tokio::test]
    async fn status_endpoints_answer_503_without_a_store() {
        let app = app_with(Arc::new(UnconfiguredStore));

        let Ok(response) = app.clone().oneshot(post_status("client-a")).await else {
            panic!("handler is infallible");
        };
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let Ok(request) = Request::builder().uri("/api/status").body(Body::empty()) else {
            panic!("valid request");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("handler is infallible");
        };
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn listing_never_exceeds_the_cap() {
        let store = Arc::new(MemoryStore::new());
        for i in 0..1100 {
            let check = crate::domain::StatusCheck::new(format!("client-{i}"));
            if store.insert_status_check(&check).await.is_err() {
                panic!("seed insert succeeds");
            }
        }
        let app = app_with(store);

        let Ok(request) = Request::builder().uri("/api/status").body(Body::empty()) else {
            panic!("valid request");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("handler is infallible");
        };
        let listing = json_body(response).await;
        let Some(items) = listing.as_array() else {
            panic!("listing is an array");
        };
        assert_eq!(items.len(), 1000);
    }
}
