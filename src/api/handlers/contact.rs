//! Contact-form handlers: submission forwarding and JSON listing.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use validator::Validate;

use crate::api::dto::{ContactDto, ContactFormRequest, ContactListResponse, ContactResponse};
use crate::app_state::AppState;
use crate::domain::ContactSubmission;
use crate::error::{ErrorResponse, GatewayError};
use crate::persistence::CONTACT_LIST_CAP;
use crate::webhook::SheetPayload;

/// `POST /api/contact` — Forward a contact-form submission.
///
/// Validates the payload, forwards it to the sheet-logging webhook, and
/// on webhook success persists it best-effort: a store failure is logged
/// and the caller still gets a success acknowledgment.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] on a syntactically invalid
/// email, [`GatewayError::WebhookTimeout`] when the webhook misses its
/// deadline, and [`GatewayError::WebhookFailed`] on any other webhook
/// failure. No store write is attempted unless the webhook accepted the
/// payload.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Contact",
    summary = "Submit the contact form",
    description = "Forwards the submission to the sheet-logging webhook and persists it best-effort.",
    request_body = ContactFormRequest,
    responses(
        (status = 200, description = "Submission accepted", body = ContactResponse),
        (status = 400, description = "Invalid email address", body = ErrorResponse),
        (status = 500, description = "Webhook failure or timeout", body = ErrorResponse),
    )
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactFormRequest>,
) -> Result<Json<ContactResponse>, GatewayError> {
    form.validate()
        .map_err(|e| GatewayError::InvalidRequest(e.to_string()))?;

    let payload = SheetPayload {
        name: form.name.clone(),
        email: form.email.clone(),
        company: form.company.clone(),
        message: form.message.clone(),
    };
    state.webhook.forward(&payload).await?;

    // Best-effort persistence: the webhook already accepted the payload,
    // so a store failure must not fail the request.
    let submission = ContactSubmission::new(form.name, form.email, form.company, form.message);
    if let Err(e) = state.store.insert_contact(&submission).await {
        tracing::error!(error = %e, "failed to persist contact submission");
    }

    Ok(Json(ContactResponse {
        status: "success".to_string(),
        message: "Thanks — we'll get back to you.".to_string(),
    }))
}

/// `GET /api/contacts` — List stored contact submissions.
///
/// Returns up to 100 submissions, newest first, each with its
/// store-assigned identifier stringified.
///
/// # Errors
///
/// Returns [`GatewayError::StoreUnavailable`] when no store is
/// configured, or [`GatewayError::StoreError`] on query failure.
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "Contact",
    summary = "List contact submissions",
    description = "Returns up to 100 contact submissions sorted by timestamp descending.",
    responses(
        (status = 200, description = "Submission list", body = ContactListResponse),
        (status = 500, description = "Store query failure", body = ErrorResponse),
        (status = 503, description = "Document store not configured", body = ErrorResponse),
    )
)]
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<ContactListResponse>, GatewayError> {
    let contacts = state.store.list_contacts(CONTACT_LIST_CAP).await?;
    let contacts: Vec<ContactDto> = contacts.into_iter().map(ContactDto::from).collect();

    Ok(Json(ContactListResponse {
        status: "success".to_string(),
        count: contacts.len(),
        contacts,
    }))
}

/// Contact routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(submit_contact))
        .route("/contacts", get(list_contacts))
}
