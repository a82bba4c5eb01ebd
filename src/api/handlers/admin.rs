//! Admin panel: server-rendered HTML view of contact submissions.
//!
//! User-supplied fields (name, email, company, message) pass through
//! askama's HTML auto-escaping, so a submission cannot inject markup
//! into the rendered page.

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::app_state::AppState;
use crate::domain::StoredContact;
use crate::error::GatewayError;
use crate::persistence::CONTACT_LIST_CAP;

/// One submission card on the admin page, timestamp preformatted.
#[derive(Debug)]
struct ContactCard {
    name: String,
    email: String,
    company: String,
    date: String,
    message: String,
}

impl From<StoredContact> for ContactCard {
    fn from(contact: StoredContact) -> Self {
        Self {
            name: contact.name,
            email: contact.email,
            company: contact.company,
            date: contact.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            message: contact.message,
        }
    }
}

/// Admin page template listing up to 100 submissions, newest first.
#[derive(Debug, Template)]
#[template(path = "admin.html")]
struct AdminTemplate {
    total: usize,
    contacts: Vec<ContactCard>,
}

/// Static page served when no document store is configured.
const UNAVAILABLE_PAGE: &str = "<html><body>\
<h2>Admin panel unavailable</h2>\
<p>MongoDB is not configured on this deployment. Set MONGO_URL and redeploy to enable the admin panel.</p>\
</body></html>";

/// Static page served when the listing or rendering fails.
const ERROR_PAGE: &str = "<html><body>\
<h2>Failed to generate admin panel</h2>\
</body></html>";

/// `GET /api/admin` — Render the contact submissions admin page.
///
/// Store unconfigured ⇒ static 503 page. Query or render failure ⇒
/// static 500 page, details logged server-side.
#[utoipa::path(
    get,
    path = "/api/admin",
    tag = "Admin",
    summary = "Contact submissions admin page",
    description = "Renders an HTML page listing up to 100 contact submissions, newest first.",
    responses(
        (status = 200, description = "Rendered admin page", content_type = "text/html"),
        (status = 500, description = "Listing or rendering failed", content_type = "text/html"),
        (status = 503, description = "Document store not configured", content_type = "text/html"),
    )
)]
pub async fn admin_panel(State(state): State<AppState>) -> Response {
    let contacts = match state.store.list_contacts(CONTACT_LIST_CAP).await {
        Ok(contacts) => contacts,
        Err(GatewayError::StoreUnavailable) => {
            return (StatusCode::SERVICE_UNAVAILABLE, Html(UNAVAILABLE_PAGE)).into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to list contacts for admin panel");
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE)).into_response();
        }
    };

    let template = AdminTemplate {
        total: contacts.len(),
        contacts: contacts.into_iter().map(ContactCard::from).collect(),
    };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to render admin panel");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE)).into_response()
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::api;
    use crate::app_state::AppState;
    use crate::domain::ContactSubmission;
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

    async fn get_admin(app: axum::Router) -> (StatusCode, String) {
        let Ok(request) = Request::builder().uri("/api/admin").body(Body::empty()) else {
            panic!("valid request");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("handler is infallible");
        };
        let status = response.status();
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body readable");
        };
        (status, String::from_utf8_lossy(&bytes).to_string())
    }

    #[tokio::test]
    async fn empty_store_renders_no_submissions_indicator() {
        let (status, html) = get_admin(app_with(Arc::new(MemoryStore::new()))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("No submissions yet."));
    }

    #[tokio::test]
    async fn submissions_render_as_cards_with_total() {
        let store = Arc::new(MemoryStore::new());
        store.seed_contact(&ContactSubmission::new(
            "Ada Lovelace".to_string(),
            "ada@example.com".to_string(),
            "Analytical Engines Ltd".to_string(),
            "Interested in your gateway.".to_string(),
        ));
        let (status, html) = get_admin(app_with(store)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("ada@example.com"));
        assert!(html.contains("<strong>Total:</strong> 1"));
    }

    #[tokio::test]
    async fn user_fields_are_html_escaped() {
        let store = Arc::new(MemoryStore::new());
        store.seed_contact(&ContactSubmission::new(
            "<script>alert(1)</script>".to_string(),
            "mallory@example.com".to_string(),
            String::new(),
            "<img src=x onerror=alert(1)>".to_string(),
        ));
        let (status, html) = get_admin(app_with(store)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn unconfigured_store_gets_the_static_page() {
        let (status, html) = get_admin(app_with(Arc::new(UnconfiguredStore))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(html.contains("Admin panel unavailable"));
    }
}
