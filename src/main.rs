//! contact-gateway server entry point.
//!
//! Starts the Axum HTTP server with all REST endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use contact_gateway::api;
use contact_gateway::app_state::AppState;
use contact_gateway::config::GatewayConfig;
use contact_gateway::persistence::{DocumentStore, MongoStore, UnconfiguredStore};
use contact_gateway::webhook::SheetsWebhookClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting contact-gateway");

    // Build the store handle. A missing MONGO_URL or a failed connection
    // degrades store-backed endpoints to 503 instead of aborting startup.
    let store: Arc<dyn DocumentStore> = match config.mongo_url.as_deref() {
        Some(url) => match MongoStore::connect(url, &config.db_name).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::error!(error = %e, "MongoDB connection failed; store endpoints degraded");
                Arc::new(UnconfiguredStore)
            }
        },
        None => {
            tracing::warn!("MONGO_URL not set; status and admin endpoints will be limited");
            Arc::new(UnconfiguredStore)
        }
    };

    // Build the webhook client
    let webhook = Arc::new(SheetsWebhookClient::new(
        config.sheets_webhook_url.clone(),
        Duration::from_secs(config.webhook_timeout_secs),
    ));

    // Build application state
    let app_state = AppState { store, webhook };

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The shared Mongo client handle is released when AppState drops here.
    tracing::info!("shutdown complete");
    Ok(())
}

/// Builds the CORS layer from the configured origin list.
fn cors_layer(config: &GatewayConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
