//! Router assembly and server lifecycle.

use super::handlers;
use super::request_id::request_id_middleware;
use crate::config::ServerSettings;
use crate::services::AdviceService;
use crate::{Error, Result};
use axum::http::{HeaderValue, header};
use axum::routing::{get, post};
use axum::{Router, middleware};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Query pipeline over the loaded rule set.
    pub service: AdviceService,
}

/// State as extracted by handlers.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Creates state around a service.
    #[must_use]
    pub const fn new(service: AdviceService) -> Self {
        Self { service }
    }
}

/// Builds the API router.
///
/// Origins that are not valid header values are skipped with a warning.
#[must_use]
pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/categories", get(handlers::categories))
        .route("/scenarios", post(handlers::scenarios))
        .route("/query", post(handlers::query))
        .route("/health", get(handlers::health))
        .route("/test-scenarios", get(handlers::test_scenarios))
        // Security headers (OWASP recommendations)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(Arc::new(state))
}

/// CORS for the configured origins with credentials. Wildcards cannot be
/// combined with credentials, so methods and headers mirror the request and
/// a `*` origin is dropped.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter(|origin| {
            let wildcard = origin.trim() == "*";
            if wildcard {
                tracing::warn!("Ignoring wildcard CORS origin with credentials enabled");
            }
            !wildcard
        })
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Skipping invalid CORS origin");
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Binds the configured address and serves until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(settings: &ServerSettings, service: AdviceService) -> Result<()> {
    let address = settings.bind_address();
    let app = router(AppState::new(service), &settings.cors_origins);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| Error::OperationFailed {
            operation: "bind".to_string(),
            cause: format!("{address}: {e}"),
        })?;

    tracing::info!(address = %address, "Starting legal aid HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::OperationFailed {
            operation: "serve".to_string(),
            cause: e.to_string(),
        })?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
