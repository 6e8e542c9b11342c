//! API Router and Application State
//!
//! Central routing configuration and shared state.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
    Json, Router,
};
use nitro_crypto::Signer;
use serde::Serialize;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
    config::Config,
    signature::{require_signature, ReplayGuard},
    webhook::{handlers::handle_webhook, EventHandler},
};

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
    /// Keypair derived from the app secret
    pub signer: Arc<Signer>,
    /// Timestamp window check for deliveries
    pub replay_guard: ReplayGuard,
    /// Business logic for decoded events
    pub events: Arc<dyn EventHandler>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(config: Config, signer: Signer, events: Arc<dyn EventHandler>) -> Self {
        let replay_guard = ReplayGuard::from_secs(config.signature_tolerance_secs);
        Self {
            config: Arc::new(config),
            signer: Arc::new(signer),
            replay_guard,
            events,
        }
    }
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let max_body_size = state.config.max_webhook_body_size;

    // Only the delivery endpoint is signed; liveness routes stay open.
    let webhook_routes = Router::new()
        .route("/webhook", post(handle_webhook))
        .layer(from_fn_with_state(state.clone(), require_signature));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .merge(webhook_routes)
        // Middleware
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}

/// Liveness text.
async fn index() -> &'static str {
    "QQ Bot Webhook Server"
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    /// Service status
    status: &'static str,
}

/// Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
