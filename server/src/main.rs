//! Nitro Bot Server - Main Entry Point
//!
//! Webhook endpoint for QQ bot push events.

use std::sync::Arc;

use anyhow::{Context, Result};
use nitro_crypto::Signer;
use tracing::{error, info};

use nitro_server::{api, config, events};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nitro_server=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    // Load configuration
    let config = config::Config::from_env().context("Failed to load configuration")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        app_id = %config.app_id,
        "Starting Nitro Bot Server"
    );

    // Derive the signing keypair from the app secret
    let signer =
        Signer::from_secret(&config.app_secret).context("Failed to initialize Ed25519 signer")?;
    info!("Ed25519 signer initialized");

    let registry = events::default_registry();
    info!(handlers = registry.len(), "Event handlers registered");

    // Build application state
    let bind_address = config.bind_address.clone();
    let state = api::AppState::new(config, signer, Arc::new(registry));

    // Build router
    let app = api::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    info!(address = %bind_address, "Server listening");

    // Graceful shutdown handler
    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal, cleaning up...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");

    Ok(())
}
