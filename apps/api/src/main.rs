mod classify;
mod config;
mod errors;
mod export;
mod render;
mod routes;
mod state;
mod synthesis;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::classify::CategoryPredictor;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting careerdocs v{}", env!("CARGO_PKG_VERSION"));

    // Missing or malformed classifier artifacts are fatal at startup
    let predictor = CategoryPredictor::load(&config.model_path, &config.vectorizer_path)
        .context("Failed to load classifier artifacts")?;

    match config.classify_timeout {
        Some(limit) => info!("Classification timeout: {}ms", limit.as_millis()),
        None => info!("Classification timeout: disabled"),
    }
    info!(
        "Portfolio website HTML escaping: {}",
        if config.escape_portfolio_html { "on" } else { "off" }
    );

    // Build app state
    let state = AppState::new(config.clone(), predictor);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
