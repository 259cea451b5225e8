//! HTTP liveness endpoint for hosting infrastructure.
use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tokio::net::TcpListener;

pub const LIVENESS_TEXT: &str = "Bot is running!";

/// `GET /` answers with [`LIVENESS_TEXT`]. No game state is reachable.
pub fn router() -> Router {
    Router::new().route("/", get(|| async { LIVENESS_TEXT }))
}

/// Bind `0.0.0.0:{port}` and serve the liveness router until the process exits.
pub async fn serve_liveness(port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind liveness endpoint on {}", addr))?;

    tracing::info!("Liveness endpoint listening on http://{}", addr);
    serve_on(listener).await
}

async fn serve_on(listener: TcpListener) -> Result<()> {
    axum::serve(listener, router())
        .await
        .context("Liveness endpoint stopped")
}
