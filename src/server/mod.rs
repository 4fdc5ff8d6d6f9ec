//! HTTP server wiring
//!
//! The router owns the verb+path to handler mapping; `serve` binds a listener
//! and runs until a shutdown signal arrives. Everything request-scoped lives
//! in the resource modules; this layer only composes them.

pub mod router;

pub use router::{AppState, build_router};

use anyhow::Result;
use tokio::net::TcpListener;

/// Serve the application with graceful shutdown
///
/// Binds the provided address, serves requests, and handles SIGTERM and
/// SIGINT (Ctrl+C) for graceful shutdown.
pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let app = build_router(state);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
