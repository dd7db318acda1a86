//! HTTP front end: router, shared state and process lifetime.

mod handler;
mod response;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{any, get},
};
use log::{info, warn};
use tower_http::trace::TraceLayer;

use crate::config::{Config, build_github};
use crate::github::GetReleases;

pub use handler::{download_latest, resolve_download};
pub use response::{ERROR_CODE, Envelope, LookupError, method_not_allowed};

/// Shared application state available to all handlers. Read-only.
pub struct AppState {
    pub homepage: String,
    pub releases: Arc<dyn GetReleases>,
}

impl AppState {
    pub fn new(homepage: String, releases: Arc<dyn GetReleases>) -> Self {
        Self { homepage, releases }
    }
}

/// Build the router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/download", any(download_latest))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

/// Binds the configured address and serves until Ctrl-C or SIGTERM.
pub async fn serve(config: Config) -> Result<()> {
    let github = build_github(&config)?;
    let state = Arc::new(AppState::new(config.homepage.clone(), Arc::new(github)));
    let app = router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
