//! HTTP Service
//!
//! - `POST /get-repo-details`: inspect `{ "url": ... }`
//! - `GET /try`: demo page (`<static_dir>/index.html`)
//! - `GET /health`: liveness
//! - everything else: static files from `static_dir`

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::{HealthResponse, RepoRequest};

use axum::{
    Router,
    routing::{get, post},
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::inspect::RepoInspector;
use crate::types::Result;

/// Shared state for all handlers
pub struct AppState {
    pub inspector: RepoInspector,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Arc<Self>> {
        Ok(Arc::new(Self {
            inspector: RepoInspector::from_config(config)?,
            static_dir: config.server.static_dir.clone(),
        }))
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    let try_page = ServeFile::new(state.static_dir.join("index.html"));
    let assets = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/get-repo-details", post(handlers::get_repo_details))
        .route("/health", get(handlers::health))
        .route_service("/try", try_page)
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: &Config) -> Result<()> {
    let state = AppState::from_config(config)?;
    let listener = tokio::net::TcpListener::bind(config.server.bind_addr()).await?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
