use axum::{Json, body::Bytes, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use super::AppState;
use super::error::ApiError;
use crate::inspect::RepoReport;

#[derive(Debug, Default, Deserialize)]
pub struct RepoRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// POST /get-repo-details - Inspect a repository and its README
pub async fn get_repo_details(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<RepoReport>, ApiError> {
    let request: RepoRequest = if body.is_empty() {
        RepoRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))?
    };

    let url = request
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ApiError::BadRequest("URL is required".into()))?;

    info!(url, "Inspecting repository");
    let report = state.inspector.inspect(url).await?;

    Ok(Json(report))
}

/// GET /health - Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
