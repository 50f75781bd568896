//! Health Route

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub artifact: ArtifactHealth,
}

/// Scoring artifact component health
#[derive(Debug, Serialize)]
pub struct ArtifactHealth {
    pub status: String,
    pub path: String,
}

/// Health check handler
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let artifact_status = if state.artifacts.is_loaded() {
        "loaded"
    } else {
        "not_loaded"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        artifact: ArtifactHealth {
            status: artifact_status.to_string(),
            path: state.artifacts.path().display().to_string(),
        },
    })
}
