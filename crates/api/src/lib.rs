//! Attrition Scoring API Server
//!
//! HTTP collaborator for the scoring contract: serves the shared input
//! schema, validates submitted records at the form boundary, and renders
//! predictions or structured errors.

use axum::routing::{get, post};
use axum::Router;
use model_artifact::ArtifactCache;
use record_schema::SchemaDescriptor;
use scoring_engine::RiskPolicy;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod error;
mod routes;
mod settings;

pub use error::{ApiError, ErrorResponse};
pub use settings::{RiskSettings, Settings};

/// Application state shared across handlers
pub struct AppState {
    /// Shared input schema served to the form and enforced at the boundary
    pub schema: SchemaDescriptor,
    /// Once-loaded scoring artifact
    pub artifacts: ArtifactCache,
    /// Risk banding policy
    pub risk: RiskPolicy,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create application state from settings
    pub fn new(settings: &Settings) -> Self {
        Self {
            schema: SchemaDescriptor::employee_attrition(),
            artifacts: ArtifactCache::new(&settings.artifact_path),
            risk: settings.risk.policy(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(routes::health::get_health))
        .route("/api/v1/schema", get(routes::schema::get_schema))
        .route("/api/v1/score", post(routes::score::post_score))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(&settings));

    // Surface a missing or unusable artifact at startup instead of on the
    // first scoring request; the server still starts either way.
    match state.artifacts.get() {
        Ok(pipeline) => {
            if let Err(e) = pipeline.transformer().check_schema(&state.schema) {
                warn!("Artifact and input schema disagree: {}", e);
            }
        }
        Err(e) => warn!("Scoring artifact unavailable at startup: {}", e),
    }

    let app = create_router(state);

    info!("Starting API server on {}", settings.bind_addr);

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
