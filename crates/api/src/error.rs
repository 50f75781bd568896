//! API Error Mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use model_artifact::ArtifactError;
use record_schema::SchemaError;
use scoring_engine::ScoreError;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Errors surfaced to API clients.
///
/// The collaborator alone turns upstream failures into user-visible
/// responses; a prediction is never rendered alongside one of these.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Submitted fields failed boundary validation
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] SchemaError),

    /// Scoring artifact could not be loaded
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// Scoring contract failed
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Error body rendered to clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRecord(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Artifact(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Score(ScoreError::Schema(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Score(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidRecord(_) => "invalid_record",
            ApiError::Artifact(ArtifactError::NotFound { .. }) => "artifact_not_found",
            ApiError::Artifact(ArtifactError::Io { .. }) => "artifact_unavailable",
            ApiError::Artifact(ArtifactError::Incompatible { .. }) => "artifact_incompatible",
            ApiError::Score(ScoreError::Schema(_)) => "schema_mismatch",
            ApiError::Score(ScoreError::Transform(_)) => "transform_failed",
            ApiError::Score(ScoreError::Inference(_)) => "inference_failed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!("Request failed ({}): {}", status, self);

        let body = ErrorResponse {
            error: self.to_string(),
            kind: self.kind(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_status_mapping() {
        let invalid = ApiError::InvalidRecord(SchemaError::MissingField("Age".to_string()));
        assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(invalid.kind(), "invalid_record");

        let missing = ApiError::Artifact(ArtifactError::NotFound {
            path: PathBuf::from("nope.bin"),
        });
        assert_eq!(missing.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(missing.kind(), "artifact_not_found");

        let mismatch = ApiError::Score(ScoreError::Schema(SchemaError::UnknownField(
            "Nickname".to_string(),
        )));
        assert_eq!(mismatch.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(mismatch.kind(), "schema_mismatch");
    }
}
