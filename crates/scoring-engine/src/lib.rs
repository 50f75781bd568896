//! Attrition Scoring Engine
//!
//! Maps a raw employee record through the fitted pipeline to a labeled
//! probability, and bands that probability into risk tiers.

mod engine;
mod risk;

pub use engine::{score, AttritionLabel, Prediction, DECISION_THRESHOLD};
pub use risk::{RiskPolicy, RiskTier};

use model_artifact::{InferenceError, TransformError};
use record_schema::SchemaError;
use thiserror::Error;

/// Errors from the scoring contract
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Record fields do not match what the artifact was fit on
    #[error("Record does not match the artifact schema: {0}")]
    Schema(#[from] SchemaError),

    /// Transform step failed on a non-schema problem
    #[error("Feature transform failed: {0}")]
    Transform(TransformError),

    /// Probability estimation failed
    #[error("Inference failed: {0}")]
    Inference(#[from] InferenceError),
}

impl From<TransformError> for ScoreError {
    fn from(err: TransformError) -> Self {
        // Schema mismatches keep their own identity so callers can report
        // an input problem rather than a numerical one.
        match err {
            TransformError::Schema(e) => ScoreError::Schema(e),
            other => ScoreError::Transform(other),
        }
    }
}
