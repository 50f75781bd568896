//! Scoring Artifact Loading
//!
//! Deserializes a pre-trained (transformer, classifier) pair from durable
//! storage, normalizes its shape, and caches it for the process lifetime.

mod artifact;
mod loader;

pub use artifact::{
    ArtifactFile, ArtifactPayload, Classifier, ColumnEncoder, FittedTransformer, ScoringPipeline,
    FORMAT_VERSION,
};
pub use loader::{load, save, ArtifactCache};

use record_schema::SchemaError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading or writing a scoring artifact
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// No artifact at the given path
    #[error("Artifact not found at {path}")]
    NotFound { path: PathBuf },

    /// Artifact exists but could not be read or written
    #[error("Artifact io failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact bytes cannot be used (corruption or version skew)
    #[error("Artifact at {path} is incompatible: {reason}")]
    Incompatible { path: PathBuf, reason: String },
}

/// Errors while encoding a record into the fitted feature space
#[derive(Debug, Error)]
pub enum TransformError {
    /// Record does not match the columns the transformer was fit on
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Encoder produced a non-finite value
    #[error("Encoder for {field} produced a non-finite value")]
    NonFinite { field: String },
}

/// Errors in the classifier's probability estimation
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Encoded vector width does not match the fitted weights
    #[error("Invalid feature vector width: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Probability came out non-finite
    #[error("Classifier produced a non-finite probability")]
    NonFinite,
}
