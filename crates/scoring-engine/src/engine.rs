//! Scoring Contract Implementation

use crate::ScoreError;
use model_artifact::ScoringPipeline;
use record_schema::EmployeeRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Leave probability at or above which a record is labeled "leave"
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Predicted class for a scored record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttritionLabel {
    /// Employee predicted to stay
    Stay,
    /// Employee predicted to leave
    Leave,
}

impl AttritionLabel {
    /// String form used in responses and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            AttritionLabel::Stay => "stay",
            AttritionLabel::Leave => "leave",
        }
    }
}

/// Result of scoring one record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted class at [`DECISION_THRESHOLD`]
    pub label: AttritionLabel,
    /// Probability of the "leave" class
    pub probability: f64,
}

/// Score a single record against a loaded pipeline.
///
/// Pure and deterministic given its inputs: encode the record, estimate
/// the leave probability, and derive the label from that same probability
/// at [`DECISION_THRESHOLD`]. Failures are reported, never retried.
pub fn score(record: &EmployeeRecord, pipeline: &ScoringPipeline) -> Result<Prediction, ScoreError> {
    let features = pipeline.transform(record)?;
    let probability = pipeline.predict_proba(&features)?;

    let label = if probability >= DECISION_THRESHOLD {
        AttritionLabel::Leave
    } else {
        AttritionLabel::Stay
    };
    debug!(
        "Scored record: label={}, probability={:.4}",
        label.as_str(),
        probability
    );

    Ok(Prediction { label, probability })
}
