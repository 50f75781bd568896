//! Score Route

use axum::extract::State;
use axum::Json;
use record_schema::EmployeeRecord;
use scoring_engine::{score, AttritionLabel, RiskTier};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::{ApiError, AppState};

/// Response for the score endpoint
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub label: AttritionLabel,
    pub probability: f64,
    pub risk_tier: RiskTier,
}

/// Score a submitted employee record.
///
/// Range/enum validation happens here at the form boundary; the scoring
/// contract below only sees records that already satisfy the descriptor.
pub async fn post_score(
    State(state): State<Arc<AppState>>,
    Json(record): Json<EmployeeRecord>,
) -> Result<Json<ScoreResponse>, ApiError> {
    state.schema.validate(&record)?;

    let pipeline = state.artifacts.get()?;
    let prediction = score(&record, &pipeline)?;
    let risk_tier = state.risk.tier(prediction.probability);

    info!(
        "Scored record: label={}, probability={:.4}, tier={}",
        prediction.label.as_str(),
        prediction.probability,
        risk_tier.as_str()
    );

    Ok(Json(ScoreResponse {
        label: prediction.label,
        probability: prediction.probability,
        risk_tier,
    }))
}
