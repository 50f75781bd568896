//! Schema Route

use axum::extract::State;
use axum::Json;
use record_schema::SchemaDescriptor;
use std::sync::Arc;

use crate::AppState;

/// Serve the shared input schema the form is built from: field names,
/// domains, and defaults, in declared order.
pub async fn get_schema(State(state): State<Arc<AppState>>) -> Json<SchemaDescriptor> {
    Json(state.schema.clone())
}
