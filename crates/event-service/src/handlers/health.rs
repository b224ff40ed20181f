//! Health check handler.

use crate::errors::EventError;
use crate::models::HealthResponse;
use crate::routes::AppState;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use tracing::instrument;

/// Handler for GET /health
///
/// The registry is in-memory with no external dependencies, so health is
/// a liveness signal only.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "event": "Tech Conference 2024"
/// }
/// ```
#[instrument(skip_all, name = "event.health.check")]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, EventError> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        event: state.config.event_name.clone(),
    }))
}
