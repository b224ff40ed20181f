//! Event details handler.

use crate::errors::EventError;
use crate::models::EventResponse;
use crate::routes::AppState;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use tracing::instrument;

/// Handler for GET /api/event
///
/// Returns the event identity plus current aggregate stats.
///
/// ## Example Response
///
/// ```json
/// {
///   "name": "Tech Conference 2024",
///   "capacity": 100,
///   "totalAttendees": 3,
///   "vegetarianCount": 1,
///   "speakersCount": 1,
///   "vipCount": 1,
///   "spotsRemaining": 97
/// }
/// ```
#[instrument(skip_all, name = "event.details")]
pub async fn get_event(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EventResponse>, EventError> {
    let registry = state.registry.read().await;

    Ok(Json(EventResponse {
        name: registry.event_name().to_string(),
        capacity: registry.capacity(),
        stats: registry.stats(),
    }))
}
