//! RSVP queue handler.

use crate::errors::EventError;
use crate::routes::AppState;
use axum::extract::State;
use axum::Json;
use event_core::Attendee;
use std::sync::Arc;
use tracing::instrument;

/// Handler for GET /api/rsvp-queue
///
/// Returns a snapshot of the arrival queue's current contents. The queue
/// is read-only here: nothing is dequeued, and repeated calls return the
/// same sequence until another registration is accepted.
#[instrument(skip_all, name = "event.rsvp.snapshot")]
pub async fn rsvp_queue(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Arc<Attendee>>>, EventError> {
    let registry = state.registry.read().await;
    Ok(Json(registry.arrival_snapshot()))
}
