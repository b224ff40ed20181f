//! Attendee handlers.
//!
//! Implements the registration and attendee listing endpoints:
//!
//! - `POST /api/attendees` - register an attendee
//! - `GET /api/attendees` - list attendees, optionally sorted
//! - `GET /api/attendees/:email` - look up one attendee by email

use crate::errors::EventError;
use crate::models::{ListAttendeesQuery, RegisterAttendeeRequest, RegisterAttendeeResponse};
use crate::observability::{record_registration, record_spots_remaining};
use crate::routes::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use event_core::{Attendee, Registration, DEFAULT_DIETARY_PREFERENCE};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Handler for POST /api/attendees
///
/// Registers an attendee against the fixed capacity. The write guard on
/// the registry serializes registrations, so the attendee list, arrival
/// queue, and priority tree always update together.
///
/// # Response
///
/// - 201 Created: `{"success": true, "message": "RSVP successful", "attendee": ...}`
/// - 400 Bad Request: `{"error": "Name and email are required"}` when
///   name or email is missing or empty
/// - 400 Bad Request: `{"success": false, "message": "Event is at full capacity"}`
///   when the event is full
#[instrument(skip_all, name = "event.attendees.register")]
pub async fn register_attendee(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterAttendeeRequest>,
) -> Result<(StatusCode, Json<RegisterAttendeeResponse>), EventError> {
    // Empty strings are rejected the same as missing fields.
    let name = payload.name.filter(|n| !n.is_empty());
    let email = payload.email.filter(|e| !e.is_empty());

    let (Some(name), Some(email)) = (name, email) else {
        return Err(EventError::Validation(
            "Name and email are required".to_string(),
        ));
    };

    let registration = Registration {
        name,
        email,
        is_vip: payload.is_vip.unwrap_or(false),
        is_speaker: payload.is_speaker.unwrap_or(false),
        dietary_preference: payload
            .dietary_preference
            .unwrap_or_else(|| DEFAULT_DIETARY_PREFERENCE.to_string()),
    };

    let mut registry = state.registry.write().await;

    match registry.add_attendee(registration) {
        Ok(attendee) => {
            let stats = registry.stats();
            record_registration("accepted");
            record_spots_remaining(stats.spots_remaining);

            info!(
                target: "event.handlers.attendees",
                email = %attendee.email,
                rank = attendee.rank(),
                spots_remaining = stats.spots_remaining,
                "Attendee registered"
            );

            Ok((
                StatusCode::CREATED,
                Json(RegisterAttendeeResponse {
                    success: true,
                    message: "RSVP successful".to_string(),
                    attendee,
                }),
            ))
        }
        Err(err) => {
            record_registration("rejected");
            warn!(
                target: "event.handlers.attendees",
                capacity = registry.capacity(),
                "Registration rejected"
            );
            Err(err.into())
        }
    }
}

/// Handler for GET /api/attendees
///
/// Lists attendees. The `sort` query parameter selects the view:
///
/// - `sort=dietary` - stable sort by dietary preference
/// - `sort=priority` - priority tree traversal
/// - anything else, or no `sort` - raw arrival-ordered list
#[instrument(skip(state, query), name = "event.attendees.list", fields(sort = query.sort.as_deref()))]
pub async fn list_attendees(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListAttendeesQuery>,
) -> Result<Json<Vec<Arc<Attendee>>>, EventError> {
    let registry = state.registry.read().await;

    let attendees = match query.sort.as_deref() {
        Some("dietary") => registry.by_dietary_preference(),
        Some("priority") => registry.prioritized(),
        _ => registry.attendees().to_vec(),
    };

    Ok(Json(attendees))
}

/// Handler for GET /api/attendees/:email
///
/// Looks up a single attendee by email. Duplicate emails are allowed on
/// registration, so this returns the first-inserted match.
///
/// # Response
///
/// - 200 OK: the attendee record
/// - 404 Not Found: `{"error": "Attendee not found"}`
#[instrument(skip(state), name = "event.attendees.lookup")]
pub async fn get_attendee(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> Result<Json<Arc<Attendee>>, EventError> {
    let registry = state.registry.read().await;

    registry
        .find_by_email(&email)
        .cloned()
        .map(Json)
        .ok_or_else(|| EventError::NotFound("Attendee not found".to_string()))
}
