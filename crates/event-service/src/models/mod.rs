//! Event Registry Service models.
//!
//! Request and response shapes for the HTTP surface. Wire field names
//! are part of the public API contract (`isVIP`, `isSpeaker`,
//! `dietaryPreference`, `spotsRemaining`, ...).

use event_core::{Attendee, EventStats};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body for `POST /api/attendees`.
///
/// `name` and `email` are required (and must be non-empty); the rest
/// default to `false` / `"none"` when omitted.
#[derive(Debug, Deserialize)]
pub struct RegisterAttendeeRequest {
    pub name: Option<String>,
    pub email: Option<String>,

    #[serde(rename = "isVIP")]
    pub is_vip: Option<bool>,

    #[serde(rename = "isSpeaker")]
    pub is_speaker: Option<bool>,

    #[serde(rename = "dietaryPreference")]
    pub dietary_preference: Option<String>,
}

/// 201 response for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterAttendeeResponse {
    pub success: bool,
    pub message: String,
    pub attendee: Arc<Attendee>,
}

/// Response for `GET /api/event`: event identity plus current stats.
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub name: String,
    pub capacity: usize,

    #[serde(flatten)]
    pub stats: EventStats,
}

/// Query parameters for `GET /api/attendees`.
///
/// `sort` selects the view: `"dietary"` or `"priority"`. Anything else
/// (including absence) returns the raw arrival-ordered list.
#[derive(Debug, Deserialize)]
pub struct ListAttendeesQuery {
    pub sort: Option<String>,
}

/// Health check response.
///
/// Returned by the `/health` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service health status. Always "healthy": the registry is in-memory
    /// and has no dependencies to probe.
    pub status: String,

    /// Name of the event being served.
    pub event: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_accepts_wire_field_names() {
        let request: RegisterAttendeeRequest = serde_json::from_str(
            r#"{
                "name": "John Doe",
                "email": "john@example.com",
                "isVIP": true,
                "isSpeaker": false,
                "dietaryPreference": "vegetarian"
            }"#,
        )
        .unwrap();

        assert_eq!(request.name.as_deref(), Some("John Doe"));
        assert_eq!(request.email.as_deref(), Some("john@example.com"));
        assert_eq!(request.is_vip, Some(true));
        assert_eq!(request.is_speaker, Some(false));
        assert_eq!(request.dietary_preference.as_deref(), Some("vegetarian"));
    }

    #[test]
    fn test_register_request_optional_fields_default_to_none() {
        let request: RegisterAttendeeRequest =
            serde_json::from_str(r#"{"name": "Jane", "email": "jane@example.com"}"#).unwrap();

        assert_eq!(request.is_vip, None);
        assert_eq!(request.is_speaker, None);
        assert_eq!(request.dietary_preference, None);
    }

    #[test]
    fn test_event_response_flattens_stats() {
        let response = EventResponse {
            name: "Tech Conference 2024".to_string(),
            capacity: 100,
            stats: EventStats {
                total_attendees: 3,
                vegetarian_count: 1,
                speakers_count: 1,
                vip_count: 1,
                spots_remaining: 97,
            },
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["name"], "Tech Conference 2024");
        assert_eq!(value["capacity"], 100);
        assert_eq!(value["totalAttendees"], 3);
        assert_eq!(value["vegetarianCount"], 1);
        assert_eq!(value["speakersCount"], 1);
        assert_eq!(value["vipCount"], 1);
        assert_eq!(value["spotsRemaining"], 97);
    }
}
