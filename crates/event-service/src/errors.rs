//! Event Registry Service error types.
//!
//! All errors map to HTTP status codes and body shapes via the
//! `IntoResponse` impl. The body shape is part of the public contract and
//! varies by variant: capacity rejection mirrors the registration result
//! envelope (`{"success": false, "message": ...}`), everything else uses
//! the flat `{"error": ...}` shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use event_core::RegistryError;
use serde::Serialize;
use thiserror::Error;

/// Event Registry Service error type.
///
/// Maps to HTTP status codes:
/// - Validation, CapacityExceeded: 400 Bad Request
/// - NotFound: 404 Not Found
/// - Internal: 500 Internal Server Error
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Event is at full capacity")]
    CapacityExceeded,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl EventError {
    /// Returns the HTTP status code for this error (for metrics recording).
    pub fn status_code(&self) -> u16 {
        match self {
            EventError::Validation(_) | EventError::CapacityExceeded => 400,
            EventError::NotFound(_) => 404,
            EventError::Internal(_) => 500,
        }
    }
}

/// Flat error body: `{"error": "..."}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Registration result envelope used for capacity rejections:
/// `{"success": false, "message": "..."}`.
#[derive(Serialize)]
struct RejectionBody {
    success: bool,
    message: String,
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        match &self {
            EventError::Validation(reason) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: reason.clone(),
                }),
            )
                .into_response(),
            EventError::CapacityExceeded => (
                StatusCode::BAD_REQUEST,
                Json(RejectionBody {
                    success: false,
                    message: self.to_string(),
                }),
            )
                .into_response(),
            EventError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: resource.clone(),
                }),
            )
                .into_response(),
            EventError::Internal(reason) => {
                // Log the fault server-side as well as surfacing it.
                tracing::error!(target: "event.errors", error = %reason, "Internal fault");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: reason.clone(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Convert core registry errors to service errors.
impl From<RegistryError> for EventError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::CapacityExceeded => EventError::CapacityExceeded,
        }
    }
}
