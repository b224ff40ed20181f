//! Event Registry Service Library
//!
//! HTTP surface over the [`event_core`] attendee-ordering engine. The
//! service holds one in-memory [`event_core::EventRegistry`] behind a
//! read-write lock; registration is the sole mutator and takes the write
//! guard, so the attendee list, arrival queue, and priority tree always
//! update as a single atomic unit.
//!
//! # Modules
//!
//! - `config` - Service configuration from environment
//! - `errors` - Error types with HTTP status code mapping
//! - `handlers` - HTTP request handlers
//! - `models` - Request/response models
//! - `observability` - Metrics recording helpers
//! - `routes` - Axum router setup

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod routes;
