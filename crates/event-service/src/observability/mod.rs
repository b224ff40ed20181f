//! Observability module for the Event Registry Service.
//!
//! Tracing is initialized in `main` and request spans come from
//! `TraceLayer`; this module holds the metrics recording helpers. Metrics
//! are exposed in Prometheus text format at `GET /metrics`.

pub mod metrics;

pub use metrics::{record_registration, record_spots_remaining};
