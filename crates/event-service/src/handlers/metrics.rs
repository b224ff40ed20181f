//! Prometheus metrics endpoint handler.
//!
//! Provides the `/metrics` endpoint for Prometheus scraping. Only
//! operational data with bounded-cardinality labels is exposed; attendee
//! details never appear in metrics.

use axum::{extract::State, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;

/// Handler for GET /metrics
///
/// Returns Prometheus-formatted metrics for scraping. This is an
/// operational endpoint, not part of the `/api` surface.
///
/// # Response
///
/// Returns 200 OK with Prometheus text format:
/// ```text
/// # TYPE event_registrations_total counter
/// event_registrations_total{outcome="accepted"} 42
/// ```
#[tracing::instrument(skip_all, name = "event.metrics.scrape")]
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    handle.render()
}
