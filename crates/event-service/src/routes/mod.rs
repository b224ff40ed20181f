//! HTTP routes for the Event Registry Service.
//!
//! Defines the Axum router and application state.

use crate::config::Config;
use crate::handlers;
use axum::{
    routing::{get, post},
    Router,
};
use event_core::EventRegistry;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

/// Application state shared across all handlers.
///
/// The registry is the single mutable structure in the process. Handlers
/// take the read guard for snapshots; registration takes the write guard,
/// which serializes the sole mutator as required by the core's model.
pub struct AppState {
    /// The in-memory attendee registry.
    pub registry: RwLock<EventRegistry>,

    /// Service configuration.
    pub config: Config,
}

/// Build the application routes.
///
/// Creates an Axum router with:
/// - `/api/event` - event details and stats
/// - `/api/attendees` - registration and listing
/// - `/api/attendees/:email` - lookup by email
/// - `/api/rsvp-queue` - arrival queue snapshot
/// - `/health` - liveness check
/// - `/metrics` - Prometheus scrape endpoint
/// - TraceLayer for request logging, 30 second timeout, permissive CORS
pub fn build_routes(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let api_routes = Router::new()
        .route("/api/event", get(handlers::event::get_event))
        .route(
            "/api/attendees",
            post(handlers::attendees::register_attendee).get(handlers::attendees::list_attendees),
        )
        .route("/api/attendees/:email", get(handlers::attendees::get_attendee))
        .route("/api/rsvp-queue", get(handlers::rsvp::rsvp_queue))
        .route("/health", get(handlers::health::health_check))
        .with_state(state);

    // Operational endpoint with its own state (the exporter handle).
    let metrics_routes = Router::new()
        .route("/metrics", get(handlers::metrics::metrics_handler))
        .with_state(metrics_handle);

    // Layer order (bottom-to-top execution):
    // 1. TimeoutLayer - timeout the request (innermost)
    // 2. TraceLayer - log request details
    // 3. CorsLayer - the API is consumed cross-origin
    api_routes
        .merge(metrics_routes)
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::collections::HashMap;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = Config::from_vars(&HashMap::new()).unwrap();
        let registry = EventRegistry::new(config.event_name.clone(), config.capacity);
        let state = Arc::new(AppState {
            registry: RwLock::new(registry),
            config,
        });

        // Build a handle without installing a global recorder so tests
        // can construct many routers in one process.
        let recorder = PrometheusBuilder::new().build_recorder();
        build_routes(state, recorder.handle())
    }

    #[tokio::test]
    async fn test_health_route_is_wired() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_metrics_route_is_wired() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/metrics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
