//! Test server harness for E2E testing.
//!
//! Provides `TestEventServer` for spawning real Event Registry server
//! instances in tests. Each instance has its own in-memory registry, so
//! tests are fully isolated from each other.

use event_core::EventRegistry;
use event_service::config::Config;
use event_service::routes::{self, AppState};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Event name used by spawned test servers.
pub const TEST_EVENT_NAME: &str = "Test Conference";

/// Test harness for spawning the Event Registry server in E2E tests.
///
/// The server binds to a random available port (127.0.0.1:0) and runs in
/// a background task until the harness is dropped.
pub struct TestEventServer {
    addr: SocketAddr,
    _handle: JoinHandle<()>,
}

impl TestEventServer {
    /// Spawn a test server with the default capacity (100).
    pub async fn spawn() -> Result<Self, anyhow::Error> {
        Self::spawn_with_capacity(100).await
    }

    /// Spawn a test server with an explicit capacity.
    ///
    /// Useful for capacity-exhaustion tests (`spawn_with_capacity(1)`).
    pub async fn spawn_with_capacity(capacity: usize) -> Result<Self, anyhow::Error> {
        let vars = HashMap::from([
            ("EVENT_NAME".to_string(), TEST_EVENT_NAME.to_string()),
            ("EVENT_CAPACITY".to_string(), capacity.to_string()),
            ("BIND_ADDRESS".to_string(), "127.0.0.1:0".to_string()),
        ]);

        let config = Config::from_vars(&vars)
            .map_err(|e| anyhow::anyhow!("Failed to create config: {}", e))?;

        let registry = EventRegistry::new(config.event_name.clone(), config.capacity);

        let state = Arc::new(AppState {
            registry: RwLock::new(registry),
            config,
        });

        // Build a Prometheus handle WITHOUT installing a global recorder:
        // a process can only install one recorder, and tests spawn many
        // servers. The /metrics endpoint still renders.
        let recorder = PrometheusBuilder::new().build_recorder();
        let metrics_handle = recorder.handle();

        // Build routes using the service's real route builder
        let app = routes::build_routes(state, metrics_handle);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        // Spawn server in background
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            _handle: handle,
        })
    }

    /// Get the base URL of the test server.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for TestEventServer {
    fn drop(&mut self) {
        // Abort the HTTP server task so the port is released as soon as
        // the test completes.
        self._handle.abort();
    }
}
