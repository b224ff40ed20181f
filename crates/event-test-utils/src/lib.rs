//! # Event Registry Test Utilities
//!
//! Shared test utilities for the Event Registry Service.
//!
//! This crate provides:
//! - Server test harness (`TestEventServer` for E2E tests)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use event_test_utils::TestEventServer;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), anyhow::Error> {
//!     let server = TestEventServer::spawn().await?;
//!     let client = reqwest::Client::new();
//!
//!     let response = client
//!         .get(format!("{}/health", server.url()))
//!         .send()
//!         .await?;
//!
//!     assert_eq!(response.status(), 200);
//!     Ok(())
//! }
//! ```

pub mod server_harness;

// Re-export commonly used items
pub use server_harness::*;
