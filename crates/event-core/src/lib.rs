//! Core attendee-ordering engine for the Event Registry.
//!
//! This crate holds the in-memory data structures that every registration
//! flows through:
//!
//! - [`Attendee`] - immutable record for one registrant
//! - [`ArrivalQueue`] - FIFO structure recording registration order
//! - [`PriorityTree`] - binary tree partitioning attendees by priority rank
//! - [`EventRegistry`] - facade owning capacity, the attendee list, the
//!   queue, and the tree; coordinates every mutation and read
//!
//! The crate is synchronous and performs no I/O. Callers that handle
//! requests concurrently are expected to wrap [`EventRegistry`] in a lock
//! and serialize the single mutating operation
//! ([`EventRegistry::add_attendee`]).

/// Module for the attendee record and priority rank
pub mod attendee;

/// Module for the FIFO arrival queue
pub mod queue;

/// Module for the priority partition tree
pub mod tree;

/// Module for the registry facade and statistics
pub mod registry;

pub use attendee::{Attendee, Registration, DEFAULT_DIETARY_PREFERENCE};
pub use queue::ArrivalQueue;
pub use registry::{EventRegistry, EventStats, RegistryError};
pub use tree::PriorityTree;
