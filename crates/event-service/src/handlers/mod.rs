//! HTTP request handlers.

pub mod attendees;
pub mod event;
pub mod health;
pub mod metrics;
pub mod rsvp;
