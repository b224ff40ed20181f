//! Metrics definitions for the Event Registry Service.
//!
//! Naming follows Prometheus conventions: `event_` prefix, `_total`
//! suffix for counters. Label cardinality is bounded: `outcome` takes
//! exactly two values.

use metrics::{counter, gauge};

/// Record a registration attempt outcome.
///
/// Metric: `event_registrations_total`
/// Labels: `outcome` = "accepted" | "rejected"
pub fn record_registration(outcome: &str) {
    counter!("event_registrations_total", "outcome" => outcome.to_string()).increment(1);
}

/// Record the current number of free spots.
///
/// Metric: `event_spots_remaining`
pub fn record_spots_remaining(spots: usize) {
    gauge!("event_spots_remaining").set(spots as f64);
}
