//! Registry facade.
//!
//! [`EventRegistry`] owns the capacity, the attendee list, the arrival
//! queue, and the priority tree. Every mutation and read goes through it.
//! The only mutating operation is [`EventRegistry::add_attendee`]; the
//! capacity check happens before any structure is touched, so a rejected
//! registration leaves no partial state behind.

use crate::attendee::{Attendee, Registration};
use crate::queue::ArrivalQueue;
use crate::tree::PriorityTree;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Failure reported by the registry.
///
/// Capacity exhaustion is a structured result, not a panic; the caller
/// decides how to surface it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Event is at full capacity")]
    CapacityExceeded,
}

/// Aggregate counts over the current attendee list.
///
/// Serialized field names match the public API contract
/// (`totalAttendees`, `vegetarianCount`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStats {
    /// Number of registered attendees.
    pub total_attendees: usize,

    /// Attendees whose dietary preference equals "vegetarian",
    /// case-insensitively.
    pub vegetarian_count: usize,

    /// Attendees flagged as speakers.
    pub speakers_count: usize,

    /// Attendees flagged as VIPs (speakers included when also VIP).
    pub vip_count: usize,

    /// Capacity minus total attendees.
    pub spots_remaining: usize,
}

/// Facade over the attendee list, arrival queue, and priority tree.
///
/// Invariant: `attendees().len() <= capacity()` after every operation.
/// Additions that would violate it are rejected, never truncated.
#[derive(Debug)]
pub struct EventRegistry {
    event_name: String,
    capacity: usize,
    attendees: Vec<Arc<Attendee>>,
    arrival_queue: ArrivalQueue,
    priority_tree: PriorityTree,
}

impl EventRegistry {
    /// Create a registry for an event with a fixed capacity.
    ///
    /// The capacity cannot change afterwards. All structures live until
    /// the registry is dropped; nothing is ever removed from them.
    pub fn new(event_name: impl Into<String>, capacity: usize) -> Self {
        Self {
            event_name: event_name.into(),
            capacity,
            attendees: Vec::with_capacity(capacity),
            arrival_queue: ArrivalQueue::new(),
            priority_tree: PriorityTree::new(),
        }
    }

    /// Register an attendee.
    ///
    /// Fails with [`RegistryError::CapacityExceeded`] when the event is
    /// full; this is the only failure path and it is checked before any
    /// structure is updated. On success the record is appended to the
    /// attendee list, enqueued in the arrival queue, and inserted into
    /// the priority tree, and the created record is returned.
    pub fn add_attendee(
        &mut self,
        registration: Registration,
    ) -> Result<Arc<Attendee>, RegistryError> {
        if self.attendees.len() >= self.capacity {
            return Err(RegistryError::CapacityExceeded);
        }

        let attendee = Arc::new(Attendee::new(registration));
        self.attendees.push(Arc::clone(&attendee));
        self.arrival_queue.enqueue(Arc::clone(&attendee));
        self.priority_tree.insert(Arc::clone(&attendee));

        Ok(attendee)
    }

    /// Event name fixed at construction.
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// Capacity fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All attendees in arrival order.
    pub fn attendees(&self) -> &[Arc<Attendee>] {
        &self.attendees
    }

    /// Aggregate counts. Pure read, O(n).
    pub fn stats(&self) -> EventStats {
        let total_attendees = self.attendees.len();
        let mut vegetarian_count = 0;
        let mut speakers_count = 0;
        let mut vip_count = 0;

        for attendee in &self.attendees {
            if attendee.dietary_preference.eq_ignore_ascii_case("vegetarian") {
                vegetarian_count += 1;
            }
            if attendee.is_speaker {
                speakers_count += 1;
            }
            if attendee.is_vip {
                vip_count += 1;
            }
        }

        EventStats {
            total_attendees,
            vegetarian_count,
            speakers_count,
            vip_count,
            spots_remaining: self.capacity - total_attendees,
        }
    }

    /// Copy of the attendee list, stably sorted by dietary preference
    /// (lexicographic byte order). The underlying list is untouched.
    pub fn by_dietary_preference(&self) -> Vec<Arc<Attendee>> {
        let mut sorted = self.attendees.clone();
        sorted.sort_by(|a, b| a.dietary_preference.cmp(&b.dietary_preference));
        sorted
    }

    /// Priority tree traversal. See [`PriorityTree::traversal`] for the
    /// ordering guarantees (and non-guarantees).
    pub fn prioritized(&self) -> Vec<Arc<Attendee>> {
        self.priority_tree.traversal()
    }

    /// Copy of the arrival queue's current contents, with no dequeue side
    /// effect.
    pub fn arrival_snapshot(&self) -> Vec<Arc<Attendee>> {
        self.arrival_queue.snapshot()
    }

    /// Linear scan for the first attendee with a matching email.
    ///
    /// Duplicate emails are never rejected on insert, so "first match
    /// wins" is part of the contract here.
    pub fn find_by_email(&self, email: &str) -> Option<&Arc<Attendee>> {
        self.attendees.iter().find(|a| a.email == email)
    }
}
