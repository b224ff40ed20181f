//! FIFO arrival queue.
//!
//! Records the order registrations were accepted, independent of priority.
//! The public API only ever reads the queue as a snapshot; dequeue exists
//! for completeness of the structure and is O(1) over the backing
//! `VecDeque`.

use crate::attendee::Attendee;
use std::collections::VecDeque;
use std::sync::Arc;

/// Append-only-at-tail, removable-at-head sequence of attendees.
///
/// Invariant: the relative order of the remaining elements is always a
/// suffix of the global arrival order; removing from the head never
/// reorders the rest.
#[derive(Debug, Default)]
pub struct ArrivalQueue {
    items: VecDeque<Arc<Attendee>>,
}

impl ArrivalQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attendee at the tail. O(1).
    pub fn enqueue(&mut self, attendee: Arc<Attendee>) {
        self.items.push_back(attendee);
    }

    /// Remove and return the head, or `None` if the queue is empty. O(1).
    pub fn dequeue(&mut self) -> Option<Arc<Attendee>> {
        self.items.pop_front()
    }

    /// Number of attendees currently queued.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Copy of the current contents in arrival order. The queue itself is
    /// left untouched.
    pub fn snapshot(&self) -> Vec<Arc<Attendee>> {
        self.items.iter().cloned().collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::attendee::Registration;

    fn attendee(name: &str) -> Arc<Attendee> {
        Arc::new(Attendee::new(Registration {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            is_vip: false,
            is_speaker: false,
            dietary_preference: "none".to_string(),
        }))
    }

    #[test]
    fn test_new_queue_is_empty() {
        let queue = ArrivalQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_enqueue_preserves_arrival_order() {
        let mut queue = ArrivalQueue::new();
        queue.enqueue(attendee("Amy"));
        queue.enqueue(attendee("Bob"));
        queue.enqueue(attendee("Cal"));

        let names: Vec<_> = queue.snapshot().iter().map(|a| a.name.clone()).collect();
        assert_eq!(names, ["Amy", "Bob", "Cal"]);
    }

    #[test]
    fn test_dequeue_returns_head_first() {
        let mut queue = ArrivalQueue::new();
        queue.enqueue(attendee("Amy"));
        queue.enqueue(attendee("Bob"));

        let head = queue.dequeue().unwrap();
        assert_eq!(head.name, "Amy");
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_dequeue_never_reorders_remainder() {
        let mut queue = ArrivalQueue::new();
        queue.enqueue(attendee("Amy"));
        queue.enqueue(attendee("Bob"));
        queue.enqueue(attendee("Cal"));

        queue.dequeue();

        let names: Vec<_> = queue.snapshot().iter().map(|a| a.name.clone()).collect();
        assert_eq!(names, ["Bob", "Cal"]);
    }

    #[test]
    fn test_dequeue_empty_returns_none() {
        let mut queue = ArrivalQueue::new();
        assert!(queue.dequeue().is_none());
    }

    #[test]
    fn test_snapshot_does_not_consume() {
        let mut queue = ArrivalQueue::new();
        queue.enqueue(attendee("Amy"));

        let first = queue.snapshot();
        let second = queue.snapshot();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(queue.len(), 1);
    }
}
