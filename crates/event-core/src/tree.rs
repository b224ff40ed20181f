//! Priority partition tree.
//!
//! A binary tree that places each new attendee by walking from the root
//! and comparing priority ranks: a strictly greater rank descends left,
//! an equal or lower rank descends right. Nothing is ever removed or
//! rebalanced, so the shape of the tree depends entirely on insertion
//! order and the in-order traversal is NOT a global priority sort: two
//! entries of the same rank inserted at different times are not
//! guaranteed to come out in arrival order relative to each other. That
//! behavior is deliberate and must stay as-is.
//!
//! Nodes own their children (`Option<Box<Node>>`); insert and traversal
//! are iterative, so a degenerate right-spine tree cannot overflow the
//! call stack.

use crate::attendee::Attendee;
use std::sync::Arc;

#[derive(Debug)]
struct Node {
    attendee: Arc<Attendee>,
    /// Rank captured at insert time. Records are immutable, so this never
    /// goes stale.
    rank: u8,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

/// Binary tree partitioning attendees by priority rank.
#[derive(Debug, Default)]
pub struct PriorityTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl PriorityTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attendee using the rank-comparison descent.
    ///
    /// An empty tree makes the record the root. Otherwise the descent
    /// starts at the root and repeats: strictly greater rank goes left,
    /// equal or lower rank goes right, stopping at the first empty slot.
    /// Equal-rank records therefore accumulate down the right spine.
    pub fn insert(&mut self, attendee: Arc<Attendee>) {
        let rank = attendee.rank();

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if rank > node.rank {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *slot = Some(Box::new(Node {
            attendee,
            rank,
            left: None,
            right: None,
        }));
        self.len += 1;
    }

    /// In-order traversal (left subtree, node, right subtree), iterative
    /// with an explicit work stack.
    ///
    /// Because greater rank descends left, this yields entries in
    /// non-increasing priority order along the tree's structure, which is
    /// not the same thing as a globally sorted sequence.
    pub fn traversal(&self) -> Vec<Arc<Attendee>> {
        let mut result = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node> = Vec::new();
        let mut current = self.root.as_deref();

        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                result.push(Arc::clone(&node.attendee));
                current = node.right.as_deref();
            }
        }

        result
    }

    /// Number of attendees inserted so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
