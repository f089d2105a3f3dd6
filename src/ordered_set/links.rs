//! List header for nodes living in a slab.
//!
//! ## Design
//!
//! `Links` holds only the queue metadata: the head and tail slab keys and
//! the node count. The nodes themselves live in the slab owned by the set,
//! so every splice takes the slab by mutable reference.
//!
//! ## Queue Structure
//!
//! ```text
//! head <-> node2 <-> node3 <-> tail
//! ```
//!
//! - `push_front` links a node before the head
//! - `push_back` links a node after the tail
//! - Any node can be unlinked in O(1) using its slab key

use slab::Slab;

use crate::ordered_set::node::Node;

/// Head/tail/length header of a slab-backed doubly-linked list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Links {
    /// First node in sequence order (slab key)
    pub(crate) head: Option<usize>,

    /// Last node in sequence order (slab key)
    pub(crate) tail: Option<usize>,

    /// Number of linked nodes
    pub(crate) len: usize,
}

impl Links {
    /// Create an empty header
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Link a detached node after the current tail
    ///
    /// # Panics
    ///
    /// Panics if `key` or the current tail is not in the slab
    pub(crate) fn push_back<T>(&mut self, key: usize, slab: &mut Slab<Node<T>>) {
        debug_assert!(slab[key].is_unlinked(), "node {key} is already linked");
        let node = &mut slab[key];
        node.prev = self.tail;
        node.next = None;

        if let Some(tail_key) = self.tail {
            slab[tail_key].next = Some(key);
        } else {
            // Empty list - this is also the head
            self.head = Some(key);
        }

        self.tail = Some(key);
        self.len += 1;
    }

    /// Link a detached node before the current head
    ///
    /// # Panics
    ///
    /// Panics if `key` or the current head is not in the slab
    pub(crate) fn push_front<T>(&mut self, key: usize, slab: &mut Slab<Node<T>>) {
        debug_assert!(slab[key].is_unlinked(), "node {key} is already linked");
        let node = &mut slab[key];
        node.next = self.head;
        node.prev = None;

        if let Some(head_key) = self.head {
            slab[head_key].prev = Some(key);
        } else {
            // Empty list - this is also the tail
            self.tail = Some(key);
        }

        self.head = Some(key);
        self.len += 1;
    }

    /// Splice a node out of the list
    ///
    /// The node stays in the slab with both links cleared; removing it from
    /// the slab is the caller's job.
    ///
    /// # Panics
    ///
    /// Panics if `key` or one of its neighbours is not in the slab
    pub(crate) fn unlink<T>(&mut self, key: usize, slab: &mut Slab<Node<T>>) {
        let node = &slab[key];
        let prev_key = node.prev;
        let next_key = node.next;

        if let Some(prev) = prev_key {
            slab[prev].next = next_key;
        } else {
            self.head = next_key;
        }

        if let Some(next) = next_key {
            slab[next].prev = prev_key;
        } else {
            self.tail = prev_key;
        }

        let node = &mut slab[key];
        node.prev = None;
        node.next = None;

        self.len -= 1;
    }

    /// Forget every node without touching the slab
    #[inline]
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
