//! Element node for slab-based storage.
//!
//! ## Design
//!
//! `Node` wraps one set member with doubly-linked list pointers so that a
//! member can be unlinked in O(1) once its slab key is known.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup
//!
//! ## Linked List
//!
//! Members form one doubly-linked list in insertion order:
//! - `next`: Points towards the tail
//! - `prev`: Points towards the head
//!
//! The pointers are navigation only. The slab owns every node.

/// Node stored in the set's slab.
///
/// The links are slab keys (`usize`), not direct references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<T> {
    /// The member value. Never changes while the node is live.
    pub(crate) value: T,

    /// Next node towards the tail (slab key), `None` at the tail
    pub(crate) next: Option<usize>,

    /// Previous node towards the head (slab key), `None` at the head
    pub(crate) prev: Option<usize>,
}

impl<T> Node<T> {
    /// Create a new node (not yet linked)
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            next: None,
            prev: None,
        }
    }

    /// Check if this node has no neighbours
    ///
    /// True for a detached node and for the only node of a one-element list.
    #[inline]
    pub(crate) fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
