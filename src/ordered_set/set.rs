//! Insertion-ordered set with slab-backed nodes.
//!
//! ## Architecture
//!
//! - **Slab**: Owns every node, O(1) insert/remove/lookup by key
//! - **HashMap**: Value to slab key mapping for O(1) membership and removal
//! - **Links**: Head/tail header threading the nodes in insertion order
//!
//! A value is in the index exactly when its node is linked into the list,
//! and the slab holds exactly the linked nodes. Every public mutation keeps
//! the three in step.
//!
//! ## Memory Model
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - `Slab::with_capacity(n)` pre-allocates n slots
//! - Keys are reused after removal
//! - O(1) insert, remove, and lookup

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::ControlFlow;

use slab::Slab;
use tracing::{debug, trace};

use crate::error::{OrderedSetError, Result};
use crate::ordered_set::iter::{IntoIter, Iter};
use crate::ordered_set::links::Links;
use crate::ordered_set::node::Node;

/// A set of unique values that remembers insertion order.
///
/// Pushing at either end, popping at either end, removing a known value and
/// testing membership are all O(1).
///
/// Values are stored twice, once in their node and once as the index key,
/// so `T` must be `Clone` on top of the usual `Hash + Eq`.
#[derive(Clone)]
pub struct OrderedSet<T, S = RandomState> {
    /// Node storage
    /// Key: slab index, Value: Node
    nodes: Slab<Node<T>>,

    /// Value to slab key mapping
    index: HashMap<T, usize, S>,

    /// List header (head, tail, length)
    links: Links,
}

impl<T> OrderedSet<T> {
    /// Create a new empty set
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_set_slab::OrderedSet;
    ///
    /// let set: OrderedSet<u32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.front(), None);
    /// ```
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            index: HashMap::new(),
            links: Links::new(),
        }
    }

    /// Create a set with room for `capacity` values before reallocating
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_set_slab::OrderedSet;
    ///
    /// let set: OrderedSet<u64> = OrderedSet::with_capacity(10_000);
    /// assert!(set.capacity() >= 10_000);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        trace!(capacity, "pre-allocating ordered set");
        Self {
            nodes: Slab::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            links: Links::new(),
        }
    }
}

impl<T> OrderedSet<T>
where
    T: Hash + Eq + Clone,
{
    /// Build a set by pushing each value at the back, in order
    ///
    /// Later duplicates are skipped, so the first occurrence of a value
    /// decides its position.
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_set_slab::OrderedSet;
    ///
    /// let set = OrderedSet::from_sequence(["b", "a", "b", "c", "a"]);
    /// assert_eq!(set.to_vec(), vec!["b", "a", "c"]);
    /// ```
    pub fn from_sequence<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().collect()
    }

    /// Build a set from values that may be absent
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::InvalidValue`] on the first `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_set_slab::{OrderedSet, OrderedSetError};
    ///
    /// let set = OrderedSet::try_from_sequence([Some(1), Some(2), Some(1)]).unwrap();
    /// assert_eq!(set.to_vec(), vec![1, 2]);
    ///
    /// let err = OrderedSet::try_from_sequence([Some(1), None]).unwrap_err();
    /// assert_eq!(err, OrderedSetError::InvalidValue);
    /// ```
    pub fn try_from_sequence<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let mut set = Self::new();
        for value in values {
            set.try_push_back(value)?;
        }
        Ok(set)
    }
}

impl<T, S> OrderedSet<T, S> {
    /// Create an empty set whose index uses `hasher`
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            nodes: Slab::new(),
            index: HashMap::with_hasher(hasher),
            links: Links::new(),
        }
    }

    /// Create a pre-allocated set whose index uses `hasher`
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        trace!(capacity, "pre-allocating ordered set");
        Self {
            nodes: Slab::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, hasher),
            links: Links::new(),
        }
    }

    /// The index's hash builder
    #[inline]
    pub fn hasher(&self) -> &S {
        self.index.hasher()
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the number of pre-allocated node slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Get the number of values in the set
    #[inline]
    pub fn len(&self) -> usize {
        self.links.len
    }

    /// Check if the set is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    // ========================================================================
    // Peeking
    // ========================================================================

    /// The first value in insertion order, without removing it
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.links.head.map(|key| &self.nodes[key].value)
    }

    /// The last value in insertion order, without removing it
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.links.tail.map(|key| &self.nodes[key].value)
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Iterate over the values from front to back
    ///
    /// Every call starts a fresh traversal. The iterator is double-ended, so
    /// `iter().rev()` walks from the back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.links.head, self.links.tail, self.links.len)
    }

    /// Visit each value from front to back until the visitor breaks
    ///
    /// Returns `ControlFlow::Break(())` if the visitor stopped early.
    ///
    /// # Example
    ///
    /// ```
    /// use std::ops::ControlFlow;
    /// use ordered_set_slab::OrderedSet;
    ///
    /// let set = OrderedSet::from_sequence([1, 2, 3, 4]);
    /// let mut seen = Vec::new();
    ///
    /// let flow = set.each(|&value| {
    ///     if value == 3 {
    ///         return ControlFlow::Break(());
    ///     }
    ///     seen.push(value);
    ///     ControlFlow::Continue(())
    /// });
    ///
    /// assert!(flow.is_break());
    /// assert_eq!(seen, vec![1, 2]);
    /// ```
    pub fn each<F>(&self, visitor: F) -> ControlFlow<()>
    where
        F: FnMut(&T) -> ControlFlow<()>,
    {
        self.iter().try_for_each(visitor)
    }

    /// Transform each value, keeping insertion order
    ///
    /// ```
    /// use ordered_set_slab::OrderedSet;
    ///
    /// let set = OrderedSet::from_sequence(["a", "bb", "ccc"]);
    /// assert_eq!(set.map(|s| s.len()), vec![1, 2, 3]);
    /// ```
    pub fn map<U, F>(&self, transform: F) -> Vec<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(transform).collect()
    }

    /// Copy the values out in insertion order
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T, S> OrderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Reserve room for at least `additional` more values
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
        self.index.reserve(additional);
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert `value` as the new first element
    ///
    /// Returns `false` and leaves the set untouched if `value` is already a
    /// member.
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_set_slab::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert!(set.push_front("a"));
    /// assert!(set.push_front("b"));
    /// assert!(!set.push_front("a"));
    ///
    /// assert_eq!(set.to_vec(), vec!["b", "a"]);
    /// ```
    pub fn push_front(&mut self, value: T) -> bool {
        match self.insert_node(value) {
            Some(key) => {
                self.links.push_front(key, &mut self.nodes);
                true
            }
            None => false,
        }
    }

    /// Insert `value` as the new last element
    ///
    /// Returns `false` and leaves the set untouched if `value` is already a
    /// member.
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_set_slab::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert!(set.push_back("a"));
    /// assert!(set.push_back("b"));
    /// assert!(!set.push_back("a"));
    ///
    /// assert_eq!(set.to_vec(), vec!["a", "b"]);
    /// ```
    pub fn push_back(&mut self, value: T) -> bool {
        match self.insert_node(value) {
            Some(key) => {
                self.links.push_back(key, &mut self.nodes);
                true
            }
            None => false,
        }
    }

    /// [`push_front`](Self::push_front) for a value that may be absent
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::InvalidValue`] if `value` is `None`.
    pub fn try_push_front(&mut self, value: Option<T>) -> Result<bool> {
        let value = Self::require(value, "push_front")?;
        Ok(self.push_front(value))
    }

    /// [`push_back`](Self::push_back) for a value that may be absent
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::InvalidValue`] if `value` is `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_set_slab::{OrderedSet, OrderedSetError};
    ///
    /// let mut set = OrderedSet::new();
    /// assert_eq!(set.try_push_back(Some(1)), Ok(true));
    /// assert_eq!(set.try_push_back(None), Err(OrderedSetError::InvalidValue));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn try_push_back(&mut self, value: Option<T>) -> Result<bool> {
        let value = Self::require(value, "push_back")?;
        Ok(self.push_back(value))
    }

    fn require(value: Option<T>, operation: &'static str) -> Result<T> {
        value.ok_or_else(|| {
            debug!(operation, "rejected absent value");
            OrderedSetError::InvalidValue
        })
    }

    /// Store a detached node and index it, unless `value` is already present
    fn insert_node(&mut self, value: T) -> Option<usize> {
        if self.index.contains_key(&value) {
            return None;
        }
        let key = self.nodes.insert(Node::new(value.clone()));
        self.index.insert(value, key);
        Some(key)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Remove `value` and hand back the stored value
    ///
    /// Returns `None` if `value` is not a member.
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_set_slab::OrderedSet;
    ///
    /// let mut set = OrderedSet::from_sequence([String::from("a"), String::from("b")]);
    ///
    /// assert_eq!(set.pop("a"), Some(String::from("a")));
    /// assert_eq!(set.pop("a"), None);
    /// assert_eq!(set.to_vec(), vec![String::from("b")]);
    /// ```
    pub fn pop<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let key = self.index.remove(value)?;
        Some(self.release(key))
    }

    /// Remove and return the first value
    pub fn pop_front(&mut self) -> Option<T> {
        let key = self.links.head?;
        let value = self.release(key);
        self.index.remove(&value);
        Some(value)
    }

    /// Remove and return the last value
    pub fn pop_back(&mut self) -> Option<T> {
        let key = self.links.tail?;
        let value = self.release(key);
        self.index.remove(&value);
        Some(value)
    }

    /// Keep only the values for which `keep` returns `true`
    ///
    /// Survivors keep their relative order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.links.head;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            cursor = node.next;
            if !keep(&node.value) {
                let value = self.release(key);
                self.index.remove(&value);
            }
        }
    }

    /// Remove every value
    pub fn clear(&mut self) {
        let released = self.links.len;
        self.nodes.clear();
        self.index.clear();
        self.links.reset();
        trace!(released, "cleared ordered set");
    }

    /// Unlink a node and take it out of the slab
    ///
    /// The index entry is the caller's responsibility.
    fn release(&mut self, key: usize) -> T {
        self.links.unlink(key, &mut self.nodes);
        self.nodes.remove(key).value
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Check if `value` is a member
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(value)
    }

    /// Membership as a map from value to `true`
    ///
    /// The map carries no order.
    pub fn to_map(&self) -> HashMap<T, bool> {
        self.iter().map(|value| (value.clone(), true)).collect()
    }

    /// Walk the list both ways and cross-check the slab and index
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        let len = self.links.len;
        assert_eq!(self.nodes.len(), len, "slab holds unlinked nodes");
        assert_eq!(self.index.len(), len, "index out of step with list");
        assert_eq!(self.links.head.is_none(), len == 0);
        assert_eq!(self.links.tail.is_none(), len == 0);

        let mut forward = Vec::with_capacity(len);
        let mut prev = None;
        let mut cursor = self.links.head;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            assert_eq!(node.prev, prev, "broken prev link at key {key}");
            assert_eq!(self.index.get(&node.value), Some(&key));
            forward.push(key);
            assert!(forward.len() <= len, "cycle in list");
            prev = Some(key);
            cursor = node.next;
        }
        assert_eq!(forward.len(), len);
        assert_eq!(prev, self.links.tail);

        let mut backward = Vec::with_capacity(len);
        let mut cursor = self.links.tail;
        while let Some(key) = cursor {
            backward.push(key);
            assert!(backward.len() <= len, "cycle in list");
            cursor = self.nodes[key].prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);
    }
}

// ============================================================================
// Trait Impls
// ============================================================================

impl<T, S> Default for OrderedSet<T, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> fmt::Debug for OrderedSet<T, S>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two sets are equal when they hold the same values in the same order.
impl<T, S> PartialEq for OrderedSet<T, S>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, S> Eq for OrderedSet<T, S> where T: Eq {}

impl<T, S> FromIterator<T> for OrderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut set = Self::default();
        set.extend(values);
        set
    }
}

impl<T, S> Extend<T> for OrderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let values = values.into_iter();
        self.reserve(values.size_hint().0);
        for value in values {
            self.push_back(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for OrderedSet<T>
where
    T: Hash + Eq + Clone,
{
    fn from(values: [T; N]) -> Self {
        Self::from_sequence(values)
    }
}

impl<'a, T, S> IntoIterator for &'a OrderedSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> IntoIterator for OrderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Item = T;
    type IntoIter = IntoIter<T, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
