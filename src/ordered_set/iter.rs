//! Iterators over an [`OrderedSet`].
//!
//! [`Iter`] keeps a cursor (slab key) at each end and walks the links, so a
//! traversal costs one slab lookup per step and never copies the set. It
//! borrows the set, which rules out mutation while a traversal is live.
//!
//! [`IntoIter`] consumes the set and drains it from the front.

use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use slab::Slab;

use crate::ordered_set::node::Node;
use crate::ordered_set::OrderedSet;

/// Borrowing iterator over set members in insertion order.
///
/// Created by [`OrderedSet::iter`].
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(
        nodes: &'a Slab<Node<T>>,
        head: Option<usize>,
        tail: Option<usize>,
        len: usize,
    ) -> Self {
        Self {
            nodes,
            front: head,
            back: tail,
            remaining: len,
        }
    }
}

// Manual impl: a derive would require `T: Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.front?;
        let node = &self.nodes[key];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.back?;
        let node = &self.nodes[key];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over set members in insertion order.
///
/// Created by the `IntoIterator` impl on [`OrderedSet`].
pub struct IntoIter<T, S> {
    set: OrderedSet<T, S>,
}

impl<T, S> IntoIter<T, S> {
    pub(crate) fn new(set: OrderedSet<T, S>) -> Self {
        Self { set }
    }
}

impl<T, S> Iterator for IntoIter<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.set.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.set.len(), Some(self.set.len()))
    }
}

impl<T, S> DoubleEndedIterator for IntoIter<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.set.pop_back()
    }
}

impl<T, S> ExactSizeIterator for IntoIter<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
}

impl<T, S> FusedIterator for IntoIter<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::OrderedSet;

    #[test]
    fn test_iter_forward_and_back() {
        let set = OrderedSet::from_sequence([1, 2, 3, 4]);

        let forward: Vec<_> = set.iter().copied().collect();
        let backward: Vec<_> = set.iter().rev().copied().collect();

        assert_eq!(forward, vec![1, 2, 3, 4]);
        assert_eq!(backward, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_iter_meets_in_middle() {
        let set = OrderedSet::from_sequence([1, 2, 3]);
        let mut iter = set.iter();

        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_iter_is_restartable_per_call() {
        let set = OrderedSet::from_sequence(["a", "b"]);

        let mut first = set.iter();
        first.next();
        let second: Vec<_> = set.iter().copied().collect();

        assert_eq!(second, vec!["a", "b"]);
        assert_eq!(first.next(), Some(&"b"));
    }

    #[test]
    fn test_iter_clone_is_independent() {
        let set = OrderedSet::from_sequence([10, 20, 30]);
        let mut iter = set.iter();
        iter.next();

        let rest: Vec<_> = iter.clone().copied().collect();
        assert_eq!(rest, vec![20, 30]);
        assert_eq!(iter.next(), Some(&20));
    }

    #[test]
    fn test_iter_empty() {
        let set: OrderedSet<u32> = OrderedSet::new();
        assert_eq!(set.iter().next(), None);
        assert_eq!(set.iter().next_back(), None);
    }

    #[test]
    fn test_into_iter_drains_both_ends() {
        let set = OrderedSet::from_sequence(['x', 'y', 'z']);
        let mut iter = set.into_iter();

        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back(), Some('z'));
        assert_eq!(iter.next(), Some('x'));
        assert_eq!(iter.next(), Some('y'));
        assert_eq!(iter.next(), None);
    }
}
