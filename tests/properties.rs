//! Property-based tests for `OrderedSet`.
//!
//! Every property runs the set against a plain `Vec` model that keeps the
//! distinct values in order with O(n) operations.
//!
//! 1. **Uniqueness**: `len` equals the number of distinct values inserted
//! 2. **Order Preservation**: back-pushes yield first-occurrence order
//! 3. **Removal**: `pop(v)` drops exactly `v` and keeps the rest in order
//! 4. **Round-trip**: `from_sequence(xs).to_vec()` is `xs` without later duplicates
//! 5. **Idempotent Removal**: popping a non-member changes nothing
//! 6. **Clone Independence**: mutating one copy never shows in the other

use std::collections::HashSet;

use ordered_set_slab::OrderedSet;
use proptest::prelude::*;

/// First-occurrence deduplication
fn dedup_first(values: &[u8]) -> Vec<u8> {
    let mut seen = HashSet::new();
    values.iter().copied().filter(|v| seen.insert(*v)).collect()
}

#[derive(Debug, Clone)]
enum Op {
    PushFront(u8),
    PushBack(u8),
    Pop(u8),
    PopFront,
    PopBack,
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u8>().prop_map(Op::PushFront),
        4 => any::<u8>().prop_map(Op::PushBack),
        3 => any::<u8>().prop_map(Op::Pop),
        1 => Just(Op::PopFront),
        1 => Just(Op::PopBack),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn prop_len_counts_distinct(values in prop::collection::vec(any::<u8>(), 0..200)) {
        let mut set = OrderedSet::new();
        for value in &values {
            set.push_back(*value);
        }
        let distinct: HashSet<u8> = values.iter().copied().collect();
        prop_assert_eq!(set.len(), distinct.len());
    }

    #[test]
    fn prop_round_trip(values in prop::collection::vec(any::<u8>(), 0..200)) {
        let set = OrderedSet::from_sequence(values.iter().copied());
        prop_assert_eq!(set.to_vec(), dedup_first(&values));
    }

    #[test]
    fn prop_reinsert_is_noop(
        values in prop::collection::vec(any::<u8>(), 1..100),
        pick in any::<prop::sample::Index>(),
        front in any::<bool>()
    ) {
        let mut set = OrderedSet::from_sequence(values.iter().copied());
        let before = set.to_vec();
        let member = values[pick.index(values.len())];

        let inserted = if front { set.push_front(member) } else { set.push_back(member) };

        prop_assert!(!inserted);
        prop_assert_eq!(set.to_vec(), before);
    }

    #[test]
    fn prop_pop_member(
        values in prop::collection::vec(any::<u8>(), 1..100),
        pick in any::<prop::sample::Index>()
    ) {
        let mut set = OrderedSet::from_sequence(values.iter().copied());
        let member = values[pick.index(values.len())];
        let before = set.len();

        prop_assert_eq!(set.pop(&member), Some(member));
        prop_assert!(!set.contains(&member));
        prop_assert_eq!(set.len(), before - 1);

        let mut expected = dedup_first(&values);
        expected.retain(|v| *v != member);
        prop_assert_eq!(set.to_vec(), expected);
    }

    #[test]
    fn prop_pop_nonmember(values in prop::collection::vec(0u8..128, 0..100), missing in 128u8..=255) {
        let mut set = OrderedSet::from_sequence(values.iter().copied());
        let before = set.to_vec();

        prop_assert_eq!(set.pop(&missing), None);
        prop_assert_eq!(set.to_vec(), before);
    }

    #[test]
    fn prop_reverse_walk_mirrors_forward(values in prop::collection::vec(any::<u8>(), 0..100)) {
        let set = OrderedSet::from_sequence(values.iter().copied());
        let mut forward = set.to_vec();
        let backward: Vec<u8> = set.iter().rev().copied().collect();

        forward.reverse();
        prop_assert_eq!(backward, forward);
    }

    #[test]
    fn prop_clone_independent(
        values in prop::collection::vec(any::<u8>(), 0..100),
        ops in prop::collection::vec(op_strategy(), 0..50)
    ) {
        let original = OrderedSet::from_sequence(values.iter().copied());
        let snapshot = original.to_vec();
        let mut copy = original.clone();

        for op in ops {
            apply(&mut copy, &op);
        }

        prop_assert_eq!(original.to_vec(), snapshot);
    }

    #[test]
    fn prop_matches_vec_model(ops in prop::collection::vec(op_strategy(), 0..300)) {
        let mut set = OrderedSet::new();
        let mut model: Vec<u8> = Vec::new();

        for op in &ops {
            let (got, want) = match *op {
                Op::PushFront(v) => {
                    let fresh = !model.contains(&v);
                    if fresh {
                        model.insert(0, v);
                    }
                    prop_assert_eq!(set.push_front(v), fresh);
                    (None, None)
                }
                Op::PushBack(v) => {
                    let fresh = !model.contains(&v);
                    if fresh {
                        model.push(v);
                    }
                    prop_assert_eq!(set.push_back(v), fresh);
                    (None, None)
                }
                Op::Pop(v) => {
                    let position = model.iter().position(|m| *m == v);
                    let want = position.map(|i| model.remove(i));
                    (set.pop(&v), want)
                }
                Op::PopFront => {
                    let want = if model.is_empty() { None } else { Some(model.remove(0)) };
                    (set.pop_front(), want)
                }
                Op::PopBack => (set.pop_back(), model.pop()),
                Op::Clear => {
                    set.clear();
                    model.clear();
                    (None, None)
                }
            };

            prop_assert_eq!(got, want);
            prop_assert_eq!(set.len(), model.len());
            prop_assert_eq!(set.front(), model.first());
            prop_assert_eq!(set.back(), model.last());
        }

        prop_assert_eq!(set.to_vec(), model);
    }
}

fn apply(set: &mut OrderedSet<u8>, op: &Op) {
    match *op {
        Op::PushFront(v) => {
            set.push_front(v);
        }
        Op::PushBack(v) => {
            set.push_back(v);
        }
        Op::Pop(v) => {
            set.pop(&v);
        }
        Op::PopFront => {
            set.pop_front();
        }
        Op::PopBack => {
            set.pop_back();
        }
        Op::Clear => set.clear(),
    }
}
