//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that the
//! heap order and the position index stay consistent after every step.

use proptest::prelude::*;
use indexed_heaps::indexed_binary::IndexedBinaryHeap;
use indexed_heaps::simple_binary::SimpleBinaryHeap;
use indexed_heaps::Heap;

use std::collections::BTreeMap;

#[derive(Debug, Clone)]
enum Op {
    Add(i32),
    Remove(i32),
    RemoveRoot,
}

/// Small value range so removals usually hit and duplicates are common
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-20i32..20).prop_map(Op::Add),
        2 => (-20i32..20).prop_map(Op::Remove),
        1 => Just(Op::RemoveRoot),
    ]
}

/// Multiset model of the heap contents
#[derive(Default)]
struct Model {
    counts: BTreeMap<i32, usize>,
    len: usize,
}

impl Model {
    fn add(&mut self, value: i32) {
        *self.counts.entry(value).or_default() += 1;
        self.len += 1;
    }

    fn remove(&mut self, value: i32) -> bool {
        let Some(count) = self.counts.get_mut(&value) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.counts.remove(&value);
        }
        self.len -= 1;
        true
    }

    fn min(&self) -> Option<i32> {
        self.counts.keys().next().copied()
    }
}

fn check_against_model(
    heap: &IndexedBinaryHeap<i32>,
    model: &Model,
) -> Result<(), TestCaseError> {
    prop_assert!(heap.is_min_heap(0), "heap order broken: {:?}", heap);
    prop_assert!(heap.is_index_consistent(), "index out of sync: {:?}", heap);
    prop_assert_eq!(heap.size(), model.len);
    prop_assert_eq!(heap.is_empty(), model.len == 0);
    prop_assert_eq!(heap.peek().copied(), model.min());
    for (value, count) in &model.counts {
        prop_assert!(heap.contains(value));
        prop_assert_eq!(heap.count(value), *count);
    }
    Ok(())
}

/// Test every operation keeps the heap, the index, and the model in agreement
fn test_operation_sequence(ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut heap = IndexedBinaryHeap::new(0);
    let mut model = Model::default();

    for op in ops {
        match op {
            Op::Add(value) => {
                heap.add(value);
                model.add(value);
            }
            Op::Remove(value) => {
                let expected = model.remove(value);
                let before = heap.iter().copied().collect::<Vec<_>>();
                let removed = heap.remove(&value);
                prop_assert_eq!(removed, expected);
                if !removed {
                    // A miss must not disturb the layout.
                    prop_assert_eq!(heap.iter().copied().collect::<Vec<_>>(), before);
                }
                prop_assert_eq!(heap.contains(&value), model.counts.contains_key(&value));
            }
            Op::RemoveRoot => {
                let expected = model.min();
                prop_assert_eq!(heap.remove_root(), expected);
                if let Some(value) = expected {
                    model.remove(value);
                }
            }
        }
        check_against_model(&heap, &model)?;
    }

    Ok(())
}

/// Test that bulk loading produces a valid heap that drains sorted
fn test_bulk_load(values: Vec<i32>) -> Result<(), TestCaseError> {
    let heap = IndexedBinaryHeap::from_vec(values.clone());
    prop_assert!(heap.is_min_heap(0));
    prop_assert!(heap.is_index_consistent());
    prop_assert_eq!(heap.size(), values.len());

    let mut expected = values;
    expected.sort();
    prop_assert_eq!(heap.into_sorted_vec(), expected);
    Ok(())
}

/// Test that k copies of a value vanish after k removals, in any interleaving
fn test_duplicate_cycle(
    others: Vec<i32>,
    copies: usize,
    add_first: bool,
) -> Result<(), TestCaseError> {
    const DUP: i32 = 1_000;
    let mut heap = IndexedBinaryHeap::default();

    if add_first {
        for _ in 0..copies {
            heap.add(DUP);
        }
        heap.extend(others.iter().copied());
    } else {
        for value in &others {
            heap.add(*value);
            heap.add(DUP);
        }
        for _ in others.len()..copies {
            heap.add(DUP);
        }
    }
    let copies = copies.max(if add_first { 0 } else { others.len() });
    prop_assert_eq!(heap.count(&DUP), copies);

    for remaining in (0..copies).rev() {
        prop_assert!(heap.remove(&DUP));
        prop_assert_eq!(heap.count(&DUP), remaining);
        prop_assert_eq!(heap.contains(&DUP), remaining > 0);
        prop_assert!(heap.is_min_heap(0));
        prop_assert!(heap.is_index_consistent());
    }
    prop_assert!(!heap.remove(&DUP));

    let mut expected = others;
    expected.sort();
    prop_assert_eq!(heap.into_sorted_vec(), expected);
    Ok(())
}

/// Test that the indexed heap pops the same sequence as the simple heap
fn test_matches_simple_heap(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut indexed = IndexedBinaryHeap::default();
    let mut simple = SimpleBinaryHeap::new();

    for (should_pop, value) in ops {
        if should_pop {
            prop_assert_eq!(Heap::pop(&mut indexed), simple.pop());
        } else {
            Heap::push(&mut indexed, value);
            simple.push(value);
        }
        prop_assert_eq!(Heap::peek(&indexed), simple.peek());
        prop_assert_eq!(Heap::len(&indexed), simple.len());
    }

    Ok(())
}

proptest! {
    #[test]
    fn test_indexed_binary_operation_sequence(ops in prop::collection::vec(op_strategy(), 0..200)) {
        test_operation_sequence(ops)?;
    }

    #[test]
    fn test_indexed_binary_bulk_load(values in prop::collection::vec(-50i32..50, 0..100)) {
        test_bulk_load(values)?;
    }

    #[test]
    fn test_indexed_binary_duplicate_cycle(
        others in prop::collection::vec(-100i32..100, 0..30),
        copies in 0usize..20,
        add_first in prop::bool::ANY,
    ) {
        test_duplicate_cycle(others, copies, add_first)?;
    }

    #[test]
    fn test_indexed_binary_matches_simple(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..200)) {
        test_matches_simple_heap(ops)?;
    }
}
