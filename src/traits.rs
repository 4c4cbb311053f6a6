//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for min-heaps whose elements
//! are their own priorities:
//!
//! - [`Heap`]: Base trait shaped like `std::collections::BinaryHeap`, but min-ordered
//! - [`RemovableHeap`]: Extended trait adding removal and containment checks by value
//!
//! The extended trait is what a position index buys: without one, finding an
//! arbitrary value means a linear scan of the backing store.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// An absent value was offered where an element was required
    #[error("absent values are not valid heap elements")]
    AbsentValue,
    /// The operation needs at least one element but the heap is empty
    #[error("heap is empty")]
    Empty,
    /// The slot does not address a live element
    #[error("slot {slot} is out of range for a heap of {len} elements")]
    SlotOutOfRange {
        /// The requested slot
        slot: usize,
        /// The number of live elements at the time of the call
        len: usize,
    },
}

/// Base trait for min-heap data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
/// Wrap elements in `std::cmp::Reverse` to get max-heap behavior.
///
/// # Example
///
/// ```rust
/// use indexed_heaps::Heap;
/// use indexed_heaps::simple_binary::SimpleBinaryHeap;
///
/// let mut heap = SimpleBinaryHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized for every implementation in this crate.
    fn push(&mut self, item: T);

    /// Returns the minimum element without removing it
    ///
    /// Returns `None` on an empty heap; this never fails.
    ///
    /// # Time Complexity
    /// O(1) for all implementations
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n) for all implementations.
    fn pop(&mut self) -> Option<T>;
}

/// Extended heap trait with value-addressed operations
///
/// # Example
///
/// ```rust
/// use indexed_heaps::{Heap, RemovableHeap};
/// use indexed_heaps::indexed_binary::IndexedBinaryHeap;
///
/// let mut heap = IndexedBinaryHeap::default();
/// heap.push(10);
/// heap.push(5);
/// assert!(heap.contains(&10));
/// assert!(heap.remove(&10));
/// assert!(!heap.contains(&10));
/// assert!(!heap.remove(&10));
/// ```
pub trait RemovableHeap<T: Ord>: Heap<T> {
    /// Returns true if an element equal to `item` is in the heap
    ///
    /// # Time Complexity
    /// O(1) average
    fn contains(&self, item: &T) -> bool;

    /// Removes one element equal to `item`
    ///
    /// Returns `false` without touching the heap when no equal element exists.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove(&mut self, item: &T) -> bool;
}
