//! Indexed Binary Heap implementation
//!
//! A binary min-heap paired with a [`PositionIndex`] mapping every distinct
//! value to the slots that hold it. The index turns removal of an arbitrary
//! value into a lookup followed by an O(log n) positional removal, and turns
//! containment into a hash lookup.
//!
//! # Invariants
//!
//! - Heap order: for every slot `k > 0`, `data[k] >= data[(k - 1) / 2]`.
//! - Index consistency: every live slot `k` is recorded under `data[k]`, every
//!   recorded slot is live and holds an equal value, and no entry is empty.
//!
//! Every repair moves elements through one private `swap`, which updates the
//! store and the index together.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity         |
//! |---------------|--------------------|
//! | `add`         | O(log n) amortized |
//! | `remove_root` | O(log n)           |
//! | `remove`      | O(log n)           |
//! | `contains`    | O(1) average       |
//! | `peek`        | O(1)               |
//! | `from_vec`    | O(n)               |
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::indexed_binary::IndexedBinaryHeap;
//!
//! let mut heap = IndexedBinaryHeap::new(8);
//! for value in [5, 3, 7, 2, 4, 6, 8] {
//!     heap.add(value);
//! }
//!
//! assert_eq!(heap.peek(), Some(&2));
//! assert!(heap.remove(&4));
//! assert!(!heap.remove(&10));
//! assert_eq!(heap.size(), 6);
//! assert_eq!(heap.into_sorted_vec(), vec![2, 3, 5, 6, 7, 8]);
//! ```

use std::hash::Hash;

use log::trace;

use crate::position_index::PositionIndex;
use crate::traits::{Heap, HeapError, RemovableHeap};

/// A binary min-heap with a value-to-slot index
///
/// Elements are their own priorities. Equal elements may be stored any number
/// of times; each copy occupies its own slot.
#[derive(Debug, Clone)]
pub struct IndexedBinaryHeap<T: Ord + Hash + Clone> {
    /// Complete binary tree in level order
    data: Vec<T>,
    /// Slots currently holding each distinct value
    index: PositionIndex<T>,
}

impl<T: Ord + Hash + Clone> IndexedBinaryHeap<T> {
    /// Creates an empty heap with room for at least `initial_capacity` elements
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(initial_capacity),
            index: PositionIndex::with_capacity(initial_capacity),
        }
    }

    /// Builds a heap from `elements` in O(n)
    ///
    /// Elements are placed in their given order and indexed as they go, then
    /// every internal node is sunk from the last one down to the root.
    pub fn from_vec(elements: Vec<T>) -> Self {
        let mut index = PositionIndex::with_capacity(elements.len());
        for (slot, value) in elements.iter().enumerate() {
            index.insert(value, slot);
        }
        let mut heap = Self {
            data: elements,
            index,
        };

        let internal = heap.data.len() / 2;
        for k in (0..internal).rev() {
            heap.sink(k);
        }
        trace!(
            "bulk-loaded {} elements with {} heapify sinks",
            heap.data.len(),
            internal
        );
        heap
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of live elements
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of live elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the capacity of the backing store
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the minimum element, or `None` if the heap is empty
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns true if an element equal to `value` is in the heap
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains(value)
    }

    /// Returns how many elements equal to `value` are in the heap
    pub fn count(&self, value: &T) -> usize {
        self.index.count(value)
    }

    /// Iterates over the live elements in slot order, which is not sorted order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Inserts `value` and swims it up to its place
    ///
    /// When the store is full its capacity doubles; an empty allocation grows
    /// to one slot first.
    pub fn add(&mut self, value: T) {
        if self.data.len() == self.data.capacity() {
            let additional = self.data.capacity().max(1);
            self.data.reserve_exact(additional);
        }

        let slot = self.data.len();
        self.index.insert(&value, slot);
        self.data.push(value);
        self.swim(slot);
    }

    /// Inserts a value that may be absent
    ///
    /// # Errors
    /// Returns [`HeapError::AbsentValue`] for `None`; the heap is not touched.
    pub fn try_add(&mut self, value: Option<T>) -> Result<(), HeapError> {
        let value = value.ok_or(HeapError::AbsentValue)?;
        self.add(value);
        Ok(())
    }

    /// Removes one element equal to `value`
    ///
    /// When several copies exist, the one in the highest slot is removed.
    /// Returns `false` and leaves the heap unchanged if there is no such element.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.index.last_slot(value) {
            Some(slot) => {
                self.remove_slot(slot);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the minimum element, or `None` if the heap is empty
    pub fn remove_root(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        Some(self.remove_slot(0))
    }

    /// Removes and returns the minimum element
    pub fn poll(&mut self) -> Option<T> {
        self.remove_root()
    }

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn try_remove_root(&mut self) -> Result<T, HeapError> {
        self.remove_root().ok_or(HeapError::Empty)
    }

    /// Removes and returns the element in `slot`
    ///
    /// # Errors
    /// Returns [`HeapError::SlotOutOfRange`] if `slot` is not live; the heap is
    /// not touched.
    pub fn remove_at(&mut self, slot: usize) -> Result<T, HeapError> {
        let len = self.data.len();
        if slot >= len {
            return Err(HeapError::SlotOutOfRange { slot, len });
        }
        Ok(self.remove_slot(slot))
    }

    /// Removes every element, keeping the allocated capacity
    pub fn clear(&mut self) {
        trace!("clearing {} elements", self.data.len());
        self.data.clear();
        self.index.clear();
    }

    /// Drains the heap into a vector in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = self.remove_root() {
            sorted.push(value);
        }
        sorted
    }

    /// Returns true if the subtree rooted at `slot` satisfies heap order
    ///
    /// A slot past the end is an empty subtree and trivially valid.
    pub fn is_min_heap(&self, slot: usize) -> bool {
        let len = self.data.len();
        if slot >= len {
            return true;
        }

        let left = 2 * slot + 1;
        let right = 2 * slot + 2;
        if left < len && !self.less(slot, left) {
            return false;
        }
        if right < len && !self.less(slot, right) {
            return false;
        }
        self.is_min_heap(left) && self.is_min_heap(right)
    }

    /// Returns true if the index records exactly the live slots under their values
    pub fn is_index_consistent(&self) -> bool {
        let slots_match = self
            .data
            .iter()
            .enumerate()
            .all(|(slot, value)| self.index.slots(value).any(|s| s == slot));

        let entries_match = self.index.iter().all(|(value, slots)| {
            !slots.is_empty()
                && slots
                    .iter()
                    .all(|&s| self.data.get(s).is_some_and(|held| held == value))
        });

        slots_match && entries_match && self.index.total_slots() == self.data.len()
    }

    /// Positional removal; `slot` must be live
    fn remove_slot(&mut self, slot: usize) -> T {
        let last = self.data.len() - 1;
        self.swap(slot, last);

        let removed = self.data.swap_remove(last);
        self.index.remove(&removed, last);

        if slot == last {
            trace!("removed trailing slot {slot}");
            return removed;
        }

        if self.sink(slot) == slot {
            self.swim(slot);
            trace!("removed slot {slot}, repaired by swim");
        } else {
            trace!("removed slot {slot}, repaired by sink");
        }
        removed
    }

    /// Returns true if `data[i] <= data[j]`
    fn less(&self, i: usize, j: usize) -> bool {
        self.data[i] <= self.data[j]
    }

    /// Moves the element in slot `k` down until heap order holds below it
    ///
    /// Ties between children go to the left child. Returns the slot the
    /// element ends up in, which is `k` exactly when nothing moved.
    fn sink(&mut self, mut k: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = 2 * k + 1;
            let right = 2 * k + 2;
            if left >= len {
                break;
            }

            let smallest = if right < len && !self.less(left, right) {
                right
            } else {
                left
            };
            if self.less(k, smallest) {
                break;
            }

            self.swap(smallest, k);
            k = smallest;
        }
        k
    }

    /// Moves the element in slot `k` up while it is no greater than its parent
    fn swim(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if !self.less(k, parent) {
                break;
            }
            self.swap(parent, k);
            k = parent;
        }
    }

    /// Exchanges two slots in both the store and the index
    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.data.swap(i, j);
        // The value now in `j` came from `i`, and vice versa.
        self.index.swap(&self.data[j], &self.data[i], i, j);
    }
}

impl<T: Ord + Hash + Clone> Heap<T> for IndexedBinaryHeap<T> {
    fn new() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) {
        self.add(item);
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<T> {
        self.remove_root()
    }
}

impl<T: Ord + Hash + Clone> RemovableHeap<T> for IndexedBinaryHeap<T> {
    fn contains(&self, item: &T) -> bool {
        self.index.contains(item)
    }

    fn remove(&mut self, item: &T) -> bool {
        IndexedBinaryHeap::remove(self, item)
    }
}

impl<T: Ord + Hash + Clone> Default for IndexedBinaryHeap<T> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<T: Ord + Hash + Clone> From<Vec<T>> for IndexedBinaryHeap<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: Ord + Hash + Clone> FromIterator<T> for IndexedBinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord + Hash + Clone> Extend<T> for IndexedBinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
