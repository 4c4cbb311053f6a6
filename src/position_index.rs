//! Reverse lookup from element values to the heap slots holding them
//!
//! The index maps each distinct value to the ordered set of slots currently
//! holding an equal value. Duplicates share one entry with several slots, and
//! an entry is dropped as soon as its slot set becomes empty, so the presence
//! of a key is exactly the containment answer.
//!
//! The index never inspects the heap. Keeping both in step is the caller's job,
//! and [`IndexedBinaryHeap`](crate::indexed_binary::IndexedBinaryHeap) funnels
//! every slot change through a single swap primitive for that purpose.

use std::collections::BTreeSet;
use std::hash::Hash;

#[cfg(feature = "fxhash")]
type Entries<T> = rustc_hash::FxHashMap<T, BTreeSet<usize>>;

#[cfg(not(feature = "fxhash"))]
type Entries<T> = std::collections::HashMap<T, BTreeSet<usize>>;

/// Mapping from a value to every slot holding an equal value
#[derive(Debug, Clone)]
pub struct PositionIndex<T> {
    entries: Entries<T>,
}

impl<T: Hash + Eq + Clone> PositionIndex<T> {
    /// Creates an empty index
    pub fn new() -> Self {
        Self {
            entries: Entries::default(),
        }
    }

    /// Creates an empty index sized for `capacity` distinct values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Entries::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Records that `slot` holds a value equal to `value`
    pub fn insert(&mut self, value: &T, slot: usize) {
        match self.entries.get_mut(value) {
            Some(slots) => {
                slots.insert(slot);
            }
            None => {
                self.entries.insert(value.clone(), BTreeSet::from([slot]));
            }
        }
    }

    /// Forgets that `slot` holds `value`, dropping the entry once it is empty
    ///
    /// Returns false if the pair was not recorded.
    pub fn remove(&mut self, value: &T, slot: usize) -> bool {
        let Some(slots) = self.entries.get_mut(value) else {
            return false;
        };
        let removed = slots.remove(&slot);
        if slots.is_empty() {
            self.entries.remove(value);
        }
        removed
    }

    /// Records that `at_i` moved from slot `i` to `j` and `at_j` from `j` to `i`
    ///
    /// Both removals happen before both insertions, so equal values (one
    /// entry for both) come out holding `{i, j}` as they went in.
    pub fn swap(&mut self, at_i: &T, at_j: &T, i: usize, j: usize) {
        let removed_i = self.entries.get_mut(at_i).is_some_and(|s| s.remove(&i));
        let removed_j = self.entries.get_mut(at_j).is_some_and(|s| s.remove(&j));
        debug_assert!(removed_i && removed_j, "swap of unindexed slots {i} and {j}");

        if let Some(slots) = self.entries.get_mut(at_i) {
            slots.insert(j);
        }
        if let Some(slots) = self.entries.get_mut(at_j) {
            slots.insert(i);
        }
    }

    /// Returns the highest slot holding a value equal to `value`
    ///
    /// With duplicates present this is the fixed tie-break used by removal.
    pub fn last_slot(&self, value: &T) -> Option<usize> {
        self.entries.get(value).and_then(|slots| slots.last().copied())
    }

    /// Returns true if any slot holds a value equal to `value`
    pub fn contains(&self, value: &T) -> bool {
        self.entries.contains_key(value)
    }

    /// Returns the number of slots holding a value equal to `value`
    pub fn count(&self, value: &T) -> usize {
        self.entries.get(value).map_or(0, BTreeSet::len)
    }

    /// Returns the slots holding `value`, in ascending order
    pub fn slots(&self, value: &T) -> impl Iterator<Item = usize> + '_ {
        self.entries.get(value).into_iter().flatten().copied()
    }

    /// Returns the number of distinct values
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Returns the total number of recorded slots
    pub fn total_slots(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    /// Iterates over every value and its slot set
    pub fn iter(&self) -> impl Iterator<Item = (&T, &BTreeSet<usize>)> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: Hash + Eq + Clone> Default for PositionIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}
