//! Indexed Heap Data Structures for Rust
//!
//! This crate provides a binary min-heap with a secondary position index, so
//! that any stored value can be found and removed without a linear scan.
//!
//! # Features
//!
//! - **Indexed Binary Heap**: O(log n) insert, delete-min and removal by value; O(1) containment
//! - **Simple Binary Heap**: O(log n) insert and delete-min; no index, used as a baseline
//!
//! Duplicate values are supported. Each copy lives in its own slot and the
//! index tracks all of them, so `contains` stays true until the last copy is gone.
//!
//! Priorities are fixed at insertion: to change one, remove the value and add
//! the new one.
//!
//! # Cargo features
//!
//! - `fxhash` (default): hash the position index with FxHash. Disable it to fall
//!   back to the standard library's SipHash, e.g. for keys an adversary controls.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::indexed_binary::IndexedBinaryHeap;
//! use indexed_heaps::Heap;
//!
//! let mut heap: IndexedBinaryHeap<u32> = vec![5, 3, 7, 2, 4, 6, 8].into();
//! assert_eq!(heap.peek(), Some(&2));
//!
//! assert!(heap.remove(&4));
//! assert!(!heap.contains(&4));
//! assert_eq!(heap.pop(), Some(2));
//! ```

pub mod indexed_binary;
pub mod position_index;
pub mod simple_binary;
pub mod traits;

// Re-export the main traits for convenience
pub use traits::{Heap, HeapError, RemovableHeap};
