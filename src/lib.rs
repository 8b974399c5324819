//! Pointer-Tree Binary Heap for Rust
//!
//! This crate provides [`TreeHeap`], a binary heap whose elements are stored in
//! an explicit tree of boxed nodes rather than in a contiguous array.
//!
//! Array heaps find "the next free slot" and "the last leaf" with index
//! arithmetic. `TreeHeap` gets the same information from its size: the binary
//! representation of a 1-based level-order position, minus its leading bit,
//! is the root-to-node path (`0` = left, `1` = right). See [`path`].
//!
//! # Features
//!
//! - **O(log n)** insert and pop, **O(1)** top and size
//! - **Per-instance ordering**: any `Fn(&T, &T) -> bool` violation test, min-heap by default
//! - **No `Clone` bound**: elements are moved in and out
//!
//! # Example
//!
//! ```rust
//! use tree_heap::TreeHeap;
//!
//! let mut heap = TreeHeap::new();
//! heap.insert(5);
//! heap.insert(3);
//! heap.insert(8);
//! assert_eq!(*heap.get_top(), 3);
//! assert_eq!(heap.pop_top(), 3);
//! assert_eq!(heap.get_size(), 2);
//! ```

pub mod node;
pub mod path;
pub mod predicate;
pub mod traits;
pub mod tree_heap;

// Re-export the main types for convenience
pub use traits::{Heap, HeapError, InvariantViolation};
pub use tree_heap::TreeHeap;
