//! Common traits and error types for heap data structures
//!
//! [`Heap`] is the checked, `Option`-returning API, shaped after Rust's
//! standard `BinaryHeap`: `push` inserts, `peek` looks at the top element and
//! `pop` removes it. Unlike `BinaryHeap`, which orders by `Ord` as a max-heap,
//! the ordering of a [`TreeHeap`](crate::tree_heap::TreeHeap) is decided by
//! its predicate and defaults to a min-heap.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation needs at least one element
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// A broken structural property found by
/// [`TreeHeap::check_invariants`](crate::tree_heap::TreeHeap::check_invariants).
///
/// Positions are 1-based level-order positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The number of reachable nodes differs from the recorded length
    CountMismatch { recorded: usize, found: usize },
    /// A node sits at a position beyond the recorded length
    OutOfShape { position: usize },
    /// A parent and its child are out of order under the predicate
    OutOfOrder { parent: usize, child: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::CountMismatch { recorded, found } => {
                write!(f, "heap records {} elements but holds {}", recorded, found)
            }
            InvariantViolation::OutOfShape { position } => {
                write!(f, "node at position {} breaks the complete tree shape", position)
            }
            InvariantViolation::OutOfOrder { parent, child } => {
                write!(
                    f,
                    "node at position {} is out of order above its child at position {}",
                    parent, child
                )
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Base trait for priority queues
///
/// # Example
///
/// ```rust
/// use tree_heap::Heap;
/// use tree_heap::tree_heap::TreeHeap;
///
/// let mut heap = TreeHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the top element without removing it, or `None` if empty
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the top element, or `None` if empty
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(HeapError::Empty.to_string(), "heap is empty");
        assert_eq!(
            InvariantViolation::CountMismatch { recorded: 3, found: 2 }.to_string(),
            "heap records 3 elements but holds 2"
        );
        assert_eq!(
            InvariantViolation::OutOfOrder { parent: 1, child: 3 }.to_string(),
            "node at position 1 is out of order above its child at position 3"
        );
    }
}
