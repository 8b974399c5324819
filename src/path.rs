//! Root-to-node paths in a complete binary tree
//!
//! Positions are numbered 1-based in level order: the root is `1` and the
//! children of position `k` are `2k` (left) and `2k + 1` (right). Appending
//! a `0` bit to `k` reaches the left child and appending a `1` bit reaches the
//! right child, so the binary representation of a position, minus its leading
//! bit, spells out the descent from the root.
//!
//! ```text
//!                 1
//!           /           \
//!         2 (L)         3 (R)
//!        /    \        /    \
//!    4 (LL) 5 (LR)  6 (RL) 7 (RR)
//! ```
//!
//! # Example
//!
//! ```rust
//! use tree_heap::path::{Direction, Path};
//!
//! let dirs: Vec<Direction> = Path::to_position(6).collect();
//! assert_eq!(dirs, vec![Direction::Right, Direction::Left]);
//! assert!(Path::to_position(1).is_empty());
//! ```

use smallvec::SmallVec;

/// One step of a descent from a node to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Direction encoded by the low bit of a position: even is `Left`.
    #[inline]
    fn from_low_bit(n: usize) -> Self {
        if n % 2 == 0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

/// A sequence of directions leading from the root to a level-order position.
///
/// The directions are kept on a LIFO buffer in the order they were produced
/// (least significant bit first), so popping from the end yields them
/// root-first. A `usize` position never needs more than `usize::BITS - 1`
/// steps, so the buffer never spills to the heap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    stack: SmallVec<[Direction; 64]>,
}

impl Path {
    /// Computes the path from the root to position `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`; positions are 1-based.
    pub fn to_position(mut n: usize) -> Self {
        assert!(n >= 1, "tree positions are 1-based, got position 0");

        let mut stack = SmallVec::new();
        while n >= 2 {
            stack.push(Direction::from_low_bit(n));
            n /= 2;
        }
        Path { stack }
    }

    /// Number of steps left in the path.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns true if the path designates the node it starts from.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Splits off the final step.
    ///
    /// Returns the path to the parent of the target together with the
    /// direction from that parent to the target, or `None` for an empty path.
    pub fn split_last(mut self) -> Option<(Path, Direction)> {
        if self.stack.is_empty() {
            return None;
        }
        // The final step is the least significant bit, at the bottom of the stack.
        let last = self.stack.remove(0);
        Some((self, last))
    }
}

impl Iterator for Path {
    type Item = Direction;

    fn next(&mut self) -> Option<Direction> {
        self.stack.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.stack.len()))
    }
}

impl ExactSizeIterator for Path {}
