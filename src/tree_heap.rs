//! Binary heap on a pointer tree
//!
//! A binary heap whose elements live in boxed tree nodes instead of a
//! contiguous array. The tree is kept complete, so the size alone tells where
//! the next free slot and the last occupied slot are: both are reached by
//! walking the [`Path`] derived from their level-order position.
//!
//! Values are swapped between nodes while restoring order; nodes themselves
//! are only ever attached or detached at the bottom of the tree.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `insert`   | O(log n)   |
//! | `pop_top`  | O(log n)   |
//! | `get_top`  | O(1)       |
//! | `get_size` | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use tree_heap::tree_heap::TreeHeap;
//!
//! let mut heap = TreeHeap::new();
//! for value in [5, 3, 8, 1, 9, 2] {
//!     heap.insert(value);
//! }
//!
//! assert_eq!(*heap.get_top(), 1);
//! assert_eq!(heap.pop_top(), 1);
//! assert_eq!(heap.pop_top(), 2);
//! assert_eq!(heap.get_size(), 4);
//! ```
//!
//! A custom predicate flips the order. The predicate answers "is the parent
//! out of order above the child?", so `a < b` gives a max-heap:
//!
//! ```rust
//! use tree_heap::tree_heap::TreeHeap;
//!
//! let mut heap = TreeHeap::with_predicate(|a: &i32, b: &i32| a < b);
//! heap.extend([1, 4, 2, 9, 5]);
//! assert_eq!(heap.pop_top(), 9);
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::node::Node;
use crate::path::{Direction, Path};
use crate::predicate::Predicate;
use crate::traits::{Heap, HeapError, InvariantViolation};

/// A priority queue stored as a complete binary tree of boxed nodes.
///
/// The element for which the predicate never reports a violation against
/// any other sits at the root. With the default predicate that is the
/// minimum.
///
/// `TreeHeap` is not `Send` or `Sync`: its predicate may be any closure.
pub struct TreeHeap<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
    predicate: Predicate<T>,
}

impl<T: PartialOrd> TreeHeap<T> {
    /// Creates an empty min-heap ordered by `PartialOrd`.
    pub fn new() -> Self {
        Self::from_predicate(Predicate::default())
    }
}

impl<T> TreeHeap<T> {
    /// Creates an empty heap ordered by `predicate`.
    ///
    /// `predicate(parent, child)` must return true exactly when `parent`
    /// is out of order above `child` and the two have to be swapped. It must
    /// be pure: the same inputs always give the same answer.
    pub fn with_predicate<F>(predicate: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        Self::from_predicate(Predicate::new(predicate))
    }

    /// Creates an empty heap from an already built [`Predicate`].
    pub fn from_predicate(predicate: Predicate<T>) -> Self {
        Self {
            root: None,
            len: 0,
            predicate,
        }
    }

    /// Number of elements in the heap.
    pub fn get_size(&self) -> usize {
        self.len
    }

    /// Number of levels in the tree, 0 when empty.
    pub fn depth(&self) -> usize {
        (usize::BITS - self.len.leading_zeros()) as usize
    }

    /// The root node, for inspecting the tree shape.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Adds `value` to the heap.
    ///
    /// The new leaf goes into the next free position of the complete tree
    /// and its value is then bubbled up towards the root.
    pub fn insert(&mut self, value: T) {
        self.len += 1;
        let position = self.len;
        let leaf = Box::new(Node::leaf(value));

        if position.is_power_of_two() {
            debug!(position, depth = self.depth(), "tree grew a level");
        }

        if position == 1 {
            trace!(position, "inserted root");
            self.root = Some(leaf);
            return;
        }

        let (parent_path, last) = Path::to_position(position)
            .split_last()
            .expect("positions above 1 have a non-empty path");
        trace!(position, steps = parent_path.len() + 1, "inserting leaf");

        let root = self
            .root
            .as_deref_mut()
            .expect("shape invariant: a non-empty heap has a root");
        let displaced = Self::descend_mut(root, parent_path).attach(last, leaf);
        assert!(
            displaced.is_none(),
            "shape invariant: position {} was occupied before insertion",
            position
        );

        Self::bubble_up(root, Path::to_position(position), &self.predicate);
    }

    /// The top element.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty. Check [`get_size`](Self::get_size) first,
    /// or use [`try_get_top`](Self::try_get_top).
    pub fn get_top(&self) -> &T {
        match self.root.as_deref() {
            Some(root) => &root.value,
            None => panic!("get_top called on an empty heap"),
        }
    }

    /// Removes and returns the top element.
    ///
    /// The last leaf is detached, its value moved into the root, and the
    /// root's value bubbled down.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty. Check [`get_size`](Self::get_size) first,
    /// or use [`try_pop_top`](Self::try_pop_top).
    pub fn pop_top(&mut self) -> T {
        assert!(self.len > 0, "pop_top called on an empty heap");
        self.take_top()
    }

    /// The top element, or [`HeapError::Empty`].
    pub fn try_get_top(&self) -> Result<&T, HeapError> {
        self.root.as_deref().map(|root| &root.value).ok_or(HeapError::Empty)
    }

    /// Removes and returns the top element, or [`HeapError::Empty`].
    pub fn try_pop_top(&mut self) -> Result<T, HeapError> {
        if self.len == 0 {
            return Err(HeapError::Empty);
        }
        Ok(self.take_top())
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Verifies the size, shape and order of the tree.
    ///
    /// Returns the first violation found, walking the tree depth-first.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut found = 0;
        if let Some(root) = self.root.as_deref() {
            self.check_subtree(root, 1, &mut found)?;
        }
        if found != self.len {
            return Err(InvariantViolation::CountMismatch {
                recorded: self.len,
                found,
            });
        }
        Ok(())
    }

    fn check_subtree(
        &self,
        node: &Node<T>,
        position: usize,
        found: &mut usize,
    ) -> Result<(), InvariantViolation> {
        if position > self.len {
            return Err(InvariantViolation::OutOfShape { position });
        }
        *found += 1;

        for (direction, offset) in [(Direction::Left, 0), (Direction::Right, 1)] {
            if let Some(child) = node.child(direction) {
                let child_position = position.saturating_mul(2).saturating_add(offset);
                if self.predicate.violates(&node.value, &child.value) {
                    return Err(InvariantViolation::OutOfOrder {
                        parent: position,
                        child: child_position,
                    });
                }
                self.check_subtree(child, child_position, found)?;
            }
        }
        Ok(())
    }

    /// Pops the root of a non-empty heap.
    fn take_top(&mut self) -> T {
        let position = self.len;
        self.len -= 1;

        if position.is_power_of_two() {
            debug!(position, depth = self.depth(), "tree shrank a level");
        }

        if position == 1 {
            trace!(position, "removed root");
            let root = self
                .root
                .take()
                .expect("shape invariant: a non-empty heap has a root");
            return root.value;
        }

        let (parent_path, last) = Path::to_position(position)
            .split_last()
            .expect("positions above 1 have a non-empty path");
        trace!(position, steps = parent_path.len() + 1, "detaching last leaf");

        let root = self
            .root
            .as_deref_mut()
            .expect("shape invariant: a non-empty heap has a root");
        let leaf = Self::descend_mut(root, parent_path)
            .detach(last)
            .expect("shape invariant: the last position is occupied");
        debug_assert!(leaf.is_leaf(), "the last position is always a leaf");

        let top = std::mem::replace(&mut root.value, leaf.value);
        Self::bubble_down(root, &self.predicate);
        top
    }

    /// Follows `path` from `node` and returns the node it ends on.
    fn descend_mut(mut node: &mut Node<T>, path: Path) -> &mut Node<T> {
        for direction in path {
            node = node
                .child_mut(direction)
                .expect("shape invariant: every position up to the size is occupied");
        }
        node
    }

    /// Restores order along `path` from the bottom up.
    ///
    /// Recurses to the end of the path first, so each node on it is compared
    /// with its child on the path only after everything below has settled.
    fn bubble_up(node: &mut Node<T>, mut path: Path, predicate: &Predicate<T>) {
        let Some(direction) = path.next() else {
            return;
        };
        let (value, child) = node.value_and_child_mut(direction);
        let child = child.expect("shape invariant: every position up to the size is occupied");

        Self::bubble_up(child, path, predicate);

        if predicate.violates(value, &child.value) {
            std::mem::swap(value, &mut child.value);
        }
    }

    /// Restores order below `node` after its value was replaced.
    fn bubble_down(node: &mut Node<T>, predicate: &Predicate<T>) {
        let Node { value, left, right } = node;

        let candidate = match (left.as_deref_mut(), right.as_deref_mut()) {
            (None, None) => return,
            (Some(left), None) => {
                // Only the last leaf can be a lone left child.
                if predicate.violates(value, &left.value) {
                    std::mem::swap(value, &mut left.value);
                }
                return;
            }
            (None, Some(_)) => unreachable!("shape invariant: right child without a left sibling"),
            (Some(left), Some(right)) => {
                if predicate.violates(&right.value, &left.value) {
                    left
                } else {
                    right
                }
            }
        };

        if predicate.violates(value, &candidate.value) {
            std::mem::swap(value, &mut candidate.value);
            Self::bubble_down(candidate, predicate);
        }
    }
}

impl<T: PartialOrd> Heap<T> for TreeHeap<T> {
    fn new() -> Self {
        TreeHeap::new()
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn peek(&self) -> Option<&T> {
        self.try_get_top().ok()
    }

    fn pop(&mut self) -> Option<T> {
        self.try_pop_top().ok()
    }
}

impl<T: PartialOrd> Default for TreeHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for TreeHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: PartialOrd> FromIterator<T> for TreeHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: fmt::Debug> fmt::Debug for TreeHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeHeap")
            .field("len", &self.len)
            .field("root", &self.root)
            .field("predicate", &self.predicate)
            .finish()
    }
}
