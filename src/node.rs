//! Tree cells for [`TreeHeap`](crate::tree_heap::TreeHeap)
//!
//! A node owns its two subtrees outright; dropping a node drops everything
//! below it. The heap keeps the tree complete, so a node with a right child
//! but no left child never occurs.

use crate::path::Direction;

type SubTree<T> = Option<Box<Node<T>>>;

/// A binary tree cell holding one element.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: SubTree<T>,
    pub(crate) right: SubTree<T>,
}

impl<T> Node<T> {
    /// Creates a childless node.
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The element stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The child in the slot named by `direction`, if any.
    pub fn child(&self, direction: Direction) -> Option<&Node<T>> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    /// Mutable access to the child in the slot named by `direction`.
    pub fn child_mut(&mut self, direction: Direction) -> Option<&mut Node<T>> {
        match direction {
            Direction::Left => self.left.as_deref_mut(),
            Direction::Right => self.right.as_deref_mut(),
        }
    }

    /// Borrows this node's value and one child at the same time.
    pub(crate) fn value_and_child_mut(&mut self, direction: Direction) -> (&mut T, Option<&mut Node<T>>) {
        let child = match direction {
            Direction::Left => self.left.as_deref_mut(),
            Direction::Right => self.right.as_deref_mut(),
        };
        (&mut self.value, child)
    }

    /// Places `node` in the child slot named by `direction`.
    ///
    /// Returns the subtree previously held in that slot, if any.
    pub fn attach(&mut self, direction: Direction, node: Box<Node<T>>) -> Option<Box<Node<T>>> {
        self.slot_mut(direction).replace(node)
    }

    /// Takes the subtree out of the child slot named by `direction`.
    pub fn detach(&mut self, direction: Direction) -> Option<Box<Node<T>>> {
        self.slot_mut(direction).take()
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn slot_mut(&mut self, direction: Direction) -> &mut SubTree<T> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_leaf() {
        let node = Node::leaf(7);
        assert_eq!(*node.value(), 7);
        assert!(node.is_leaf());
        assert!(node.child(Direction::Left).is_none());
        assert!(node.child(Direction::Right).is_none());
    }

    #[test]
    fn test_attach_and_detach() {
        let mut node = Node::leaf(1);
        assert!(node.attach(Direction::Left, Box::new(Node::leaf(2))).is_none());
        assert!(node.attach(Direction::Right, Box::new(Node::leaf(3))).is_none());
        assert!(!node.is_leaf());

        assert_eq!(node.child(Direction::Left).map(Node::value), Some(&2));
        assert_eq!(node.child(Direction::Right).map(Node::value), Some(&3));

        let right = node.detach(Direction::Right).unwrap();
        assert_eq!(right.value, 3);
        assert!(node.child(Direction::Right).is_none());
        assert!(node.detach(Direction::Right).is_none());
    }

    #[test]
    fn test_attach_returns_previous_subtree() {
        let mut node = Node::leaf(1);
        node.attach(Direction::Left, Box::new(Node::leaf(2)));
        let old = node.attach(Direction::Left, Box::new(Node::leaf(4)));
        assert_eq!(old.map(|n| n.value), Some(2));
        assert_eq!(node.child(Direction::Left).map(Node::value), Some(&4));
    }

    #[test]
    fn test_child_mut() {
        let mut node = Node::leaf(1);
        node.attach(Direction::Left, Box::new(Node::leaf(2)));
        node.child_mut(Direction::Left).unwrap().value = 20;
        assert_eq!(node.child(Direction::Left).map(Node::value), Some(&20));
        assert!(node.child_mut(Direction::Right).is_none());
    }

    #[test]
    fn test_drop_releases_subtree() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut root = Node::leaf(DropCounter(drops.clone()));
            let mut left = Node::leaf(DropCounter(drops.clone()));
            left.attach(Direction::Left, Box::new(Node::leaf(DropCounter(drops.clone()))));
            root.attach(Direction::Left, Box::new(left));
            root.attach(Direction::Right, Box::new(Node::leaf(DropCounter(drops.clone()))));
            assert_eq!(drops.get(), 0);
        }
        assert_eq!(drops.get(), 4);
    }
}
