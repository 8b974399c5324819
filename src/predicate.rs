//! Ordering predicates
//!
//! A predicate answers one question about a parent/child pair: is `parent`
//! out of order above `child`? `true` means the two values must be swapped.
//! It is a violation test, not a less-than. The default predicate
//! [`default_order`] (`a > b`) therefore builds a min-heap, and `a < b`
//! builds a max-heap.

use std::fmt;

/// A violation test stored per heap instance.
///
/// Plain function pointers are kept unboxed, which also lets element types
/// that borrow (`&'a str`, ...) use the default ordering; boxed closures
/// must be `'static`.
pub enum Predicate<T> {
    Function(fn(&T, &T) -> bool),
    Closure(Box<dyn Fn(&T, &T) -> bool>),
}

impl<T> Predicate<T> {
    /// Boxes a closure as a predicate.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        Predicate::Closure(Box::new(test))
    }

    /// Returns true if `parent` is out of order above `child`.
    #[inline]
    pub fn violates(&self, parent: &T, child: &T) -> bool {
        match self {
            Predicate::Function(test) => test(parent, child),
            Predicate::Closure(test) => test(parent, child),
        }
    }
}

impl<T: PartialOrd> Default for Predicate<T> {
    fn default() -> Self {
        Predicate::Function(default_order::<T>)
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Function(_) => f.write_str("Predicate::Function(..)"),
            Predicate::Closure(_) => f.write_str("Predicate::Closure(..)"),
        }
    }
}

/// The min-heap predicate: a parent greater than its child is out of order.
pub fn default_order<T: PartialOrd>(parent: &T, child: &T) -> bool {
    parent > child
}
