//! Everything related to traversing trees in general.
//!
//! The module is home to the following items:
//! - [`Traversable`] — the *trait for types which describe tree-like structures*, in terms of a cursor which can be moved from a node to its children
//! - Implementations of ubiquitous algorithms for trees, written once against `Traversable` (see the [`algorithms`] module for more)
//! - [`DepthFirstIter`], a lazy pre-order iterator which keeps an explicit stack instead of recursing, for trees too deep for the call stack
//! - [`InorderIter`], its in-order counterpart for binary trees, which yields the values of a search tree in sorted order
//! - [`Dump`], a `Display` adapter printing a depth-indented listing of a tree
//!
//! [`algorithms`]: algorithms/index.html " "
//! [`Traversable`]: trait.Traversable.html " "
//! [`DepthFirstIter`]: struct.DepthFirstIter.html " "
//! [`InorderIter`]: struct.InorderIter.html " "
//! [`Dump`]: struct.Dump.html " "

pub mod algorithms;
mod dump;
pub use dump::Dump;

use core::{fmt::Debug, iter::FusedIterator};
use alloc::vec::Vec;

/// Data structures which can be traversed by moving a cursor from the root towards the leaves.
///
/// Children are addressed by *slot*. Trees with a variable number of children report exactly as many slots as there are children; trees with a fixed number of child slots (binary trees) always report all of them and return `None` for the empty ones. Algorithms in this crate skip empty slots, except where the slot position carries meaning, such as `inorder` or the ordering checks.
pub trait Traversable {
    /// The payload of the nodes.
    type Value;
    /// The type for the cursor which will be used for keeping track of the traversed nodes.
    ///
    /// Must be very cheaply clonable, but not required to be `Copy`.
    type Cursor: Clone + Debug + Eq;
    /// Names of the child slots, used when printing the tree. Empty for trees whose children are only distinguished by order.
    const SLOT_NAMES: &'static [&'static str] = &[];

    /// Returns the cursor pointing to the root node, or `None` if the tree is empty.
    fn cursor_to_root(&self) -> Option<Self::Cursor>;
    /// Returns a reference to the payload of the node at the specified cursor.
    ///
    /// # Panics
    /// Required to panic if the cursor does not point to a node of the tree.
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value;
    /// Returns the number of child slots of the node at the specified cursor.
    fn num_children_of(&self, cursor: &Self::Cursor) -> usize;
    /// Returns a cursor to the *`n`*th child of the node at the specified cursor, or `None` if the slot is empty or does not exist.
    fn nth_child_of(&self, cursor: &Self::Cursor, child_num: usize) -> Option<Self::Cursor>;
}

/// A pre-order iterator over the values of a [`Traversable`], driven by an explicit stack of cursors.
///
/// Visits the same nodes in the same order as [`algorithms::preorder`], but lazily and without recursion, so its stack usage is bounded by heap memory rather than by the height of the tree.
///
/// [`Traversable`]: trait.Traversable.html " "
/// [`algorithms::preorder`]: algorithms/fn.preorder.html " "
#[derive(Debug)]
pub struct DepthFirstIter<'a, T: Traversable> {
    tree: &'a T,
    stack: Vec<T::Cursor>,
}
impl<'a, T: Traversable> DepthFirstIter<'a, T> {
    /// Creates an iterator starting at the root of the specified tree.
    #[inline]
    pub fn new(tree: &'a T) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.cursor_to_root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}
impl<'a, T: Traversable> Iterator for DepthFirstIter<'a, T> {
    type Item = &'a T::Value;
    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.stack.pop()?;
        // Pushed in reverse so that the first child ends up on top
        for child_num in (0..self.tree.num_children_of(&cursor)).rev() {
            if let Some(child) = self.tree.nth_child_of(&cursor, child_num) {
                self.stack.push(child);
            }
        }
        Some(self.tree.value_of(&cursor))
    }
}
impl<T: Traversable> FusedIterator for DepthFirstIter<'_, T> {}

/// An in-order iterator over the values of a binary [`Traversable`], driven by an explicit stack of cursors.
///
/// Only the first two child slots are considered, as the left and the right child respectively. For a search tree, this yields the values in ascending order.
///
/// [`Traversable`]: trait.Traversable.html " "
#[derive(Debug)]
pub struct InorderIter<'a, T: Traversable> {
    tree: &'a T,
    stack: Vec<T::Cursor>,
}
impl<'a, T: Traversable> InorderIter<'a, T> {
    /// Creates an iterator starting at the leftmost node of the specified tree.
    #[inline]
    pub fn new(tree: &'a T) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
        };
        iter.push_left_spine(tree.cursor_to_root());
        iter
    }
    fn push_left_spine(&mut self, mut cursor: Option<T::Cursor>) {
        while let Some(current) = cursor {
            cursor = self.tree.nth_child_of(&current, 0);
            self.stack.push(current);
        }
    }
}
impl<'a, T: Traversable> Iterator for InorderIter<'a, T> {
    type Item = &'a T::Value;
    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.stack.pop()?;
        self.push_left_spine(self.tree.nth_child_of(&cursor, 1));
        Some(self.tree.value_of(&cursor))
    }
}
impl<T: Traversable> FusedIterator for InorderIter<'_, T> {}
