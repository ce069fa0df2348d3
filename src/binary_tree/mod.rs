//! Trees which allow at most two children for their nodes.
//!
//! The [Wikipedia article] on binary trees covers their use cases and specifics in more detail.
//!
//! Every node has a *left* and a *right* child slot, each of which may be empty, so a node with a single child still remembers which side that child is on. The shape is entirely up to the user: nothing here keeps the tree ordered or balanced. For that, see the [search tree] and the [AVL tree], which are built on the same storage model.
//!
//! # Example
//! ```rust
//! use arbor::binary_tree::{BinaryTree, NodeRef};
//!
//! // The turbofish is needed to state that we are using the default storage instead of asking
//! // the compiler to infer it, which would be impossible.
//! let mut tree = BinaryTree::<_>::with_root(1);
//!
//! let mut root = tree.root_mut().unwrap();
//! root.try_set_left(2).unwrap();
//! root.try_set_right(3).unwrap();
//! // Slots which are already taken hand the value back.
//! assert_eq!(root.try_set_left(4).unwrap_err().payload, 4);
//! // Descend and keep growing.
//! root.left_mut().unwrap().try_set_left(4).unwrap();
//!
//! assert_eq!(tree.preorder(), [&1, &2, &4, &3]);
//! assert_eq!(tree.inorder(), [&4, &2, &1, &3]);
//! assert_eq!(tree.postorder(), [&4, &2, &3, &1]);
//! assert_eq!(tree.level_order(), [&1, &2, &3, &4]);
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//!
//! let root = tree.root().unwrap();
//! assert!(root.is_full());
//! assert_eq!(root.children().iter().map(NodeRef::value).collect::<Vec<_>>(), [&2, &3]);
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_tree " "
//! [search tree]: ../search_tree/index.html " "
//! [AVL tree]: ../avl_tree/index.html " "

use core::fmt::{self, Formatter, Debug, Display};

mod base;
mod impl_traversable;
mod node;
mod node_ref;
mod node_ref_mut;

pub use base::BinaryTree;
pub use node::Node;
pub use node_ref::NodeRef;
pub use node_ref_mut::NodeRefMut;

/// The error type returned by [`NodeRefMut::try_set_left`] and [`NodeRefMut::try_set_right`], indicating that the child slot was already occupied.
///
/// [`NodeRefMut::try_set_left`]: struct.NodeRefMut.html#method.try_set_left " "
/// [`NodeRefMut::try_set_right`]: struct.NodeRefMut.html#method.try_set_right " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SlotOccupiedError<T> {
    /// The value which was attempted to be added, returned back to the caller to avoid dropping it.
    pub payload: T,
}
impl<T> Display for SlotOccupiedError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("the child slot is already occupied")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<T: Debug> std::error::Error for SlotOccupiedError<T> {}

/// A binary tree which uses a *sparse* `Vec` as backing storage.
///
/// The default `BinaryTree` type already uses this, so this is only provided for explicitness and consistency.
#[allow(unused_qualifications)]
pub type SparseVecBinaryTree<T> = BinaryTree<T, usize, crate::storage::SparseVec<Node<T, usize>>>;

#[cfg(test)]
mod tests;
