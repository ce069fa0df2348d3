use core::fmt::Debug;
use arrayvec::ArrayVec;
use crate::{
    storage::{Storage, DefaultStorage},
    traversal::algorithms,
};
use super::{BinaryTree, Node};

/// A reference to a node in a binary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree.
#[derive(Debug)]
pub struct NodeRef<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a BinaryTree<T, K, S>,
    key: K,
}
impl<'a, T, K, S> NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) fn new(tree: &'a BinaryTree<T, K, S>, key: K) -> Self {
        Self { tree, key }
    }
    /// Returns a reference the raw storage key for the node.
    pub fn key(&self) -> &K {
        &self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    pub fn into_key(self) -> K {
        self.key
    }
    /// Returns a reference to the value stored in the node.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }
    /// Returns a reference to the left child, or `None` if the left slot is empty.
    pub fn left_child(&self) -> Option<Self> {
        self.node()
            .left
            .as_ref()
            .map(|x| Self::new(self.tree, x.clone()))
    }
    /// Returns a reference to the right child, or `None` if the right slot is empty.
    pub fn right_child(&self) -> Option<Self> {
        self.node()
            .right
            .as_ref()
            .map(|x| Self::new(self.tree, x.clone()))
    }
    /// Returns references to the existing children of the node, the left one first.
    pub fn children(&self) -> ArrayVec<[Self; 2]> {
        let mut children = ArrayVec::new();
        children.extend(self.left_child());
        children.extend(self.right_child());
        children
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }
    /// Returns `true` if both child slots of the node are occupied, `false` otherwise.
    pub fn is_full(&self) -> bool {
        let node = self.node();
        node.left.is_some() && node.right.is_some()
    }
    /// Returns the height of the subtree rooted at this node: 0 for a leaf.
    pub fn height(&self) -> isize {
        algorithms::height_from(self.tree, &self.key)
    }

    fn node(&self) -> &'a Node<T, K> {
        self.tree.node(&self.key)
    }
}
impl<T, K, S> Copy for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
}
impl<T, K, S> Clone for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            key: self.key.clone(),
        }
    }
}
