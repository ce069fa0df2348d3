use core::fmt::{self, Formatter, Debug, Display};
use alloc::{collections::BTreeMap, vec::Vec};
use crate::{
    storage::{Storage, DefaultStorage},
    traversal::{algorithms, DepthFirstIter, Dump},
};
use super::{Node, NodeRef, NodeRefMut};

/// A binary tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryTree<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(crate) storage: S,
    pub(crate) root: Option<K>,
}
impl<T, K, S> BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an empty tree.
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
        }
    }
    /// Creates an empty tree with preallocated space for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
        }
    }
    /// Creates a tree consisting of a root node with the specified value.
    #[inline]
    pub fn with_root(value: T) -> Self {
        let mut tree = Self::new();
        tree.set_root(value);
        tree
    }
    /// Discards every node of the tree and makes a new root node with the specified value, returning its key.
    pub fn set_root(&mut self, value: T) -> K {
        self.storage.clear();
        let root = self.storage.add(Node::leaf(value));
        self.root = Some(root.clone());
        root
    }

    /// Returns a reference to the root node of the tree, or `None` if the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, T, K, S>> {
        let key = self.root.clone()?;
        Some(NodeRef::new(self, key))
    }
    /// Returns a *mutable* reference to the root node of the tree, or `None` if the tree is empty.
    #[inline]
    pub fn root_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.root.clone()?;
        Some(NodeRefMut::new(self, key))
    }
    /// Returns a reference to the node with the specified key, or `None` if there is no such node in the tree.
    #[inline]
    pub fn get(&self, key: &K) -> Option<NodeRef<'_, T, K, S>> {
        if self.storage.contains_key(key) {
            Some(NodeRef::new(self, key.clone()))
        } else {
            None
        }
    }
    /// Returns a *mutable* reference to the node with the specified key, or `None` if there is no such node in the tree.
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<NodeRefMut<'_, T, K, S>> {
        if self.storage.contains_key(key) {
            Some(NodeRefMut::new(self, key.clone()))
        } else {
            None
        }
    }

    /// Returns the values of the tree in pre-order: a node, its left subtree, then its right subtree.
    #[inline]
    pub fn preorder(&self) -> Vec<&T> {
        algorithms::preorder(self)
    }
    /// Returns the values of the tree in in-order: the left subtree, the node, then the right subtree.
    #[inline]
    pub fn inorder(&self) -> Vec<&T> {
        algorithms::inorder(self)
    }
    /// Returns the values of the tree in post-order: the left subtree, the right subtree, then the node.
    #[inline]
    pub fn postorder(&self) -> Vec<&T> {
        algorithms::postorder(self)
    }
    /// Returns the values of the tree in breadth-first order, left to right within each level.
    #[inline]
    pub fn level_order(&self) -> Vec<&T> {
        algorithms::breadth_first(self)
    }
    /// Returns the values of the tree grouped by level, the root being level 0.
    #[inline]
    pub fn levels(&self) -> BTreeMap<usize, Vec<&T>> {
        algorithms::levels(self)
    }
    /// Returns a lazy pre-order iterator over the values of the tree which does not recurse.
    #[inline]
    pub fn iter(&self) -> DepthFirstIter<'_, Self> {
        DepthFirstIter::new(self)
    }
    /// Returns a reference to the first node, in pre-order, whose value is equal to `value`, or `None` if there is none.
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T, K, S>>
    where
        T: PartialEq,
    {
        algorithms::find(self, |x| x == value).map(|key| NodeRef::new(self, key))
    }

    /// Returns the number of edges on the longest path from the root to a leaf, or -1 if the tree is empty.
    #[inline]
    pub fn height(&self) -> isize {
        algorithms::height(self)
    }
    /// Returns the number of nodes in the tree.
    #[inline]
    pub fn size(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the tree has no nodes, `false` otherwise.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns the number of nodes which have no children.
    #[inline]
    pub fn count_leaves(&self) -> usize {
        algorithms::count_leaves(self)
    }
    /// Returns `true` if, for every node, the heights of its left and right subtrees differ by at most 1.
    ///
    /// Heights are computed once, bottom-up, so this runs in linear time.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        algorithms::is_height_balanced(self)
    }

    /// Adds a detached leaf to the storage. The caller is responsible for linking it.
    pub(crate) fn add_leaf(&mut self, value: T) -> K {
        self.storage.add(Node::leaf(value))
    }
    /// Removes the node and all of its descendants from the storage, returning the node's value. Links to the node are left for the caller to clear.
    pub(crate) fn remove_subtree(&mut self, key: &K) -> T {
        let removed = self.storage.remove(key);
        let mut pending: Vec<K> = removed.left.iter().chain(&removed.right).cloned().collect();
        let mut num_removed = 1_usize;
        while let Some(descendant) = pending.pop() {
            let node = self.storage.remove(&descendant);
            pending.extend(node.left);
            pending.extend(node.right);
            num_removed += 1;
        }
        log::trace!("removed subtree at {:?} ({} nodes)", key, num_removed);
        removed.value
    }
    #[track_caller]
    pub(crate) fn node(&self, key: &K) -> &Node<T, K> {
        self.storage
            .get(key)
            .unwrap_or_else(|| panic!("invalid key: {:?}", key))
    }
    #[track_caller]
    pub(crate) fn node_mut(&mut self, key: &K) -> &mut Node<T, K> {
        self.storage
            .get_mut(key)
            .unwrap_or_else(|| panic!("invalid key: {:?}", key))
    }
}
impl<T, K, S> Default for BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
impl<T, K, S> Display for BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Display,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&Dump(self), f)
    }
}
