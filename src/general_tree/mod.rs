//! General trees, ones which don't impose any restrictions on the number of child nodes that a node can have.
//!
//! Every node knows its parent through a *key* into the tree's storage. That back-reference is only ever used for lookups: the storage owns every node, children are listed by key in their parent, and removing a node from its parent removes its whole subtree from the storage, so no key to a detached node stays reachable.
//!
//! # Example
//! ```rust
//! use arbor::general_tree::GeneralTree;
//!
//! // The turbofish is needed to state that we are using the default storage instead of asking
//! // the compiler to infer it, which would be impossible.
//! let mut tree = GeneralTree::<_>::with_root("animals");
//!
//! // Grow the tree through a mutable reference to the root.
//! let mut root = tree.root_mut().unwrap();
//! let mammals = root.push_child("mammals");
//! root.push_child("birds");
//! tree.try_push_child(&mammals, "cats").unwrap();
//! tree.try_push_child(&mammals, "dogs").unwrap();
//!
//! assert_eq!(tree.dfs_traversal(), [&"animals", &"mammals", &"cats", &"dogs", &"birds"]);
//! assert_eq!(tree.bfs_traversal(), [&"animals", &"mammals", &"birds", &"cats", &"dogs"]);
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.count_leaves(), 3);
//!
//! // Parents can be looked up, but never own anything.
//! let cats = tree.find(&"cats").unwrap();
//! assert_eq!(cats.parent().map(|x| *x.value()), Some("mammals"));
//!
//! // Removing a node drops its whole subtree.
//! assert_eq!(tree.remove_subtree(&mammals), Some("mammals"));
//! assert_eq!(tree.size(), 2);
//! ```

use core::fmt::{self, Formatter, Debug, Display};
use alloc::{collections::BTreeMap, vec::Vec};
use crate::{
    storage::{Storage, DefaultStorage, SparseVec},
    traversal::{algorithms, Traversable, DepthFirstIter, Dump},
};

mod node;
mod node_ref;

pub use node::Node;
pub use node_ref::{NodeRef, NodeRefMut, NodeChildrenIter};

/// A general tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeneralTree<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    storage: S,
    root: Option<K>,
}
impl<T, K, S> GeneralTree<T, K, S>
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
        let root = self.storage.add(Node::root(value));
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

    /// Appends a child with the specified value to the node with the key `parent`, returning the key of the new node.
    ///
    /// # Errors
    /// Fails if `parent` is not a node of this tree. The value is handed back inside the error.
    ///
    /// Keys of removed nodes are reused by later insertions, so a key kept across [`remove_subtree`] may point at an unrelated node by the time it is passed here, in which case the child is silently attached to that node instead of failing.
    ///
    /// [`remove_subtree`]: #method.remove_subtree " "
    pub fn try_push_child(&mut self, parent: &K, value: T) -> Result<K, TryPushError<T>> {
        if !self.storage.contains_key(parent) {
            return Err(TryPushError {
                child_payload: value,
            });
        }
        Ok(self.push_child(parent, value))
    }
    /// Removes the node with the specified key together with all of its descendants, returning the node's value, or `None` if there is no such node.
    ///
    /// The node is detached from its parent's list of children, so its parent link disappears with it. Removing the root empties the tree.
    ///
    /// The keys of every removed node are invalidated: the storage hands them out again to the nodes added next, so they must not be used to address the tree afterwards.
    pub fn remove_subtree(&mut self, key: &K) -> Option<T> {
        let parent = self.storage.get(key)?.parent.clone();
        match parent {
            Some(parent) => self.node_mut(&parent).children.retain(|x| x != key),
            // Only the root has no parent
            None => self.root = None,
        }
        let removed = self.storage.remove(key);
        let mut descendants = removed.children;
        let mut num_removed = 1_usize;
        while let Some(descendant) = descendants.pop() {
            descendants.extend(self.storage.remove(&descendant).children);
            num_removed += 1;
        }
        log::trace!("removed subtree at {:?} ({} nodes)", key, num_removed);
        Some(removed.value)
    }

    /// Returns a reference to the first node, in pre-order, whose value is equal to `value`, or `None` if there is none.
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T, K, S>>
    where
        T: PartialEq,
    {
        algorithms::find(self, |x| x == value).map(|key| NodeRef::new(self, key))
    }
    /// Returns the values of the tree in depth-first pre-order: a node, then each of its children's subtrees in the order the children were added.
    #[inline]
    pub fn dfs_traversal(&self) -> Vec<&T> {
        algorithms::preorder(self)
    }
    /// Returns the values of the tree in breadth-first order, level by level.
    #[inline]
    pub fn bfs_traversal(&self) -> Vec<&T> {
        algorithms::breadth_first(self)
    }
    /// Returns the values of the tree grouped by level, the root being level 0.
    #[inline]
    pub fn level_order_traversal(&self) -> BTreeMap<usize, Vec<&T>> {
        algorithms::levels(self)
    }
    /// Returns a lazy pre-order iterator over the values of the tree which does not recurse.
    #[inline]
    pub fn iter(&self) -> DepthFirstIter<'_, Self> {
        DepthFirstIter::new(self)
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

    pub(crate) fn push_child(&mut self, parent: &K, value: T) -> K {
        let len = self.node(parent).children.len();
        self.insert_child(parent, len, value)
    }
    #[track_caller]
    pub(crate) fn insert_child(&mut self, parent: &K, index: usize, value: T) -> K {
        let num_children = self.node(parent).children.len();
        assert!(
            index <= num_children,
            "child index {} out of bounds for a node with {} children",
            index,
            num_children,
        );
        let key = self.storage.add(Node::child(value, parent.clone()));
        self.node_mut(parent).children.insert(index, key.clone());
        log::trace!("added {:?} as child #{} of {:?}", key, index, parent);
        key
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
impl<T> GeneralTree<T, usize, SparseVec<Node<T, usize>>> {
    /// Returns the number of holes left in the storage by removed nodes. They are refilled by later insertions.
    #[inline(always)]
    pub fn num_holes(&self) -> usize {
        self.storage.num_holes()
    }
}
impl<T, K, S> Default for GeneralTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
impl<T, K, S> Traversable for GeneralTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Value = T;
    type Cursor = K;

    #[inline(always)]
    fn cursor_to_root(&self) -> Option<K> {
        self.root.clone()
    }
    #[inline]
    #[track_caller]
    fn value_of(&self, cursor: &K) -> &T {
        &self.node(cursor).value
    }
    #[inline]
    #[track_caller]
    fn num_children_of(&self, cursor: &K) -> usize {
        self.node(cursor).children.len()
    }
    #[inline]
    #[track_caller]
    fn nth_child_of(&self, cursor: &K, child_num: usize) -> Option<K> {
        self.node(cursor).children.get(child_num).cloned()
    }
}
impl<T, K, S> Display for GeneralTree<T, K, S>
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

/// The error type produced by [`try_push_child`], indicating that the specified parent is not a node of the tree.
///
/// [`try_push_child`]: struct.GeneralTree.html#method.try_push_child " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TryPushError<T> {
    /// The value of the child node which was attempted to be added, returned back to the caller to avoid dropping it.
    pub child_payload: T,
}
impl<T> Display for TryPushError<T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("the parent key does not point to a node of the tree")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<T: Debug> std::error::Error for TryPushError<T> {}

/// A general tree which uses a *sparse* `Vec` as backing storage.
///
/// The default `GeneralTree` type already uses this, so this is only provided for explicitness and consistency.
pub type SparseVecGeneralTree<T> = GeneralTree<T, usize, SparseVec<Node<T, usize>>>;

#[cfg(test)]
mod tests;
