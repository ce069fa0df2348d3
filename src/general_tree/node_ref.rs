use core::{fmt::Debug, iter::FusedIterator, slice};
use crate::storage::{Storage, DefaultStorage};
use super::{GeneralTree, Node};

/// A reference to a node in a general tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree.
#[derive(Debug)]
pub struct NodeRef<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a GeneralTree<T, K, S>,
    key: K,
}
impl<'a, T, K, S> NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) fn new(tree: &'a GeneralTree<T, K, S>, key: K) -> Self {
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
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    pub fn parent(&self) -> Option<Self> {
        self.node()
            .parent
            .as_ref()
            .map(|x| Self::new(self.tree, x.clone()))
    }
    /// Returns an iterator over references to the children of the node, in the order they were added.
    pub fn children(&self) -> NodeChildrenIter<'a, T, K, S> {
        NodeChildrenIter {
            tree: self.tree,
            keys: self.node().children.iter(),
        }
    }
    /// Returns the number of children of the node.
    pub fn num_children(&self) -> usize {
        self.node().children.len()
    }
    /// Returns a reference to the child at the specified index, or `None` if the index is out of bounds.
    pub fn child(&self, index: usize) -> Option<Self> {
        self.node()
            .children
            .get(index)
            .map(|x| Self::new(self.tree, x.clone()))
    }
    /// Returns a reference to the first child of the node, or `None` if it's a leaf node.
    pub fn first_child(&self) -> Option<Self> {
        self.children().next()
    }
    /// Returns a reference to the last child of the node, or `None` if it's a leaf node.
    pub fn last_child(&self) -> Option<Self> {
        self.children().next_back()
    }
    /// Returns a reference to the sibling of the pointee which comes before it in order, or `None` if it's the first child of its parent or the root.
    pub fn prev_sibling(&self) -> Option<Self> {
        let (siblings, index) = self.position()?;
        let prev = index.checked_sub(1)?;
        Some(Self::new(self.tree, siblings[prev].clone()))
    }
    /// Returns a reference to the sibling of the pointee which comes after it in order, or `None` if it's the last child of its parent or the root.
    pub fn next_sibling(&self) -> Option<Self> {
        let (siblings, index) = self.position()?;
        siblings
            .get(index + 1)
            .map(|x| Self::new(self.tree, x.clone()))
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    pub fn is_leaf(&self) -> bool {
        self.node().children.is_empty()
    }
    /// Returns the number of edges between the node and the root: 0 for the root itself.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// The parent's list of children and the index of this node in it.
    fn position(&self) -> Option<(&'a [K], usize)> {
        let parent = self.node().parent.as_ref()?;
        let siblings = &self.tree.node(parent).children[..];
        let index = siblings
            .iter()
            .position(|x| *x == self.key)
            .expect("node is not listed among the children of its parent");
        Some((siblings, index))
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

/// A *mutable* reference to a node in a general tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse and grow the tree.
#[derive(Debug)]
pub struct NodeRefMut<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a mut GeneralTree<T, K, S>,
    key: K,
}
impl<'a, T, K, S> NodeRefMut<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) fn new(tree: &'a mut GeneralTree<T, K, S>, key: K) -> Self {
        Self { tree, key }
    }
    /// Returns a reference the raw storage key for the node.
    pub fn key(&self) -> &K {
        &self.key
    }
    /// Returns a reference to the value stored in the node.
    pub fn value(&self) -> &T {
        &self.tree.node(&self.key).value
    }
    /// Returns a *mutable* reference to the value stored in the node.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.tree.node_mut(&self.key).value
    }
    /// Consumes the reference and returns a mutable reference to the value which lives as long as the borrow of the tree.
    pub fn into_value_mut(self) -> &'a mut T {
        &mut self.tree.node_mut(&self.key).value
    }
    /// Returns the number of children of the node.
    pub fn num_children(&self) -> usize {
        self.tree.node(&self.key).children.len()
    }
    /// Appends a child with the specified value after the existing children of the node, returning the key of the new node.
    pub fn push_child(&mut self, value: T) -> K {
        self.tree.push_child(&self.key, value)
    }
    /// Inserts a child with the specified value at position `index` among the children of the node, shifting all children after it to the right. Returns the key of the new node.
    ///
    /// # Panics
    /// Panics if `index` is greater than the number of children.
    #[track_caller]
    pub fn insert_child(&mut self, index: usize, value: T) -> K {
        self.tree.insert_child(&self.key, index, value)
    }
    /// Removes the child at the specified index together with its entire subtree, returning the child's value, or `None` if the index is out of bounds.
    pub fn remove_child(&mut self, index: usize) -> Option<T> {
        let key = self.tree.node(&self.key).children.get(index)?.clone();
        self.tree.remove_subtree(&key)
    }
    /// Consumes the reference and returns a mutable reference to the child at the specified index, or `None` if the index is out of bounds.
    pub fn child_mut(self, index: usize) -> Option<Self> {
        let key = self.tree.node(&self.key).children.get(index)?.clone();
        Some(Self::new(self.tree, key))
    }
    /// Consumes the reference and returns a mutable reference to the parent node, or `None` if this is the root node.
    pub fn into_parent(self) -> Option<Self> {
        let key = self.tree.node(&self.key).parent.clone()?;
        Some(Self::new(self.tree, key))
    }
}
impl<'a, T, K, S> From<NodeRefMut<'a, T, K, S>> for NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn from(op: NodeRefMut<'a, T, K, S>) -> Self {
        NodeRef::new(op.tree, op.key)
    }
}

/// An iterator over references to the children of a general tree node.
#[derive(Debug)]
pub struct NodeChildrenIter<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a GeneralTree<T, K, S>,
    keys: slice::Iter<'a, K>,
}
impl<'a, T, K, S> Iterator for NodeChildrenIter<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = NodeRef<'a, T, K, S>;
    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.keys.next().map(|key| NodeRef::new(tree, key.clone()))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}
impl<T, K, S> DoubleEndedIterator for NodeChildrenIter<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.keys
            .next_back()
            .map(|key| NodeRef::new(tree, key.clone()))
    }
}
impl<T, K, S> ExactSizeIterator for NodeChildrenIter<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
}
impl<T, K, S> FusedIterator for NodeChildrenIter<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
}
