//! Binary search trees: binary trees which keep their values ordered.
//!
//! For every node, all values in its left subtree are smaller than its own value and all values in its right subtree are greater. Duplicates are never stored: inserting a value which is already present leaves the tree unchanged and reports it by returning `false`.
//!
//! No rebalancing is ever done, so the shape of the tree depends on the insertion order, and sorted input degenerates it into a list with a height of `n - 1`. The operations which only walk a single path (`insert`, `search`, `find_min`, `find_max`, `delete`) are loops for this reason, and so are `height` and `is_valid_bst`. If the input order is not under control, use an [AVL tree] instead.
//!
//! # Example
//! ```rust
//! use arbor::search_tree::BinarySearchTree;
//!
//! let mut tree: BinarySearchTree<_> = [50, 30, 70, 20, 40, 60, 80].iter().copied().collect();
//! assert!(!tree.insert(40)); // Already there
//!
//! assert_eq!(tree.inorder(), [&20, &30, &40, &50, &60, &70, &80]);
//! assert_eq!(tree.find_min(), Some(&20));
//! assert_eq!(tree.find_max(), Some(&80));
//!
//! // 30 has two children, so its in-order successor takes its place.
//! assert_eq!(tree.delete(&30), Some(30));
//! assert_eq!(tree.inorder(), [&20, &40, &50, &60, &70, &80]);
//! assert_eq!(tree.preorder(), [&50, &40, &20, &70, &60, &80]);
//! assert!(tree.is_valid_bst());
//! ```
//!
//! [AVL tree]: ../avl_tree/index.html " "

use core::{
    cmp::Ordering,
    fmt::{self, Formatter, Debug, Display},
    iter::FromIterator,
    mem,
};
use alloc::{collections::BTreeMap, vec::Vec};
use crate::{
    binary_tree::{BinaryTree, Node},
    storage::{Storage, DefaultStorage},
    traversal::{algorithms, Traversable, InorderIter, Dump},
};

/// A binary search tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinarySearchTree<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: BinaryTree<T, K, S>,
}
impl<T, K, S> BinarySearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an empty tree.
    #[inline]
    pub fn new() -> Self {
        Self {
            tree: BinaryTree::new(),
        }
    }
    /// Creates an empty tree with preallocated space for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: BinaryTree::with_capacity(capacity),
        }
    }
    /// Returns the underlying binary tree, for read-only access to its nodes.
    #[inline(always)]
    pub fn as_binary_tree(&self) -> &BinaryTree<T, K, S> {
        &self.tree
    }
    /// Consumes the search tree and returns the underlying binary tree, which can then be modified without regard for the ordering.
    #[inline(always)]
    pub fn into_binary_tree(self) -> BinaryTree<T, K, S> {
        self.tree
    }

    /// Returns the values of the tree in pre-order.
    #[inline]
    pub fn preorder(&self) -> Vec<&T> {
        self.tree.preorder()
    }
    /// Returns the values of the tree in in-order, which for a search tree is ascending order.
    #[inline]
    pub fn inorder(&self) -> Vec<&T> {
        self.tree.inorder()
    }
    /// Returns the values of the tree in post-order.
    #[inline]
    pub fn postorder(&self) -> Vec<&T> {
        self.tree.postorder()
    }
    /// Returns the values of the tree in breadth-first order.
    #[inline]
    pub fn level_order(&self) -> Vec<&T> {
        self.tree.level_order()
    }
    /// Returns the values of the tree grouped by level, the root being level 0.
    #[inline]
    pub fn levels(&self) -> BTreeMap<usize, Vec<&T>> {
        self.tree.levels()
    }
    /// Returns a lazy iterator over the values of the tree in ascending order.
    #[inline]
    pub fn iter(&self) -> InorderIter<'_, Self> {
        InorderIter::new(self)
    }
    /// Returns the number of edges on the longest path from the root to a leaf, or -1 if the tree is empty.
    #[inline]
    pub fn height(&self) -> isize {
        self.tree.height()
    }
    /// Returns the number of values in the tree.
    #[inline]
    pub fn size(&self) -> usize {
        self.tree.size()
    }
    /// Returns `true` if the tree has no values, `false` otherwise.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
    /// Returns `true` if, for every node, the heights of its left and right subtrees differ by at most 1.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.tree.is_balanced()
    }
}
impl<T, K, S> BinarySearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Ord,
{
    /// Inserts a value into the tree as a new leaf, returning `true`, or returns `false` without modifying the tree if the value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut current = match self.tree.root.clone() {
            Some(root) => root,
            None => {
                let root = self.tree.set_root(value);
                log::trace!("inserted {:?} as the root", root);
                return true;
            }
        };
        loop {
            let node = self.tree.node(&current);
            let (slot, goes_left) = match value.cmp(&node.value) {
                Ordering::Less => (&node.left, true),
                Ordering::Greater => (&node.right, false),
                Ordering::Equal => return false,
            };
            match slot.clone() {
                Some(child) => current = child,
                None => {
                    let leaf = self.tree.add_leaf(value);
                    let parent = self.tree.node_mut(&current);
                    if goes_left {
                        parent.left = Some(leaf.clone());
                    } else {
                        parent.right = Some(leaf.clone());
                    }
                    log::trace!("inserted {:?} under {:?}", leaf, current);
                    return true;
                }
            }
        }
    }
    /// Returns `true` if the value is present in the tree, `false` otherwise.
    pub fn search(&self, value: &T) -> bool {
        let mut current = self.tree.root.as_ref();
        while let Some(key) = current {
            let node = self.tree.node(key);
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_ref(),
                Ordering::Greater => node.right.as_ref(),
                Ordering::Equal => return true,
            };
        }
        false
    }
    /// Alias for [`search`].
    ///
    /// [`search`]: #method.search " "
    #[inline(always)]
    pub fn contains(&self, value: &T) -> bool {
        self.search(value)
    }
    /// Returns the smallest value in the tree, or `None` if the tree is empty.
    pub fn find_min(&self) -> Option<&T> {
        let mut node = self.tree.node(self.tree.root.as_ref()?);
        while let Some(left) = &node.left {
            node = self.tree.node(left);
        }
        Some(&node.value)
    }
    /// Returns the largest value in the tree, or `None` if the tree is empty.
    pub fn find_max(&self) -> Option<&T> {
        let mut node = self.tree.node(self.tree.root.as_ref()?);
        while let Some(right) = &node.right {
            node = self.tree.node(right);
        }
        Some(&node.value)
    }
    /// Removes a value from the tree, returning it, or `None` if it was not present.
    ///
    /// A node with one child is replaced by that child. A node with two children keeps its place in the tree and receives the value of its in-order successor (the smallest value of its right subtree), whose own node is removed instead.
    pub fn delete(&mut self, value: &T) -> Option<T> {
        // The parent of `current` and whether `current` is its left child.
        let mut link: Option<(K, bool)> = None;
        let mut current = self.tree.root.clone()?;
        loop {
            let node = self.tree.node(&current);
            let (child, goes_left) = match value.cmp(&node.value) {
                Ordering::Less => (node.left.clone(), true),
                Ordering::Greater => (node.right.clone(), false),
                Ordering::Equal => break,
            };
            link = Some((current, goes_left));
            current = child?;
        }
        let node = self.tree.node(&current);
        let removed = match (node.left.clone(), node.right.clone()) {
            (Some(_), Some(right)) => {
                let successor = self.take_min(&current, right);
                mem::replace(&mut self.tree.node_mut(&current).value, successor)
            }
            (left, right) => {
                let removed = self.tree.storage.remove(&current);
                self.relink(link, left.or(right));
                removed.value
            }
        };
        log::trace!("deleted {:?}, {} values left", current, self.size());
        Some(removed)
    }
    /// Returns `true` if every node's left subtree holds only smaller values and its right subtree only greater ones.
    #[inline]
    pub fn is_valid_bst(&self) -> bool {
        algorithms::is_ordered(&self.tree)
    }
    /// Same as [`is_valid_bst`], but additionally requires every value to be strictly between `min` and `max` where those are given.
    ///
    /// [`is_valid_bst`]: #method.is_valid_bst " "
    #[inline]
    pub fn is_valid_bst_within(&self, min: Option<&T>, max: Option<&T>) -> bool {
        algorithms::is_ordered_within(&self.tree, min, max)
    }

    /// Unlinks the leftmost node of `subtree`, the right child of `target`, and returns its value.
    fn take_min(&mut self, target: &K, subtree: K) -> T {
        let mut parent = None;
        let mut current = subtree;
        while let Some(left) = self.tree.node(&current).left.clone() {
            parent = Some(current);
            current = left;
        }
        let removed = self.tree.storage.remove(&current);
        match parent {
            Some(parent) => self.tree.node_mut(&parent).left = removed.right,
            None => self.tree.node_mut(target).right = removed.right,
        }
        removed.value
    }
    /// Points the link which led to a removed node at its replacement.
    fn relink(&mut self, link: Option<(K, bool)>, replacement: Option<K>) {
        match link {
            None => self.tree.root = replacement,
            Some((parent, true)) => self.tree.node_mut(&parent).left = replacement,
            Some((parent, false)) => self.tree.node_mut(&parent).right = replacement,
        }
    }
}
impl<T, K, S> Default for BinarySearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
impl<T, K, S> Traversable for BinarySearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Value = T;
    type Cursor = K;
    const SLOT_NAMES: &'static [&'static str] = &["L", "R"];

    #[inline(always)]
    fn cursor_to_root(&self) -> Option<K> {
        self.tree.cursor_to_root()
    }
    #[inline(always)]
    fn value_of(&self, cursor: &K) -> &T {
        self.tree.value_of(cursor)
    }
    #[inline(always)]
    fn num_children_of(&self, cursor: &K) -> usize {
        self.tree.num_children_of(cursor)
    }
    #[inline(always)]
    fn nth_child_of(&self, cursor: &K, child_num: usize) -> Option<K> {
        self.tree.nth_child_of(cursor, child_num)
    }
}
impl<T, K, S> Extend<T> for BinarySearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
impl<T, K, S> FromIterator<T> for BinarySearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
impl<T, K, S> Display for BinarySearchTree<T, K, S>
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

#[cfg(test)]
mod tests;
