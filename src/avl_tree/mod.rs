//! AVL trees: binary search trees which rebalance themselves on insertion.
//!
//! Every node caches the height of its subtree. After a value is inserted as a new leaf, the heights along the path back to the root are recomputed, and the first node whose *balance factor* (height of the left subtree minus height of the right one) leaves the range `-1..=1` is fixed with one or two rotations:
//!
//! | Case        | Heavy side | Inserted value vs. heavy child | Fix                                        |
//! |-------------|------------|--------------------------------|--------------------------------------------|
//! | Left-Left   | left       | smaller                        | rotate the node right                      |
//! | Right-Right | right      | greater                        | rotate the node left                       |
//! | Left-Right  | left       | greater                        | rotate the left child left, then the node right  |
//! | Right-Left  | right      | smaller                        | rotate the right child right, then the node left |
//!
//! This keeps the height of a tree with `n` nodes at or below `1.45 * log2(n + 2) - 0.328`, so every operation which walks a single path is logarithmic. Deletion is not supported.
//!
//! # Example
//! ```rust
//! use arbor::avl_tree::AvlTree;
//!
//! let mut tree = AvlTree::<_>::new();
//! for value in &[10, 20, 30, 40, 50, 25] {
//!     assert!(tree.insert(*value));
//!     assert!(tree.is_balanced());
//! }
//! assert!(!tree.insert(25)); // Already there
//!
//! assert_eq!(tree.preorder(), [&30, &20, &10, &25, &40, &50]);
//! assert_eq!(tree.height(), 2);
//! // 30 and 50 both went into a right-heavy subtree on the right; 25 went to the left of 40.
//! let counts = tree.rebalance_counts();
//! assert_eq!((counts.right_right, counts.right_left), (2, 1));
//! ```

use core::{
    cmp::{max, Ordering},
    fmt::{self, Formatter, Debug, Display},
    iter::FromIterator,
};
use alloc::{collections::BTreeMap, vec::Vec};
use crate::{
    storage::{Storage, DefaultStorage},
    traversal::{algorithms, Traversable, InorderIter, Dump},
};

mod node;
pub use node::Node;

/// An AVL tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AvlTree<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    storage: S,
    root: Option<K>,
    rebalances: RebalanceCounts,
}
impl<T, K, S> AvlTree<T, K, S>
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
            rebalances: RebalanceCounts::default(),
        }
    }
    /// Creates an empty tree with preallocated space for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
            rebalances: RebalanceCounts::default(),
        }
    }

    /// Returns the values of the tree in pre-order.
    #[inline]
    pub fn preorder(&self) -> Vec<&T> {
        algorithms::preorder(self)
    }
    /// Returns the values of the tree in in-order, which is ascending order.
    #[inline]
    pub fn inorder(&self) -> Vec<&T> {
        algorithms::inorder(self)
    }
    /// Returns the values of the tree in post-order.
    #[inline]
    pub fn postorder(&self) -> Vec<&T> {
        algorithms::postorder(self)
    }
    /// Returns the values of the tree in breadth-first order.
    #[inline]
    pub fn level_order(&self) -> Vec<&T> {
        algorithms::breadth_first(self)
    }
    /// Returns the values of the tree grouped by level, the root being level 0.
    #[inline]
    pub fn levels(&self) -> BTreeMap<usize, Vec<&T>> {
        algorithms::levels(self)
    }
    /// Returns a lazy iterator over the values of the tree in ascending order.
    #[inline]
    pub fn iter(&self) -> InorderIter<'_, Self> {
        InorderIter::new(self)
    }
    /// Returns the number of edges on the longest path from the root to a leaf, or -1 if the tree is empty.
    ///
    /// Read from the cache in the root node, so this is O(1).
    #[inline]
    pub fn height(&self) -> isize {
        self.height_of(self.root.as_ref())
    }
    /// Returns the number of values in the tree.
    #[inline]
    pub fn size(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the tree has no values, `false` otherwise.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns `true` if, for every node, the heights of its left and right subtrees differ by at most 1.
    ///
    /// The heights are recomputed from the structure of the tree instead of being read from the cache, so this stays meaningful as a check of the rebalancing itself.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        algorithms::is_height_balanced(self)
    }
    /// Returns `true` if the height cached in every node matches the actual height of its subtree.
    pub fn heights_consistent(&self) -> bool {
        self.root
            .as_ref()
            .map_or(true, |root| self.checked_height(root).is_some())
    }
    /// Returns how many times each of the four rebalancing cases has been applied since the tree was created.
    #[inline(always)]
    pub fn rebalance_counts(&self) -> RebalanceCounts {
        self.rebalances
    }

    /// Recomputed height of the subtree, or `None` if any cached height in it is stale.
    fn checked_height(&self, key: &K) -> Option<isize> {
        let node = self.node(key);
        let left = match &node.left {
            Some(left) => self.checked_height(left)?,
            None => -1,
        };
        let right = match &node.right {
            Some(right) => self.checked_height(right)?,
            None => -1,
        };
        let height = max(left, right) + 1;
        if height == node.height {
            Some(height)
        } else {
            None
        }
    }
    fn height_of(&self, key: Option<&K>) -> isize {
        key.map_or(-1, |key| self.node(key).height)
    }
    fn update_height(&mut self, key: &K) {
        let node = self.node(key);
        let height = max(
            self.height_of(node.left.as_ref()),
            self.height_of(node.right.as_ref()),
        ) + 1;
        self.node_mut(key).height = height;
    }
    fn balance_factor(&self, key: &K) -> isize {
        let node = self.node(key);
        self.height_of(node.left.as_ref()) - self.height_of(node.right.as_ref())
    }
    /// Lifts the left child of `key` into its place, returning the new root of the subtree.
    fn rotate_right(&mut self, key: K) -> K {
        let pivot = self
            .node(&key)
            .left
            .clone()
            .expect("right rotation requires a left child");
        let moved = self.node_mut(&pivot).right.take();
        self.node_mut(&key).left = moved;
        self.update_height(&key);
        self.node_mut(&pivot).right = Some(key);
        self.update_height(&pivot);
        pivot
    }
    /// Lifts the right child of `key` into its place, returning the new root of the subtree.
    fn rotate_left(&mut self, key: K) -> K {
        let pivot = self
            .node(&key)
            .right
            .clone()
            .expect("left rotation requires a right child");
        let moved = self.node_mut(&pivot).left.take();
        self.node_mut(&key).right = moved;
        self.update_height(&key);
        self.node_mut(&pivot).left = Some(key);
        self.update_height(&pivot);
        pivot
    }
    #[track_caller]
    fn node(&self, key: &K) -> &Node<T, K> {
        self.storage
            .get(key)
            .unwrap_or_else(|| panic!("invalid key: {:?}", key))
    }
    #[track_caller]
    fn node_mut(&mut self, key: &K) -> &mut Node<T, K> {
        self.storage
            .get_mut(key)
            .unwrap_or_else(|| panic!("invalid key: {:?}", key))
    }
}
impl<T, K, S> AvlTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Ord,
{
    /// Inserts a value into the tree and rebalances it, returning `true`, or returns `false` without modifying the tree if the value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let (new_root, inserted) = self.insert_at(self.root.clone(), value);
        self.root = Some(new_root);
        inserted.is_some()
    }
    /// Returns `true` if the value is present in the tree, `false` otherwise.
    pub fn search(&self, value: &T) -> bool {
        let mut current = self.root.as_ref();
        while let Some(key) = current {
            let node = self.node(key);
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
        let mut node = self.node(self.root.as_ref()?);
        while let Some(left) = &node.left {
            node = self.node(left);
        }
        Some(&node.value)
    }
    /// Returns the largest value in the tree, or `None` if the tree is empty.
    pub fn find_max(&self) -> Option<&T> {
        let mut node = self.node(self.root.as_ref()?);
        while let Some(right) = &node.right {
            node = self.node(right);
        }
        Some(&node.value)
    }
    /// Returns `true` if every node's left subtree holds only smaller values and its right subtree only greater ones.
    #[inline]
    pub fn is_valid_bst(&self) -> bool {
        algorithms::is_ordered(self)
    }

    /// Inserts the value into the subtree at `link`, returning the new root of the subtree and the key of the new node, which is `None` for duplicates.
    fn insert_at(&mut self, link: Option<K>, value: T) -> (K, Option<K>) {
        let key = match link {
            Some(key) => key,
            None => {
                let key = self.storage.add(Node::leaf(value));
                log::trace!("inserted {:?}", key);
                return (key.clone(), Some(key));
            }
        };
        let node = self.node(&key);
        let goes_left = match value.cmp(&node.value) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => return (key, None),
        };
        let child = if goes_left {
            node.left.clone()
        } else {
            node.right.clone()
        };
        let (new_child, inserted) = self.insert_at(child, value);
        let inserted = match inserted {
            Some(inserted) => inserted,
            None => return (key, None),
        };
        let node = self.node_mut(&key);
        if goes_left {
            node.left = Some(new_child);
        } else {
            node.right = Some(new_child);
        }
        let new_root = self.rebalance(key, &inserted);
        (new_root, Some(inserted))
    }
    /// Restores the balance of the node at `key` after a value was inserted under it, returning the new root of the subtree.
    fn rebalance(&mut self, key: K, inserted: &K) -> K {
        self.update_height(&key);
        let balance = self.balance_factor(&key);
        if balance > 1 {
            let left = self
                .node(&key)
                .left
                .clone()
                .expect("left-heavy node has a left child");
            if self.node(inserted).value < self.node(&left).value {
                log::debug!("left-left case at {:?}", key);
                self.rebalances.left_left += 1;
            } else {
                log::debug!("left-right case at {:?}", key);
                self.rebalances.left_right += 1;
                let new_left = self.rotate_left(left);
                self.node_mut(&key).left = Some(new_left);
            }
            self.rotate_right(key)
        } else if balance < -1 {
            let right = self
                .node(&key)
                .right
                .clone()
                .expect("right-heavy node has a right child");
            if self.node(inserted).value > self.node(&right).value {
                log::debug!("right-right case at {:?}", key);
                self.rebalances.right_right += 1;
            } else {
                log::debug!("right-left case at {:?}", key);
                self.rebalances.right_left += 1;
                let new_right = self.rotate_right(right);
                self.node_mut(&key).right = Some(new_right);
            }
            self.rotate_left(key)
        } else {
            key
        }
    }
}
impl<T, K, S> Default for AvlTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
impl<T, K, S> Traversable for AvlTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Value = T;
    type Cursor = K;
    const SLOT_NAMES: &'static [&'static str] = &["L", "R"];

    #[inline(always)]
    fn cursor_to_root(&self) -> Option<K> {
        self.root.clone()
    }
    #[inline]
    #[track_caller]
    fn value_of(&self, cursor: &K) -> &T {
        &self.node(cursor).value
    }
    #[inline(always)]
    fn num_children_of(&self, _cursor: &K) -> usize {
        2
    }
    #[inline]
    #[track_caller]
    fn nth_child_of(&self, cursor: &K, child_num: usize) -> Option<K> {
        let node = self.node(cursor);
        match child_num {
            0 => node.left.clone(),
            1 => node.right.clone(),
            _ => None,
        }
    }
}
impl<T, K, S> Extend<T> for AvlTree<T, K, S>
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
impl<T, K, S> FromIterator<T> for AvlTree<T, K, S>
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
impl<T, K, S> Display for AvlTree<T, K, S>
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

/// How many times each rebalancing case was applied to an [`AvlTree`], as returned by [`rebalance_counts`].
///
/// [`AvlTree`]: struct.AvlTree.html " "
/// [`rebalance_counts`]: struct.AvlTree.html#method.rebalance_counts " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RebalanceCounts {
    /// Single right rotations.
    pub left_left: usize,
    /// Single left rotations.
    pub right_right: usize,
    /// Left rotations of the left child followed by right rotations.
    pub left_right: usize,
    /// Right rotations of the right child followed by left rotations.
    pub right_left: usize,
}
impl RebalanceCounts {
    /// Total number of rebalancing operations, counting a double rotation once.
    #[inline]
    pub const fn total(self) -> usize {
        self.left_left + self.right_right + self.left_right + self.right_left
    }
}

#[cfg(test)]
mod tests;
