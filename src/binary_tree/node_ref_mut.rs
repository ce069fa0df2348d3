use core::fmt::Debug;
use crate::storage::{Storage, DefaultStorage};
use super::{BinaryTree, Node, NodeRef, SlotOccupiedError};

/// A *mutable* reference to a node in a binary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree and modify it as a whole.
#[derive(Debug)]
pub struct NodeRefMut<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a mut BinaryTree<T, K, S>,
    key: K,
}
impl<'a, T, K, S> NodeRefMut<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) fn new(tree: &'a mut BinaryTree<T, K, S>, key: K) -> Self {
        Self { tree, key }
    }
    /// Returns a reference to the raw storage key for the node.
    pub fn key(&self) -> &K {
        &self.key
    }
    /// Returns a reference to the value stored in the node.
    pub fn value(&self) -> &T {
        &self.tree.node(&self.key).value
    }
    /// Returns a *mutable* reference to the value stored in the node.
    ///
    /// Nothing stops the new value from breaking an ordering the tree was built with; this type is for plain binary trees.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.tree.node_mut(&self.key).value
    }
    /// Consumes the reference and returns a mutable reference to the value which lives as long as the borrow of the tree.
    pub fn into_value_mut(self) -> &'a mut T {
        &mut self.tree.node_mut(&self.key).value
    }

    /// Puts a new leaf with the specified value into the left slot, returning its key.
    ///
    /// # Errors
    /// Fails if the left slot is already occupied. The value is handed back inside the error.
    pub fn try_set_left(&mut self, value: T) -> Result<K, SlotOccupiedError<T>> {
        self.try_set(value, Side::Left)
    }
    /// Puts a new leaf with the specified value into the right slot, returning its key.
    ///
    /// # Errors
    /// Fails if the right slot is already occupied. The value is handed back inside the error.
    pub fn try_set_right(&mut self, value: T) -> Result<K, SlotOccupiedError<T>> {
        self.try_set(value, Side::Right)
    }
    /// Removes the left child together with its entire subtree, returning the child's value, or `None` if the left slot was empty.
    pub fn remove_left(&mut self) -> Option<T> {
        let child = self.tree.node_mut(&self.key).left.take()?;
        Some(self.tree.remove_subtree(&child))
    }
    /// Removes the right child together with its entire subtree, returning the child's value, or `None` if the right slot was empty.
    pub fn remove_right(&mut self) -> Option<T> {
        let child = self.tree.node_mut(&self.key).right.take()?;
        Some(self.tree.remove_subtree(&child))
    }
    /// Consumes the reference and returns a mutable reference to the left child, or `None` if the left slot is empty.
    pub fn left_mut(self) -> Option<Self> {
        let key = self.tree.node(&self.key).left.clone()?;
        Some(Self::new(self.tree, key))
    }
    /// Consumes the reference and returns a mutable reference to the right child, or `None` if the right slot is empty.
    pub fn right_mut(self) -> Option<Self> {
        let key = self.tree.node(&self.key).right.clone()?;
        Some(Self::new(self.tree, key))
    }

    fn try_set(&mut self, value: T, side: Side) -> Result<K, SlotOccupiedError<T>> {
        let node = self.tree.node(&self.key);
        let occupied = match side {
            Side::Left => node.left.is_some(),
            Side::Right => node.right.is_some(),
        };
        if occupied {
            return Err(SlotOccupiedError { payload: value });
        }
        let child = self.tree.add_leaf(value);
        let node = self.tree.node_mut(&self.key);
        match side {
            Side::Left => node.left = Some(child.clone()),
            Side::Right => node.right = Some(child.clone()),
        }
        log::trace!("added {:?} as the {:?} child of {:?}", child, side, self.key);
        Ok(child)
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

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}
