use core::fmt::Debug;
use crate::{storage::Storage, traversal::Traversable};
use super::{BinaryTree, Node};

impl<T, K, S> Traversable for BinaryTree<T, K, S>
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
