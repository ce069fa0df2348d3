use core::fmt::Debug;

/// A node of an AVL tree.
///
/// Besides its links, every node caches the height of its subtree, which is what makes rebalancing decisions O(1).
///
/// Created by the AVL tree internally and only publicly exposed so that AVL tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T, K>
where
    K: Clone + Debug + Eq,
{
    pub(super) value: T,
    pub(super) height: isize,
    pub(super) left: Option<K>,
    pub(super) right: Option<K>,
}
impl<T, K> Node<T, K>
where
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    pub(super) fn leaf(value: T) -> Self {
        Self {
            value,
            height: 0,
            left: None,
            right: None,
        }
    }
}
