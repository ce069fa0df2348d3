use core::fmt::Debug;

/// A node of a binary tree.
///
/// Created by the binary tree internally and only publicly exposed so that binary tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T, K>
where
    K: Clone + Debug + Eq,
{
    pub(crate) value: T,
    pub(crate) left: Option<K>,
    pub(crate) right: Option<K>,
}
impl<T, K> Node<T, K>
where
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    pub(crate) fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
