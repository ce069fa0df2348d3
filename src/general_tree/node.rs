use core::fmt::Debug;
use alloc::vec::Vec;

/// A node of a general tree.
///
/// Created by the general tree internally and only publicly exposed so that general tree storages' generic arguments could be specified.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T, K>
where
    K: Clone + Debug + Eq,
{
    pub(super) value: T,
    pub(super) parent: Option<K>,
    pub(super) children: Vec<K>,
}
impl<T, K> Node<T, K>
where
    K: Clone + Debug + Eq,
{
    /// Creates a root node. There can only be one per tree.
    #[inline(always)]
    pub(super) fn root(value: T) -> Self {
        Self {
            value,
            parent: None,
            children: Vec::new(),
        }
    }
    #[inline(always)]
    pub(super) fn child(value: T, parent: K) -> Self {
        Self {
            value,
            parent: Some(parent),
            children: Vec::new(),
        }
    }
}
