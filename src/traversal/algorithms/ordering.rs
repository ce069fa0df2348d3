use alloc::vec::Vec;
use super::super::Traversable;

/// Returns `true` if the tree satisfies the binary search tree ordering: for every node, every value in the subtree in slot 0 (left) is strictly less than the node's value and every value in the subtree in slot 1 (right) is strictly greater.
///
/// Equal values anywhere in the tree make it invalid. Slots past the second one are not inspected. An empty tree is ordered.
#[inline]
pub fn is_ordered<T>(tree: &T) -> bool
where
    T: Traversable,
    T::Value: Ord,
{
    is_ordered_within(tree, None, None)
}

/// Same as [`is_ordered`], but additionally requires every value to be strictly between `min` and `max` where those are given.
///
/// [`is_ordered`]: fn.is_ordered.html " "
pub fn is_ordered_within<'a, T>(
    tree: &'a T,
    min: Option<&'a T::Value>,
    max: Option<&'a T::Value>,
) -> bool
where
    T: Traversable,
    T::Value: Ord,
{
    let mut stack = Vec::new();
    if let Some(root) = tree.cursor_to_root() {
        stack.push((root, min, max));
    }
    // Each pending subtree carries the open interval its values must fall into.
    while let Some((cursor, min, max)) = stack.pop() {
        let value = tree.value_of(&cursor);
        if min.map_or(false, |min| value <= min) || max.map_or(false, |max| value >= max) {
            return false;
        }
        stack.extend(tree.nth_child_of(&cursor, 1).map(|right| (right, Some(value), max)));
        stack.extend(tree.nth_child_of(&cursor, 0).map(|left| (left, min, Some(value))));
    }
    true
}
