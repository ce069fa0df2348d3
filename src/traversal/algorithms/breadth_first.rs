use alloc::{
    collections::{BTreeMap, VecDeque},
    vec::Vec,
};
use super::super::Traversable;

/// Returns the values of the tree level by level, from the root down, each level in slot order.
pub fn breadth_first<T: Traversable>(tree: &T) -> Vec<&T::Value> {
    let mut values = Vec::new();
    let mut queue = VecDeque::new();
    queue.extend(tree.cursor_to_root());
    while let Some(cursor) = queue.pop_front() {
        values.push(tree.value_of(&cursor));
        for child_num in 0..tree.num_children_of(&cursor) {
            queue.extend(tree.nth_child_of(&cursor, child_num));
        }
    }
    values
}

/// Returns the values of the tree grouped by depth. The root is at level 0; each level lists its values in the same order as [`breadth_first`] would.
///
/// An empty tree produces an empty map.
///
/// [`breadth_first`]: fn.breadth_first.html " "
pub fn levels<T: Traversable>(tree: &T) -> BTreeMap<usize, Vec<&T::Value>> {
    let mut levels = BTreeMap::new();
    let mut queue = VecDeque::new();
    if let Some(root) = tree.cursor_to_root() {
        queue.push_back((root, 0_usize));
    }
    while let Some((cursor, level)) = queue.pop_front() {
        levels
            .entry(level)
            .or_insert_with(Vec::new)
            .push(tree.value_of(&cursor));
        for child_num in 0..tree.num_children_of(&cursor) {
            if let Some(child) = tree.nth_child_of(&cursor, child_num) {
                queue.push_back((child, level + 1));
            }
        }
    }
    levels
}
