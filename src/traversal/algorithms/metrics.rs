use core::cmp::{max, min};
use alloc::{collections::VecDeque, vec::Vec};
use super::super::Traversable;

/// Returns the number of edges on the longest path from the root to a leaf: 0 for a lone root and -1 for an empty tree.
pub fn height<T: Traversable>(tree: &T) -> isize {
    tree.cursor_to_root()
        .map_or(-1, |root| height_from(tree, &root))
}
/// Returns the height of the subtree rooted at the specified cursor, as defined by [`height`].
///
/// Counts the levels of the subtree breadth-first, so a degenerate subtree as deep as a list takes no more stack than a balanced one.
///
/// [`height`]: fn.height.html " "
pub fn height_from<T: Traversable>(tree: &T, cursor: &T::Cursor) -> isize {
    let mut height = -1;
    let mut level = VecDeque::new();
    level.push_back(cursor.clone());
    while !level.is_empty() {
        height += 1;
        for _ in 0..level.len() {
            let current = match level.pop_front() {
                Some(current) => current,
                None => break,
            };
            for child_num in 0..tree.num_children_of(&current) {
                level.extend(tree.nth_child_of(&current, child_num));
            }
        }
    }
    height
}

/// Returns the number of nodes in the tree.
pub fn size<T: Traversable>(tree: &T) -> usize {
    let mut size = 0;
    let mut stack: Vec<T::Cursor> = tree.cursor_to_root().into_iter().collect();
    while let Some(cursor) = stack.pop() {
        size += 1;
        for child_num in 0..tree.num_children_of(&cursor) {
            stack.extend(tree.nth_child_of(&cursor, child_num));
        }
    }
    size
}

/// Returns the number of nodes which have no children.
pub fn count_leaves<T: Traversable>(tree: &T) -> usize {
    let mut leaves = 0;
    let mut stack: Vec<T::Cursor> = tree.cursor_to_root().into_iter().collect();
    while let Some(cursor) = stack.pop() {
        let before = stack.len();
        for child_num in 0..tree.num_children_of(&cursor) {
            stack.extend(tree.nth_child_of(&cursor, child_num));
        }
        if stack.len() == before {
            leaves += 1;
        }
    }
    leaves
}

/// Returns `true` if, for every node, the heights of the subtrees in its child slots differ by at most 1. Empty slots count as subtrees of height -1.
///
/// Runs in O(n): heights are computed once, bottom-up, and an unbalanced subtree short-circuits the rest of the walk instead of having its height recomputed at every ancestor. An empty tree is balanced.
pub fn is_height_balanced<T: Traversable>(tree: &T) -> bool {
    tree.cursor_to_root()
        .map_or(true, |root| balanced_height(tree, &root).is_some())
}
/// Height of the subtree, or `None` as soon as any node in it is unbalanced.
fn balanced_height<T: Traversable>(tree: &T, cursor: &T::Cursor) -> Option<isize> {
    let num_children = tree.num_children_of(cursor);
    if num_children == 0 {
        return Some(0);
    }
    let (mut lowest, mut tallest) = (isize::MAX, isize::MIN);
    for child_num in 0..num_children {
        let child_height = match tree.nth_child_of(cursor, child_num) {
            Some(child) => balanced_height(tree, &child)?,
            None => -1,
        };
        lowest = min(lowest, child_height);
        tallest = max(tallest, child_height);
    }
    if tallest - lowest > 1 {
        None
    } else {
        Some(tallest + 1)
    }
}
