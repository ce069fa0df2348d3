use alloc::vec::Vec;
use super::super::Traversable;

/// Returns the values of the tree in pre-order: every node comes before its children, and children are visited in slot order.
pub fn preorder<T: Traversable>(tree: &T) -> Vec<&T::Value> {
    let mut values = Vec::new();
    if let Some(root) = tree.cursor_to_root() {
        preorder_from(tree, &root, &mut values);
    }
    values
}
fn preorder_from<'a, T: Traversable>(tree: &'a T, cursor: &T::Cursor, values: &mut Vec<&'a T::Value>) {
    values.push(tree.value_of(cursor));
    for child_num in 0..tree.num_children_of(cursor) {
        if let Some(child) = tree.nth_child_of(cursor, child_num) {
            preorder_from(tree, &child, values);
        }
    }
}

/// Returns the values of the tree in in-order: the subtree in the first child slot, then the node, then the subtrees in the remaining slots.
///
/// For binary trees this is the classic left-root-right order, which yields the values of a search tree in ascending order.
pub fn inorder<T: Traversable>(tree: &T) -> Vec<&T::Value> {
    let mut values = Vec::new();
    if let Some(root) = tree.cursor_to_root() {
        inorder_from(tree, &root, &mut values);
    }
    values
}
fn inorder_from<'a, T: Traversable>(tree: &'a T, cursor: &T::Cursor, values: &mut Vec<&'a T::Value>) {
    let num_children = tree.num_children_of(cursor);
    if let Some(first) = tree.nth_child_of(cursor, 0) {
        inorder_from(tree, &first, values);
    }
    values.push(tree.value_of(cursor));
    for child_num in 1..num_children {
        if let Some(child) = tree.nth_child_of(cursor, child_num) {
            inorder_from(tree, &child, values);
        }
    }
}

/// Returns the values of the tree in post-order: every node comes after all of its children.
pub fn postorder<T: Traversable>(tree: &T) -> Vec<&T::Value> {
    let mut values = Vec::new();
    if let Some(root) = tree.cursor_to_root() {
        postorder_from(tree, &root, &mut values);
    }
    values
}
fn postorder_from<'a, T: Traversable>(tree: &'a T, cursor: &T::Cursor, values: &mut Vec<&'a T::Value>) {
    for child_num in 0..tree.num_children_of(cursor) {
        if let Some(child) = tree.nth_child_of(cursor, child_num) {
            postorder_from(tree, &child, values);
        }
    }
    values.push(tree.value_of(cursor));
}

/// Returns a cursor to the first node, in pre-order, whose value satisfies the predicate.
pub fn find<T, P>(tree: &T, mut predicate: P) -> Option<T::Cursor>
where
    T: Traversable,
    P: FnMut(&T::Value) -> bool,
{
    let root = tree.cursor_to_root()?;
    find_from(tree, root, &mut predicate)
}
fn find_from<T, P>(tree: &T, cursor: T::Cursor, predicate: &mut P) -> Option<T::Cursor>
where
    T: Traversable,
    P: FnMut(&T::Value) -> bool,
{
    if predicate(tree.value_of(&cursor)) {
        return Some(cursor);
    }
    (0..tree.num_children_of(&cursor))
        .filter_map(|child_num| tree.nth_child_of(&cursor, child_num))
        .find_map(|child| find_from(tree, child, predicate))
}
