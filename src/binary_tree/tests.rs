use super::*;
use alloc::{string::ToString, vec::Vec};
use pretty_assertions::assert_eq;

//       1
//      / \
//     2   3
//    / \   \
//   4   5   6
fn sample() -> BinaryTree<u32> {
    let mut tree = BinaryTree::with_root(1);
    let mut root = tree.root_mut().unwrap();
    root.try_set_left(2).unwrap();
    root.try_set_right(3).unwrap();
    let mut two = root.left_mut().unwrap();
    two.try_set_left(4).unwrap();
    two.try_set_right(5).unwrap();
    let mut three = tree.root_mut().unwrap().right_mut().unwrap();
    three.try_set_right(6).unwrap();
    tree
}

fn values(values: Vec<&u32>) -> Vec<u32> {
    values.into_iter().copied().collect()
}

#[test]
fn classical_orders() {
    let tree = sample();
    assert_eq!(values(tree.preorder()), [1, 2, 4, 5, 3, 6]);
    assert_eq!(values(tree.inorder()), [4, 2, 5, 1, 3, 6]);
    assert_eq!(values(tree.postorder()), [4, 5, 2, 6, 3, 1]);
    assert_eq!(values(tree.level_order()), [1, 2, 3, 4, 5, 6]);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 4, 5, 3, 6]);

    let levels = tree.levels();
    assert_eq!(values(levels[&0].clone()), [1]);
    assert_eq!(values(levels[&1].clone()), [2, 3]);
    assert_eq!(values(levels[&2].clone()), [4, 5, 6]);
}

#[test]
fn metrics() {
    let tree = sample();
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.size(), 6);
    assert_eq!(tree.count_leaves(), 3);
    assert!(tree.is_balanced());
    assert_eq!(tree.find(&5).map(|x| *x.value()), Some(5));
    assert!(tree.find(&7).is_none());
}

#[test]
fn empty_tree() {
    let tree = BinaryTree::<u32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
    assert_eq!(tree.size(), 0);
    assert!(tree.preorder().is_empty());
    assert!(tree.inorder().is_empty());
    assert!(tree.postorder().is_empty());
    assert!(tree.level_order().is_empty());
    assert!(tree.find(&1).is_none());
    assert!(tree.is_balanced());
}

#[test]
fn single_child_keeps_its_side() {
    let mut tree = BinaryTree::<_>::with_root('b');
    tree.root_mut().unwrap().try_set_right('c').unwrap();
    let root = tree.root().unwrap();
    assert!(root.left_child().is_none());
    assert_eq!(root.right_child().map(|x| *x.value()), Some('c'));
    assert_eq!(root.children().len(), 1);
    assert!(!root.is_full());
    assert_eq!(tree.to_string(), "b\n  R: c\n");
}

#[test]
fn chain_is_unbalanced() {
    let mut tree = BinaryTree::<_>::with_root(3);
    let mut root = tree.root_mut().unwrap();
    root.try_set_left(2).unwrap();
    root.left_mut().unwrap().try_set_left(1).unwrap();
    assert_eq!(tree.height(), 2);
    assert!(!tree.is_balanced());
    assert_eq!(tree.root().unwrap().height(), 2);
}

#[test]
fn occupied_slot_returns_value() {
    let mut tree = sample();
    let mut root = tree.root_mut().unwrap();
    let err = root.try_set_left(10).unwrap_err();
    assert_eq!(err, SlotOccupiedError { payload: 10 });
    assert_eq!(err.to_string(), "the child slot is already occupied");
    assert_eq!(tree.size(), 6);
}

#[test]
fn removing_children_drops_subtrees() {
    let mut tree = sample();
    let mut root = tree.root_mut().unwrap();
    assert_eq!(root.remove_left(), Some(2));
    assert_eq!(root.remove_left(), None);
    *root.value_mut() = 10;
    assert_eq!(tree.size(), 3);
    assert_eq!(values(tree.preorder()), [10, 3, 6]);

    // The freed slots are reused
    tree.root_mut().unwrap().try_set_left(7).unwrap();
    assert_eq!(tree.size(), 4);
    assert_eq!(values(tree.inorder()), [7, 10, 3, 6]);

    let mut root = tree.root_mut().unwrap();
    assert_eq!(root.remove_right(), Some(3));
    assert_eq!(values(tree.preorder()), [10, 7]);
}

#[test]
fn set_root_discards_existing_nodes() {
    let mut tree = sample();
    tree.set_root(42);
    assert_eq!(tree.size(), 1);
    assert!(tree.root().unwrap().is_leaf());
}

#[test]
fn node_ref_conversion() {
    let mut tree = sample();
    let key = *tree.root().unwrap().left_child().unwrap().key();
    let node = NodeRef::from(tree.get_mut(&key).unwrap());
    assert_eq!(*node.value(), 2);
    assert!(node.is_full());
    assert_eq!(node.height(), 1);
}

#[test]
fn display_names_slots() {
    let tree = sample();
    assert_eq!(
        tree.to_string(),
        "1\n  L: 2\n    L: 4\n    R: 5\n  R: 3\n    R: 6\n",
    );
}
