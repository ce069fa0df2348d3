use super::*;
use alloc::{string::ToString, vec::Vec};
use pretty_assertions::assert_eq;

fn from_slice(values: &[i32]) -> BinarySearchTree<i32> {
    values.iter().copied().collect()
}
fn sorted(values: Vec<&i32>) -> Vec<i32> {
    values.into_iter().copied().collect()
}

//          50
//        /    \
//      30      70
//     /  \    /  \
//   20   40  60   80
const SAMPLE: [i32; 7] = [50, 30, 70, 20, 40, 60, 80];

#[test]
fn insert_and_traverse() {
    let tree = from_slice(&SAMPLE);
    assert_eq!(sorted(tree.inorder()), [20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(sorted(tree.preorder()), [50, 30, 20, 40, 70, 60, 80]);
    assert_eq!(sorted(tree.postorder()), [20, 40, 30, 60, 80, 70, 50]);
    assert_eq!(sorted(tree.level_order()), SAMPLE);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(tree.size(), 7);
    assert_eq!(tree.height(), 2);
    assert!(tree.is_balanced());
    assert!(tree.is_valid_bst());
}

#[test]
fn min_and_max() {
    let tree = from_slice(&SAMPLE);
    assert_eq!(tree.find_min(), Some(&20));
    assert_eq!(tree.find_max(), Some(&80));

    let empty = BinarySearchTree::<i32>::new();
    assert_eq!(empty.find_min(), None);
    assert_eq!(empty.find_max(), None);
}

#[test]
fn duplicates_are_rejected() {
    let mut tree = from_slice(&SAMPLE);
    assert!(!tree.insert(40));
    assert!(!tree.insert(50));
    assert_eq!(tree.size(), 7);
    assert!(tree.insert(45));
    assert_eq!(tree.size(), 8);
}

#[test]
fn search() {
    let tree = from_slice(&SAMPLE);
    for value in &SAMPLE {
        assert!(tree.search(value));
    }
    assert!(!tree.search(&55));
    assert!(!tree.contains(&0));
    assert!(!BinarySearchTree::<i32>::new().search(&1));
}

#[test]
fn delete_leaf() {
    let mut tree = from_slice(&SAMPLE);
    assert_eq!(tree.delete(&20), Some(20));
    assert_eq!(sorted(tree.preorder()), [50, 30, 40, 70, 60, 80]);
    assert!(tree.is_valid_bst());
}

#[test]
fn delete_node_with_one_child() {
    let mut tree = from_slice(&SAMPLE);
    tree.delete(&20);
    // 30 is left with only its right child, which moves up
    assert_eq!(tree.delete(&30), Some(30));
    assert_eq!(sorted(tree.preorder()), [50, 40, 70, 60, 80]);
    assert_eq!(tree.size(), 5);
    assert!(tree.is_valid_bst());
}

#[test]
fn delete_node_with_two_children() {
    let mut tree = from_slice(&SAMPLE);
    let key_of_30 = tree.as_binary_tree().find(&30).unwrap().into_key();
    assert_eq!(tree.delete(&30), Some(30));
    assert_eq!(sorted(tree.inorder()), [20, 40, 50, 60, 70, 80]);
    assert_eq!(sorted(tree.preorder()), [50, 40, 20, 70, 60, 80]);
    // The successor's value was moved into the existing node
    assert_eq!(tree.as_binary_tree().find(&40).unwrap().into_key(), key_of_30);
    assert!(tree.is_valid_bst());
}

#[test]
fn delete_successor_with_right_child() {
    //   10
    //  /  \
    // 5    20
    //     /  \
    //    15   30
    //     \
    //      17
    let mut tree = from_slice(&[10, 5, 20, 15, 30, 17]);
    assert_eq!(tree.delete(&10), Some(10));
    assert_eq!(sorted(tree.preorder()), [15, 5, 20, 17, 30]);
    assert_eq!(tree.delete(&15), Some(15));
    assert_eq!(sorted(tree.preorder()), [17, 5, 20, 30]);
    assert!(tree.is_valid_bst());
}

#[test]
fn delete_root_until_empty() {
    let mut tree = from_slice(&SAMPLE);
    let mut remaining = SAMPLE.len();
    while !tree.is_empty() {
        let root = *tree.preorder()[0];
        assert_eq!(tree.delete(&root), Some(root));
        remaining -= 1;
        assert_eq!(tree.size(), remaining);
        assert!(tree.is_valid_bst());
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
}

#[test]
fn delete_absent_value() {
    let mut tree = from_slice(&SAMPLE);
    assert_eq!(tree.delete(&65), None);
    assert_eq!(tree.size(), 7);
    assert_eq!(BinarySearchTree::<i32>::new().delete(&1), None);
}

#[test]
fn sorted_input_degenerates() {
    let tree: BinarySearchTree<u32> = (0..100).collect();
    assert_eq!(tree.height(), 99);
    assert!(!tree.is_balanced());
    assert!(tree.is_valid_bst());
    assert_eq!(tree.find_max(), Some(&99));
}

#[test]
fn bounded_validity() {
    let tree = from_slice(&SAMPLE);
    assert!(tree.is_valid_bst_within(Some(&0), Some(&100)));
    assert!(tree.is_valid_bst_within(None, Some(&81)));
    assert!(!tree.is_valid_bst_within(Some(&20), None));
    assert!(!tree.is_valid_bst_within(None, Some(&80)));
}

#[test]
fn unordered_binary_tree_is_detected() {
    let mut tree = BinaryTree::<_>::with_root(5);
    let mut root = tree.root_mut().unwrap();
    root.try_set_left(3).unwrap();
    root.try_set_right(8).unwrap();
    root.left_mut().unwrap().try_set_right(6).unwrap();
    assert!(!algorithms::is_ordered(&tree));
}

#[test]
fn display() {
    let tree = from_slice(&[2, 1, 3]);
    assert_eq!(tree.to_string(), "2\n  L: 1\n  R: 3\n");
}

#[test]
fn deep_degenerate_tree() {
    const DEPTH: u32 = 100_000;
    // Linked by hand, since inserting sorted values one by one is quadratic
    let mut inner = BinaryTree::<u32>::with_capacity(DEPTH as usize);
    let mut last = inner.set_root(0);
    for value in 1..DEPTH {
        let leaf = inner.add_leaf(value);
        inner.node_mut(&last).right = Some(leaf);
        last = leaf;
    }
    let mut tree = BinarySearchTree { tree: inner };
    assert_eq!(tree.height(), DEPTH as isize - 1);
    assert!(tree.is_valid_bst());
    assert!(tree.search(&(DEPTH - 1)));
    assert_eq!(tree.find_max(), Some(&(DEPTH - 1)));

    // The deepest leaf, then a node with one child halfway down
    assert_eq!(tree.delete(&(DEPTH - 1)), Some(DEPTH - 1));
    assert_eq!(tree.delete(&50_000), Some(50_000));
    assert_eq!(tree.height(), DEPTH as isize - 3);
    // 50_000 comes back as the left child of 50_001, which then has two children
    assert!(tree.insert(50_000));
    assert_eq!(tree.delete(&50_001), Some(50_001));
    assert_eq!(tree.delete(&0), Some(0));
    assert_eq!(tree.delete(&(DEPTH - 1)), None);

    assert_eq!(tree.size(), DEPTH as usize - 3);
    assert_eq!(algorithms::size(&tree), DEPTH as usize - 3);
    assert_eq!(tree.height(), DEPTH as isize - 5);
    assert_eq!(tree.find_min(), Some(&1));
    assert_eq!(tree.find_max(), Some(&(DEPTH - 2)));
    assert!(tree.search(&50_000));
    assert!(!tree.search(&50_001));
    assert!(tree.is_valid_bst());
    assert_eq!(tree.iter().count(), DEPTH as usize - 3);
}
