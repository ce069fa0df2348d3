use super::*;
use core::iter;
use alloc::{string::ToString, vec::Vec};
use pretty_assertions::assert_eq;

fn from_slice(values: &[i32]) -> AvlTree<i32> {
    values.iter().copied().collect()
}
fn values(values: Vec<&i32>) -> Vec<i32> {
    values.into_iter().copied().collect()
}
fn counts(left_left: usize, right_right: usize, left_right: usize, right_left: usize) -> RebalanceCounts {
    RebalanceCounts {
        left_left,
        right_right,
        left_right,
        right_left,
    }
}

/// The fewest nodes an AVL tree of the given height can have. Having at least this many nodes is what keeps the height at or below `1.45 * log2(n + 2) - 0.328`.
fn min_nodes(height: isize) -> usize {
    let (mut shorter, mut taller) = (0_usize, 1_usize);
    for _ in 0..height {
        let next = shorter + taller + 1;
        shorter = taller;
        taller = next;
    }
    taller
}

#[test]
fn left_left_case() {
    let tree = from_slice(&[30, 20, 10]);
    assert_eq!(values(tree.preorder()), [20, 10, 30]);
    assert_eq!(tree.rebalance_counts(), counts(1, 0, 0, 0));
}

#[test]
fn right_right_case() {
    let tree = from_slice(&[10, 20, 30]);
    assert_eq!(values(tree.preorder()), [20, 10, 30]);
    assert_eq!(tree.rebalance_counts(), counts(0, 1, 0, 0));
}

#[test]
fn left_right_case() {
    let tree = from_slice(&[30, 10, 20]);
    assert_eq!(values(tree.preorder()), [20, 10, 30]);
    assert_eq!(tree.rebalance_counts(), counts(0, 0, 1, 0));
}

#[test]
fn right_left_case() {
    let tree = from_slice(&[10, 30, 20]);
    assert_eq!(values(tree.preorder()), [20, 10, 30]);
    assert_eq!(tree.rebalance_counts(), counts(0, 0, 0, 1));
}

#[test]
fn rotation_below_the_root() {
    let mut tree = AvlTree::<i32>::new();
    for value in &[10, 20, 30, 40, 50, 25] {
        assert!(tree.insert(*value));
        assert!(tree.is_balanced());
        assert!(tree.heights_consistent());
    }
    //       30
    //      /  \
    //    20    40
    //   /  \     \
    //  10  25     50
    assert_eq!(values(tree.preorder()), [30, 20, 10, 25, 40, 50]);
    assert_eq!(values(tree.inorder()), [10, 20, 25, 30, 40, 50]);
    assert_eq!(values(tree.level_order()), [30, 20, 40, 10, 25, 50]);
    assert_eq!(tree.rebalance_counts(), counts(0, 2, 0, 1));
    assert_eq!(tree.rebalance_counts().total(), 3);
    assert_eq!(tree.height(), 2);
    assert!(tree.is_valid_bst());
}

#[test]
fn duplicates_are_rejected() {
    let mut tree = from_slice(&[10, 20, 30]);
    assert!(!tree.insert(20));
    assert!(!tree.insert(10));
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.rebalance_counts().total(), 1);
    assert!(tree.heights_consistent());
}

#[test]
fn height_stays_logarithmic() {
    let mut tree = AvlTree::<u32>::new();
    for n in 1..=1000 {
        tree.insert(n);
        let height = tree.height();
        assert!(
            tree.size() >= min_nodes(height),
            "height {} is too large for {} nodes",
            height,
            tree.size(),
        );
    }
    assert!(tree.is_balanced());
    assert!(tree.heights_consistent());
    assert_eq!(tree.height(), algorithms::height(&tree));
}

#[test]
fn ascending_input_builds_a_perfect_tree() {
    let tree: AvlTree<u32> = (1..=127).collect();
    assert_eq!(tree.height(), 6);
    assert_eq!(algorithms::count_leaves(&tree), 64);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), (1..=127).collect::<Vec<_>>());
}

#[test]
fn descending_and_zigzag_input() {
    let descending: AvlTree<i32> = (0..200).rev().collect();
    assert!(descending.is_balanced());
    assert!(descending.heights_consistent());
    assert!(descending.is_valid_bst());

    let zigzag: AvlTree<i32> = (0..100)
        .flat_map(|x| iter::once(x).chain(iter::once(199 - x)))
        .collect();
    assert_eq!(zigzag.size(), 200);
    assert!(zigzag.is_balanced());
    assert!(zigzag.heights_consistent());
    assert_eq!(zigzag.find_min(), Some(&0));
    assert_eq!(zigzag.find_max(), Some(&199));
}

#[test]
fn search_and_bounds() {
    let tree = from_slice(&[50, 30, 70, 20, 40, 60, 80]);
    assert!(tree.search(&60));
    assert!(tree.contains(&20));
    assert!(!tree.search(&65));
    assert_eq!(tree.find_min(), Some(&20));
    assert_eq!(tree.find_max(), Some(&80));
    // Already balanced, nothing to do
    assert_eq!(tree.rebalance_counts().total(), 0);
}

#[test]
fn empty_tree() {
    let tree = AvlTree::<i32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.find_min(), None);
    assert_eq!(tree.find_max(), None);
    assert!(!tree.search(&1));
    assert!(tree.is_balanced());
    assert!(tree.heights_consistent());
    assert!(tree.is_valid_bst());
    assert!(tree.levels().is_empty());
    assert_eq!(tree.to_string(), "(empty)\n");
}

#[test]
fn display() {
    let tree = from_slice(&[1, 2, 3, 4]);
    assert_eq!(tree.to_string(), "2\n  L: 1\n  R: 3\n    R: 4\n");
}
