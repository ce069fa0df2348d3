use super::*;
use alloc::string::ToString;
use pretty_assertions::assert_eq;

//       a
//     / | \
//    b  c  d
//   / \    |
//  e   f   g
fn sample() -> (GeneralTree<char>, [usize; 7]) {
    let mut tree = GeneralTree::with_root('a');
    let a = tree.root().map(NodeRef::into_key).expect("tree has a root");
    let b = tree.try_push_child(&a, 'b').unwrap();
    let c = tree.try_push_child(&a, 'c').unwrap();
    let d = tree.try_push_child(&a, 'd').unwrap();
    let e = tree.try_push_child(&b, 'e').unwrap();
    let f = tree.try_push_child(&b, 'f').unwrap();
    let g = tree.try_push_child(&d, 'g').unwrap();
    (tree, [a, b, c, d, e, f, g])
}

fn chars(values: Vec<&char>) -> Vec<char> {
    values.into_iter().copied().collect()
}

#[test]
fn traversals() {
    let (tree, _) = sample();
    assert_eq!(chars(tree.dfs_traversal()), ['a', 'b', 'e', 'f', 'c', 'd', 'g']);
    assert_eq!(chars(tree.bfs_traversal()), ['a', 'b', 'c', 'd', 'e', 'f', 'g']);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), chars(tree.dfs_traversal()));

    let levels = tree.level_order_traversal();
    assert_eq!(levels.keys().copied().collect::<Vec<_>>(), [0, 1, 2]);
    assert_eq!(chars(levels[&1].clone()), ['b', 'c', 'd']);
    assert_eq!(chars(levels[&2].clone()), ['e', 'f', 'g']);
}

#[test]
fn metrics() {
    let (tree, _) = sample();
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.size(), 7);
    assert_eq!(tree.size(), algorithms::size(&tree));
    assert_eq!(tree.count_leaves(), 4);
    assert!(!tree.is_empty());

    let lone = GeneralTree::<_>::with_root(0);
    assert_eq!(lone.height(), 0);
    assert_eq!(lone.count_leaves(), 1);
}

#[test]
fn empty_tree() {
    let tree = GeneralTree::<u8>::new();
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert_eq!(tree.height(), -1);
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.count_leaves(), 0);
    assert!(tree.dfs_traversal().is_empty());
    assert!(tree.bfs_traversal().is_empty());
    assert!(tree.level_order_traversal().is_empty());
    assert_eq!(tree.to_string(), "(empty)\n");
}

#[test]
fn navigation() {
    let (tree, [a, b, c, d, e, _, g]) = sample();
    let root = tree.root().unwrap();
    assert!(root.is_root());
    assert_eq!(root.depth(), 0);
    assert!(root.parent().is_none());
    assert!(root.prev_sibling().is_none());
    assert_eq!(root.num_children(), 3);
    assert_eq!(
        root.children().map(|x| *x.value()).collect::<Vec<_>>(),
        ['b', 'c', 'd'],
    );
    assert_eq!(root.first_child().map(NodeRef::into_key), Some(b));
    assert_eq!(root.last_child().map(NodeRef::into_key), Some(d));

    let c_ref = tree.get(&c).unwrap();
    assert!(c_ref.is_leaf());
    assert_eq!(c_ref.prev_sibling().map(NodeRef::into_key), Some(b));
    assert_eq!(c_ref.next_sibling().map(NodeRef::into_key), Some(d));
    assert!(tree.get(&d).unwrap().next_sibling().is_none());

    let g_ref = tree.get(&g).unwrap();
    assert_eq!(g_ref.depth(), 2);
    assert_eq!(g_ref.parent().and_then(|x| x.parent()).map(NodeRef::into_key), Some(a));
    assert_eq!(*tree.get(&e).unwrap().parent().unwrap().value(), 'b');
}

#[test]
fn find_by_value() {
    let (tree, [_, _, _, _, _, f, _]) = sample();
    assert_eq!(tree.find(&'f').map(NodeRef::into_key), Some(f));
    assert!(tree.find(&'z').is_none());
}

#[test]
fn push_to_missing_parent_returns_value() {
    let (mut tree, _) = sample();
    let err = tree.try_push_child(&100, 'x').unwrap_err();
    assert_eq!(err.child_payload, 'x');
    assert_eq!(tree.size(), 7);
}

#[test]
fn mutation_through_node_ref() {
    let (mut tree, [_, b, ..]) = sample();
    let mut node = tree.get_mut(&b).unwrap();
    *node.value_mut() = 'B';
    node.insert_child(1, 'x');
    assert_eq!(node.num_children(), 3);
    let root = node.into_parent().unwrap();
    assert_eq!(*root.value(), 'a');
    let third = root.child_mut(2).unwrap();
    *third.into_value_mut() = 'D';
    assert_eq!(chars(tree.dfs_traversal()), ['a', 'B', 'e', 'x', 'f', 'c', 'D', 'g']);

    let mut root = tree.root_mut().unwrap();
    assert_eq!(root.remove_child(0), Some('B'));
    assert_eq!(root.remove_child(10), None);
    assert_eq!(chars(tree.dfs_traversal()), ['a', 'c', 'D', 'g']);
    assert!(tree.root_mut().unwrap().child_mut(2).is_none());
}

#[test]
#[should_panic]
fn insert_child_out_of_bounds() {
    let (mut tree, [_, _, c, ..]) = sample();
    tree.get_mut(&c).unwrap().insert_child(1, 'x');
}

#[test]
fn remove_subtree_reuses_holes() {
    let (mut tree, [_, b, ..]) = sample();
    assert_eq!(tree.remove_subtree(&b), Some('b'));
    assert_eq!(tree.size(), 4);
    assert_eq!(tree.num_holes(), 3);
    assert!(tree.get(&b).is_none());
    assert_eq!(tree.remove_subtree(&b), None);

    let root = tree.root().unwrap().into_key();
    tree.try_push_child(&root, 'z').unwrap();
    assert_eq!(tree.num_holes(), 2);
    assert_eq!(chars(tree.dfs_traversal()), ['a', 'c', 'd', 'g', 'z']);
}

#[test]
fn removed_keys_are_handed_out_again() {
    let (mut tree, [a, b, c, ..]) = sample();
    tree.remove_subtree(&b);
    // The first freed slot is the first one to be filled
    let z = tree.try_push_child(&c, 'z').unwrap();
    assert_eq!(z, b);
    // The stale key now addresses the new node, so pushing through it lands under `z`
    tree.try_push_child(&b, 'y').unwrap();
    assert_eq!(*tree.get(&b).unwrap().value(), 'z');
    assert_eq!(tree.get(&b).unwrap().parent().map(NodeRef::into_key), Some(c));
    assert_eq!(chars(tree.dfs_traversal()), ['a', 'c', 'z', 'y', 'd', 'g']);
    assert_eq!(tree.root().map(NodeRef::into_key), Some(a));
}

#[test]
fn removing_root_empties_tree() {
    let (mut tree, [a, ..]) = sample();
    assert_eq!(tree.remove_subtree(&a), Some('a'));
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.height(), -1);
}

#[test]
fn set_root_discards_existing_nodes() {
    let (mut tree, _) = sample();
    let root = tree.set_root('r');
    assert_eq!(tree.size(), 1);
    assert_eq!(tree.root().map(NodeRef::into_key), Some(root));
    assert_eq!(chars(tree.dfs_traversal()), ['r']);
}

#[test]
fn display_lists_children_by_depth() {
    let (tree, _) = sample();
    assert_eq!(tree.to_string(), "a\n  b\n    e\n    f\n  c\n  d\n    g\n");
}

#[test]
fn error_message() {
    let err = TryPushError { child_payload: () };
    assert_eq!(err.to_string(), "the parent key does not point to a node of the tree");
}
