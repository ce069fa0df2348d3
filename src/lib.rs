//! Implements arena-allocated tree data structures and the classic algorithms which work on them: general trees, binary trees, binary search trees and AVL trees.
//!
//! # Overview
//! Every tree in this crate keeps its nodes in an "arena" — a backing storage, typically a [`Vec`] with reusable holes — and links nodes by their keys in that storage instead of by pointers. Ownership therefore flows strictly from the tree to its storage: a node is alive exactly as long as it occupies a slot, links to it are plain keys, and back-references (the parent key of a general tree node) can never keep anything alive or form a reference cycle.
//!
//! The trees:
//! - [`GeneralTree`] — any number of children per node, with parent back-references
//! - [`BinaryTree`] — at most two children per node, in a left and a right slot
//! - [`BinarySearchTree`] — a binary tree which keeps its values ordered; duplicates are rejected
//! - [`AvlTree`] — a search tree which rebalances itself on insertion, keeping its height logarithmic
//!
//! All of them implement [`Traversable`], and the traversals, metrics and checks they expose are the generic ones from [`traversal::algorithms`].
//!
//! # Storage
//! The trait used for defining the arena type is [`Storage`]. The only implementation shipped is [`SparseVec`], which is also the [`DefaultStorage`]: removing a node leaves a hole behind instead of shifting the other nodes, and holes are reused by later insertions.
//!
//! # Recursion
//! The recursive traversals (`preorder`, `inorder`, `postorder`), the balance check and AVL insertion recurse once per level of the tree. The balanced trees keep that logarithmic, but a plain [`BinarySearchTree`] fed sorted input degenerates into a list, so everything it needs on such a tree is a loop instead: `insert`, `search`, `delete`, `find_min`/`find_max`, `height`, `size`, `count_leaves` and the ordering check. For walking arbitrarily deep trees, use [`DepthFirstIter`] or [`InorderIter`].
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for some types. An allocator is always required.
//! - `general_tree`, `binary_tree`, `avl_tree` (**enabled by default**) — the respective tree modules.
//! - `search_tree` (**enabled by default**) — the binary search tree; implies `binary_tree`.
//! - `doc_cfg` — marks feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! # Logging
//! Structural edits are reported through the [`log`] facade: `trace` for insertions and removals, `debug` for AVL rebalancing. Nothing is printed unless the application installs a logger.
//!
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`log`]: https://docs.rs/log/*/log/ " "
//! [`GeneralTree`]: general_tree/struct.GeneralTree.html " "
//! [`BinaryTree`]: binary_tree/struct.BinaryTree.html " "
//! [`BinarySearchTree`]: search_tree/struct.BinarySearchTree.html " "
//! [`AvlTree`]: avl_tree/struct.AvlTree.html " "
//! [`Traversable`]: traversal/trait.Traversable.html " "
//! [`traversal::algorithms`]: traversal/algorithms/index.html " "
//! [`DepthFirstIter`]: traversal/struct.DepthFirstIter.html " "
//! [`InorderIter`]: traversal/struct.InorderIter.html " "
//! [`Storage`]: storage/trait.Storage.html " "
//! [`SparseVec`]: storage/struct.SparseVec.html " "
//! [`DefaultStorage`]: storage/type.DefaultStorage.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    // sick of this stupid lint, disabling
    // clippy::module_name_repetitions,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, DefaultStorage};

pub mod traversal;
pub use traversal::{Traversable, DepthFirstIter, InorderIter, Dump};

#[cfg(feature = "general_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "general_tree")))]
pub mod general_tree;
#[cfg(feature = "general_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "general_tree")))]
pub use general_tree::GeneralTree;

#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub mod binary_tree;
#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub use binary_tree::BinaryTree;

#[cfg(feature = "search_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "search_tree")))]
pub mod search_tree;
#[cfg(feature = "search_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "search_tree")))]
pub use search_tree::BinarySearchTree;

#[cfg(feature = "avl_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "avl_tree")))]
pub mod avl_tree;
#[cfg(feature = "avl_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "avl_tree")))]
pub use avl_tree::AvlTree;

/// A prelude for using Arbor, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        SparseVec as SparseTreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::traversal::Traversable;
    #[cfg(feature = "general_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "general_tree")))]
    #[doc(no_inline)]
    pub use crate::general_tree::{
        GeneralTree,
        NodeRef as GeneralTreeNodeRef,
        NodeRefMut as GeneralTreeNodeRefMut,
    };
    #[cfg(feature = "binary_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
    #[doc(no_inline)]
    pub use crate::binary_tree::{
        BinaryTree,
        NodeRef as BinaryTreeNodeRef,
        NodeRefMut as BinaryTreeNodeRefMut,
    };
    #[cfg(feature = "search_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "search_tree")))]
    #[doc(no_inline)]
    pub use crate::search_tree::BinarySearchTree;
    #[cfg(feature = "avl_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "avl_tree")))]
    #[doc(no_inline)]
    pub use crate::avl_tree::AvlTree;
}
