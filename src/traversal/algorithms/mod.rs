//! Ubiquitous algorithms for trees, implemented once for every [`Traversable`].
//!
//! This includes:
//! - Depth-first traversals: [`preorder`], [`inorder`], [`postorder`]
//! - Breadth-first traversals: [`breadth_first`], [`levels`]
//! - Structural metrics: [`height`], [`size`], [`count_leaves`], [`is_height_balanced`]
//! - Search: [`find`]
//! - Ordering checks for search trees: [`is_ordered`], [`is_ordered_within`]
//!
//! All traversals are eager: they return a fully materialized `Vec` whose order is fully determined by the shape of the tree and the order of child slots. None of them mutate the tree. The depth-first ones recurse once per level of the tree; use [`DepthFirstIter`] where the height of the tree is not under control.
//!
//! [`Traversable`]: ../trait.Traversable.html " "
//! [`DepthFirstIter`]: ../struct.DepthFirstIter.html " "
//! [`preorder`]: fn.preorder.html " "
//! [`inorder`]: fn.inorder.html " "
//! [`postorder`]: fn.postorder.html " "
//! [`breadth_first`]: fn.breadth_first.html " "
//! [`levels`]: fn.levels.html " "
//! [`height`]: fn.height.html " "
//! [`size`]: fn.size.html " "
//! [`count_leaves`]: fn.count_leaves.html " "
//! [`is_height_balanced`]: fn.is_height_balanced.html " "
//! [`find`]: fn.find.html " "
//! [`is_ordered`]: fn.is_ordered.html " "
//! [`is_ordered_within`]: fn.is_ordered_within.html " "

mod breadth_first;
mod depth_first;
mod metrics;
mod ordering;

pub use breadth_first::*;
pub use depth_first::*;
pub use metrics::*;
pub use ordering::*;
