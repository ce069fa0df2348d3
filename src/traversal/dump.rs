use core::fmt::{self, Formatter, Display};
use super::Traversable;

/// A `Display` adapter printing a depth-indented listing of a tree, one node per line.
///
/// Every nesting level adds two spaces of indentation. For trees which name their child slots, each child is prefixed with the name of the slot it occupies (`L: `/`R: ` for binary trees), so a lone child is never mistaken for its missing sibling. The exact layout is meant for humans and is not guaranteed to stay the same between versions.
#[derive(Debug)]
pub struct Dump<'a, T>(pub &'a T);
impl<T> Display for Dump<'_, T>
where
    T: Traversable,
    T::Value: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0.cursor_to_root() {
            Some(root) => write_node(self.0, &root, None, 0, f),
            None => f.write_str("(empty)\n"),
        }
    }
}

fn write_node<T>(
    tree: &T,
    cursor: &T::Cursor,
    slot_name: Option<&str>,
    depth: usize,
    f: &mut Formatter<'_>,
) -> fmt::Result
where
    T: Traversable,
    T::Value: Display,
{
    for _ in 0..depth {
        f.write_str("  ")?;
    }
    if let Some(name) = slot_name {
        write!(f, "{}: ", name)?;
    }
    writeln!(f, "{}", tree.value_of(cursor))?;
    for child_num in 0..tree.num_children_of(cursor) {
        if let Some(child) = tree.nth_child_of(cursor, child_num) {
            let name = T::SLOT_NAMES.get(child_num).copied();
            write_node(tree, &child, name, depth + 1, f)?;
        }
    }
    Ok(())
}
