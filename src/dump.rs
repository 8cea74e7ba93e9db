//! Debug dump of a node graph. Diagnostic output only, the format may
//! change between releases.

use std::fmt::{self, Write};

use crate::node::Node;

/// Render the tree rooted at `root` in pre-order, one node per line,
/// indented by depth. Each line shows the link color (`B` or `R`)
/// followed by the item, empty links show as `nil`.
pub fn print_tree<T>(root: Option<&Node<T>>) -> String
where
    T: fmt::Debug,
{
    let mut out = String::new();
    // writing into a String never fails.
    do_print(root, 0, &mut out).ok();
    out
}

fn do_print<T>(node: Option<&Node<T>>, depth: usize, out: &mut String) -> fmt::Result
where
    T: fmt::Debug,
{
    let indent = "  ".repeat(depth);
    match node {
        None => writeln!(out, "{}nil", indent),
        Some(node) => {
            let color = if node.is_black() { "B" } else { "R" };
            writeln!(out, "{}{} {:?}", indent, color, node.item())?;
            do_print(node.left(), depth + 1, out)?;
            do_print(node.right(), depth + 1, out)
        }
    }
}

#[cfg(test)]
mod dump_test {
    use super::*;

    #[test]
    fn test_print_tree() {
        assert_eq!(print_tree::<i64>(None), "nil\n");

        let mut root = Node::new(2_i64, true);
        root.set_left(Some(Node::new(1, false)));
        let out = print_tree(Some(&*root));
        assert_eq!(out, "B 2\n  R 1\n    nil\n    nil\n  nil\n");
    }
}
