//! Drawing a [`Tree`] as indented text.
//!
//! Every node gets one line. Children follow their parent, left before right,
//! and are drawn with the usual tree glyphs:
//!
//! ```text
//! └── 5
//!     ├── 2
//!     │   ├── 0
//!     │   │   └── 1
//!     │   └── 3
//!     │       └── 4
//!     └── 8
//!         ├── 6
//!         │   └── 7
//!         └── 9
//!             └── 10
//! ```

use std::fmt;

use crate::tree::Tree;

/// Branch marker for a child with a sibling drawn after it.
const BRANCH: &str = "├── ";
/// Branch marker for the last child drawn under its parent (and the root).
const LAST_BRANCH: &str = "└── ";
/// Indentation under an ancestor that has more siblings after it.
const PIPE: &str = "│   ";
/// Indentation under an ancestor that was the last of its siblings.
const SPACE: &str = "    ";

/// Renders `tree` as one line per node in pre-order. An empty tree renders
/// as no lines.
///
/// # Examples
///
/// ```
/// use midbst::{render, Tree};
///
/// let lines = render(&Tree::build(1, 3));
///
/// assert_eq!(lines, vec!["└── 2", "    ├── 1", "    └── 3"]);
/// ```
pub fn render(tree: &Tree) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(tree, "", true, &mut lines);
    lines
}

fn render_into(tree: &Tree, indent: &str, is_last: bool, lines: &mut Vec<String>) {
    let n = match tree {
        Tree::Leaf => return,
        Tree::Node(n) => n,
    };

    let marker = if is_last { LAST_BRANCH } else { BRANCH };
    lines.push(format!("{}{}{}", indent, marker, n.value()));

    let child_indent = format!("{}{}", indent, if is_last { SPACE } else { PIPE });
    // The left child is only "last" when there's no right child to follow it.
    render_into(n.left(), &child_indent, n.right().is_empty(), lines);
    render_into(n.right(), &child_indent, true, lines);
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in render(self).iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
