//! Recording the path a search takes through a [`Tree`].
//!
//! # Examples
//!
//! ```
//! use midbst::{Outcome, Tree};
//!
//! let tree = Tree::build(0, 10);
//!
//! let hit = tree.trace(9);
//! assert_eq!(hit.visited(), &[5, 8, 9]);
//! assert_eq!(hit.outcome(), Outcome::Found);
//!
//! let miss = tree.trace(11);
//! assert_eq!(miss.visited(), &[5, 8, 9, 10]);
//! assert_eq!(miss.outcome(), Outcome::NotFound);
//! ```

use std::cmp::Ordering;

use crate::tree::Tree;

/// How a search ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The last visited node holds the target.
    Found,
    /// The search fell off the bottom of the tree.
    NotFound,
}

/// The nodes visited while searching for a target, in visiting order, and
/// whether the target was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    target: i64,
    visited: Vec<i64>,
    outcome: Outcome,
}

/// Follows the search path for `target` from the root of `tree`.
///
/// See [`Tree::trace`].
pub fn trace(tree: &Tree, target: i64) -> Trace {
    tree.trace(target)
}

impl Tree {
    /// Follows the search path for `target` from the root, recording every
    /// node visited. Visits at most [`height`][Tree::height] nodes.
    pub fn trace(&self, target: i64) -> Trace {
        let mut visited = Vec::new();
        let mut curr = self;

        while let Tree::Node(n) = curr {
            tracing::trace!(value = n.value(), target, "checking node");
            visited.push(n.value());

            curr = match target.cmp(&n.value()) {
                Ordering::Less => n.left(),
                Ordering::Equal => {
                    return Trace {
                        target,
                        visited,
                        outcome: Outcome::Found,
                    }
                }
                Ordering::Greater => n.right(),
            };
        }

        Trace {
            target,
            visited,
            outcome: Outcome::NotFound,
        }
    }
}

impl Trace {
    /// The value that was searched for.
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Values of the visited nodes, root first.
    pub fn visited(&self) -> &[i64] {
        &self.visited
    }

    /// How the search ended.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns `true` if the target was found.
    pub fn found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// The number of nodes visited.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Returns `true` if no node was visited, i.e. the tree was empty.
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// The console transcript of this search: a `Checking: V` line per visited
    /// node followed by `Target Found!` on a hit. A miss adds nothing unless
    /// `report_miss` is set.
    pub fn lines(&self, report_miss: bool) -> Vec<String> {
        let mut lines: Vec<String> = self
            .visited
            .iter()
            .map(|value| format!("Checking: {}", value))
            .collect();

        match self.outcome {
            Outcome::Found => lines.push("Target Found!".to_string()),
            Outcome::NotFound if report_miss => lines.push("Target Not Found.".to_string()),
            Outcome::NotFound => {}
        }

        lines
    }
}
