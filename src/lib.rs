//! A balanced Binary Search Tree built from a range of integers, plus tools
//! to look inside it.
//!
//! ## Balanced-by-midpoint construction
//!
//! A Binary Search Tree keeps, for every `Node`, smaller values in its left
//! subtree and larger values in its right subtree. Searching takes
//! `O(height)` so the shape of the tree matters. Most BSTs rotate nodes after
//! inserts to keep the height down. When every value is known up front,
//! there's a simpler way: make the middle value the root, then do the same
//! for the lower half (the left subtree) and the upper half (the right
//! subtree). The result has height `⌈lg(N + 1)⌉` for `N` values and never
//! needs rebalancing, because it never changes.
//!
//! This crate builds such a tree over `[low, high]` ([`Tree::build`]), records
//! the path a search takes through it ([`Tree::trace`]), and draws it
//! ([`render`]).
//!
//! ```
//! use midbst::{render, Tree};
//!
//! let tree = Tree::build(0, 10);
//!
//! assert_eq!(render(&tree).len(), 11);
//! assert_eq!(tree.trace(8).visited(), &[5, 8]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod input;
pub mod render;
pub mod trace;
pub mod tree;

pub use error::{Error, Result};
pub use input::{check_range, parse_target, range_size, read_target};
pub use render::render;
pub use trace::{trace, Outcome, Trace};
pub use tree::{build, Node, Tree};
