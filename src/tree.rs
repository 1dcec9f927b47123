//! A balanced BST built once from a contiguous range of integers.
//!
//! The midpoint of the range becomes the root, the lower half becomes the
//! left subtree and the upper half becomes the right subtree. Applying that
//! recursively yields a tree that is balanced without ever rotating a node.
//! Once built, the tree is never modified.
//!
//! # Examples
//!
//! ```
//! use midbst::Tree;
//!
//! let tree = Tree::build(0, 10);
//!
//! assert_eq!(tree.len(), 11);
//! assert_eq!(tree.height(), 4);
//! assert_eq!(tree.root().map(|n| n.value()), Some(5));
//!
//! // Values come back out in sorted order.
//! assert!(tree.iter().eq(0..=10));
//!
//! // An inverted range is just an empty tree.
//! assert!(Tree::build(3, 2).is_empty());
//! ```

use std::cmp::Ordering;
use std::ops::RangeInclusive;

/// A Binary Search Tree over `i64` values built by midpoint splitting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A `Node` holding a value and two children (which are both `Tree`s).
    Node(Node),
}

/// One element of a [`Tree`]. Its value is the midpoint of the range the
/// node was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    value: i64,
    left: Box<Tree>,
    right: Box<Tree>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl From<RangeInclusive<i64>> for Tree {
    fn from(range: RangeInclusive<i64>) -> Self {
        Self::build(*range.start(), *range.end())
    }
}

/// Builds a balanced tree containing every integer in `[low, high]`.
///
/// See [`Tree::build`].
pub fn build(low: i64, high: i64) -> Tree {
    Tree::build(low, high)
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Builds a balanced tree containing every integer in `[low, high]`
    /// exactly once. If `low > high` the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use midbst::Tree;
    ///
    /// let tree = Tree::build(0, 10);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.value(), 5);
    /// assert_eq!(root.left().root().map(|n| n.value()), Some(2));
    /// assert_eq!(root.right().root().map(|n| n.value()), Some(8));
    /// ```
    pub fn build(low: i64, high: i64) -> Self {
        let tree = Self::build_range(low, high);
        tracing::debug!(low, high, nodes = tree.len(), "built tree");
        tree
    }

    fn build_range(low: i64, high: i64) -> Self {
        if low > high {
            return Self::Leaf;
        }

        let mid = midpoint(low, high);
        // `mid - 1` only overflows when `mid == low == i64::MIN`, in which case
        // the left range is empty anyway. Same for `mid + 1` on the right.
        let left = match mid.checked_sub(1) {
            Some(upper) => Self::build_range(low, upper),
            None => Self::Leaf,
        };
        let right = match mid.checked_add(1) {
            Some(lower) => Self::build_range(lower, high),
            None => Self::Leaf,
        };

        Self::Node(Node {
            value: mid,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n),
        }
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Gets the height of this tree. An empty tree has a height of 0 and a
    /// single node has a height of 1.
    pub fn height(&self) -> usize {
        // Floor midpoints leave the right half at least as large as the left,
        // so the right spine is always a longest path.
        let mut height = 0;
        let mut curr = self;
        while let Self::Node(n) = curr {
            height += 1;
            curr = &n.right;
        }
        height
    }

    /// Returns `true` if `value` is stored in the tree.
    pub fn contains(&self, value: i64) -> bool {
        let mut curr = self;
        while let Self::Node(n) = curr {
            curr = match value.cmp(&n.value) {
                Ordering::Less => &n.left,
                Ordering::Equal => return true,
                Ordering::Greater => &n.right,
            };
        }

        false
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<i64> {
        let mut curr = self.root()?;
        while let Self::Node(n) = curr.left.as_ref() {
            curr = n;
        }
        Some(curr.value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<i64> {
        let mut curr = self.root()?;
        while let Self::Node(n) = curr.right.as_ref() {
            curr = n;
        }
        Some(curr.value)
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self);
        iter
    }
}

impl Node {
    /// The value stored in this node.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The subtree holding every value smaller than this node's.
    pub fn left(&self) -> &Tree {
        &self.left
    }

    /// The subtree holding every value larger than this node's.
    pub fn right(&self) -> &Tree {
        &self.right
    }
}

/// Floor of `(low + high) / 2` without overflowing.
fn midpoint(low: i64, high: i64) -> i64 {
    // Both halves are floored, so the only thing lost is the carry when both
    // are odd.
    low.div_euclid(2) + high.div_euclid(2) + (low.rem_euclid(2) + high.rem_euclid(2)) / 2
}

/// In-order iterator over a [`Tree`]. Created by [`Tree::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut tree: &'a Tree) {
        while let Tree::Node(n) = tree {
            self.stack.push(n);
            tree = &n.left;
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(node.value)
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
