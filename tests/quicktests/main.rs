//! Property tests for building, searching, and drawing trees.

mod range;
mod render;
mod tree;

pub(crate) use range::SmallRange;
