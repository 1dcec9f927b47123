//! Errors raised while turning console input into a tree and a target.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from feeding input to the tree.
#[derive(Debug, Error)]
pub enum Error {
    /// The target typed at the console isn't an integer.
    #[error("invalid target {input:?}: expected an integer")]
    InvalidTarget {
        /// What was actually read, without surrounding whitespace.
        input: String,
        /// Why it didn't parse.
        #[source]
        source: std::num::ParseIntError,
    },

    /// The requested range would build more nodes than allowed.
    #[error("range holds {size} values, more than the limit of {limit}")]
    RangeTooLarge {
        /// Number of integers in the range.
        size: u128,
        /// The configured maximum.
        limit: u128,
    },

    /// Reading the console failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
