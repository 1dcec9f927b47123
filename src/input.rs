//! Validating what the console hands us before it reaches the tree.

use std::io::BufRead;

use crate::error::{Error, Result};

/// Parses a search target, ignoring surrounding whitespace.
///
/// # Examples
///
/// ```
/// use midbst::parse_target;
///
/// assert_eq!(parse_target(" 7\n").unwrap(), 7);
/// assert!(parse_target("seven").is_err());
/// ```
pub fn parse_target(input: &str) -> Result<i64> {
    let input = input.trim();
    input.parse().map_err(|source| Error::InvalidTarget {
        input: input.to_string(),
        source,
    })
}

/// Number of integers in `[low, high]`. Zero when `low > high`.
pub fn range_size(low: i64, high: i64) -> u128 {
    if low > high {
        0
    } else {
        (i128::from(high) - i128::from(low)) as u128 + 1
    }
}

/// Fails with [`Error::RangeTooLarge`] if `[low, high]` holds more than
/// `limit` values.
pub fn check_range(low: i64, high: i64, limit: u128) -> Result<()> {
    let size = range_size(low, high);
    if size > limit {
        return Err(Error::RangeTooLarge { size, limit });
    }
    Ok(())
}

/// Reads the first whitespace-separated token from `reader` and parses it as
/// a search target. Blank lines before it are skipped and anything after it
/// is ignored. Running out of input is an [`Error::InvalidTarget`].
pub fn read_target<R: BufRead>(mut reader: R) -> Result<i64> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return parse_target("");
        }
        if let Some(token) = line.split_whitespace().next() {
            return parse_target(token);
        }
    }
}
