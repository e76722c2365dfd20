//! Interval membership tests.

use crate::parser::{ParseError, parse_interval};

/// Test whether `count` falls inside the interval written in `interval`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidInterval`] when `interval` is malformed. This is
/// a hard failure, not a "no match".
///
/// # Examples
///
/// ```
/// use plurality::test_interval;
///
/// assert!(test_interval(2, "{1,2,3}").unwrap());
/// assert!(test_interval(5, "]0,10[").unwrap());
/// assert!(!test_interval(10, "]0,10[").unwrap());
/// assert!(test_interval(-40, "[*,0]").unwrap());
/// assert!(test_interval(1, "1 to 5").is_err());
/// ```
pub fn test_interval(count: i64, interval: &str) -> Result<bool, ParseError> {
    Ok(parse_interval(interval)?.contains(count))
}
