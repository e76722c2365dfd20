//! Parse error types for interval expressions.

use thiserror::Error;

/// An error that occurred while parsing an interval expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text is not a set (`{1,2,3}`) or a range (`[1,+Inf[`).
    #[error("invalid interval '{interval}' at column {column}: {message}")]
    InvalidInterval {
        interval: String,
        column: usize,
        message: String,
    },
}

impl ParseError {
    /// The interval text that failed to parse.
    pub fn interval(&self) -> &str {
        match self {
            ParseError::InvalidInterval { interval, .. } => interval,
        }
    }

    /// 1-based character column where parsing stopped.
    pub fn column(&self) -> usize {
        match self {
            ParseError::InvalidInterval { column, .. } => *column,
        }
    }
}
