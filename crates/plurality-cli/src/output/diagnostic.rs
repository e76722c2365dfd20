//! Miette diagnostic wrapper for interval parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use plurality::ParseError;
use thiserror::Error;

/// A miette-compatible diagnostic for malformed intervals.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid interval: {message}")]
#[diagnostic(
    code(plurality::interval),
    help("intervals look like {{1,2,3}}, [1,+Inf[ or ]-Inf,0]")
)]
pub struct IntervalDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl IntervalDiagnostic {
    /// Create a diagnostic from a ParseError, naming where the interval came from.
    pub fn from_parse_error(origin: &str, err: &ParseError) -> Self {
        let ParseError::InvalidInterval {
            interval,
            column,
            message,
        } = err;

        // Convert the 1-based char column to a byte offset.
        let offset = interval
            .char_indices()
            .nth(column.saturating_sub(1))
            .map_or(interval.len(), |(offset, _)| offset);

        IntervalDiagnostic {
            src: NamedSource::new(origin, interval.clone()),
            span: (offset, 1).into(),
            message: message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plurality::parse_interval;

    #[test]
    fn span_points_at_column() {
        let err = parse_interval("[1,x]").unwrap_err();
        let diagnostic = IntervalDiagnostic::from_parse_error("<arg>", &err);
        assert_eq!(diagnostic.span.offset(), 3);
    }

    #[test]
    fn span_handles_multibyte_prefix() {
        // U+3000 is three bytes of leading whitespace.
        let err = parse_interval("\u{3000}{1}x").unwrap_err();
        let diagnostic = IntervalDiagnostic::from_parse_error("<arg>", &err);
        assert_eq!(diagnostic.span.offset(), 6);
    }
}
