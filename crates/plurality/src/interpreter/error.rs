//! Error types for variant selection and substitution.

use thiserror::Error;

use crate::parser::ParseError;

/// An error that occurred while choosing a variant or substituting placeholders.
#[derive(Debug, Error)]
pub enum PluralError {
    /// An explicit rule or interval argument is not a valid interval.
    #[error(transparent)]
    InvalidInterval(#[from] ParseError),

    /// The count is not a finite integer.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The plural form index points past the last variant.
    #[error(
        "plural form {index} for locale '{locale}' is out of range, message has {available} variants"
    )]
    MissingVariant {
        index: usize,
        available: usize,
        locale: String,
    },

    /// A placeholder name could not be compiled into a matcher.
    #[error("invalid placeholder ':{key}': {source}")]
    Replacement {
        key: String,
        #[source]
        source: regex::Error,
    },
}

/// Convert a floating-point count to the integer the engine works with.
///
/// # Errors
///
/// Returns [`PluralError::InvalidArgument`] for NaN, infinities, values with a
/// fractional part, and values outside the `i64` range.
///
/// # Examples
///
/// ```
/// use plurality::integer_count;
///
/// assert_eq!(integer_count(3.0).unwrap(), 3);
/// assert!(integer_count(f64::NAN).is_err());
/// assert!(integer_count(2.5).is_err());
/// ```
pub fn integer_count(value: f64) -> Result<i64, PluralError> {
    if !value.is_finite() {
        return Err(PluralError::InvalidArgument {
            message: format!("count must be finite, got {value}"),
        });
    }
    if value.fract() != 0.0 {
        return Err(PluralError::InvalidArgument {
            message: format!("count must be an integer, got {value}"),
        });
    }
    // i64::MAX is not representable as f64; 2^63 is the first value out of range.
    if value < -9_223_372_036_854_775_808.0 || value >= 9_223_372_036_854_775_808.0 {
        return Err(PluralError::InvalidArgument {
            message: format!("count {value} is out of range"),
        });
    }
    Ok(value as i64)
}
