//! Placeholder substitution.
//!
//! Placeholders are written `:name` and matched case-insensitively. The case
//! of the placeholder token decides the case of the inserted value:
//!
//! ```text
//! :name  -> ana
//! :Name  -> Ana
//! :NAME  -> ANA
//! ```

use regex::{Captures, RegexBuilder};
use tracing::trace;

use crate::interpreter::PluralError;
use crate::types::Replacements;

/// Replace every `:name` placeholder in `text`.
///
/// Names are applied longest first, so `:count` is never consumed by a
/// shorter `:c` replacement. Each name rewrites the output of the previous
/// ones.
///
/// # Errors
///
/// Returns [`PluralError::Replacement`] if a name cannot be compiled into a
/// pattern.
///
/// # Example
///
/// ```
/// use plurality::{apply_replacements, replacements};
///
/// let text = apply_replacements("Hello :Name", &replacements! { "name" => "ana" }).unwrap();
/// assert_eq!(text, "Hello Ana");
/// ```
pub fn apply_replacements(text: &str, replacements: &Replacements) -> Result<String, PluralError> {
    let mut message = text.to_string();
    for (key, value) in replacements.longest_first() {
        let pattern = RegexBuilder::new(&format!(":{}", regex::escape(key)))
            .case_insensitive(true)
            .build()
            .map_err(|source| PluralError::Replacement {
                key: key.to_string(),
                source,
            })?;
        let value = value.to_string();
        trace!(placeholder = key, "applying replacement");
        message = pattern
            .replace_all(&message, |caps: &Captures<'_>| match_case(&caps[0], &value))
            .into_owned();
    }
    Ok(message)
}

/// Apply the case style of `token` to `value`.
fn match_case(token: &str, value: &str) -> String {
    if token == token.to_uppercase() {
        return value.to_uppercase();
    }
    if token == capitalize_first_word_char(token) {
        return capitalize(value);
    }
    value.to_string()
}

/// Uppercase the first ASCII word character (`[A-Za-z0-9_]`) of `token`.
fn capitalize_first_word_char(token: &str) -> String {
    match token.find(|c: char| c.is_ascii_alphanumeric() || c == '_') {
        Some(pos) => {
            let (head, tail) = token.split_at(pos);
            let mut out = String::with_capacity(token.len());
            out.push_str(head);
            out.push_str(&capitalize(tail));
            out
        }
        None => token.to_string(),
    }
}

/// Uppercase the first character of `value`.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
