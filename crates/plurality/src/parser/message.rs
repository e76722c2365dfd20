//! Message template splitter.
//!
//! A template is a list of variants separated by `|`:
//!
//! ```text
//! {0} no apples|{1} one apple|[2,Inf] :count apples
//! apple|apples
//! ```
//!
//! Each variant is trimmed. A variant containing an interval expression
//! carries an explicit rule: the token before the first whitespace is the
//! rule, the rest is the variant text with each whitespace character
//! turned into a space.

use super::ast::{Split, Variant};
use super::interval::contains_interval;

/// Split a template into its variants.
///
/// Returns [`Split::Passthrough`] when the template has no `|`; such a
/// template is used verbatim and never goes through rule or plural
/// selection.
pub fn split_message(template: &str) -> Split {
    if !template.contains('|') {
        return Split::Passthrough;
    }
    Split::Variants(template.split('|').map(split_variant).collect())
}

/// Trim a piece and strip its explicit rule prefix, if any.
fn split_variant(piece: &str) -> Variant {
    let piece = piece.trim();
    if !contains_interval(piece) {
        return Variant::plain(piece);
    }
    match piece.split_once(char::is_whitespace) {
        Some((rule, text)) => Variant::ruled(rule, spaces_only(text.trim_start())),
        None => Variant::ruled(piece, ""),
    }
}

fn spaces_only(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}
