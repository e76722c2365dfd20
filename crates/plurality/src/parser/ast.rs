//! Public AST types for message templates and interval expressions.
//!
//! These types are public to enable external tooling (linters, catalog checkers, etc.).

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// A parsed interval expression.
///
/// ```text
/// {1,2,3}     finite set
/// [1,+Inf[    range: left inclusive, right exclusive
/// ]-Inf,0]    range: left exclusive, right inclusive
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Interval {
    /// A finite list of integers.
    Set { items: Vec<i64> },
    /// A bounded or unbounded range.
    Range {
        left_delimiter: Delimiter,
        left: Bound,
        right: Bound,
        right_delimiter: Delimiter,
    },
}

/// Whether a range endpoint belongs to the range.
///
/// On the left `[` is inclusive and `]` is exclusive; on the right it is
/// the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    Inclusive,
    Exclusive,
}

/// A range endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    NegativeInfinity,
    PositiveInfinity,
    Finite(i64),
}

impl Bound {
    /// Orders `count` relative to this bound.
    fn compare(self, count: i64) -> Ordering {
        match self {
            Bound::NegativeInfinity => Ordering::Greater,
            Bound::PositiveInfinity => Ordering::Less,
            Bound::Finite(n) => count.cmp(&n),
        }
    }
}

impl Interval {
    /// Tests whether `count` falls inside this interval.
    pub fn contains(&self, count: i64) -> bool {
        match self {
            Interval::Set { items } => items.contains(&count),
            Interval::Range {
                left_delimiter,
                left,
                right,
                right_delimiter,
            } => {
                let above = match left_delimiter {
                    Delimiter::Inclusive => left.compare(count) != Ordering::Less,
                    Delimiter::Exclusive => left.compare(count) == Ordering::Greater,
                };
                let below = match right_delimiter {
                    Delimiter::Inclusive => right.compare(count) != Ordering::Greater,
                    Delimiter::Exclusive => right.compare(count) == Ordering::Less,
                };
                above && below
            }
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::NegativeInfinity => write!(f, "-Inf"),
            Bound::PositiveInfinity => write!(f, "+Inf"),
            Bound::Finite(n) => write!(f, "{n}"),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interval::Set { items } => {
                let items: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "{{{}}}", items.join(","))
            }
            Interval::Range {
                left_delimiter,
                left,
                right,
                right_delimiter,
            } => {
                let open = match left_delimiter {
                    Delimiter::Inclusive => '[',
                    Delimiter::Exclusive => ']',
                };
                let close = match right_delimiter {
                    Delimiter::Inclusive => ']',
                    Delimiter::Exclusive => '[',
                };
                write!(f, "{open}{left},{right}{close}")
            }
        }
    }
}

/// The result of splitting a message template on `|`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "variants", rename_all = "snake_case")]
pub enum Split {
    /// The template has no `|` and is used verbatim.
    Passthrough,
    /// Trimmed variants in template order.
    Variants(Vec<Variant>),
}

/// One `|`-separated piece of a message template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    /// Explicit rule token (unparsed), e.g. `{0}` or `[2,Inf]`.
    pub rule: Option<String>,
    /// Variant text with the rule prefix removed.
    pub text: String,
}

impl Variant {
    /// Creates a variant without an explicit rule.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            rule: None,
            text: text.into(),
        }
    }

    /// Creates a variant guarded by an explicit rule.
    pub fn ruled(rule: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            rule: Some(rule.into()),
            text: text.into(),
        }
    }
}
