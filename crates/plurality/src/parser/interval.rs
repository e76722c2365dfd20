//! Interval expression parser using winnow.
//!
//! Parses the two interval forms that may prefix a message variant:
//! - Sets: `{1,2,3}` (exact membership)
//! - Ranges: `[1,+Inf[`, `]-Inf,0]`, `[2,*]`
//!
//! Finite numbers may carry a fraction (`2.5`), which is truncated toward zero.
//! Infinite bounds are `-Inf`, `+Inf`, `Inf` and `*`. A left bound that reads
//! as positive infinity (`*`, `Inf`) means "unbounded below".

use std::num::ParseIntError;

use winnow::ascii::{digit1, multispace0};
use winnow::combinator::{alt, cut_err, opt, separated};
use winnow::error::{ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::one_of;

use super::ast::{Bound, Delimiter, Interval};
use super::error::ParseError;

/// Fallback message when the grammar reports no context.
const EXPECTED_FORM: &str = "expected a set like {1,2} or a range like [1,+Inf[";

/// Parse an interval expression, surrounding whitespace allowed.
///
/// # Errors
///
/// Returns [`ParseError::InvalidInterval`] if the whole trimmed text is not a
/// set or a range.
pub fn parse_interval(input: &str) -> Result<Interval, ParseError> {
    let trimmed = input.trim();
    let mut remaining = trimmed;
    match interval(&mut remaining) {
        Ok(parsed) if remaining.is_empty() => Ok(parsed),
        Ok(_) => Err(invalid(
            input,
            remaining,
            format!(
                "unexpected character '{}'",
                remaining.chars().next().unwrap_or('?')
            ),
        )),
        Err(e) => {
            let message = match e {
                ErrMode::Backtrack(context) | ErrMode::Cut(context) => {
                    context.to_string().replace('\n', "; ")
                }
                ErrMode::Incomplete(_) => String::new(),
            };
            let message = if message.is_empty() {
                EXPECTED_FORM.to_string()
            } else {
                message
            };
            Err(invalid(input, remaining, message))
        }
    }
}

/// Returns true if an interval expression appears anywhere in `text`.
///
/// Used to decide whether a variant carries an explicit rule. Unlike
/// [`parse_interval`], the match is not anchored on either side.
pub fn contains_interval(text: &str) -> bool {
    text.char_indices()
        .filter(|(_, c)| matches!(c, '{' | '[' | ']'))
        .any(|(start, _)| {
            let mut rest = &text[start..];
            interval(&mut rest).is_ok()
        })
}

/// Build an error whose column points at the start of `remaining`.
fn invalid(input: &str, remaining: &str, message: String) -> ParseError {
    let leading = input.len() - input.trim_start().len();
    let trimmed_len = input.trim().len();
    let consumed = leading + trimmed_len.saturating_sub(remaining.len());
    let column = input[..consumed].chars().count() + 1;
    ParseError::InvalidInterval {
        interval: input.to_string(),
        column,
        message,
    }
}

/// Parse either interval form.
fn interval(input: &mut &str) -> ModalResult<Interval> {
    alt((set, range)).parse_next(input)
}

/// Parse a set: `{ n (, n)* }`
fn set(input: &mut &str) -> ModalResult<Interval> {
    let _ = '{'.parse_next(input)?;
    cut_err(set_body).parse_next(input)
}

fn set_body(input: &mut &str) -> ModalResult<Interval> {
    let _ = multispace0(input)?;
    let items: Vec<i64> = separated(1.., number, (multispace0, ',', multispace0))
        .context(StrContext::Label("set"))
        .parse_next(input)?;
    let _ = multispace0(input)?;
    let _ = '}'
        .context(StrContext::Expected(StrContextValue::CharLiteral('}')))
        .parse_next(input)?;
    Ok(Interval::Set { items })
}

/// Parse a range: `[|] left , right [|]`
fn range(input: &mut &str) -> ModalResult<Interval> {
    let opening = one_of(['[', ']']).parse_next(input)?;
    let left_delimiter = if opening == '[' {
        Delimiter::Inclusive
    } else {
        Delimiter::Exclusive
    };
    cut_err(move |input: &mut &str| range_body(input, left_delimiter)).parse_next(input)
}

fn range_body(input: &mut &str, left_delimiter: Delimiter) -> ModalResult<Interval> {
    let _ = multispace0(input)?;
    let left = bound.context(StrContext::Label("left bound")).parse_next(input)?;
    let _ = multispace0(input)?;
    let _ = ','
        .context(StrContext::Expected(StrContextValue::CharLiteral(',')))
        .parse_next(input)?;
    let _ = multispace0(input)?;
    let right = bound.context(StrContext::Label("right bound")).parse_next(input)?;
    let _ = multispace0(input)?;
    let closing = one_of(['[', ']'])
        .context(StrContext::Expected(StrContextValue::CharLiteral(']')))
        .context(StrContext::Expected(StrContextValue::CharLiteral('[')))
        .parse_next(input)?;
    let right_delimiter = if closing == ']' {
        Delimiter::Inclusive
    } else {
        Delimiter::Exclusive
    };

    // `*` on the left reads as +Inf; as a lower bound it means unbounded below.
    let left = match left {
        Bound::PositiveInfinity => Bound::NegativeInfinity,
        other => other,
    };

    Ok(Interval::Range {
        left_delimiter,
        left,
        right,
        right_delimiter,
    })
}

/// Parse a range bound: a number or one of the infinity spellings.
fn bound(input: &mut &str) -> ModalResult<Bound> {
    alt((
        "-Inf".value(Bound::NegativeInfinity),
        alt(("+Inf", "Inf", "*")).value(Bound::PositiveInfinity),
        number.map(Bound::Finite),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "integer, -Inf, +Inf, Inf or *",
    )))
    .parse_next(input)
}

/// Parse `-?digits(.digits)?`, truncating any fraction.
fn number(input: &mut &str) -> ModalResult<i64> {
    (opt('-'), digit1, opt(('.', digit1)))
        .take()
        .try_map(truncate_integer)
        .parse_next(input)
}

fn truncate_integer(text: &str) -> Result<i64, ParseIntError> {
    let whole = text.split_once('.').map_or(text, |(whole, _)| whole);
    whole.parse()
}
