//! Integration tests for interval parsing and membership.

use plurality::parser::{Bound, Delimiter, Interval};
use plurality::{ParseError, parse_interval, test_interval};
use proptest::collection;
use proptest::prelude::*;

// =============================================================================
// Set form
// =============================================================================

#[test]
fn set_matches_listed_integers() {
    assert!(test_interval(2, "{1,2,3}").unwrap());
    assert!(!test_interval(5, "{1,2,3}").unwrap());
}

#[test]
fn set_allows_whitespace_and_negatives() {
    let interval = parse_interval("{ -1 , 0,\t7 }").unwrap();
    assert_eq!(
        interval,
        Interval::Set {
            items: vec![-1, 0, 7]
        }
    );
    assert!(interval.contains(-1));
    assert!(!interval.contains(1));
}

#[test]
fn set_items_truncate_fractions() {
    assert_eq!(
        parse_interval("{2.9,-3.5}").unwrap(),
        Interval::Set { items: vec![2, -3] }
    );
    assert!(test_interval(2, "{2.9}").unwrap());
}

#[test]
fn single_item_set() {
    assert!(test_interval(0, "{0}").unwrap());
    assert!(!test_interval(1, "{0}").unwrap());
}

// =============================================================================
// Range form
// =============================================================================

#[test]
fn negative_infinity_inclusive_upper_bound() {
    assert!(test_interval(0, "[-Inf,0]").unwrap());
    assert!(test_interval(-1_000_000, "[-Inf,0]").unwrap());
    assert!(!test_interval(1, "[-Inf,0]").unwrap());
}

#[test]
fn exclusive_and_inclusive_delimiters() {
    assert!(test_interval(5, "]0,10[").unwrap());
    assert!(!test_interval(10, "]0,10[").unwrap());
    assert!(!test_interval(0, "]0,10[").unwrap());
    assert!(test_interval(10, "]0,10]").unwrap());
    assert!(test_interval(0, "[0,10[").unwrap());
}

#[test]
fn positive_infinity_spellings() {
    for interval in ["[2,Inf]", "[2,+Inf]", "[2,*]", "[2,+Inf["] {
        assert!(test_interval(2, interval).unwrap(), "{interval}");
        assert!(test_interval(i64::MAX, interval).unwrap(), "{interval}");
        assert!(!test_interval(1, interval).unwrap(), "{interval}");
    }
}

#[test]
fn star_on_left_means_unbounded_below() {
    let interval = parse_interval("[*,5]").unwrap();
    assert_eq!(
        interval,
        Interval::Range {
            left_delimiter: Delimiter::Inclusive,
            left: Bound::NegativeInfinity,
            right: Bound::Finite(5),
            right_delimiter: Delimiter::Inclusive,
        }
    );
    assert!(interval.contains(i64::MIN));
    assert!(interval.contains(5));
    assert!(!interval.contains(6));
}

#[test]
fn inf_on_left_is_also_unbounded_below() {
    assert!(test_interval(-7, "[Inf,0]").unwrap());
    assert!(test_interval(-7, "]+Inf,0]").unwrap());
}

#[test]
fn negative_infinity_on_right_matches_nothing() {
    assert!(!test_interval(0, "[-Inf,-Inf]").unwrap());
    assert!(!test_interval(i64::MIN, "[*,-Inf]").unwrap());
}

#[test]
fn range_allows_inner_whitespace() {
    assert!(test_interval(3, "[ 1 , 5 ]").unwrap());
    assert!(test_interval(3, "  [1,5]  ").unwrap());
}

#[test]
fn range_bounds_truncate_fractions() {
    assert!(test_interval(1, "[1.7,2]").unwrap());
    assert!(!test_interval(2, "[0,2.9[").unwrap());
}

#[test]
fn display_renders_canonical_form() {
    assert_eq!(parse_interval("{ 1, 2 }").unwrap().to_string(), "{1,2}");
    assert_eq!(parse_interval("[*, Inf[").unwrap().to_string(), "[-Inf,+Inf[");
    assert_eq!(parse_interval("]0,10]").unwrap().to_string(), "]0,10]");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn malformed_intervals_are_errors() {
    for text in [
        "", "1", "{}", "{1,2", "[1,2", "(1,2)", "[1;2]", "[a,2]", "{1,a}", "[1,2]x", "x[1,2]",
        "one",
    ] {
        let err = parse_interval(text).unwrap_err();
        assert!(
            matches!(err, ParseError::InvalidInterval { .. }),
            "{text:?} should fail"
        );
        assert!(test_interval(0, text).is_err(), "{text:?} should fail");
    }
}

#[test]
fn error_keeps_original_text_and_column() {
    let err = parse_interval("[1,2]x").unwrap_err();
    assert_eq!(err.interval(), "[1,2]x");
    assert_eq!(err.column(), 6);
    assert!(err.to_string().contains("unexpected character 'x'"));
}

#[test]
fn error_column_points_at_bad_bound() {
    let err = parse_interval("[1,x]").unwrap_err();
    assert_eq!(err.column(), 4);
}

#[test]
fn integer_overflow_is_an_error() {
    assert!(parse_interval("{99999999999999999999}").is_err());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn range_membership_matches_comparison(
        low in -1000i64..1000,
        high in -1000i64..1000,
        count in -1100i64..1100,
        left_inclusive: bool,
        right_inclusive: bool,
    ) {
        let text = format!(
            "{}{low},{high}{}",
            if left_inclusive { '[' } else { ']' },
            if right_inclusive { ']' } else { '[' },
        );
        let above = if left_inclusive { count >= low } else { count > low };
        let below = if right_inclusive { count <= high } else { count < high };
        prop_assert_eq!(test_interval(count, &text).unwrap(), above && below);
    }

    #[test]
    fn set_membership_matches_contains(
        items in collection::vec(-50i64..50, 1..6),
        count in -60i64..60,
    ) {
        let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
        let text = format!("{{{}}}", rendered.join(","));
        prop_assert_eq!(test_interval(count, &text).unwrap(), items.contains(&count));
    }
}
