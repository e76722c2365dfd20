//! Integration tests for the locale plural-form table.

use plurality::{PluralRule, plural_form, supported_locales};
use proptest::prelude::*;

/// Form index for each count, in order.
fn forms(locale: &str, counts: &[i64]) -> Vec<usize> {
    counts.iter().map(|&n| plural_form(n, locale)).collect()
}

// =============================================================================
// Families
// =============================================================================

#[test]
fn invariant_locales_never_pluralize() {
    for locale in ["ja", "zh", "ko", "tr", "vi", "id"] {
        assert_eq!(forms(locale, &[0, 1, 2, 5, 100]), vec![0; 5], "{locale}");
    }
}

#[test]
fn unknown_locale_uses_form_zero() {
    assert_eq!(forms("xx", &[0, 1, 2, 21, -3]), vec![0; 5]);
    assert_eq!(PluralRule::for_locale("xx"), PluralRule::Invariant);
    assert_eq!(PluralRule::lookup("xx"), None);
}

#[test]
fn locale_codes_are_case_sensitive() {
    assert_eq!(plural_form(5, "EN"), 0);
    assert_eq!(plural_form(5, "en"), 1);
}

#[test]
fn english_singular_only_at_one() {
    assert_eq!(forms("en", &[0, 1, 2, 11, -1]), vec![1, 0, 1, 1, 1]);
}

#[test]
fn french_singular_at_zero_and_one() {
    assert_eq!(forms("fr", &[0, 1, 2, -1]), vec![0, 0, 1, 1]);
}

#[test]
fn russian_three_way() {
    assert_eq!(plural_form(1, "ru"), 0);
    assert_eq!(plural_form(2, "ru"), 1);
    assert_eq!(plural_form(11, "ru"), 2);
    assert_eq!(plural_form(21, "ru"), 0);
    assert_eq!(
        forms("ru", &[0, 4, 5, 12, 14, 22, 101, 111, 112, 122]),
        vec![2, 1, 2, 2, 2, 1, 0, 2, 2, 1]
    );
}

#[test]
fn slavic_family_shared() {
    for locale in ["be", "bs", "hr", "ru", "sr", "uk"] {
        assert_eq!(PluralRule::for_locale(locale), PluralRule::Slavic);
    }
}

#[test]
fn czech_and_slovak() {
    for locale in ["cs", "sk"] {
        assert_eq!(forms(locale, &[0, 1, 2, 4, 5, 22]), vec![2, 0, 1, 1, 2, 2]);
    }
}

#[test]
fn irish() {
    assert_eq!(forms("ga", &[0, 1, 2, 3]), vec![2, 0, 1, 2]);
}

#[test]
fn lithuanian() {
    assert_eq!(
        forms("lt", &[1, 2, 9, 10, 11, 19, 21, 29, 30]),
        vec![0, 1, 1, 2, 2, 2, 0, 1, 2]
    );
}

#[test]
fn slovenian_four_way() {
    assert_eq!(
        forms("sl", &[1, 2, 3, 4, 5, 101, 102, 103, 0]),
        vec![0, 1, 2, 2, 3, 0, 1, 2, 3]
    );
}

#[test]
fn macedonian_ends_in_one() {
    assert_eq!(forms("mk", &[1, 11, 21, 2, 0]), vec![0, 0, 0, 1, 1]);
}

#[test]
fn maltese_four_way() {
    assert_eq!(
        forms("mt", &[1, 0, 2, 10, 11, 19, 20, 102, 111]),
        vec![0, 1, 1, 1, 2, 2, 3, 1, 2]
    );
}

#[test]
fn latvian() {
    assert_eq!(forms("lv", &[0, 1, 11, 21, 2]), vec![0, 1, 2, 1, 2]);
}

#[test]
fn polish() {
    assert_eq!(
        forms("pl", &[1, 2, 4, 5, 12, 14, 21, 22, 112, 0]),
        vec![0, 1, 1, 2, 2, 2, 2, 1, 2, 2]
    );
}

#[test]
fn welsh_four_way() {
    assert_eq!(
        forms("cy", &[1, 2, 8, 11, 0, 3, 18]),
        vec![0, 1, 2, 2, 3, 3, 3]
    );
}

#[test]
fn romanian() {
    assert_eq!(
        forms("ro", &[1, 0, 2, 19, 20, 101, 119, 120]),
        vec![0, 1, 1, 1, 2, 1, 1, 2]
    );
}

#[test]
fn arabic_six_way() {
    assert_eq!(plural_form(0, "ar"), 0);
    assert_eq!(plural_form(1, "ar"), 1);
    assert_eq!(plural_form(2, "ar"), 2);
    assert_eq!(plural_form(5, "ar"), 3);
    assert_eq!(plural_form(15, "ar"), 4);
    assert_eq!(plural_form(105, "ar"), 5);
    assert_eq!(forms("ar", &[3, 10, 11, 99, 100, 102, 103]), vec![3, 3, 4, 4, 5, 5, 3]);
}

// =============================================================================
// Negative counts keep the remainder's sign
// =============================================================================

#[test]
fn negative_counts_fall_to_catch_all_in_modular_families() {
    assert_eq!(plural_form(-1, "ru"), 2);
    assert_eq!(plural_form(-21, "ru"), 2);
    assert_eq!(plural_form(-5, "ar"), 5);
    assert_eq!(plural_form(-1, "sl"), 3);
    assert_eq!(plural_form(-1, "mk"), 1);
}

// =============================================================================
// Table metadata
// =============================================================================

#[test]
fn table_has_no_duplicate_codes() {
    let mut codes: Vec<&str> = supported_locales().collect();
    let total = codes.len();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), total);
}

#[test]
fn every_form_index_is_reachable() {
    for locale in ["en", "fr", "ru", "cs", "ga", "lt", "sl", "mk", "mt", "lv", "pl", "cy", "ro", "ar"] {
        let rule = PluralRule::for_locale(locale);
        let mut seen = vec![false; rule.form_count()];
        for n in 0..200 {
            seen[rule.form(n)] = true;
        }
        assert!(seen.iter().all(|s| *s), "{locale}: {seen:?}");
    }
}

proptest! {
    #[test]
    fn plural_form_is_total(count: i64) {
        for locale in supported_locales() {
            let rule = PluralRule::for_locale(locale);
            prop_assert!(plural_form(count, locale) < rule.form_count());
        }
    }
}
