//! Locale plural-form resolution.
//!
//! Maps a count to the zero-based index of the message variant to use. Each
//! locale belongs to one plural family; every family is a small piece of
//! modular arithmetic over the count. English has two forms ("apple|apples"),
//! Russian three, Welsh and Slovenian four, and Arabic six.
//!
//! The table is static and read-only. Unknown locales resolve to
//! [`PluralRule::Invariant`], which always selects the first variant.

use serde::Serialize;
use tracing::debug;

/// A plural family: one arithmetic rule shared by several locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralRule {
    /// A single form for every count (e.g. Japanese, Turkish).
    Invariant,
    /// Singular at exactly 1 (e.g. English, German).
    OneOther,
    /// Singular at 0 and 1 (e.g. French, Hindi).
    ZeroOneOther,
    /// Russian, Ukrainian, Serbo-Croatian: ends in 1 (not 11), ends in 2-4
    /// (not 12-14), everything else.
    Slavic,
    /// Czech and Slovak: 1, 2-4, everything else.
    CzechSlovak,
    /// Irish: 1, 2, everything else.
    Irish,
    /// Lithuanian: like [`PluralRule::Slavic`] but the second form covers
    /// every final digit from 2 to 9.
    Lithuanian,
    /// Slovenian: last two digits 01, 02, 03-04, everything else.
    Slovenian,
    /// Macedonian: ends in 1, everything else.
    Macedonian,
    /// Maltese: 1, 0 or 2-10, 11-19, everything else (by last two digits).
    Maltese,
    /// Latvian: 0, ends in 1 (not 11), everything else.
    Latvian,
    /// Polish: 1, ends in 2-4 (not 12-14), everything else.
    Polish,
    /// Welsh: 1, 2, 8 or 11, everything else.
    Welsh,
    /// Romanian: 1, 0 or last two digits 1-19, everything else.
    Romanian,
    /// Arabic: 0, 1, 2, 3-10, 11-99, everything else (by last two digits).
    Arabic,
}

/// Locale code to plural family. Codes are matched exactly.
const LOCALE_RULES: &[(&str, PluralRule)] = &[
    ("az", PluralRule::Invariant),
    ("bo", PluralRule::Invariant),
    ("dz", PluralRule::Invariant),
    ("id", PluralRule::Invariant),
    ("ja", PluralRule::Invariant),
    ("jv", PluralRule::Invariant),
    ("ka", PluralRule::Invariant),
    ("km", PluralRule::Invariant),
    ("kn", PluralRule::Invariant),
    ("ko", PluralRule::Invariant),
    ("ms", PluralRule::Invariant),
    ("th", PluralRule::Invariant),
    ("tr", PluralRule::Invariant),
    ("vi", PluralRule::Invariant),
    ("zh", PluralRule::Invariant),
    ("af", PluralRule::OneOther),
    ("bn", PluralRule::OneOther),
    ("bg", PluralRule::OneOther),
    ("ca", PluralRule::OneOther),
    ("da", PluralRule::OneOther),
    ("de", PluralRule::OneOther),
    ("el", PluralRule::OneOther),
    ("en", PluralRule::OneOther),
    ("eo", PluralRule::OneOther),
    ("es", PluralRule::OneOther),
    ("et", PluralRule::OneOther),
    ("eu", PluralRule::OneOther),
    ("fa", PluralRule::OneOther),
    ("fi", PluralRule::OneOther),
    ("fo", PluralRule::OneOther),
    ("fur", PluralRule::OneOther),
    ("fy", PluralRule::OneOther),
    ("gl", PluralRule::OneOther),
    ("gu", PluralRule::OneOther),
    ("ha", PluralRule::OneOther),
    ("he", PluralRule::OneOther),
    ("hu", PluralRule::OneOther),
    ("is", PluralRule::OneOther),
    ("it", PluralRule::OneOther),
    ("ku", PluralRule::OneOther),
    ("lb", PluralRule::OneOther),
    ("ml", PluralRule::OneOther),
    ("mn", PluralRule::OneOther),
    ("mr", PluralRule::OneOther),
    ("nah", PluralRule::OneOther),
    ("nb", PluralRule::OneOther),
    ("ne", PluralRule::OneOther),
    ("nl", PluralRule::OneOther),
    ("nn", PluralRule::OneOther),
    ("no", PluralRule::OneOther),
    ("om", PluralRule::OneOther),
    ("or", PluralRule::OneOther),
    ("pa", PluralRule::OneOther),
    ("pap", PluralRule::OneOther),
    ("ps", PluralRule::OneOther),
    ("pt", PluralRule::OneOther),
    ("so", PluralRule::OneOther),
    ("sq", PluralRule::OneOther),
    ("sv", PluralRule::OneOther),
    ("sw", PluralRule::OneOther),
    ("ta", PluralRule::OneOther),
    ("te", PluralRule::OneOther),
    ("tk", PluralRule::OneOther),
    ("ur", PluralRule::OneOther),
    ("zu", PluralRule::OneOther),
    ("am", PluralRule::ZeroOneOther),
    ("bh", PluralRule::ZeroOneOther),
    ("fil", PluralRule::ZeroOneOther),
    ("fr", PluralRule::ZeroOneOther),
    ("gun", PluralRule::ZeroOneOther),
    ("hi", PluralRule::ZeroOneOther),
    ("hy", PluralRule::ZeroOneOther),
    ("ln", PluralRule::ZeroOneOther),
    ("mg", PluralRule::ZeroOneOther),
    ("nso", PluralRule::ZeroOneOther),
    ("xbr", PluralRule::ZeroOneOther),
    ("ti", PluralRule::ZeroOneOther),
    ("wa", PluralRule::ZeroOneOther),
    ("be", PluralRule::Slavic),
    ("bs", PluralRule::Slavic),
    ("hr", PluralRule::Slavic),
    ("ru", PluralRule::Slavic),
    ("sr", PluralRule::Slavic),
    ("uk", PluralRule::Slavic),
    ("cs", PluralRule::CzechSlovak),
    ("sk", PluralRule::CzechSlovak),
    ("ga", PluralRule::Irish),
    ("lt", PluralRule::Lithuanian),
    ("sl", PluralRule::Slovenian),
    ("mk", PluralRule::Macedonian),
    ("mt", PluralRule::Maltese),
    ("lv", PluralRule::Latvian),
    ("pl", PluralRule::Polish),
    ("cy", PluralRule::Welsh),
    ("ro", PluralRule::Romanian),
    ("ar", PluralRule::Arabic),
];

impl PluralRule {
    /// Look up the family for a locale code, if the table has one.
    pub fn lookup(locale: &str) -> Option<PluralRule> {
        LOCALE_RULES
            .iter()
            .find(|(code, _)| *code == locale)
            .map(|(_, rule)| *rule)
    }

    /// The family for a locale code, [`PluralRule::Invariant`] when unknown.
    pub fn for_locale(locale: &str) -> PluralRule {
        Self::lookup(locale).unwrap_or_else(|| {
            debug!(locale, "unknown locale, every count selects form 0");
            PluralRule::Invariant
        })
    }

    /// Zero-based form index for `count`.
    ///
    /// Total over `i64`: the result is always below [`PluralRule::form_count`].
    /// Remainders keep the sign of the count, so negative counts land in the
    /// catch-all form of the modular families.
    pub fn form(self, count: i64) -> usize {
        let n = count;
        let mod10 = n % 10;
        let mod100 = n % 100;
        match self {
            PluralRule::Invariant => 0,
            PluralRule::OneOther => usize::from(n != 1),
            PluralRule::ZeroOneOther => usize::from(n != 0 && n != 1),
            PluralRule::Slavic => {
                if mod10 == 1 && mod100 != 11 {
                    0
                } else if (2..=4).contains(&mod10) && !(10..20).contains(&mod100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::CzechSlovak => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            PluralRule::Irish => match n {
                1 => 0,
                2 => 1,
                _ => 2,
            },
            PluralRule::Lithuanian => {
                if mod10 == 1 && mod100 != 11 {
                    0
                } else if mod10 >= 2 && !(10..20).contains(&mod100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Slovenian => match mod100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },
            PluralRule::Macedonian => usize::from(mod10 != 1),
            PluralRule::Maltese => {
                if n == 1 {
                    0
                } else if n == 0 || (2..=10).contains(&mod100) {
                    1
                } else if (11..=19).contains(&mod100) {
                    2
                } else {
                    3
                }
            }
            PluralRule::Latvian => {
                if n == 0 {
                    0
                } else if mod10 == 1 && mod100 != 11 {
                    1
                } else {
                    2
                }
            }
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Welsh => match n {
                1 => 0,
                2 => 1,
                8 | 11 => 2,
                _ => 3,
            },
            PluralRule::Romanian => {
                if n == 1 {
                    0
                } else if n == 0 || (1..=19).contains(&mod100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Arabic => {
                if n == 0 {
                    0
                } else if n == 1 {
                    1
                } else if n == 2 {
                    2
                } else if (3..=10).contains(&mod100) {
                    3
                } else if (11..=99).contains(&mod100) {
                    4
                } else {
                    5
                }
            }
        }
    }

    /// Number of distinct forms this family can select.
    pub fn form_count(self) -> usize {
        match self {
            PluralRule::Invariant => 1,
            PluralRule::OneOther | PluralRule::ZeroOneOther | PluralRule::Macedonian => 2,
            PluralRule::Slavic
            | PluralRule::CzechSlovak
            | PluralRule::Irish
            | PluralRule::Lithuanian
            | PluralRule::Latvian
            | PluralRule::Polish
            | PluralRule::Romanian => 3,
            PluralRule::Slovenian | PluralRule::Maltese | PluralRule::Welsh => 4,
            PluralRule::Arabic => 6,
        }
    }

    /// Short family name, as used in CLI output.
    pub fn name(self) -> &'static str {
        match self {
            PluralRule::Invariant => "invariant",
            PluralRule::OneOther => "one-other",
            PluralRule::ZeroOneOther => "zero-one-other",
            PluralRule::Slavic => "slavic",
            PluralRule::CzechSlovak => "czech-slovak",
            PluralRule::Irish => "irish",
            PluralRule::Lithuanian => "lithuanian",
            PluralRule::Slovenian => "slovenian",
            PluralRule::Macedonian => "macedonian",
            PluralRule::Maltese => "maltese",
            PluralRule::Latvian => "latvian",
            PluralRule::Polish => "polish",
            PluralRule::Welsh => "welsh",
            PluralRule::Romanian => "romanian",
            PluralRule::Arabic => "arabic",
        }
    }
}

/// Every locale code in the plural table, in table order.
pub fn supported_locales() -> impl Iterator<Item = &'static str> {
    LOCALE_RULES.iter().map(|(code, _)| *code)
}

/// Get the zero-based plural form index for `count` in `locale`.
///
/// # Examples
///
/// ```
/// use plurality::plural_form;
///
/// assert_eq!(plural_form(1, "en"), 0);
/// assert_eq!(plural_form(5, "en"), 1);
///
/// assert_eq!(plural_form(21, "ru"), 0);
/// assert_eq!(plural_form(3, "ru"), 1);
/// assert_eq!(plural_form(11, "ru"), 2);
///
/// // Unknown locales never pluralize.
/// assert_eq!(plural_form(5, "xx"), 0);
/// ```
pub fn plural_form(count: i64, locale: &str) -> usize {
    PluralRule::for_locale(locale).form(count)
}
