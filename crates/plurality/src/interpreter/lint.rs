//! Static lint rules for message templates.
//!
//! Inspects a template without selecting a variant, to catch problems that
//! would otherwise only surface for particular counts.

use std::fmt;

use strsim::levenshtein;

use crate::interpreter::plural::{PluralRule, supported_locales};
use crate::parser::{ParseError, Split, parse_interval, split_message};

/// Largest edit distance for which a locale suggestion is offered.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// A problem found in a message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    /// A variant's explicit rule is not a valid interval; selecting any count
    /// that reaches it fails.
    InvalidRule {
        variant: usize,
        rule: String,
        error: ParseError,
    },
    /// The locale is not in the plural table; every count selects form 0.
    UnknownLocale {
        locale: String,
        suggestion: Option<&'static str>,
    },
    /// The locale has more plural forms than the template has variants.
    TooFewVariants {
        locale: String,
        variants: usize,
        forms: usize,
    },
    /// A template without `|` starts with an interval that is never tested.
    SingleVariantWithRule { rule: String },
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintWarning::InvalidRule {
                variant,
                rule,
                error,
            } => write!(f, "variant {variant}: rule '{rule}' is invalid: {error}"),
            LintWarning::UnknownLocale { locale, suggestion } => {
                write!(f, "unknown locale '{locale}', plural forms are disabled")?;
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{suggestion}'?)")?;
                }
                Ok(())
            }
            LintWarning::TooFewVariants {
                locale,
                variants,
                forms,
            } => write!(
                f,
                "locale '{locale}' has {forms} plural forms but the message has {variants} variants"
            ),
            LintWarning::SingleVariantWithRule { rule } => write!(
                f,
                "rule '{rule}' on a single-variant message is never evaluated"
            ),
        }
    }
}

/// Lint `message` for use with `locale`.
///
/// # Example
///
/// ```
/// use plurality::{LintWarning, lint_message};
///
/// assert!(lint_message("apple|apples", "en").is_empty());
///
/// let warnings = lint_message("яблоко|яблока", "ru");
/// assert!(matches!(warnings[0], LintWarning::TooFewVariants { forms: 3, .. }));
/// ```
pub fn lint_message(message: &str, locale: &str) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    let rule = PluralRule::lookup(locale);
    if rule.is_none() {
        warnings.push(LintWarning::UnknownLocale {
            locale: locale.to_string(),
            suggestion: suggest_locale(locale),
        });
    }

    match split_message(message) {
        Split::Passthrough => lint_single_variant(message, &mut warnings),
        Split::Variants(variants) => {
            for (index, variant) in variants.iter().enumerate() {
                let Some(text) = &variant.rule else {
                    continue;
                };
                if let Err(error) = parse_interval(text) {
                    warnings.push(LintWarning::InvalidRule {
                        variant: index,
                        rule: text.clone(),
                        error,
                    });
                }
            }
            let forms = rule.unwrap_or(PluralRule::Invariant).form_count();
            if variants.len() < forms {
                warnings.push(LintWarning::TooFewVariants {
                    locale: locale.to_string(),
                    variants: variants.len(),
                    forms,
                });
            }
        }
    }
    warnings
}

fn lint_single_variant(message: &str, warnings: &mut Vec<LintWarning>) {
    let Some(token) = message.split_whitespace().next() else {
        return;
    };
    if parse_interval(token).is_ok() {
        warnings.push(LintWarning::SingleVariantWithRule {
            rule: token.to_string(),
        });
    }
}

/// Closest table locale to `locale`, if any is close enough.
fn suggest_locale(locale: &str) -> Option<&'static str> {
    let primary = locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase();
    if let Some(code) = supported_locales().find(|code| *code == primary) {
        return Some(code);
    }
    supported_locales()
        .map(|code| (levenshtein(locale, code), code))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, code)| code)
}
