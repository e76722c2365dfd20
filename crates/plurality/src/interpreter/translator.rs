//! Variant selection for pipe-delimited plural messages.
//!
//! Selection runs in three steps:
//! 1. A template without `|` is returned verbatim.
//! 2. Variants with an explicit interval rule are tested in template order;
//!    the first match wins.
//! 3. Otherwise the locale's plural family picks a variant by position.

use bon::Builder;
use serde::Serialize;
use tracing::debug;

use crate::interpreter::PluralError;
use crate::interpreter::interval::test_interval;
use crate::interpreter::plural::PluralRule;
use crate::interpreter::replace::apply_replacements;
use crate::parser::{Split, split_message};
use crate::types::Replacements;

/// Locale used when neither the translator nor the call names one.
pub const DEFAULT_LOCALE: &str = "en";

/// How a variant was selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChoiceSource {
    /// The template had a single variant and was used verbatim.
    Passthrough,
    /// The variant at `index` carried a rule containing the count.
    ExplicitRule { index: usize, rule: String },
    /// The locale's plural family selected the variant at `index`.
    PluralForm { index: usize, rule: PluralRule },
}

/// A selected variant before placeholder substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub text: String,
    pub source: ChoiceSource,
}

/// Chooses and renders plural message variants.
///
/// # Example
///
/// ```
/// use plurality::{Replacements, Translator, replacements};
///
/// let translator = Translator::builder().locale("ru").substitute(true).build();
/// let text = translator
///     .trans_choice(":count файл|:count файла|:count файлов", 3, Replacements::new(), None)
///     .unwrap();
/// assert_eq!(text, "3 файла");
///
/// // Without substitution the selected variant is returned as written.
/// let raw = Translator::new()
///     .trans_choice("one :thing|many :things", 2, replacements! { "things" => "cats" }, None)
///     .unwrap();
/// assert_eq!(raw, "many :things");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct Translator {
    /// Locale used when a call does not pass one.
    #[builder(default = DEFAULT_LOCALE.to_string())]
    locale: String,

    /// Apply placeholder substitution to the selected variant.
    ///
    /// Off by default: the selected variant is returned as written and callers
    /// run [`apply_replacements`] themselves.
    #[builder(default)]
    substitute: bool,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::builder().build()
    }
}

impl Translator {
    /// Create a translator for the default locale without substitution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a translator for `locale` without substitution.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Translator::builder().locale(locale.into()).build()
    }

    /// The locale used when a call does not pass one.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Whether placeholder substitution is applied after selection.
    pub fn substitutes(&self) -> bool {
        self.substitute
    }

    /// Select the variant of `message` for `count`.
    ///
    /// `locale` overrides the translator's locale for this call.
    ///
    /// # Errors
    ///
    /// - [`PluralError::InvalidInterval`] if an explicit rule is malformed.
    /// - [`PluralError::MissingVariant`] if the plural form index points past the
    ///   last variant.
    pub fn choose(
        &self,
        message: &str,
        count: i64,
        locale: Option<&str>,
    ) -> Result<Choice, PluralError> {
        let variants = match split_message(message) {
            Split::Passthrough => {
                debug!(count, "single variant message, returning it verbatim");
                return Ok(Choice {
                    text: message.to_string(),
                    source: ChoiceSource::Passthrough,
                });
            }
            Split::Variants(variants) => variants,
        };

        for (index, variant) in variants.iter().enumerate() {
            let Some(rule) = &variant.rule else {
                continue;
            };
            if test_interval(count, rule)? {
                debug!(count, index, rule = %rule, "explicit rule matched");
                return Ok(Choice {
                    text: variant.text.clone(),
                    source: ChoiceSource::ExplicitRule {
                        index,
                        rule: rule.clone(),
                    },
                });
            }
        }

        let locale = locale.unwrap_or(&self.locale);
        let rule = PluralRule::for_locale(locale);
        let index = rule.form(count);
        let available = variants.len();
        debug!(count, locale, index, family = rule.name(), "plural form selected");
        let variant = variants
            .into_iter()
            .nth(index)
            .ok_or_else(|| PluralError::MissingVariant {
                index,
                available,
                locale: locale.to_string(),
            })?;
        Ok(Choice {
            text: variant.text,
            source: ChoiceSource::PluralForm { index, rule },
        })
    }

    /// Render a selected variant.
    ///
    /// `replacements` gains a `count` entry set to `count`. Substitution runs
    /// only when the translator was built with `substitute(true)`; otherwise
    /// the variant text is returned as written.
    ///
    /// # Errors
    ///
    /// Returns [`PluralError::Replacement`] if a placeholder name cannot be
    /// compiled.
    pub fn render(
        &self,
        choice: Choice,
        count: i64,
        mut replacements: Replacements,
    ) -> Result<String, PluralError> {
        if !self.substitute {
            return Ok(choice.text);
        }
        replacements.set_count(count);
        apply_replacements(&choice.text, &replacements)
    }

    /// Select the variant of `message` for `count` and render it.
    ///
    /// # Errors
    ///
    /// Same as [`Translator::choose`] and [`Translator::render`].
    pub fn trans_choice(
        &self,
        message: &str,
        count: i64,
        replacements: Replacements,
        locale: Option<&str>,
    ) -> Result<String, PluralError> {
        let choice = self.choose(message, count, locale)?;
        self.render(choice, count, replacements)
    }
}

/// Select the variant of `message` for `count` with a default [`Translator`].
///
/// `locale` defaults to `"en"`. No placeholder substitution is applied.
///
/// # Errors
///
/// See [`Translator::choose`].
///
/// # Examples
///
/// ```
/// use plurality::{Replacements, trans_choice};
///
/// assert_eq!(trans_choice("apple|apples", 1, Replacements::new(), None).unwrap(), "apple");
/// assert_eq!(trans_choice("apple|apples", 5, Replacements::new(), Some("en")).unwrap(), "apples");
/// ```
pub fn trans_choice(
    message: &str,
    count: i64,
    replacements: Replacements,
    locale: Option<&str>,
) -> Result<String, PluralError> {
    Translator::default().trans_choice(message, count, replacements, locale)
}
