//! Variant selection engine.
//!
//! Takes split message templates and picks the variant for a count: explicit
//! interval rules first, then the locale's plural family. Placeholder
//! substitution is available separately and can be wired into selection
//! through [`Translator`].

mod error;
mod interval;
mod lint;
mod plural;
mod replace;
mod translator;

pub use error::{PluralError, integer_count};
pub use interval::test_interval;
pub use lint::{LintWarning, lint_message};
pub use plural::{PluralRule, plural_form, supported_locales};
pub use replace::apply_replacements;
pub use translator::{Choice, ChoiceSource, DEFAULT_LOCALE, Translator, trans_choice};
