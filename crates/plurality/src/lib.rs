pub mod interpreter;
pub mod parser;
pub mod types;

pub use interpreter::{
    Choice, ChoiceSource, DEFAULT_LOCALE, LintWarning, PluralError, PluralRule, Translator,
    apply_replacements, integer_count, lint_message, plural_form, supported_locales,
    test_interval, trans_choice,
};
pub use parser::{Interval, ParseError, Split, Variant, parse_interval, split_message};
pub use types::{Replacements, Value};

/// Creates a [`Replacements`] from `name => value` pairs.
///
/// Values are converted via `Into<Value>`, so integers and strings can be
/// passed directly.
///
/// # Example
///
/// ```
/// use plurality::{replacements, Value};
///
/// let r = replacements! { "count" => 3, "name" => "Ana" };
/// assert_eq!(r.len(), 2);
/// assert_eq!(r.get("count"), Some(&Value::Number(3)));
/// assert_eq!(r.get("name").and_then(Value::as_string), Some("Ana"));
/// ```
#[macro_export]
macro_rules! replacements {
    {} => {
        $crate::Replacements::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut replacements = $crate::Replacements::new();
            $(
                replacements.insert($key, $value);
            )+
            replacements
        }
    };
}
