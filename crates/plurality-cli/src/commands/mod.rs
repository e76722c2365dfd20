//! CLI command implementations.

mod check;
mod choose;
mod form;
mod interval;
mod rules;

pub use check::{run_check, CheckArgs};
pub use choose::{run_choose, ChooseArgs};
pub use form::{run_form, FormArgs};
pub use interval::{run_interval, IntervalArgs};
pub use rules::{run_rules, RulesArgs};

use plurality::integer_count;

/// Parse a count argument.
///
/// Accepts integers directly and whole floats such as `3.0`; anything else is
/// rejected with the library's invalid-argument message.
pub(crate) fn parse_count(s: &str) -> Result<i64, String> {
    if let Ok(n) = s.parse::<i64>() {
        return Ok(n);
    }
    let value = s
        .parse::<f64>()
        .map_err(|_| format!("invalid count '{}': expected an integer", s))?;
    integer_count(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::parse_count;

    #[test]
    fn parses_integers_and_whole_floats() {
        assert_eq!(parse_count("5"), Ok(5));
        assert_eq!(parse_count("-12"), Ok(-12));
        assert_eq!(parse_count("3.0"), Ok(3));
    }

    #[test]
    fn rejects_fractions_and_garbage() {
        assert_eq!(
            parse_count("2.5"),
            Err("invalid argument: count must be an integer, got 2.5".to_string())
        );
        assert!(parse_count("NaN").is_err());
        assert!(parse_count("many").is_err());
    }
}
