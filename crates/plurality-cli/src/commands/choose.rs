//! Implementation of the `plurality choose` command.

use miette::{IntoDiagnostic, Report};
use plurality::{ChoiceSource, PluralError, Replacements, Translator, Value, DEFAULT_LOCALE};
use serde::Serialize;

use crate::commands::parse_count;
use crate::output::IntervalDiagnostic;

/// Arguments for the choose command.
#[derive(Debug, clap::Args)]
pub struct ChooseArgs {
    /// Message template, variants separated by | (e.g. "apple|apples")
    #[arg(short, long, required = true)]
    pub message: String,

    /// Count used to select the variant
    #[arg(short, long, value_parser = parse_count, allow_hyphen_values = true)]
    pub count: i64,

    /// Locale code for plural forms (e.g., en, ru, ar)
    #[arg(short, long, env = "PLURALITY_LOCALE", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Replacements in name=value format (repeatable)
    #[arg(short = 'r', long = "replace", value_parser = parse_key_val)]
    pub replacements: Vec<(String, String)>,

    /// Substitute :placeholders in the selected variant
    #[arg(long, env = "PLURALITY_SUBSTITUTE")]
    pub substitute: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for choose results.
#[derive(Serialize)]
pub struct ChooseResult {
    pub text: String,
    pub source: ChoiceSource,
}

/// Parse a name=value replacement string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid replacement format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Integers become numbers, everything else stays a string.
fn to_replacements(pairs: Vec<(String, String)>) -> Replacements {
    pairs
        .into_iter()
        .map(|(name, value)| {
            let value = match value.parse::<i64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::from(value),
            };
            (name, value)
        })
        .collect()
}

/// Run the choose command.
pub fn run_choose(args: ChooseArgs) -> miette::Result<i32> {
    let translator = Translator::builder()
        .locale(args.locale)
        .substitute(args.substitute)
        .build();
    let replacements = to_replacements(args.replacements);

    let result = translator
        .choose(&args.message, args.count, None)
        .and_then(|choice| {
            let source = choice.source.clone();
            translator
                .render(choice, args.count, replacements)
                .map(|text| ChooseResult { text, source })
        });

    match result {
        Ok(output) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{}", output.text);
            }
            Ok(exitcode::OK)
        }
        Err(PluralError::InvalidInterval(err)) if !args.json => {
            let diagnostic = IntervalDiagnostic::from_parse_error("explicit rule", &err);
            eprintln!("{:?}", Report::new(diagnostic));
            Ok(exitcode::DATAERR)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Selection error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
