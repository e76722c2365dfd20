//! Implementation of the `plurality form` command.

use miette::IntoDiagnostic;
use plurality::{PluralRule, DEFAULT_LOCALE};
use serde::Serialize;
use tracing::warn;

use crate::commands::parse_count;

/// Arguments for the form command.
#[derive(Debug, clap::Args)]
pub struct FormArgs {
    /// Count to classify
    #[arg(short, long, value_parser = parse_count, allow_hyphen_values = true)]
    pub count: i64,

    /// Locale code (e.g., en, ru, ar)
    #[arg(short, long, env = "PLURALITY_LOCALE", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for plural form lookups.
#[derive(Serialize)]
pub struct FormResult {
    pub locale: String,
    pub count: i64,
    pub index: usize,
    pub family: &'static str,
    pub forms: usize,
}

/// Run the form command.
pub fn run_form(args: FormArgs) -> miette::Result<i32> {
    if PluralRule::lookup(&args.locale).is_none() {
        warn!(locale = %args.locale, "locale not in the plural table, using form 0");
    }
    let rule = PluralRule::for_locale(&args.locale);
    let output = FormResult {
        index: rule.form(args.count),
        family: rule.name(),
        forms: rule.form_count(),
        locale: args.locale,
        count: args.count,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!(
            "{} ({} of {} forms, {})",
            output.index,
            output.index + 1,
            output.forms,
            output.family
        );
    }
    Ok(exitcode::OK)
}
