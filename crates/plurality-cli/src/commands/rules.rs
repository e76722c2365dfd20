//! Implementation of the `plurality rules` command.

use miette::{miette, IntoDiagnostic, Result};
use plurality::{supported_locales, PluralRule};
use serde::Serialize;

use crate::output::table::{format_rules_table, RuleRow};

/// Arguments for the rules command.
#[derive(Debug, clap::Args)]
pub struct RulesArgs {
    /// Show only these locales (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub locale: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one table entry.
#[derive(Debug, Serialize)]
struct RuleJson {
    locale: &'static str,
    family: &'static str,
    forms: usize,
}

/// Run the rules command.
pub fn run_rules(args: RulesArgs) -> Result<i32> {
    let rows: Vec<RuleRow> = supported_locales()
        .filter(|code| args.locale.is_empty() || args.locale.iter().any(|l| l == code))
        .filter_map(|code| {
            PluralRule::lookup(code).map(|rule| RuleRow {
                locale: code,
                rule,
            })
        })
        .collect();

    if rows.is_empty() {
        return Err(miette!(
            "No plural rules for locale(s): {}",
            args.locale.join(", ")
        ));
    }

    if args.json {
        let json: Vec<RuleJson> = rows
            .iter()
            .map(|row| RuleJson {
                locale: row.locale,
                family: row.rule.name(),
                forms: row.rule.form_count(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else {
        println!("{}", format_rules_table(&rows));
    }
    Ok(exitcode::OK)
}
