//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use plurality::PluralRule;

/// One row of the locale plural table.
pub struct RuleRow {
    /// Locale code (e.g., "ru", "ar").
    pub locale: &'static str,
    /// Plural family of the locale.
    pub rule: PluralRule,
}

/// Format locale plural families as an ASCII table.
pub fn format_rules_table(rows: &[RuleRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Locale", "Family", "Forms"]);

    for row in rows {
        table.add_row(vec![
            row.locale.to_string(),
            row.rule.name().to_string(),
            row.rule.form_count().to_string(),
        ]);
    }

    table
}
