//! Implementation of the `plurality check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use miette::{miette, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use plurality::{lint_message, DEFAULT_LOCALE};
use serde::Serialize;
use tracing::debug;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check, one message template per line
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Locale the messages are written for
    #[arg(short, long, env = "PLURALITY_LOCALE", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Exit with a non-zero code if any warning is reported
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// A template read from a file, with its 1-based line number.
#[derive(Debug, PartialEq)]
pub struct MessageLine {
    pub line: usize,
    pub message: String,
}

/// JSON output for a single warning.
#[derive(Debug, Serialize)]
struct WarningJson {
    path: String,
    line: usize,
    message: String,
}

/// Read templates from `path`, skipping blank lines and `#` comments.
pub fn read_messages(path: &Path) -> Result<Vec<MessageLine>> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read {}: {}", path.display(), e))?;
    Ok(content
        .lines()
        .enumerate()
        .filter(|(_, text)| {
            let trimmed = text.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(index, text)| MessageLine {
            line: index + 1,
            message: text.to_string(),
        })
        .collect())
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut warnings: Vec<WarningJson> = Vec::new();
    let mut checked = 0;

    for path in &args.files {
        let messages = read_messages(path)?;
        debug!(path = %path.display(), messages = messages.len(), "checking file");
        for entry in messages {
            checked += 1;
            for warning in lint_message(&entry.message, &args.locale) {
                warnings.push(WarningJson {
                    path: path.display().to_string(),
                    line: entry.line,
                    message: warning.to_string(),
                });
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&warnings).into_diagnostic()?);
    } else {
        for warning in &warnings {
            println!(
                "{}:{}: {}: {}",
                warning.path,
                warning.line,
                "warning".yellow().bold(),
                warning.message
            );
        }
        let summary = format!("{} messages checked, {} warnings", checked, warnings.len());
        if warnings.is_empty() {
            println!("{}", summary.green());
        } else {
            println!("{}", summary.yellow());
        }
    }

    if args.strict && !warnings.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn read_messages_skips_blanks_and_comments() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# files label").unwrap();
        writeln!(file, "file|files").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  {{0}} none|many").unwrap();
        let messages = read_messages(file.path()).unwrap();
        assert_eq!(
            messages,
            vec![
                MessageLine {
                    line: 2,
                    message: "file|files".to_string(),
                },
                MessageLine {
                    line: 4,
                    message: "  {0} none|many".to_string(),
                },
            ]
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_messages(&dir.path().join("absent.txt")).is_err());
    }
}
