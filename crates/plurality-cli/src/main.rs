//! Plurality CLI entry point.
//!
//! Provides command-line tools for working with plural message templates:
//! - `plurality choose` - Select (and optionally render) a variant
//! - `plurality form` - Show the plural form index for a count
//! - `plurality interval` - Test a count against an interval
//! - `plurality check` - Lint message templates in files
//! - `plurality rules` - List the locale plural table

mod commands;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_choose, run_form, run_interval, run_rules, CheckArgs, ChooseArgs, FormArgs,
    IntervalArgs, RulesArgs,
};
use tracing::Level;

/// Plural message template tools.
#[derive(Debug, Parser)]
#[command(name = "plurality")]
#[command(about = "Plural message template tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Select the variant of a message for a count
    Choose(ChooseArgs),
    /// Show the plural form index for a count
    Form(FormArgs),
    /// Test whether a count falls inside an interval
    Interval(IntervalArgs),
    /// Lint message templates, one per line
    Check(CheckArgs),
    /// List locales and their plural families
    Rules(RulesArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr; `--verbose` shows selection decisions.
fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Choose(args) => run_choose(args),
        Commands::Form(args) => run_form(args),
        Commands::Interval(args) => run_interval(args),
        Commands::Check(args) => run_check(args),
        Commands::Rules(args) => run_rules(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
