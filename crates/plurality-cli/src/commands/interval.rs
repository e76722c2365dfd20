//! Implementation of the `plurality interval` command.

use miette::{IntoDiagnostic, Report};
use plurality::parse_interval;
use serde::Serialize;

use crate::commands::parse_count;
use crate::output::IntervalDiagnostic;

/// Arguments for the interval command.
#[derive(Debug, clap::Args)]
pub struct IntervalArgs {
    /// Count to test
    #[arg(short, long, value_parser = parse_count, allow_hyphen_values = true)]
    pub count: i64,

    /// Interval expression, e.g. "{1,2,3}" or "]0,10["
    #[arg(short, long, required = true, allow_hyphen_values = true)]
    pub interval: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for interval tests.
#[derive(Serialize)]
pub struct IntervalResult {
    pub count: i64,
    pub interval: String,
    pub contains: bool,
}

/// Run the interval command.
pub fn run_interval(args: IntervalArgs) -> miette::Result<i32> {
    let interval = match parse_interval(&args.interval) {
        Ok(interval) => interval,
        Err(err) => {
            let diagnostic = IntervalDiagnostic::from_parse_error("--interval", &err);
            eprintln!("{:?}", Report::new(diagnostic));
            return Ok(exitcode::DATAERR);
        }
    };

    let contains = interval.contains(args.count);
    if args.json {
        let output = IntervalResult {
            count: args.count,
            interval: interval.to_string(),
            contains,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", contains);
    }
    Ok(exitcode::OK)
}
