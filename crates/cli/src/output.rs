// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::ValueEnum;
use gsc_cmdex::{ErrorRecord, RunReport};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One diagnostic line for a record, colored by severity.
pub fn format_record(record: &ErrorRecord) -> String {
    crate::color::severity(record.severity, &format!("gsc-run: {record}"))
}

/// Print a finished run.
///
/// Text: the child's stdout to stdout, its stderr to stderr, then one line
/// per record. JSON: the whole report on stdout.
pub fn print_report(report: &RunReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let mut out = std::io::stdout().lock();
            out.write_all(report.stdout.as_bytes())?;
            out.flush()?;

            let mut err = std::io::stderr().lock();
            err.write_all(report.stderr.as_bytes())?;
            for record in &report.errors {
                writeln!(err, "{}", format_record(record))?;
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}
