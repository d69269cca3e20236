use crate::core::{ProbeOutcome, ProbeReport};
use serde_json::Value;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn pretty(value: &Value) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(io::Error::from)
}

/// Renders the report to a single stream.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &ProbeReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report).map_err(io::Error::from)?;
            writeln!(out)
        }
        OutputFormat::Text => write_outcome(out, &report.outcome),
    }
}

/// Success goes to `out`, failure to `err`. Returns the process exit code:
/// 0 unless the probe failed and `fail_on_error` is set.
pub fn emit<O: Write, E: Write>(
    report: &ProbeReport,
    format: OutputFormat,
    fail_on_error: bool,
    out: &mut O,
    err: &mut E,
) -> io::Result<i32> {
    if report.outcome.is_success() {
        write_report(out, report, format)?;
        return Ok(0);
    }

    write_report(err, report, format)?;
    Ok(if fail_on_error { 1 } else { 0 })
}

pub fn write_outcome<W: Write>(out: &mut W, outcome: &ProbeOutcome) -> io::Result<()> {
    match outcome {
        ProbeOutcome::Success { status, body } => {
            writeln!(out, "Status: {}", status)?;
            writeln!(out, "Data: {}", pretty(body)?)
        }
        ProbeOutcome::Failure {
            status,
            body,
            message,
        } => {
            if let Some(status) = status {
                writeln!(out, "Error status: {}", status)?;
            }
            match body {
                Some(body) => writeln!(out, "Error data: {}", pretty(body)?),
                None => writeln!(out, "Error: {}", message),
            }
        }
    }
}
