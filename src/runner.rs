//! Drives an [`InputStateMachine`] from a reader and writes reports as they
//! are produced.

use crate::error::SimulationError;
use crate::interpreter::{InputStateMachine, InterpreterConfig};
use crate::robot::RobotReport;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::debug;

/// How each [`RobotReport`] is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// `"<x> <y> <O>[ LOST]"`, one per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Totals for a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub robots: usize,
    pub lost: usize,
    pub scents: usize,
}

/// Feeds every line of `input` through a fresh state machine.
///
/// Reports are written and flushed one at a time, so output produced before an
/// error stays in `output`.
///
/// # Errors
///
/// The first malformed line, or any failure reading `input` or writing
/// `output`.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: InterpreterConfig,
    format: OutputFormat,
) -> Result<RunSummary, SimulationError> {
    let mut machine = InputStateMachine::new(config);
    let mut summary = RunSummary::default();

    for line in input.lines() {
        let line = line?;
        let Some(report) = machine.feed_line(&line)? else {
            continue;
        };
        summary.robots += 1;
        if report.lost {
            summary.lost += 1;
        }
        write_report(&mut output, &report, format)?;
        output.flush()?;
    }

    summary.scents = machine.scents().map_or(0, |scents| scents.len());
    debug!(?summary, "input exhausted");
    Ok(summary)
}

fn write_report<W: Write>(
    output: &mut W,
    report: &RobotReport,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(output, "{report}"),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, report)?;
            writeln!(output)
        }
    }
}
