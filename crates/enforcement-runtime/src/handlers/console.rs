//! # Console Handler
//!
//! Parses operator commands and renders desk state as plain text.
//!
//! ```text
//! overview              dashboard metrics and chart series
//! capture <image>       analyze a captured frame
//! log [term]            violation log, optionally filtered
//! enter <plate>         manual violation entry
//! pay <id>              settle a pending fine
//! track <id>            fulfillment status of a record
//! help | quit
//! ```

use std::fmt::Write;

use shared_types::{Violation, ViolationId};
use thiserror::Error;

use crate::desk::{CaptureOutcome, Overview, Settlement, TrackingReport};

/// One operator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Overview,
    Capture(String),
    Log(Option<String>),
    Enter(String),
    Pay(ViolationId),
    Track(ViolationId),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

impl Command {
    /// Parse one input line. `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let required = |command: &'static str, argument: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument { command, argument })
            } else {
                Ok(rest.to_string())
            }
        };

        let command = match word.to_lowercase().as_str() {
            "" => return Ok(None),
            "overview" | "stats" => Self::Overview,
            "capture" => Self::Capture(required("capture", "an image reference")?),
            "log" => Self::Log((!rest.is_empty()).then(|| rest.to_string())),
            "enter" => Self::Enter(required("enter", "a plate number")?),
            "pay" => Self::Pay(ViolationId::new(required("pay", "a violation id")?)),
            "track" => Self::Track(ViolationId::new(required("track", "a violation id")?)),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

pub const HELP: &str = "\
commands:
  overview              dashboard metrics and chart series
  capture <image>       analyze a captured frame
  log [term]            violation log, filtered by plate or owner name
  enter <plate>         record a violation manually
  pay <id>              settle a pending fine
  track <id>            fulfillment status of a record
  quit";

pub fn render_overview(overview: &Overview) -> String {
    let stats = &overview.stats;
    let mut out = String::new();
    let _ = writeln!(out, "violations        {}", stats.total_violations);
    let _ = writeln!(out, "fines collected   {}", stats.total_fines_collected);
    let _ = writeln!(out, "helmets delivered {}", stats.helmets_delivered);
    let _ = writeln!(out, "govt revenue      {}", stats.government_revenue);
    let _ = writeln!(
        out,
        "pending           {} ({} outstanding)",
        stats.pending_fines, stats.pending_amount
    );

    if !overview.settlement_history.is_empty() {
        let _ = writeln!(out, "recent settlements (oldest first):");
        for bar in &overview.settlement_history {
            let _ = writeln!(
                out,
                "  {:<14} {:>6} {}",
                bar.plate_number.as_str(),
                bar.fine_amount,
                if bar.settled { "settled" } else { "pending" }
            );
        }
    }

    let split = &overview.logistics;
    let share = split
        .shipped_share()
        .map(|s| format!("{:.0}% shipped", s * 100.0))
        .unwrap_or_else(|| "no data".to_string());
    let _ = write!(
        out,
        "logistics         {} shipped / {} awaiting payment ({})",
        split.shipped, split.pending_payment, share
    );
    out
}

pub fn render_violation(v: &Violation) -> String {
    let owner = v
        .owner
        .as_ref()
        .map(|o| format!("{} ({})", o.name, o.phone))
        .unwrap_or_else(|| "unknown owner".to_string());
    format!(
        "{}  {:<14} #{} fine {:>5}  {:<18} {}  {}",
        v.id,
        v.plate_number.as_str(),
        v.offense_count,
        v.fine_amount,
        v.status.as_str(),
        owner,
        v.timestamp
    )
}

pub fn render_log(records: &[Violation]) -> String {
    if records.is_empty() {
        return "no violations".to_string();
    }
    records
        .iter()
        .map(render_violation)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_capture(outcome: &CaptureOutcome) -> String {
    match outcome {
        CaptureOutcome::Compliant(analysis) => format!(
            "helmet detected ({:.0}% confidence), rider compliant",
            analysis.confidence * 100.0
        ),
        CaptureOutcome::Recorded {
            violation,
            confidence,
        } => format!(
            "NO HELMET ({:.0}% confidence)\n{}",
            confidence * 100.0,
            render_violation(violation)
        ),
    }
}

pub fn render_settlement(settlement: &Settlement) -> String {
    format!(
        "payment of {} received for {}; next: {}",
        settlement.violation.fine_amount,
        settlement.violation.id,
        settlement.fulfillment.describe()
    )
}

pub fn render_tracking(report: &TrackingReport) -> String {
    format!(
        "{}\nstage: {}",
        render_violation(&report.violation),
        report.stage.describe()
    )
}
