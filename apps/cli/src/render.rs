//! # Report Rendering
//!
//! Turns a [`SplitReport`] into text for the terminal or JSON for scripts.
//!
//! ```text
//! Results (with 10% tip and 13% tax):
//! Total with Tax + Tip: $123.00
//!
//! Name   Paid ($)  Shared Owed ($)  Personal Owed ($)  Total Owed ($)  Status
//! ─────  ────────  ───────────────  ─────────────────  ──────────────  ────────────────
//! Alice     70.00            61.50               0.00           61.50  gets back $8.50
//! Bob       30.00            61.50               0.00           61.50  owes $31.50
//! ```

use std::fmt::Write as _;

use tabsplit_core::SplitReport;

use crate::error::CliResult;
use crate::state::{AppConfig, OutputFormat, RosterEntry};

/// Shown instead of a report when there is nothing to split.
pub const NO_RESULT_PROMPT: &str = "Please enter total bill and add at least one person.";

const HEADERS: [&str; 6] = [
    "Name",
    "Paid ($)",
    "Shared Owed ($)",
    "Personal Owed ($)",
    "Total Owed ($)",
    "Status",
];

/// Renders a report in the configured format.
pub fn render(report: &SplitReport, config: &AppConfig) -> CliResult<String> {
    match config.format {
        OutputFormat::Table => Ok(render_table(report, config)),
        OutputFormat::Json => render_json(report),
    }
}

/// Pretty-printed JSON; amounts are integer cents, rates are percentages.
pub fn render_json(report: &SplitReport) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Header lines followed by an aligned table, one row per participant.
pub fn render_table(report: &SplitReport, config: &AppConfig) -> String {
    let rows: Vec<[String; 6]> = report
        .results
        .iter()
        .map(|r| {
            [
                r.name.clone(),
                r.paid.to_plain_string(),
                r.shared_owed.to_plain_string(),
                r.personal_owed.to_plain_string(),
                r.total_owed.to_plain_string(),
                format!("{} {}", r.status, config.format_currency(r.balance.abs())),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Results (with {}% tip and {}% tax):",
        report.tip, report.tax
    );
    let _ = writeln!(
        out,
        "Total with Tax + Tip: {}",
        config.format_currency(report.shared_total)
    );
    out.push('\n');

    let header: [String; 6] = HEADERS.map(str::to_string);
    push_row(&mut out, &header, &widths);
    let rule: [String; 6] = widths.map(|w| "─".repeat(w));
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    out
}

/// One line per roster entry, for the session `list` command.
pub fn render_roster(entries: &[RosterEntry], config: &AppConfig) -> String {
    if entries.is_empty() {
        return "No participants. Use 'add [name]' to add one.\n".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        let p = &entry.participant;
        let _ = writeln!(
            out,
            "{}  {:<16}  paid {:>10}  personal {:>10}",
            entry.short_id(),
            p.display_name(),
            config.format_amount(p.amount_paid),
            config.format_amount(p.personal_items),
        );
    }
    out
}

// Name and status columns are left-aligned; amounts are right-aligned.
fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let last = cells.len() - 1;
    let mut line = String::new();

    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let pad = width.saturating_sub(cell.chars().count());
        if i > 0 {
            line.push_str("  ");
        }
        if i == 0 || i == last {
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
        } else {
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        }
    }

    out.push_str(line.trim_end());
    out.push('\n');
}
