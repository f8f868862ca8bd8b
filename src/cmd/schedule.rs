use crate::calc::ScheduleDecision;
use crate::cmd::{load_gate, resolve_date, warn_stale_groups};
use anyhow::{bail, Result};
use chrono::Datelike;

/// Dry-runs the daily tick over [from, to] and prints one row per date.
pub fn run(from: &str, to: &str) -> Result<()> {
    let start = resolve_date(Some(from))?;
    let end = resolve_date(Some(to))?;
    if start > end {
        bail!("--from {} is after --to {}", start, end);
    }
    let gate = load_gate()?;
    for year in start.year()..=end.year() {
        warn_stale_groups(&gate, year);
    }
    let decisions = gate.decisions_between(start, end)?;
    write_schedule(&decisions, &mut std::io::stdout())
}

pub(crate) fn write_schedule<W: std::io::Write>(
    decisions: &[ScheduleDecision],
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Schedule")?;
    writeln!(out, "---")?;
    writeln!(
        out,
        "  {:<16} {:<5} {:<12} {}",
        "Date", "Run", "Next Run", "Reason"
    )?;
    for x in decisions {
        writeln!(
            out,
            "  {:<16} {:<5} {:<12} {}",
            x.date.format("%a %Y-%m-%d").to_string(),
            if x.should_run { "Yes" } else { "No" },
            x.next_run.format("%Y-%m-%d").to_string(),
            x.reason
        )?;
    }
    let runs = decisions.iter().filter(|x| x.should_run).count();
    writeln!(out, "---")?;
    writeln!(
        out,
        "Total: {} run(s), {} skipped",
        runs,
        decisions.len() - runs
    )?;
    Ok(())
}
