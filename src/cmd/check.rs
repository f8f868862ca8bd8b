use crate::calc::ScheduleDecision;
use crate::cmd::{load_gate, resolve_date, warn_stale_groups};
use anyhow::Result;
use chrono::Datelike;
use tracing::info;

pub fn run(date: Option<&str>, json: bool) -> Result<()> {
    let today = resolve_date(date)?;
    let gate = load_gate()?;
    warn_stale_groups(&gate, today.year());

    let decision = gate.should_run(today)?;
    if decision.should_run {
        info!(date = %decision.date, "Proceeding with workflow execution");
    } else {
        info!(
            date = %decision.date,
            reason = %decision.reason,
            next_run = %decision.next_run,
            "Skipping workflow"
        );
    }
    write_decision(&decision, json, &mut std::io::stdout())
}

pub(crate) fn write_decision<W: std::io::Write>(
    decision: &ScheduleDecision,
    json: bool,
    out: &mut W,
) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, decision)?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(out, "{:<12} {}", "Date:", decision.date.format("%a %Y-%m-%d"))?;
    writeln!(
        out,
        "{:<12} {}",
        "Run:",
        if decision.should_run { "Yes" } else { "No" }
    )?;
    writeln!(out, "{:<12} {}", "Reason:", decision.reason)?;
    writeln!(
        out,
        "{:<12} {}",
        "Next run:",
        decision.next_run.format("%a %Y-%m-%d")
    )?;
    Ok(())
}
