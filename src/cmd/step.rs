use crate::calc::error::Direction;
use crate::calc::BusinessDayGate;
use crate::cmd::{load_gate, resolve_date};
use anyhow::Result;
use chrono::NaiveDate;

/// Prints the business day after (or before) the given date.
pub fn run(date: Option<&str>, direction: Direction) -> Result<()> {
    let from = resolve_date(date)?;
    let gate = load_gate()?;
    write_step(&gate, from, direction, &mut std::io::stdout())
}

pub(crate) fn write_step<W: std::io::Write>(
    gate: &BusinessDayGate,
    from: NaiveDate,
    direction: Direction,
    out: &mut W,
) -> Result<()> {
    let found = match direction {
        Direction::Forward => gate.next_business_day(from)?,
        Direction::Backward => gate.previous_business_day(from)?,
    };
    writeln!(out, "{}", found.format("%Y-%m-%d"))?;
    Ok(())
}
