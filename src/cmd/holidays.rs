use crate::data::{HolidayData, HolidayGroup, Persistable};
use anyhow::Result;
use chrono::{Datelike, Local};

pub fn run() -> Result<()> {
    let holiday_data = HolidayData::load()?;
    let year = Local::now().year();
    write_holidays(&holiday_data, year, &mut std::io::stdout())
}

pub(crate) fn write_holidays<W: std::io::Write>(
    data: &HolidayData,
    year: i32,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Holidays")?;
    for g in data.fixed.iter().chain(data.variable.iter()) {
        writeln!(out, "---")?;
        writeln!(out, "{}", group_heading(g, year))?;
        writeln!(out, "  {:<8} {}", "Date", "Name")?;
        for h in &g.holidays {
            writeln!(out, "  {:<8} {}", format!("{:02}-{:02}", h.month, h.day), h.name)?;
        }
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} holiday(s)", data.len())?;
    Ok(())
}

fn group_heading(g: &HolidayGroup, year: i32) -> String {
    match g.valid_year {
        None => format!("{} (every year)", g.group),
        Some(y) if y == year => format!("{} (valid {})", g.group, y),
        Some(y) => format!("{} (valid {}, STALE for {})", g.group, y, year),
    }
}
