pub mod check;
pub mod holidays;
pub mod init;
pub mod root;
pub mod schedule;
pub mod step;

use crate::calc::{BusinessDayGate, HolidayCalendar};
use crate::data::persistence::get_data_dir;
use crate::data::{AppSettings, HolidayData, Persistable};
use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use std::path::Path;
use tracing::{debug, warn};

/// A week: any shorter bound cannot get past a plain weekend next to a holiday.
const MIN_SEARCH_DAYS: u32 = 7;

/// Loads settings and holidays.yaml from the data directory and builds the gate.
pub(crate) fn load_gate() -> Result<BusinessDayGate> {
    load_gate_from(&get_data_dir()?)
}

/// Unlike other data files, a missing holidays.yaml is an error: an empty
/// calendar would approve every weekday.
pub(crate) fn load_gate_from(dir: &Path) -> Result<BusinessDayGate> {
    let settings = AppSettings::load_from(dir)?;
    let path = dir.join(HolidayData::filename());
    if !path.exists() {
        bail!(
            "{} not found; run `jobgate init` or restore the holiday table",
            path.display()
        );
    }
    let holidays = HolidayData::load_from(dir)?;
    if holidays.is_empty() {
        warn!(file = %path.display(), "holiday table is empty, only weekends will be skipped");
    }
    build_gate(&settings, &holidays)
}

pub(crate) fn build_gate(
    settings: &AppSettings,
    holidays: &HolidayData,
) -> Result<BusinessDayGate> {
    if settings.max_search_days < MIN_SEARCH_DAYS {
        bail!(
            "settings.max_search_days is {}, must be at least {}",
            settings.max_search_days,
            MIN_SEARCH_DAYS
        );
    }
    let calendar =
        HolidayCalendar::from_data(holidays).context("holidays.yaml contains an invalid entry")?;
    debug!(
        entries = calendar.entries().len(),
        max_search_days = settings.max_search_days,
        "loaded holiday calendar"
    );
    Ok(BusinessDayGate::new(calendar, settings.max_search_days))
}

/// Parses an optional `YYYY-MM-DD` argument, defaulting to local today.
pub(crate) fn resolve_date(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{s}', expected YYYY-MM-DD")),
        None => Ok(Local::now().date_naive()),
    }
}

/// Logs a warning for every variable holiday group authored for another
/// year and returns the names of those groups.
pub(crate) fn warn_stale_groups(gate: &BusinessDayGate, year: i32) -> Vec<String> {
    let stale = gate.calendar().stale_groups(year);
    for g in &stale {
        warn!(
            group = %g.group,
            valid_year = g.valid_year,
            year,
            "movable holiday dates were authored for a different year"
        );
    }
    stale.into_iter().map(|g| g.group.clone()).collect()
}
