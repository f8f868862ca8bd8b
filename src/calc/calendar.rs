use crate::calc::error::CalendarError;
use crate::data::{HolidayData, HolidayEntry};
use chrono::{Datelike, NaiveDate};

/// Year used to check month/day validity. A leap year, so Feb 29 is accepted.
const VALIDATION_YEAR: i32 = 2024;

/// A variable group authored for a single year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableGroup {
    pub group: String,
    pub valid_year: i32,
}

/// Validated, read-only holiday lookup.
///
/// Entries are kept in lookup order (fixed groups, then variable groups) and
/// duplicates are retained: matching only tests existence, and
/// `holiday_name` reports the first match.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    entries: Vec<HolidayEntry>,
    variable_groups: Vec<VariableGroup>,
}

impl HolidayCalendar {
    /// Builds a calendar from a flat list of recurring entries.
    pub fn new(entries: Vec<HolidayEntry>) -> Result<Self, CalendarError> {
        for entry in &entries {
            validate(entry)?;
        }
        Ok(HolidayCalendar {
            entries,
            variable_groups: Vec::new(),
        })
    }

    /// Builds a calendar from holidays.yaml contents, rejecting the first
    /// entry that is not a real month/day.
    pub fn from_data(data: &HolidayData) -> Result<Self, CalendarError> {
        let mut calendar = Self::new(data.entries().cloned().collect())?;
        calendar.variable_groups = data
            .variable
            .iter()
            .filter_map(|g| {
                g.valid_year.map(|year| VariableGroup {
                    group: g.group.clone(),
                    valid_year: year,
                })
            })
            .collect();
        Ok(calendar)
    }

    pub fn entries(&self) -> &[HolidayEntry] {
        &self.entries
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.find(date).is_some()
    }

    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.find(date).map(|h| h.name.as_str())
    }

    /// Variable groups whose movable dates were authored for a year other
    /// than `year`. They still match; callers decide how loudly to complain.
    pub fn stale_groups(&self, year: i32) -> Vec<&VariableGroup> {
        self.variable_groups
            .iter()
            .filter(|g| g.valid_year != year)
            .collect()
    }

    fn find(&self, date: NaiveDate) -> Option<&HolidayEntry> {
        let (month, day) = (date.month(), date.day());
        self.entries
            .iter()
            .find(|h| h.month == month && h.day == day)
    }
}

fn validate(entry: &HolidayEntry) -> Result<(), CalendarError> {
    match NaiveDate::from_ymd_opt(VALIDATION_YEAR, entry.month, entry.day) {
        Some(_) => Ok(()),
        None => Err(CalendarError::InvalidEntry {
            name: entry.name.clone(),
            month: entry.month,
            day: entry.day,
        }),
    }
}
