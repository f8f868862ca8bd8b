use crate::calc::calendar::HolidayCalendar;
use crate::calc::error::{CalendarError, Direction};
use crate::calc::workday::{days_in_range, is_weekend};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// Default bound on a next/previous business-day search.
pub const DEFAULT_MAX_SEARCH_DAYS: u32 = 365;

/// Why the daily run should or should not happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    Weekend,
    Holiday(String),
    BusinessDay,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Weekend => write!(f, "Weekend"),
            Reason::Holiday(name) => write!(f, "Holiday: {name}"),
            Reason::BusinessDay => write!(f, "Business day"),
        }
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleDecision {
    pub date: NaiveDate,
    pub should_run: bool,
    pub reason: Reason,
    /// `date` itself when `should_run`, otherwise the next business day.
    pub next_run: NaiveDate,
}

/// Decides whether the job-discovery run should happen on a given date.
#[derive(Debug, Clone)]
pub struct BusinessDayGate {
    calendar: HolidayCalendar,
    max_search_days: u32,
}

impl BusinessDayGate {
    pub fn new(calendar: HolidayCalendar, max_search_days: u32) -> Self {
        BusinessDayGate {
            calendar,
            max_search_days,
        }
    }

    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        is_weekend(date)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.calendar.is_holiday(date)
    }

    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.calendar.holiday_name(date)
    }

    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// First business day strictly after `date`.
    pub fn next_business_day(&self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        self.search(date, Direction::Forward)
    }

    /// Last business day strictly before `date`.
    pub fn previous_business_day(&self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        self.search(date, Direction::Backward)
    }

    /// Weekend is checked before holiday, so a Saturday that is also a
    /// configured holiday reports `Reason::Weekend`.
    pub fn should_run(&self, today: NaiveDate) -> Result<ScheduleDecision, CalendarError> {
        let reason = if self.is_weekend(today) {
            Reason::Weekend
        } else if let Some(name) = self.holiday_name(today) {
            Reason::Holiday(name.to_string())
        } else {
            return Ok(ScheduleDecision {
                date: today,
                should_run: true,
                reason: Reason::BusinessDay,
                next_run: today,
            });
        };
        Ok(ScheduleDecision {
            date: today,
            should_run: false,
            reason,
            next_run: self.next_business_day(today)?,
        })
    }

    /// One decision per date in [start, end] inclusive.
    pub fn decisions_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ScheduleDecision>, CalendarError> {
        days_in_range(start, end)
            .into_iter()
            .map(|date| self.should_run(date))
            .collect()
    }

    fn search(&self, from: NaiveDate, direction: Direction) -> Result<NaiveDate, CalendarError> {
        let mut current = from;
        for _ in 0..self.max_search_days {
            let step = match direction {
                Direction::Forward => current.succ_opt(),
                Direction::Backward => current.pred_opt(),
            };
            current = step.ok_or(CalendarError::OutOfRange { from, direction })?;
            if self.is_business_day(current) {
                return Ok(current);
            }
        }
        Err(CalendarError::SearchExhausted {
            from,
            limit: self.max_search_days,
            direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::init::default_holidays;
    use crate::data::HolidayEntry;
    use chrono::Datelike;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn gate_with(entries: Vec<HolidayEntry>) -> BusinessDayGate {
        let calendar = HolidayCalendar::new(entries).unwrap();
        BusinessDayGate::new(calendar, DEFAULT_MAX_SEARCH_DAYS)
    }

    fn bundled_gate() -> BusinessDayGate {
        let calendar = HolidayCalendar::from_data(&default_holidays()).unwrap();
        BusinessDayGate::new(calendar, DEFAULT_MAX_SEARCH_DAYS)
    }

    #[test]
    fn test_new_year_holiday_moves_run_to_next_day() {
        // 2025-01-01 is a Wednesday
        let gate = gate_with(vec![HolidayEntry::new("New Year", 1, 1)]);
        let decision = gate.should_run(d(2025, 1, 1)).unwrap();
        assert!(!decision.should_run);
        assert_eq!(decision.reason.to_string(), "Holiday: New Year");
        assert_eq!(decision.next_run, d(2025, 1, 2));
    }

    #[test]
    fn test_plain_wednesday_is_business_day() {
        let gate = gate_with(vec![HolidayEntry::new("New Year", 1, 1)]);
        let wednesday = d(2025, 1, 8);
        let decision = gate.should_run(wednesday).unwrap();
        assert_eq!(
            decision,
            ScheduleDecision {
                date: wednesday,
                should_run: true,
                reason: Reason::BusinessDay,
                next_run: wednesday,
            }
        );
        assert_eq!(decision.reason.to_string(), "Business day");
    }

    #[test]
    fn test_saturday_holiday_reports_weekend() {
        // 2025-01-11 is a Saturday
        let gate = gate_with(vec![HolidayEntry::new("Founders Day", 1, 11)]);
        assert!(gate.is_holiday(d(2025, 1, 11)));
        let decision = gate.should_run(d(2025, 1, 11)).unwrap();
        assert!(!decision.should_run);
        assert_eq!(decision.reason, Reason::Weekend);
        assert_eq!(decision.next_run, d(2025, 1, 13));
    }

    #[test]
    fn test_sunday_reports_weekend() {
        let gate = gate_with(vec![]);
        let decision = gate.should_run(d(2025, 1, 12)).unwrap();
        assert_eq!(decision.reason.to_string(), "Weekend");
        assert_eq!(decision.next_run, d(2025, 1, 13));
    }

    #[test]
    fn test_friday_holiday_and_weekend_skipped() {
        // 2025-04-18 is a Friday
        let gate = gate_with(vec![HolidayEntry::new("Good Friday", 4, 18)]);
        assert_eq!(gate.next_business_day(d(2025, 4, 17)).unwrap(), d(2025, 4, 21));
        assert_eq!(gate.previous_business_day(d(2025, 4, 21)).unwrap(), d(2025, 4, 17));
    }

    #[test]
    fn test_next_business_day_from_business_day_is_strictly_later() {
        let gate = gate_with(vec![]);
        assert_eq!(gate.next_business_day(d(2025, 1, 6)).unwrap(), d(2025, 1, 7));
        assert_eq!(gate.previous_business_day(d(2025, 1, 7)).unwrap(), d(2025, 1, 6));
    }

    #[test]
    fn test_next_and_previous_cross_year_boundary() {
        let gate = gate_with(vec![HolidayEntry::new("New Year", 1, 1)]);
        // 2025-12-31 is a Wednesday, 2026-01-01 a Thursday
        assert_eq!(gate.next_business_day(d(2025, 12, 31)).unwrap(), d(2026, 1, 2));
        assert_eq!(gate.previous_business_day(d(2026, 1, 2)).unwrap(), d(2025, 12, 31));
    }

    #[test]
    fn test_republic_day_in_bundled_table() {
        let gate = bundled_gate();
        // 2026-01-26 is a Monday
        let date = d(2026, 1, 26);
        assert!(gate.is_holiday(date));
        assert_eq!(gate.holiday_name(date), Some("Republic Day"));
        let decision = gate.should_run(date).unwrap();
        assert_eq!(decision.reason.to_string(), "Holiday: Republic Day");
        assert_eq!(decision.next_run, d(2026, 1, 27));
    }

    #[test]
    fn test_bundled_duplicate_day_names_first_entry() {
        let gate = bundled_gate();
        // Christmas (India) is authored before Youm-e-Quaid (Pakistan)
        assert_eq!(gate.holiday_name(d(2025, 12, 25)), Some("Christmas"));
        // Makar Sankranti precedes the duplicate Pongal entries
        assert_eq!(gate.holiday_name(d(2025, 1, 15)), Some("Makar Sankranti"));
    }

    #[test]
    fn test_next_business_day_properties_hold_for_a_year() {
        let gate = bundled_gate();
        for date in days_in_range(d(2025, 1, 1), d(2025, 12, 31)) {
            let next = gate.next_business_day(date).unwrap();
            assert!(next > date, "{date}");
            assert!(!gate.is_weekend(next), "{date} -> {next}");
            assert!(!gate.is_holiday(next), "{date} -> {next}");
        }
    }

    #[test]
    fn test_previous_business_day_properties_hold_for_a_year() {
        let gate = bundled_gate();
        for date in days_in_range(d(2025, 1, 1), d(2025, 12, 31)) {
            let prev = gate.previous_business_day(date).unwrap();
            assert!(prev < date, "{date}");
            assert!(gate.is_business_day(prev), "{date} -> {prev}");
        }
    }

    #[test]
    fn test_classification_is_pure() {
        let gate = bundled_gate();
        let date = d(2025, 8, 15);
        assert_eq!(gate.is_holiday(date), gate.is_holiday(date));
        assert_eq!(gate.is_weekend(date), gate.is_weekend(date));
        assert_eq!(gate.should_run(date).unwrap(), gate.should_run(date).unwrap());
    }

    #[test]
    fn test_search_bound_trips_on_short_limit() {
        let gate = BusinessDayGate::new(HolidayCalendar::default(), 1);
        // Friday -> Saturday is the only step allowed
        let err = gate.next_business_day(d(2025, 1, 10)).unwrap_err();
        assert_eq!(
            err,
            CalendarError::SearchExhausted {
                from: d(2025, 1, 10),
                limit: 1,
                direction: Direction::Forward,
            }
        );
        let err = gate.previous_business_day(d(2025, 1, 13)).unwrap_err();
        assert!(matches!(
            err,
            CalendarError::SearchExhausted {
                direction: Direction::Backward,
                ..
            }
        ));
    }

    #[test]
    fn test_search_bound_trips_when_every_day_is_a_holiday() {
        let entries = days_in_range(d(2024, 1, 1), d(2024, 12, 31))
            .into_iter()
            .map(|date| HolidayEntry::new("Always", date.month(), date.day()))
            .collect();
        let gate = gate_with(entries);
        assert!(gate.next_business_day(d(2025, 3, 3)).is_err());
        assert!(gate.should_run(d(2025, 3, 3)).is_err());
    }

    #[test]
    fn test_zero_search_limit_always_exhausts() {
        let gate = BusinessDayGate::new(HolidayCalendar::default(), 0);
        assert!(gate.next_business_day(d(2025, 1, 6)).is_err());
        // A business day never needs to search
        assert!(gate.should_run(d(2025, 1, 6)).unwrap().should_run);
    }

    #[test]
    fn test_search_past_max_date_is_out_of_range() {
        let gate = gate_with(vec![]);
        let err = gate.next_business_day(NaiveDate::MAX).unwrap_err();
        assert!(matches!(err, CalendarError::OutOfRange { .. }));
    }

    #[test]
    fn test_decisions_between_covers_each_date() {
        let gate = gate_with(vec![HolidayEntry::new("Good Friday", 4, 18)]);
        let decisions = gate.decisions_between(d(2025, 4, 17), d(2025, 4, 21)).unwrap();
        let runs: Vec<bool> = decisions.iter().map(|x| x.should_run).collect();
        assert_eq!(runs, vec![true, false, false, false, true]);
        assert_eq!(decisions[1].next_run, d(2025, 4, 21));
        assert_eq!(decisions[2].reason, Reason::Weekend);
    }

    #[test]
    fn test_decision_serializes_reason_as_string() {
        let gate = gate_with(vec![HolidayEntry::new("New Year", 1, 1)]);
        let decision = gate.should_run(d(2025, 1, 1)).unwrap();
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["should_run"], false);
        assert_eq!(json["reason"], "Holiday: New Year");
        assert_eq!(json["next_run"], "2025-01-02");
        assert_eq!(json["date"], "2025-01-01");
    }
}
