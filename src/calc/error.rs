use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Which way a business-day search walks the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CalendarError {
    /// A holiday whose month/day is not a date in any year.
    #[error("invalid holiday entry '{name}': month {month}, day {day} is not a calendar date")]
    InvalidEntry { name: String, month: u32, day: u32 },

    /// No business day within the configured search bound.
    #[error("calendar misconfigured: no business day found searching {direction} from {from} within {limit} day(s)")]
    SearchExhausted {
        from: NaiveDate,
        limit: u32,
        direction: Direction,
    },

    /// The search walked past the range chrono can represent.
    #[error("date out of range searching {direction} from {from}")]
    OutOfRange { from: NaiveDate, direction: Direction },
}
