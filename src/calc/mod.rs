pub mod calendar;
pub mod error;
pub mod gate;
pub mod workday;

pub use calendar::HolidayCalendar;
pub use gate::{BusinessDayGate, ScheduleDecision};
