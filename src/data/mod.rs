pub mod app_settings;
pub mod holiday;
pub mod persistence;

pub use app_settings::AppSettings;
pub use holiday::{HolidayData, HolidayEntry, HolidayGroup};
pub use persistence::Persistable;
