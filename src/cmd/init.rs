use crate::data::{AppSettings, HolidayData, HolidayGroup, Persistable};
use anyhow::Result;
use std::path::Path;
use tracing::info;

pub fn run() -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    run_in_dir(&dir)?;
    info!(dir = %dir.display(), "data files initialized");
    Ok(())
}

/// Writes all default data files into `dir`. Exposed for unit testing.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    AppSettings::default().save_to(dir)?;
    info!(file = "config.yaml", dir = %dir.display(), "wrote default settings");
    let holidays = default_holidays();
    holidays.save_to(dir)?;
    info!(
        file = "holidays.yaml",
        entries = holidays.len(),
        "wrote default holiday table"
    );
    Ok(())
}

/// National holidays for India and Pakistan plus the 2025 movable dates.
/// Months are 1-based.
pub(crate) fn default_holidays() -> HolidayData {
    let mut india = HolidayGroup::fixed("INDIA_FIXED");
    india.add("Republic Day", 1, 26);
    india.add("Independence Day", 8, 15);
    india.add("Gandhi Jayanti", 10, 2);
    india.add("Christmas", 12, 25);
    india.add("New Year", 1, 1);
    // Easter-derived; authored as fixed dates and only approximate.
    india.add("Good Friday", 4, 7);
    india.add("Easter Monday", 4, 10);

    let mut pakistan = HolidayGroup::fixed("PAKISTAN_FIXED");
    pakistan.add("Independence Day (Pakistan)", 8, 14);
    pakistan.add("Republic Day (Pakistan)", 3, 23);
    pakistan.add("Youm-e-Takbir (Pakistan)", 5, 28);
    pakistan.add("Youm-e-Azadi (Pakistan)", 8, 14);
    pakistan.add("Youm-e-Iqbal (Pakistan)", 11, 9);
    pakistan.add("Youm-e-Quaid (Pakistan)", 12, 25);

    let mut variable = HolidayGroup::variable("VARIABLE_2025", 2025);
    // Hindu festivals
    variable.add("Makar Sankranti", 1, 15);
    variable.add("Pongal", 1, 15);
    variable.add("Maha Shivratri", 2, 18);
    variable.add("Holi", 3, 25);
    variable.add("Ram Navami", 4, 17);
    variable.add("Hanuman Jayanti", 4, 23);
    variable.add("Akshaya Tritiya", 5, 22);
    variable.add("Buddha Purnima", 5, 23);
    variable.add("Raksha Bandhan", 8, 30);
    variable.add("Krishna Janmashtami", 9, 7);
    variable.add("Ganesh Chaturthi", 9, 19);
    variable.add("Onam", 9, 20);
    variable.add("Navratri", 10, 3);
    variable.add("Dussehra", 10, 12);
    variable.add("Karva Chauth", 10, 31);
    variable.add("Diwali", 11, 1);
    variable.add("Chhath Puja", 11, 8);
    variable.add("Guru Nanak Jayanti", 11, 27);
    // Islamic festivals (approximate)
    variable.add("Eid al-Fitr", 4, 10);
    variable.add("Eid al-Adha", 7, 17);
    variable.add("Muharram", 7, 28);
    variable.add("Milad un-Nabi", 9, 15);
    // Sikh festivals
    variable.add("Baisakhi", 4, 14);
    variable.add("Guru Gobind Singh Jayanti", 1, 5);
    // Jain festivals
    variable.add("Mahavir Jayanti", 4, 10);
    // Regional festivals
    variable.add("Lohri", 1, 14);
    variable.add("Bihu", 1, 15);
    variable.add("Pongal", 1, 15);
    variable.add("Makar Sankranti", 1, 15);

    HolidayData {
        fixed: vec![india, pakistan],
        variable: vec![variable],
    }
}
