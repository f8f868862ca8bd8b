use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};

/// A holiday recurring every year on the same month and day.
/// `month` is 1-based (January = 1).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HolidayEntry {
    pub name: String,
    pub month: u32,
    pub day: u32,
}

impl HolidayEntry {
    pub fn new(name: &str, month: u32, day: u32) -> Self {
        HolidayEntry {
            name: name.to_string(),
            month,
            day,
        }
    }
}

/// A named block of holidays. Variable groups carry the single year their
/// movable dates were authored for; fixed groups leave it empty.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct HolidayGroup {
    pub group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_year: Option<i32>,
    #[serde(default)]
    pub holidays: Vec<HolidayEntry>,
}

impl HolidayGroup {
    pub fn fixed(group: &str) -> Self {
        HolidayGroup {
            group: group.to_string(),
            valid_year: None,
            holidays: Vec::new(),
        }
    }

    pub fn variable(group: &str, year: i32) -> Self {
        HolidayGroup {
            group: group.to_string(),
            valid_year: Some(year),
            holidays: Vec::new(),
        }
    }

    pub fn add(&mut self, name: &str, month: u32, day: u32) {
        self.holidays.push(HolidayEntry::new(name, month, day));
    }
}

/// Contents of holidays.yaml.
#[derive(Serialize, Deserialize, Default, Debug)]
pub struct HolidayData {
    #[serde(default)]
    pub fixed: Vec<HolidayGroup>,
    #[serde(default)]
    pub variable: Vec<HolidayGroup>,
}

impl Persistable for HolidayData {
    fn filename() -> &'static str {
        "holidays.yaml"
    }
}

impl HolidayData {
    /// Every entry in lookup order: fixed groups first, then variable groups,
    /// each in authored order.
    pub fn entries(&self) -> impl Iterator<Item = &HolidayEntry> {
        self.fixed
            .iter()
            .chain(self.variable.iter())
            .flat_map(|g| g.holidays.iter())
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}
