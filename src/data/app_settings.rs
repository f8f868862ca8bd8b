use crate::calc::gate::DEFAULT_MAX_SEARCH_DAYS;
use crate::data::persistence::Persistable;
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Upper bound on days walked when searching for the next or previous
    /// business day before the calendar is declared misconfigured.
    pub max_search_days: u32,
    /// `tracing_subscriber::EnvFilter` directive used when RUST_LOG is unset.
    pub log_filter: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            max_search_days: DEFAULT_MAX_SEARCH_DAYS,
            log_filter: "info".to_string(),
        }
    }
}

/// Wrapper that reads the `settings` key from config.yaml.
#[derive(Serialize, Deserialize, Default, Debug)]
struct SettingsWrapper {
    #[serde(default)]
    settings: AppSettings,
}

impl Persistable for SettingsWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
}

impl AppSettings {
    pub fn load() -> Result<Self> {
        Ok(SettingsWrapper::load()?.settings)
    }

    pub fn load_from(dir: &std::path::Path) -> Result<Self> {
        Ok(SettingsWrapper::load_from(dir)?.settings)
    }

    pub fn save_to(&self, dir: &std::path::Path) -> Result<()> {
        let wrapper = SettingsWrapper {
            settings: self.clone(),
        };
        wrapper.save_to(dir)
    }
}
