use std::path::PathBuf;

use crate::persistence::settings_io::DEFAULT_SETTINGS_FILE;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window_title: String,
    /// Relative paths resolve against the working directory.
    pub settings_path: PathBuf,
    pub summon_assets_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Granblue Automation".into(),
            settings_path: PathBuf::from(DEFAULT_SETTINGS_FILE),
            summon_assets_dir: PathBuf::from("images").join("summons"),
        }
    }
}

impl AppConfig {
    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = path.into();
        self
    }
}
