use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SettingsError;
use crate::model::settings::BotSettings;

pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

pub fn load_settings(path: &Path) -> Result<BotSettings, SettingsError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| SettingsError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Startup load. A missing, unreadable or malformed file yields the defaults.
pub fn load_or_default(path: &Path) -> BotSettings {
    match load_settings(path) {
        Ok(settings) => {
            tracing::info!(path = %path.display(), "loaded settings");
            tracing::debug!(?settings, "settings contents");
            settings
        }
        Err(err) if err.is_not_found() => {
            tracing::info!(path = %path.display(), "no settings file yet, using defaults");
            BotSettings::default()
        }
        Err(err) => {
            tracing::warn!("{err}; using default settings");
            BotSettings::default()
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_SETTINGS_FILE.into());
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replaces the whole file. Written next to the target first and renamed over
/// it, so a failed write leaves the previous contents in place. The temporary
/// file is removed again on either failure.
pub fn write_settings(path: &Path, settings: &BotSettings) -> Result<(), SettingsError> {
    let json = settings.to_pretty_json().map_err(SettingsError::Encode)?;

    let tmp = temp_path(path);
    fs::write(&tmp, json).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        SettingsError::Write {
            path: tmp.clone(),
            source,
        }
    })?;

    fs::rename(&tmp, path).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        SettingsError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}
