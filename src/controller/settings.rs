use std::fs;
use std::path::Path;

use crate::store::SettingsStore;

/// Loads the combat script picked in the file dialog. A cancelled pick or an
/// unreadable file clears the current script; bytes that are not UTF-8 are
/// replaced, never rejected.
pub fn load_combat_script(picked: Option<&Path>, store: &mut SettingsStore) {
    let Some(path) = picked else {
        tracing::info!("no combat script selected, resetting to empty");
        store.clear_combat_script();
        return;
    };

    match fs::read(path) {
        Ok(bytes) => {
            let contents = String::from_utf8_lossy(&bytes).into_owned();
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            tracing::info!(script = %name, bytes = contents.len(), "loaded combat script");
            tracing::debug!("combat script contents:\n{contents}");
            store.set_combat_script(name, contents);
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                "failed to read combat script, resetting to empty: {err}"
            );
            store.clear_combat_script();
        }
    }
}

/// Text input backing the group/party number fields.
#[derive(Debug, Clone)]
pub struct NumberField {
    text: String,
    invalid_text: bool,
}

impl NumberField {
    pub fn new(value: i64) -> Self {
        Self {
            text: value.to_string(),
            invalid_text: false,
        }
    }

    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Parses the current text. `None` keeps the stored value as is.
    pub fn commit(&mut self) -> Option<i64> {
        match self.text.trim().parse::<i64>() {
            Ok(value) => {
                self.invalid_text = false;
                Some(value)
            }
            Err(_) => {
                self.invalid_text = true;
                None
            }
        }
    }

    /// Red hint: unparsable text or a value outside `range`.
    pub fn shows_error(&self, stored: i64, range: &std::ops::RangeInclusive<i64>) -> bool {
        self.invalid_text || !range.contains(&stored)
    }
}
