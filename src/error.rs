use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings in {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode settings: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid summon catalog: {0}")]
    Catalog(String),
}

impl SettingsError {
    /// True when the settings file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SettingsError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
