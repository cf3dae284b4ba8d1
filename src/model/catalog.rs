use serde::Deserialize;
use std::collections::HashSet;

use crate::error::SettingsError;

const BUILTIN_CATALOG: &str = include_str!("../../data/summons.json");

#[derive(Debug, Clone, Deserialize)]
struct CategoryEntry {
    summons: Vec<String>,
}

/// Read-only list of every selectable support summon, grouped by category.
#[derive(Debug, Clone, Default)]
pub struct SummonCatalog {
    categories: Vec<(String, Vec<String>)>,
}

impl SummonCatalog {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        // preserve_order keeps the categories in document order
        let raw: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| SettingsError::Catalog(e.to_string()))?;

        let mut categories = Vec::with_capacity(raw.len());
        for (key, value) in raw {
            let entry: CategoryEntry = serde_json::from_value(value)
                .map_err(|e| SettingsError::Catalog(format!("category {key}: {e}")))?;
            categories.push((key, entry.summons));
        }

        Ok(Self { categories })
    }

    pub fn builtin() -> Result<Self, SettingsError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_categories<K, S>(categories: impl IntoIterator<Item = (K, Vec<S>)>) -> Self
    where
        K: Into<String>,
        S: Into<String>,
    {
        Self {
            categories: categories
                .into_iter()
                .map(|(k, v)| (k.into(), v.into_iter().map(Into::into).collect::<Vec<String>>()))
                .collect(),
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// All summons in catalog order, first occurrence wins.
    pub fn flatten(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.categories
            .iter()
            .flat_map(|(_, summons)| summons.iter())
            .filter(|name| seen.insert(name.as_str()))
            .cloned()
            .collect()
    }
}

/// "Lucifer Omega" -> "lucifer_omega.png"
pub fn asset_file_name(name: &str) -> String {
    format!("{}.png", name.replace(' ', "_").to_lowercase())
}
