//! Editor settings
//!
//! Defaults applied when the user adds a column or an index, and the dialect
//! used when a draft does not name one. Stored as TOML in the user's config
//! directory.

use anyhow::{Context, Result};
use schemakit_core::{Dialect, DialectDataType, IndexType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::{ColumnDraft, IndexDraft};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub default_dialect: Dialect,
    pub new_column: NewColumnDefaults,
    pub new_index: NewIndexDefaults,
}

/// Defaults for a freshly added column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewColumnDefaults {
    /// Catalog id of the initial type; the first catalog entry when unset
    pub data_type_id: Option<String>,
    pub nullable: bool,
}

impl Default for NewColumnDefaults {
    fn default() -> Self {
        Self {
            data_type_id: None,
            nullable: true,
        }
    }
}

/// Defaults for a freshly added index
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewIndexDefaults {
    pub index_type: IndexType,
}

impl EditorSettings {
    /// Load settings from the default location; a missing file yields defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&settings_path()?)
    }

    /// Load settings from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse settings from {:?}", path))
    }

    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse settings TOML")
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;
        Ok(())
    }

    /// Blank column using the configured defaults
    pub fn new_column(&self, data_types: &[DialectDataType]) -> ColumnDraft {
        let data_type_id = self
            .new_column
            .data_type_id
            .clone()
            .or_else(|| data_types.first().map(|dt| dt.id.clone()))
            .unwrap_or_default();

        let mut column = ColumnDraft::new(data_type_id);
        column.is_nullable = self.new_column.nullable;
        column
    }

    /// Empty index using the configured defaults
    pub fn new_index(&self) -> IndexDraft {
        IndexDraft::new(self.new_index.index_type)
    }
}

/// Default settings file location
pub fn settings_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join("schemakit").join("settings.toml"))
}
