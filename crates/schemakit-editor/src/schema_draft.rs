//! Schema draft
//!
//! The editable table schema behind the column and index rows: the dialect,
//! its type catalog and the keyed column and index lists. Row edits arrive as
//! keyed updates and land here.

use std::path::Path;

use anyhow::Context;
use schemakit_core::{Dialect, DialectDataType};
use serde::{Deserialize, Serialize};

use crate::events::{ColumnUpdate, IndexUpdate, SchemaEditorEvent};
use crate::models::{ColumnDraft, DraftList, IndexDraft, LocalId};
use crate::rows::{FieldsList, IndexField};
use crate::settings::EditorSettings;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDraft {
    /// Dialect that decides which options and index kinds are offered
    #[serde(default)]
    pub dialect: Dialect,

    /// Type catalog of the dialect
    #[serde(default, rename = "data_type")]
    pub data_types: Vec<DialectDataType>,

    #[serde(default, rename = "column")]
    pub columns: DraftList<ColumnDraft>,

    #[serde(default, rename = "index")]
    pub indexes: DraftList<IndexDraft>,

    /// Most recently added column, whose name input is pre-selected
    #[serde(skip)]
    new_column_id: Option<LocalId>,
}

impl SchemaDraft {
    pub fn new(dialect: Dialect, data_types: Vec<DialectDataType>) -> Self {
        Self {
            dialect,
            data_types,
            ..Default::default()
        }
    }

    /// Parse a draft file
    pub fn from_toml(source: &str) -> schemakit_core::Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read a draft file from disk
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read draft from {:?}", path))?;
        let draft = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse draft from {:?}", path))?;
        tracing::debug!(
            path = %path.display(),
            dialect = %draft.dialect,
            columns = draft.columns.len(),
            indexes = draft.indexes.len(),
            "Loaded schema draft"
        );
        Ok(draft)
    }

    pub fn new_column_id(&self) -> Option<&LocalId> {
        self.new_column_id.as_ref()
    }

    /// Append a blank column and mark it as new
    pub fn add_column(&mut self, settings: &EditorSettings) -> LocalId {
        let column = settings.new_column(&self.data_types);
        let local_id = self.columns.insert(column);
        tracing::debug!(local_id = %local_id, "Added column");
        self.new_column_id = Some(local_id.clone());
        local_id
    }

    /// Apply an edit to a column; unknown keys are ignored
    pub fn update_column(&mut self, local_id: &str, update: ColumnUpdate) -> bool {
        tracing::debug!(local_id, ?update, "Updating column");
        let updated = self.columns.update(local_id, |column| update.apply(column));
        if !updated {
            tracing::trace!(local_id, "No column with this key");
        }
        updated
    }

    /// Remove a column; indexes referencing it by name are left as they are
    pub fn delete_column(&mut self, local_id: &str) -> bool {
        match self.columns.remove(local_id) {
            Some(column) => {
                tracing::debug!(local_id, name = %column.name, "Deleted column");
                if self.new_column_id.as_ref().is_some_and(|id| id.as_str() == local_id) {
                    self.new_column_id = None;
                }
                true
            }
            None => {
                tracing::trace!(local_id, "No column with this key");
                false
            }
        }
    }

    /// Append an empty index
    pub fn add_index(&mut self, settings: &EditorSettings) -> LocalId {
        let local_id = self.indexes.insert(settings.new_index());
        tracing::debug!(local_id = %local_id, "Added index");
        local_id
    }

    pub fn update_index(&mut self, local_id: &str, update: IndexUpdate) -> bool {
        tracing::debug!(local_id, ?update, "Updating index");
        let updated = self.indexes.update(local_id, |index| update.apply(index));
        if !updated {
            tracing::trace!(local_id, "No index with this key");
        }
        updated
    }

    pub fn delete_index(&mut self, local_id: &str) -> bool {
        let removed = self.indexes.remove(local_id).is_some();
        if removed {
            tracing::debug!(local_id, "Deleted index");
        } else {
            tracing::trace!(local_id, "No index with this key");
        }
        removed
    }

    /// Route a keyed row event; returns whether a draft changed
    pub fn dispatch(&mut self, event: SchemaEditorEvent) -> bool {
        match event {
            SchemaEditorEvent::UpdateColumn { local_id, update } => {
                self.update_column(local_id.as_str(), update)
            }
            SchemaEditorEvent::DeleteColumn { local_id } => self.delete_column(local_id.as_str()),
            SchemaEditorEvent::UpdateIndex { local_id, update } => {
                self.update_index(local_id.as_str(), update)
            }
            SchemaEditorEvent::DeleteIndex { local_id } => self.delete_index(local_id.as_str()),
        }
    }

    /// Column names offered by the index column selector, in table order
    pub fn column_choices(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    pub fn fields_list(&self) -> FieldsList<'_> {
        FieldsList::new(
            &self.columns,
            &self.data_types,
            &self.dialect,
            self.new_column_id.as_ref(),
        )
    }

    pub fn index_fields(&self) -> Vec<IndexField<'_>> {
        let columns = self.column_choices();
        self.indexes
            .iter()
            .map(|index| IndexField::new(index, columns.clone(), &self.dialect))
            .collect()
    }
}
