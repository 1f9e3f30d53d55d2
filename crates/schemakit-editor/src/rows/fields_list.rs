//! Column list

use schemakit_core::{Dialect, DialectDataType};

use super::ColumnField;
use crate::models::{ColumnDraft, DraftList, LocalId};

/// All column rows of a draft, in display order
#[derive(Debug, Clone)]
pub struct FieldsList<'a> {
    rows: Vec<ColumnField<'a>>,
}

impl<'a> FieldsList<'a> {
    pub fn new(
        columns: &'a DraftList<ColumnDraft>,
        data_types: &'a [DialectDataType],
        dialect: &'a Dialect,
        new_column_id: Option<&LocalId>,
    ) -> Self {
        let rows = columns
            .iter()
            .map(|column| {
                let is_new = new_column_id == Some(&column.local_id);
                ColumnField::new(column, data_types, dialect).with_new(is_new)
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[ColumnField<'a>] {
        &self.rows
    }

    /// Whether the list shows its empty state
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row of the most recently added column
    pub fn new_row(&self) -> Option<&ColumnField<'a>> {
        self.rows.iter().find(|row| row.is_new())
    }
}
