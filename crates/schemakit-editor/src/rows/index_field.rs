//! Index row

use schemakit_core::{
    Dialect, IndexAlgorithm, IndexType, available_algorithms, available_index_types,
    shows_algorithm_selector,
};

use crate::events::IndexUpdate;
use crate::models::{IndexColumn, IndexDraft, LocalId};

/// One entry of the index column selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnChoice<'a> {
    pub name: &'a str,
    pub is_selected: bool,
}

/// View over a single index draft
#[derive(Debug, Clone)]
pub struct IndexField<'a> {
    index: &'a IndexDraft,
    /// Names of the table's columns, in table order
    columns: Vec<&'a str>,
    dialect: &'a Dialect,
}

impl<'a> IndexField<'a> {
    pub fn new(index: &'a IndexDraft, columns: Vec<&'a str>, dialect: &'a Dialect) -> Self {
        Self {
            index,
            columns,
            dialect,
        }
    }

    pub fn index(&self) -> &'a IndexDraft {
        self.index
    }

    pub fn local_id(&self) -> &'a LocalId {
        &self.index.local_id
    }

    pub fn current_type(&self) -> IndexType {
        self.index.current_type()
    }

    /// Type label such as `primary key`
    pub fn type_label(&self) -> String {
        self.current_type().label()
    }

    pub fn type_tooltip(&self) -> String {
        self.current_type().tooltip()
    }

    pub fn available_types(&self) -> Vec<IndexType> {
        available_index_types(self.dialect)
    }

    pub fn available_algorithms(&self) -> Vec<IndexAlgorithm> {
        available_algorithms(self.dialect)
    }

    pub fn shows_algorithm(&self) -> bool {
        shows_algorithm_selector(self.dialect)
    }

    /// Algorithm badge; hidden when the dialect has no selector or none is chosen
    pub fn visible_algorithm(&self) -> Option<IndexAlgorithm> {
        self.index.algorithm.filter(|_| self.shows_algorithm())
    }

    pub fn selected_columns(&self) -> Vec<&'a str> {
        self.index.column_names()
    }

    /// Column selector entries, in table order
    pub fn column_choices(&self) -> Vec<ColumnChoice<'a>> {
        self.columns
            .iter()
            .copied()
            .map(|name| ColumnChoice {
                name,
                is_selected: self.index.has_column(name),
            })
            .collect()
    }

    pub fn selection_summary(&self) -> String {
        format!("{} selected", self.index.index_columns.len())
    }

    /// Add the column if absent, drop it if present
    ///
    /// The column list is rebuilt with ascending, full-length entries.
    pub fn toggle_column(&self, name: &str) -> IndexUpdate {
        let mut selected: Vec<&str> = self.selected_columns();
        if let Some(pos) = selected.iter().position(|c| *c == name) {
            selected.remove(pos);
        } else {
            selected.push(name);
        }
        rebuild_columns(&selected)
    }

    pub fn remove_column(&self, name: &str) -> IndexUpdate {
        let selected: Vec<&str> = self
            .selected_columns()
            .into_iter()
            .filter(|c| *c != name)
            .collect();
        rebuild_columns(&selected)
    }

    pub fn select_type(&self, index_type: IndexType) -> IndexUpdate {
        IndexUpdate::Type(index_type)
    }

    /// `None` picks the "Default" entry
    pub fn select_algorithm(&self, algorithm: Option<IndexAlgorithm>) -> IndexUpdate {
        IndexUpdate::Algorithm(algorithm)
    }
}

fn rebuild_columns(names: &[&str]) -> IndexUpdate {
    IndexUpdate::Columns(names.iter().map(|name| IndexColumn::asc(*name)).collect())
}
