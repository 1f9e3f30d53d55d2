//! Index draft model

use schemakit_core::{IndexAlgorithm, IndexType};
use serde::{Deserialize, Serialize};

use super::{Keyed, LocalId};

/// Sort direction of an indexed column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "Asc",
            Self::Desc => "Desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One column of an index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexColumn {
    pub column_name: String,
    #[serde(default)]
    pub sort_order: SortOrder,
    /// Prefix length (MySQL)
    #[serde(default)]
    pub length: Option<u32>,
}

impl IndexColumn {
    /// Ascending, full-length entry for a column
    pub fn asc(column_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            sort_order: SortOrder::Asc,
            length: None,
        }
    }

    /// Builder: sort descending
    pub fn desc(mut self) -> Self {
        self.sort_order = SortOrder::Desc;
        self
    }
}

/// Index draft model
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexDraft {
    /// Editor key
    #[serde(default)]
    pub local_id: LocalId,
    /// Index type; a missing type reads as STANDARD
    #[serde(default, rename = "type")]
    pub index_type: Option<IndexType>,
    /// Access method; `None` leaves the choice to the database
    #[serde(default)]
    pub algorithm: Option<IndexAlgorithm>,
    /// Columns in the index, in key order
    #[serde(default)]
    pub index_columns: Vec<IndexColumn>,
}

impl IndexDraft {
    /// Create an empty index of the given type
    pub fn new(index_type: IndexType) -> Self {
        Self {
            index_type: Some(index_type),
            ..Self::default()
        }
    }

    /// Builder: set editor key
    pub fn with_id(mut self, local_id: impl Into<LocalId>) -> Self {
        self.local_id = local_id.into();
        self
    }

    /// Builder: add an ascending column
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.index_columns.push(IndexColumn::asc(name));
        self
    }

    /// Builder: set algorithm
    pub fn with_algorithm(mut self, algorithm: IndexAlgorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Effective index type
    pub fn current_type(&self) -> IndexType {
        self.index_type.unwrap_or_default()
    }

    /// Names of the indexed columns, in key order
    pub fn column_names(&self) -> Vec<&str> {
        self.index_columns
            .iter()
            .map(|c| c.column_name.as_str())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index_columns.iter().any(|c| c.column_name == name)
    }
}

impl Keyed for IndexDraft {
    const KEY_PREFIX: &'static str = "idx";

    fn local_id(&self) -> &LocalId {
        &self.local_id
    }

    fn set_local_id(&mut self, local_id: LocalId) {
        self.local_id = local_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_type_reads_as_standard() {
        let index = IndexDraft::default();
        assert_eq!(index.index_type, None);
        assert_eq!(index.current_type(), IndexType::Standard);
    }

    #[test]
    fn test_column_builder() {
        let index = IndexDraft::new(IndexType::Unique).column("email").column("tenant_id");
        assert_eq!(index.column_names(), vec!["email", "tenant_id"]);
        assert!(index.has_column("email"));
        assert!(!index.has_column("id"));
        assert_eq!(index.index_columns[0].sort_order, SortOrder::Asc);
    }
}
