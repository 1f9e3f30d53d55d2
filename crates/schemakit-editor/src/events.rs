//! Edits emitted by column and index rows
//!
//! Each row reports one field change at a time. The owner of the schema draft
//! routes them by key (see [`SchemaEditorEvent`]).

use schemakit_core::{ColumnOption, IndexAlgorithm, IndexType, Result, SchemaKitError};

use crate::models::{ColumnDraft, IndexColumn, IndexDraft, LocalId};

/// A single-field change to a column draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnUpdate {
    Name(String),
    /// Select another entry of the type catalog
    DataType(String),
    Nullable(bool),
    PrimaryKey(bool),
    Toggle(ColumnOption, bool),
    DefaultValue(Option<String>),
    Length(Option<u32>),
    Precision(Option<u32>),
    Scale(Option<u32>),
}

/// Free-text inputs of the column options menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetField {
    DefaultValue,
    Length,
    Precision,
    Scale,
}

impl FacetField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::DefaultValue => "Default",
            Self::Length => "Length",
            Self::Precision => "Precision",
            Self::Scale => "Scale",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::DefaultValue => "NULL",
            Self::Length => "255",
            Self::Precision => "10",
            Self::Scale => "2",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::DefaultValue, Self::Length, Self::Precision, Self::Scale]
    }

    fn key(&self) -> &'static str {
        match self {
            Self::DefaultValue => "defaultValue",
            Self::Length => "length",
            Self::Precision => "precision",
            Self::Scale => "scale",
        }
    }
}

impl ColumnUpdate {
    /// Build an update from what the user typed into a facet input
    ///
    /// Empty input clears the facet. Numeric facets accept a non-negative
    /// integer (surrounding whitespace allowed) and reject anything else.
    pub fn from_input(field: FacetField, raw: &str) -> Result<Self> {
        Ok(match field {
            FacetField::DefaultValue => {
                Self::DefaultValue((!raw.is_empty()).then(|| raw.to_string()))
            }
            FacetField::Length => Self::Length(parse_facet(field, raw)?),
            FacetField::Precision => Self::Precision(parse_facet(field, raw)?),
            FacetField::Scale => Self::Scale(parse_facet(field, raw)?),
        })
    }

    /// Apply this change to a column
    pub fn apply(self, column: &mut ColumnDraft) {
        match self {
            Self::Name(name) => column.name = name,
            Self::DataType(id) => column.data_type_id = id,
            Self::Nullable(value) => column.is_nullable = value,
            Self::PrimaryKey(value) => column.is_primary_key = value,
            Self::Toggle(option, value) => column.set_option(option, value),
            Self::DefaultValue(value) => column.default_value = value,
            Self::Length(value) => column.length = value,
            Self::Precision(value) => column.precision = value,
            Self::Scale(value) => column.scale = value,
        }
    }
}

fn parse_facet(field: FacetField, raw: &str) -> Result<Option<u32>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| SchemaKitError::invalid_input(field.key(), raw))
}

/// A single-field change to an index draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexUpdate {
    Type(IndexType),
    /// `None` selects the database default
    Algorithm(Option<IndexAlgorithm>),
    Columns(Vec<IndexColumn>),
}

impl IndexUpdate {
    /// Apply this change to an index
    pub fn apply(self, index: &mut IndexDraft) {
        match self {
            Self::Type(index_type) => index.index_type = Some(index_type),
            Self::Algorithm(algorithm) => index.algorithm = algorithm,
            Self::Columns(columns) => index.index_columns = columns,
        }
    }
}

/// Keyed edits routed to the schema draft that owns the rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaEditorEvent {
    UpdateColumn {
        local_id: LocalId,
        update: ColumnUpdate,
    },
    DeleteColumn {
        local_id: LocalId,
    },
    UpdateIndex {
        local_id: LocalId,
        update: IndexUpdate,
    },
    DeleteIndex {
        local_id: LocalId,
    },
}
