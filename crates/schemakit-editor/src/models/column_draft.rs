//! Column draft model

use schemakit_core::ColumnOption;
use serde::{Deserialize, Serialize};

use super::{Keyed, LocalId};

/// Column draft model for the schema editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDraft {
    /// Editor key
    #[serde(default)]
    pub local_id: LocalId,
    /// Column name
    #[serde(default)]
    pub name: String,
    /// Id of the selected entry in the dialect type catalog
    #[serde(default)]
    pub data_type_id: String,
    /// Whether NULL values are allowed
    #[serde(default)]
    pub is_nullable: bool,
    /// Is this column part of the primary key?
    #[serde(default)]
    pub is_primary_key: bool,
    #[serde(default)]
    pub is_unique: bool,
    #[serde(default)]
    pub is_auto_increment: bool,
    #[serde(default)]
    pub is_unsigned: bool,
    #[serde(default)]
    pub is_array: bool,
    /// Refresh to the current timestamp on every update
    #[serde(default)]
    pub is_updated_at: bool,
    /// Default value expression
    #[serde(default)]
    pub default_value: Option<String>,
    /// Length for types that support it (e.g., VARCHAR(255))
    #[serde(default)]
    pub length: Option<u32>,
    /// Precision for DECIMAL-like types
    #[serde(default)]
    pub precision: Option<u32>,
    /// Scale for DECIMAL-like types
    #[serde(default)]
    pub scale: Option<u32>,
}

impl ColumnDraft {
    /// Create an unnamed, nullable column of the given type
    pub fn new(data_type_id: impl Into<String>) -> Self {
        Self {
            local_id: LocalId::default(),
            name: String::new(),
            data_type_id: data_type_id.into(),
            is_nullable: true,
            is_primary_key: false,
            is_unique: false,
            is_auto_increment: false,
            is_unsigned: false,
            is_array: false,
            is_updated_at: false,
            default_value: None,
            length: None,
            precision: None,
            scale: None,
        }
    }

    /// Create a column with a specific name and type
    pub fn named(name: impl Into<String>, data_type_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new(data_type_id)
        }
    }

    /// Builder: set editor key
    pub fn with_id(mut self, local_id: impl Into<LocalId>) -> Self {
        self.local_id = local_id.into();
        self
    }

    /// Builder: set as primary key
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self.is_nullable = false;
        self
    }

    /// Builder: turn on a column option
    pub fn with_option(mut self, option: ColumnOption) -> Self {
        self.set_option(option, true);
        self
    }

    /// Builder: set length
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Builder: set precision and scale
    pub fn with_precision(mut self, precision: u32, scale: Option<u32>) -> Self {
        self.precision = Some(precision);
        self.scale = scale;
        self
    }

    /// Builder: set default value
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Read a boolean column option
    pub fn option(&self, option: ColumnOption) -> bool {
        match option {
            ColumnOption::Unique => self.is_unique,
            ColumnOption::AutoIncrement => self.is_auto_increment,
            ColumnOption::Unsigned => self.is_unsigned,
            ColumnOption::Array => self.is_array,
            ColumnOption::AutoUpdateTimestamp => self.is_updated_at,
        }
    }

    /// Write a boolean column option
    pub fn set_option(&mut self, option: ColumnOption, value: bool) {
        let flag = match option {
            ColumnOption::Unique => &mut self.is_unique,
            ColumnOption::AutoIncrement => &mut self.is_auto_increment,
            ColumnOption::Unsigned => &mut self.is_unsigned,
            ColumnOption::Array => &mut self.is_array,
            ColumnOption::AutoUpdateTimestamp => &mut self.is_updated_at,
        };
        *flag = value;
    }
}

impl Keyed for ColumnDraft {
    const KEY_PREFIX: &'static str = "col";

    fn local_id(&self) -> &LocalId {
        &self.local_id
    }

    fn set_local_id(&mut self, local_id: LocalId) {
        self.local_id = local_id;
    }
}
