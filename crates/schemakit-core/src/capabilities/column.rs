//! Dialect-dependent column attributes

use serde::{Deserialize, Serialize};

use crate::Dialect;

/// Canonical type names treated as numeric
const NUMERIC_TYPES: [&str; 6] = ["integer", "bigint", "smallint", "int", "serial", "bigserial"];

/// Boolean column attribute whose availability depends on dialect and type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnOption {
    Unique,
    AutoIncrement,
    Unsigned,
    Array,
    /// Value refreshed to the current timestamp on every update
    AutoUpdateTimestamp,
}

impl ColumnOption {
    /// All options in the order the column menu lists them
    pub const ALL: [ColumnOption; 5] = [
        ColumnOption::Unique,
        ColumnOption::AutoIncrement,
        ColumnOption::Unsigned,
        ColumnOption::Array,
        ColumnOption::AutoUpdateTimestamp,
    ];

    /// Resolve an option from its record key (e.g., "isAutoIncrement")
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "isUnique" => Some(Self::Unique),
            "isAutoIncrement" => Some(Self::AutoIncrement),
            "isUnsigned" => Some(Self::Unsigned),
            "isArray" => Some(Self::Array),
            "isUpdatedAt" => Some(Self::AutoUpdateTimestamp),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Unique => "isUnique",
            Self::AutoIncrement => "isAutoIncrement",
            Self::Unsigned => "isUnsigned",
            Self::Array => "isArray",
            Self::AutoUpdateTimestamp => "isUpdatedAt",
        }
    }

    /// Short toggle label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unique => "Unique",
            Self::AutoIncrement => "Auto Inc.",
            Self::Unsigned => "Unsigned",
            Self::Array => "Array",
            Self::AutoUpdateTimestamp => "Auto Update",
        }
    }
}

impl std::fmt::Display for ColumnOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn is_numeric_type(type_name: Option<&str>) -> bool {
    type_name.is_some_and(|name| {
        let lower = name.to_lowercase();
        NUMERIC_TYPES.contains(&lower.as_str())
    })
}

fn is_timestamp_type(type_name: Option<&str>) -> bool {
    type_name.is_some_and(|name| name.to_lowercase().contains("timestamp"))
}

/// Whether a column option applies for the dialect and canonical type name
pub fn is_column_option_available(
    option: ColumnOption,
    dialect: &Dialect,
    canonical_type: Option<&str>,
) -> bool {
    match option {
        ColumnOption::Unique => true,
        ColumnOption::AutoIncrement => {
            is_numeric_type(canonical_type) && matches!(dialect, Dialect::Mysql | Dialect::Sqlite)
        }
        ColumnOption::Unsigned => {
            is_numeric_type(canonical_type) && matches!(dialect, Dialect::Mysql)
        }
        ColumnOption::Array => matches!(dialect, Dialect::Postgres),
        ColumnOption::AutoUpdateTimestamp => is_timestamp_type(canonical_type),
    }
}

/// String-keyed variant of [`is_column_option_available`]; unknown keys are never available
pub fn is_column_option_key_available(
    key: &str,
    dialect: &Dialect,
    canonical_type: Option<&str>,
) -> bool {
    ColumnOption::from_key(key)
        .is_some_and(|option| is_column_option_available(option, dialect, canonical_type))
}

/// Options to offer on a column of the given canonical type
pub fn available_column_options(
    dialect: &Dialect,
    canonical_type: Option<&str>,
) -> Vec<ColumnOption> {
    ColumnOption::ALL
        .into_iter()
        .filter(|option| is_column_option_available(*option, dialect, canonical_type))
        .collect()
}
