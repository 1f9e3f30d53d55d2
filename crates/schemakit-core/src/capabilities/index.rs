//! Index types and algorithms per dialect

use serde::{Deserialize, Serialize};

use crate::{Dialect, SchemaKitError};

/// Category of index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexType {
    #[default]
    Standard,
    PrimaryKey,
    Unique,
    Fulltext,
    Spatial,
    Gin,
    Gist,
}

impl IndexType {
    /// Types every dialect supports
    pub const BASE: [IndexType; 3] = [
        IndexType::Standard,
        IndexType::PrimaryKey,
        IndexType::Unique,
    ];

    /// Get the tag as written in schema files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::PrimaryKey => "PRIMARY_KEY",
            Self::Unique => "UNIQUE",
            Self::Fulltext => "FULLTEXT",
            Self::Spatial => "SPATIAL",
            Self::Gin => "GIN",
            Self::Gist => "GIST",
        }
    }

    /// Lowercase label with the first underscore turned into a space
    pub fn label(&self) -> String {
        self.as_str().to_lowercase().replacen('_', " ", 1)
    }

    /// Tooltip text for the type badge (e.g., "primary key index")
    pub fn tooltip(&self) -> String {
        format!("{} index", self.label())
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::Standard,
            Self::PrimaryKey,
            Self::Unique,
            Self::Fulltext,
            Self::Spatial,
            Self::Gin,
            Self::Gist,
        ]
    }
}

impl std::str::FromStr for IndexType {
    type Err = SchemaKitError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|t| t.as_str() == tag)
            .ok_or_else(|| SchemaKitError::unknown_tag("index type", tag))
    }
}

impl std::fmt::Display for IndexType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Storage/access method of an index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexAlgorithm {
    Btree,
    Hash,
    Gin,
    Gist,
    Brin,
}

impl IndexAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Btree => "BTREE",
            Self::Hash => "HASH",
            Self::Gin => "GIN",
            Self::Gist => "GIST",
            Self::Brin => "BRIN",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Btree, Self::Hash, Self::Gin, Self::Gist, Self::Brin]
    }
}

impl std::str::FromStr for IndexAlgorithm {
    type Err = SchemaKitError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|a| a.as_str() == tag)
            .ok_or_else(|| SchemaKitError::unknown_tag("index algorithm", tag))
    }
}

impl std::fmt::Display for IndexAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Index types a dialect offers: the base set followed by dialect extras
pub fn available_index_types(dialect: &Dialect) -> Vec<IndexType> {
    let mut types = IndexType::BASE.to_vec();
    match dialect {
        Dialect::Mysql => types.extend([IndexType::Fulltext, IndexType::Spatial]),
        Dialect::Postgres => types.extend([IndexType::Gin, IndexType::Gist]),
        Dialect::Sqlite | Dialect::Other(_) => {}
    }
    types
}

/// Index algorithms a dialect offers, in menu order
pub fn available_algorithms(dialect: &Dialect) -> Vec<IndexAlgorithm> {
    match dialect {
        Dialect::Mysql => vec![IndexAlgorithm::Btree, IndexAlgorithm::Hash],
        Dialect::Postgres => IndexAlgorithm::all(),
        Dialect::Sqlite | Dialect::Other(_) => vec![IndexAlgorithm::Btree],
    }
}

/// Whether the algorithm selector applies to this dialect at all
pub fn shows_algorithm_selector(dialect: &Dialect) -> bool {
    matches!(dialect, Dialect::Mysql | Dialect::Postgres)
}
