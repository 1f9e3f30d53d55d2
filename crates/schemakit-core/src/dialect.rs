//! SQL dialect identifiers
//!
//! A dialect is named by its slug (`mysql`, `postgres`, `sqlite`). Slugs are
//! matched exactly; any other string is kept verbatim as `Dialect::Other` and
//! gets the conservative defaults of every capability rule.

use serde::{Deserialize, Serialize};

/// Target SQL engine for the schema being edited
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Dialect {
    Mysql,
    #[default]
    Postgres,
    Sqlite,
    /// Unrecognized slug, carried as-is
    Other(String),
}

impl Dialect {
    /// Resolve a dialect from its slug
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "mysql" => Dialect::Mysql,
            "postgres" => Dialect::Postgres,
            "sqlite" => Dialect::Sqlite,
            other => Dialect::Other(other.to_string()),
        }
    }

    /// Get the slug this dialect is identified by
    pub fn slug(&self) -> &str {
        match self {
            Dialect::Mysql => "mysql",
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
            Dialect::Other(slug) => slug,
        }
    }

    /// Get the display name
    pub fn display_name(&self) -> &str {
        match self {
            Dialect::Mysql => "MySQL",
            Dialect::Postgres => "PostgreSQL",
            Dialect::Sqlite => "SQLite",
            Dialect::Other(slug) => slug,
        }
    }

    /// Whether the slug is one of the dialects with dedicated rules
    pub fn is_known(&self) -> bool {
        !matches!(self, Dialect::Other(_))
    }
}

impl From<&str> for Dialect {
    fn from(slug: &str) -> Self {
        Self::from_slug(slug)
    }
}

impl From<String> for Dialect {
    fn from(slug: String) -> Self {
        match slug.as_str() {
            "mysql" | "postgres" | "sqlite" => Self::from_slug(&slug),
            _ => Dialect::Other(slug),
        }
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Other(slug) => slug,
            known => known.slug().to_string(),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}
