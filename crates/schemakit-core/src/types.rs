//! Dialect data type descriptors
//!
//! A dialect exposes a catalog of SQL types. Each entry may point at a
//! canonical, engine-independent type which carries the name the capability
//! rules classify and the description shown next to the type.

use serde::{Deserialize, Serialize};

/// Fallback description for types without a canonical description
pub const DEFAULT_TYPE_DESCRIPTION: &str = "SQL data type";

/// Engine-independent semantic type
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CanonicalType {
    /// Canonical name (e.g., "integer", "timestamp")
    #[serde(default)]
    pub name: Option<String>,
    /// Human readable description
    #[serde(default)]
    pub description: Option<String>,
}

impl CanonicalType {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An entry of a dialect's type catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectDataType {
    /// Catalog identifier referenced by column drafts
    pub id: String,
    /// Type name as used in SQL (e.g., "VARCHAR", "INTEGER")
    pub sql_type: String,
    /// Canonical type this SQL type maps onto
    #[serde(default)]
    pub canonical_type: Option<CanonicalType>,
}

impl DialectDataType {
    /// Create a catalog entry without a canonical type
    pub fn new(id: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sql_type: sql_type.into(),
            canonical_type: None,
        }
    }

    /// Builder: set canonical type
    pub fn with_canonical(mut self, canonical: CanonicalType) -> Self {
        self.canonical_type = Some(canonical);
        self
    }

    /// Get the canonical type name, if any
    pub fn canonical_name(&self) -> Option<&str> {
        self.canonical_type
            .as_ref()
            .and_then(|c| c.name.as_deref())
    }

    /// Get the description, falling back to a generic one
    pub fn description(&self) -> &str {
        self.canonical_type
            .as_ref()
            .and_then(|c| c.description.as_deref())
            .unwrap_or(DEFAULT_TYPE_DESCRIPTION)
    }

    /// Key used to collapse duplicate entries
    pub fn dedup_key(&self) -> String {
        self.sql_type.to_lowercase()
    }
}

/// Look up a catalog entry by id
pub fn find_data_type<'a>(types: &'a [DialectDataType], id: &str) -> Option<&'a DialectDataType> {
    types.iter().find(|dt| dt.id == id)
}

/// Type catalog as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeCatalog {
    #[serde(default, rename = "data_type")]
    pub data_types: Vec<DialectDataType>,
}

impl TypeCatalog {
    /// Parse a catalog from TOML (`[[data_type]]` tables)
    pub fn from_toml(source: &str) -> crate::Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_description_fallback() {
        let plain = DialectDataType::new("1", "INTEGER");
        assert_eq!(plain.description(), DEFAULT_TYPE_DESCRIPTION);

        let described = DialectDataType::new("2", "UUID").with_canonical(
            CanonicalType::named("UUID").with_description("Universally unique identifier"),
        );
        assert_eq!(described.description(), "Universally unique identifier");
        assert_eq!(described.canonical_name(), Some("UUID"));
    }

    #[test]
    fn test_canonical_without_name() {
        let dt = DialectDataType::new("1", "TEXT").with_canonical(CanonicalType::default());
        assert_eq!(dt.canonical_name(), None);
    }

    #[test]
    fn test_find_data_type() {
        let types = vec![
            DialectDataType::new("1", "INTEGER"),
            DialectDataType::new("2", "VARCHAR"),
        ];
        assert_eq!(find_data_type(&types, "2").map(|dt| dt.sql_type.as_str()), Some("VARCHAR"));
        assert!(find_data_type(&types, "9").is_none());
    }

    #[test]
    fn test_parse_catalog_toml() {
        let source = indoc! {r#"
            [[data_type]]
            id = "1"
            sql_type = "INTEGER"
            canonical_type = { name = "integer", description = "Standard integer type" }

            [[data_type]]
            id = "2"
            sql_type = "VARCHAR"
        "#};

        let catalog = TypeCatalog::from_toml(source).unwrap();
        assert_eq!(catalog.data_types.len(), 2);
        assert_eq!(catalog.data_types[0].canonical_name(), Some("integer"));
        assert_eq!(catalog.data_types[1].canonical_type, None);
    }

    #[test]
    fn test_parse_catalog_toml_missing_sql_type() {
        let source = indoc! {r#"
            [[data_type]]
            id = "1"
        "#};

        assert!(matches!(
            TypeCatalog::from_toml(source),
            Err(crate::SchemaKitError::Deserialize(_))
        ));
    }

    #[test]
    fn test_load_missing_catalog() {
        let path = std::path::Path::new("does-not-exist/catalog.toml");
        assert!(matches!(
            TypeCatalog::load(path),
            Err(crate::SchemaKitError::Io(_))
        ));
    }
}
