//! Error types for SchemaKit

use thiserror::Error;

/// Core error type for SchemaKit operations
///
/// The capability rules never fail; these variants only surface at the edges,
/// where user-typed input or files are turned into typed values.
#[derive(Error, Debug)]
pub enum SchemaKitError {
    #[error("Invalid input for {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("Unknown {kind}: {tag}")]
    UnknownTag { kind: &'static str, tag: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] toml::de::Error),
}

impl SchemaKitError {
    pub fn invalid_input(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
        }
    }

    pub fn unknown_tag(kind: &'static str, tag: impl Into<String>) -> Self {
        Self::UnknownTag {
            kind,
            tag: tag.into(),
        }
    }
}

/// Result type alias for SchemaKit operations
pub type Result<T> = std::result::Result<T, SchemaKitError>;
