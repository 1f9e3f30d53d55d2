//! SchemaKit Core - dialect rules shared by every SchemaKit crate
//!
//! This crate holds the pure, dialect-aware logic behind the schema editor:
//!
//! - `Dialect` - identifier of the target SQL engine
//! - `capabilities` - which index types, algorithms and column options a dialect allows
//! - `DialectDataType` - dialect type catalog entries
//! - `format_type_display` - the short type label shown on a column row
//! - `search_data_types` - filtered, deduplicated and sorted type choices
//!
//! Every function here is total: unknown dialects, types and option names
//! resolve to a safe default instead of an error.

pub mod capabilities;
mod dialect;
mod error;
mod type_display;
mod type_search;
mod types;

pub use capabilities::{
    ColumnOption, IndexAlgorithm, IndexType, available_algorithms, available_column_options,
    available_index_types, is_column_option_available, is_column_option_key_available,
    shows_algorithm_selector,
};
pub use dialect::*;
pub use error::*;
pub use type_display::*;
pub use type_search::*;
pub use types::*;
