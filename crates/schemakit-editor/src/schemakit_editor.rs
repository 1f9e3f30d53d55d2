//! Schema Editor for SchemaKit
//!
//! State and derived view data behind a visual table-schema editor. Rendering
//! is left to the host; this crate owns what the rows show and how edits land.
//!
//! ## Features
//!
//! - Column and index drafts kept in ordered, locally keyed lists
//! - Column rows with type label, type picker search and dialect-aware toggles
//! - Index rows with dialect-aware type and algorithm menus
//! - Keyed update/delete events applied onto a schema draft
//! - TOML settings for new-row defaults
//!
//! ## Usage
//!
//! ```rust
//! use schemakit_core::{Dialect, DialectDataType};
//! use schemakit_editor::{ColumnUpdate, EditorSettings, SchemaDraft};
//!
//! let types = vec![DialectDataType::new("1", "VARCHAR")];
//! let mut draft = SchemaDraft::new(Dialect::Postgres, types);
//!
//! let id = draft.add_column(&EditorSettings::default());
//! draft.update_column(id.as_str(), ColumnUpdate::Name("email".into()));
//! draft.update_column(id.as_str(), ColumnUpdate::Length(Some(255)));
//!
//! let rows = draft.fields_list();
//! assert_eq!(rows.rows()[0].type_display(), "varchar(255)");
//! ```

pub mod events;
pub mod models;
pub mod rows;

mod schema_draft;
mod settings;

// Re-exports for convenience
pub use events::{ColumnUpdate, FacetField, IndexUpdate, SchemaEditorEvent};
pub use models::{ColumnDraft, DraftList, IndexColumn, IndexDraft, Keyed, LocalId, SortOrder};
pub use rows::{
    ColumnChoice, ColumnField, FacetInput, FieldsList, IndexField, ToggleOption, TypeChoice,
};
pub use schema_draft::SchemaDraft;
pub use settings::{EditorSettings, NewColumnDefaults, NewIndexDefaults, settings_path};
