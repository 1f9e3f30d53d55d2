//! Models for schema drafts
//!
//! Column and index drafts as edited by the user, and the keyed list that
//! holds them in display order.

mod column_draft;
mod draft_list;
mod index_draft;
mod local_id;

pub use column_draft::ColumnDraft;
pub use draft_list::{DraftList, Keyed};
pub use index_draft::{IndexColumn, IndexDraft, SortOrder};
pub use local_id::LocalId;
