//! Row view models
//!
//! Borrowing views over drafts that compute what a column row, an index row
//! and the column list show, and build the updates their controls emit.
//! Nothing here mutates a draft; updates are applied by the owner.

mod column_field;
mod fields_list;
mod index_field;

#[cfg(test)]
mod tests;

pub use column_field::{ColumnField, FacetInput, ToggleOption, TypeChoice};
pub use fields_list::FieldsList;
pub use index_field::{ColumnChoice, IndexField};
