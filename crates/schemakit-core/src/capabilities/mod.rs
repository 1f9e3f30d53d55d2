//! Dialect capability rules
//!
//! Answers, for a given dialect, which index types, index algorithms and
//! column attributes are legal, so the editor can hide controls that do not
//! apply. The rules are static tables and predicates; they never fail and
//! never mutate anything.

mod column;
mod index;


pub use column::*;
pub use index::*;
