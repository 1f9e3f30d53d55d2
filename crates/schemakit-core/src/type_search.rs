//! Type picker search
//!
//! Filters a dialect type catalog by a case-insensitive substring, collapses
//! entries sharing a SQL name and orders the result by that name.

use std::collections::HashSet;

use crate::DialectDataType;

/// Whether a catalog entry matches the query (SQL name or canonical name)
pub fn matches_type_query(data_type: &DialectDataType, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    data_type.sql_type.to_lowercase().contains(&query)
        || data_type
            .canonical_name()
            .is_some_and(|name| name.to_lowercase().contains(&query))
}

/// Search the catalog for type choices
///
/// Matching entries are deduplicated by lowercase SQL name (first occurrence
/// wins) and sorted ascending by that name. An empty query keeps every entry.
pub fn search_data_types<'a>(
    types: &'a [DialectDataType],
    query: &str,
) -> Vec<&'a DialectDataType> {
    let mut seen = HashSet::new();
    let mut found: Vec<&DialectDataType> = types
        .iter()
        .filter(|dt| matches_type_query(dt, query))
        .filter(|dt| seen.insert(dt.dedup_key()))
        .collect();

    found.sort_by_cached_key(|dt| dt.dedup_key());
    found
}
