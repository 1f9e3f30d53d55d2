//! Compact type label for a column row (e.g., `varchar(255)`, `decimal(10,2)`)

/// Base name used when a column references no known type
pub const FALLBACK_TYPE_NAME: &str = "int";

/// Format the lowercase type label of a column
///
/// Length takes precedence over precision. Zero-valued facets count as unset,
/// so a zero scale is dropped from `precision,scale`.
pub fn format_type_display(
    sql_type: Option<&str>,
    length: Option<u32>,
    precision: Option<u32>,
    scale: Option<u32>,
) -> String {
    let base = sql_type.unwrap_or(FALLBACK_TYPE_NAME).to_lowercase();
    let set = |facet: Option<u32>| facet.filter(|v| *v != 0);

    if let Some(length) = set(length) {
        return format!("{}({})", base, length);
    }
    if let Some(precision) = set(precision) {
        return match set(scale) {
            Some(scale) => format!("{}({},{})", base, precision, scale),
            None => format!("{}({})", base, precision),
        };
    }
    base
}
