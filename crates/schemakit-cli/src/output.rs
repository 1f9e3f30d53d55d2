//! Table rendering

use comfy_table::{Table, presets::UTF8_FULL};
use schemakit_core::{
    ColumnOption, Dialect, DialectDataType, IndexAlgorithm, IndexType, available_column_options,
};
use schemakit_editor::{FieldsList, IndexField};

fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub fn index_types_table(types: &[IndexType]) -> Table {
    let mut table = table(vec!["Type", "Label"]);
    for index_type in types {
        table.add_row(vec![index_type.as_str().to_string(), index_type.label()]);
    }
    table
}

pub fn algorithms_table(algorithms: &[IndexAlgorithm]) -> Table {
    let mut table = table(vec!["Algorithm"]);
    for algorithm in algorithms {
        table.add_row(vec![algorithm.as_str()]);
    }
    table
}

/// Every column option with its availability for the type
pub fn column_options_table(dialect: &Dialect, canonical_type: Option<&str>) -> Table {
    let available = available_column_options(dialect, canonical_type);
    let mut table = table(vec!["Option", "Key", "Available"]);
    for option in ColumnOption::ALL {
        table.add_row(vec![
            option.label(),
            option.key(),
            yes_no(available.contains(&option)),
        ]);
    }
    table
}

pub fn data_types_table(types: &[&DialectDataType]) -> Table {
    let mut table = table(vec!["Type", "Canonical", "Description", "Id"]);
    for data_type in types {
        table.add_row(vec![
            data_type.dedup_key(),
            data_type.canonical_name().unwrap_or("-").to_string(),
            data_type.description().to_string(),
            data_type.id.clone(),
        ]);
    }
    table
}

pub fn columns_table(fields: &FieldsList<'_>) -> Table {
    let mut table = table(vec!["Name", "Type", "Nullable", "Primary Key", "Facets", "Options"]);
    for row in fields.rows() {
        let column = row.column();
        let options: Vec<&str> = row
            .toggle_options()
            .into_iter()
            .filter(|toggle| toggle.checked)
            .map(|toggle| toggle.label)
            .collect();
        let facets: Vec<String> = row
            .facet_inputs()
            .into_iter()
            .filter(|input| !input.value.is_empty())
            .map(|input| format!("{}={}", input.label, input.value))
            .collect();

        table.add_row(vec![
            column.name.clone(),
            row.type_display(),
            yes_no(column.is_nullable).to_string(),
            yes_no(column.is_primary_key).to_string(),
            facets.join(", "),
            options.join(", "),
        ]);
    }
    table
}

pub fn indexes_table(rows: &[IndexField<'_>]) -> Table {
    let mut table = table(vec!["Type", "Algorithm", "Columns"]);
    for row in rows {
        table.add_row(vec![
            row.type_label(),
            row.visible_algorithm()
                .map(|algorithm| algorithm.to_string())
                .unwrap_or_default(),
            row.selected_columns().join(", "),
        ]);
    }
    table
}
