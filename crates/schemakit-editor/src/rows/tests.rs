use super::*;
use crate::events::{ColumnUpdate, FacetField, IndexUpdate};
use crate::models::{ColumnDraft, DraftList, IndexColumn, IndexDraft, LocalId};
use schemakit_core::{
    CanonicalType, ColumnOption, Dialect, DialectDataType, IndexAlgorithm, IndexType,
};

fn catalog() -> Vec<DialectDataType> {
    vec![
        DialectDataType::new("1", "VARCHAR").with_canonical(
            CanonicalType::named("string").with_description("Variable-length text"),
        ),
        DialectDataType::new("2", "INT").with_canonical(CanonicalType::named("int")),
        DialectDataType::new("3", "DECIMAL").with_canonical(CanonicalType::named("decimal")),
        DialectDataType::new("4", "TIMESTAMP").with_canonical(CanonicalType::named("timestamp")),
        DialectDataType::new("5", "varchar"),
    ]
}

mod column_field_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_type_display_uses_catalog_entry() {
        let types = catalog();
        let column = ColumnDraft::named("email", "1").with_length(255);
        let field = ColumnField::new(&column, &types, &Dialect::Postgres);

        assert_eq!(field.type_display(), "varchar(255)");
        assert_eq!(field.canonical_type_name(), Some("string"));
    }

    #[test]
    fn test_type_display_precision_and_scale() {
        let types = catalog();
        let column = ColumnDraft::named("price", "3").with_precision(10, Some(2));
        let field = ColumnField::new(&column, &types, &Dialect::Mysql);
        assert_eq!(field.type_display(), "decimal(10,2)");
    }

    #[test]
    fn test_type_display_unknown_type() {
        let types = catalog();
        let column = ColumnDraft::named("id", "missing");
        let field = ColumnField::new(&column, &types, &Dialect::Postgres);

        assert!(field.selected_type().is_none());
        assert_eq!(field.type_display(), "int");
        assert!(field.toggle_options().iter().all(|t| t.option != ColumnOption::AutoIncrement));
    }

    #[test]
    fn test_type_choices_dedup_and_selection() {
        let types = catalog();
        let column = ColumnDraft::named("email", "5");
        let field = ColumnField::new(&column, &types, &Dialect::Postgres);

        let choices = field.type_choices("");
        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["decimal", "int", "timestamp", "varchar"]);

        // Entry "5" collapses into "1"; the choice still reads as selected
        let varchar = &choices[3];
        assert_eq!(varchar.data_type.id, "1");
        assert!(varchar.is_selected);
        assert_eq!(varchar.description(), "Variable-length text");
        assert_eq!(choices.iter().filter(|c| c.is_selected).count(), 1);
    }

    #[test]
    fn test_type_choices_query() {
        let types = catalog();
        let column = ColumnDraft::named("email", "1");
        let field = ColumnField::new(&column, &types, &Dialect::Postgres);

        let choices = field.type_choices("TIME");
        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0].label, "timestamp");
        assert!(!choices[0].is_selected);
        assert_eq!(field.select_type(&choices[0]), ColumnUpdate::DataType("4".into()));

        assert!(field.type_choices("blob").is_empty());
    }

    #[test]
    fn test_toggle_options_mysql_integer() {
        let types = catalog();
        let column = ColumnDraft::named("id", "2").with_option(ColumnOption::AutoIncrement);
        let field = ColumnField::new(&column, &types, &Dialect::Mysql);

        let toggles = field.toggle_options();
        let options: Vec<ColumnOption> = toggles.iter().map(|t| t.option).collect();
        assert_eq!(
            options,
            vec![
                ColumnOption::Unique,
                ColumnOption::AutoIncrement,
                ColumnOption::Unsigned,
            ]
        );
        assert_eq!(toggles[1].label, "Auto Inc.");
        assert!(toggles[1].checked);
        assert!(!toggles[0].checked);
    }

    #[test]
    fn test_toggle_options_postgres_timestamp() {
        let types = catalog();
        let column = ColumnDraft::named("updated_at", "4");
        let field = ColumnField::new(&column, &types, &Dialect::Postgres);

        let options: Vec<ColumnOption> = field.toggle_options().iter().map(|t| t.option).collect();
        assert_eq!(
            options,
            vec![
                ColumnOption::Unique,
                ColumnOption::Array,
                ColumnOption::AutoUpdateTimestamp,
            ]
        );
    }

    #[test]
    fn test_facet_values() {
        let types = catalog();
        let column = ColumnDraft::named("price", "3")
            .with_precision(10, None)
            .with_default("0");
        let field = ColumnField::new(&column, &types, &Dialect::Postgres);

        assert_eq!(field.facet_value(FacetField::DefaultValue), "0");
        assert_eq!(field.facet_value(FacetField::Precision), "10");
        assert_eq!(field.facet_value(FacetField::Scale), "");
        assert_eq!(field.facet_value(FacetField::Length), "");
    }

    #[test]
    fn test_facet_inputs_menu() {
        let types = catalog();
        let column = ColumnDraft::named("email", "1").with_length(255);
        let field = ColumnField::new(&column, &types, &Dialect::Mysql);

        let inputs = field.facet_inputs();
        let rows: Vec<(&str, &str, &str)> = inputs
            .iter()
            .map(|input| (input.label, input.placeholder, input.value.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Default", "NULL", ""),
                ("Length", "255", "255"),
                ("Precision", "10", ""),
                ("Scale", "2", ""),
            ]
        );
        assert_eq!(inputs[1].field, FacetField::Length);
    }

    #[test]
    fn test_flag_updates_and_hints() {
        let types = catalog();
        let column = ColumnDraft::named("id", "2").primary_key();
        let field = ColumnField::new(&column, &types, &Dialect::Sqlite);

        assert_eq!(field.nullable_hint(), "Not Nullable");
        assert_eq!(field.primary_key_hint(), "Primary Key");
        assert_eq!(field.toggle_nullable(), ColumnUpdate::Nullable(true));
        assert_eq!(field.toggle_primary_key(), ColumnUpdate::PrimaryKey(false));
        assert_eq!(
            field.set_option(ColumnOption::Unique, true),
            ColumnUpdate::Toggle(ColumnOption::Unique, true)
        );
    }
}

mod index_field_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const COLUMNS: [&str; 3] = ["id", "email", "created_at"];

    #[test]
    fn test_type_label_and_menus() {
        let index = IndexDraft::new(IndexType::PrimaryKey);
        let field = IndexField::new(&index, COLUMNS.to_vec(), &Dialect::Mysql);

        assert_eq!(field.type_label(), "primary key");
        assert_eq!(field.type_tooltip(), "primary key index");
        assert_eq!(
            field.available_types(),
            vec![
                IndexType::Standard,
                IndexType::PrimaryKey,
                IndexType::Unique,
                IndexType::Fulltext,
                IndexType::Spatial,
            ]
        );
        assert_eq!(
            field.available_algorithms(),
            vec![IndexAlgorithm::Btree, IndexAlgorithm::Hash]
        );
    }

    #[test]
    fn test_missing_type_reads_as_standard() {
        let index = IndexDraft::default();
        let field = IndexField::new(&index, COLUMNS.to_vec(), &Dialect::Sqlite);
        assert_eq!(field.current_type(), IndexType::Standard);
        assert_eq!(field.type_label(), "standard");
    }

    #[test]
    fn test_algorithm_hidden_on_sqlite() {
        let index = IndexDraft::new(IndexType::Standard).with_algorithm(IndexAlgorithm::Btree);

        let sqlite = IndexField::new(&index, COLUMNS.to_vec(), &Dialect::Sqlite);
        assert!(!sqlite.shows_algorithm());
        assert_eq!(sqlite.visible_algorithm(), None);

        let postgres = IndexField::new(&index, COLUMNS.to_vec(), &Dialect::Postgres);
        assert_eq!(postgres.visible_algorithm(), Some(IndexAlgorithm::Btree));
    }

    #[test]
    fn test_column_choices_follow_table_order() {
        let index = IndexDraft::new(IndexType::Unique)
            .column("created_at")
            .column("id");
        let field = IndexField::new(&index, COLUMNS.to_vec(), &Dialect::Postgres);

        assert_eq!(
            field.column_choices(),
            vec![
                ColumnChoice { name: "id", is_selected: true },
                ColumnChoice { name: "email", is_selected: false },
                ColumnChoice { name: "created_at", is_selected: true },
            ]
        );
        assert_eq!(field.selected_columns(), vec!["created_at", "id"]);
        assert_eq!(field.selection_summary(), "2 selected");
    }

    #[test]
    fn test_toggle_column_appends() {
        let index = IndexDraft::new(IndexType::Standard).column("id");
        let field = IndexField::new(&index, COLUMNS.to_vec(), &Dialect::Postgres);

        assert_eq!(
            field.toggle_column("email"),
            IndexUpdate::Columns(vec![IndexColumn::asc("id"), IndexColumn::asc("email")])
        );
    }

    #[test]
    fn test_toggle_column_resets_sort_order() {
        let mut index = IndexDraft::new(IndexType::Standard);
        index.index_columns = vec![
            IndexColumn::asc("id").desc(),
            IndexColumn::asc("email"),
        ];
        let field = IndexField::new(&index, COLUMNS.to_vec(), &Dialect::Postgres);

        assert_eq!(
            field.toggle_column("email"),
            IndexUpdate::Columns(vec![IndexColumn::asc("id")])
        );
        assert_eq!(
            field.remove_column("created_at"),
            IndexUpdate::Columns(vec![IndexColumn::asc("id"), IndexColumn::asc("email")])
        );
    }

    #[test]
    fn test_type_and_algorithm_updates() {
        let index = IndexDraft::new(IndexType::Standard);
        let field = IndexField::new(&index, Vec::new(), &Dialect::Postgres);

        assert_eq!(field.select_type(IndexType::Gin), IndexUpdate::Type(IndexType::Gin));
        assert_eq!(field.select_algorithm(None), IndexUpdate::Algorithm(None));
        assert!(field.column_choices().is_empty());
        assert_eq!(field.selection_summary(), "0 selected");
    }
}

mod fields_list_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_list() {
        let types = catalog();
        let columns = DraftList::new();
        let list = FieldsList::new(&columns, &types, &Dialect::Postgres, None);

        assert!(list.is_empty());
        assert!(list.new_row().is_none());
    }

    #[test]
    fn test_rows_keep_order_and_mark_new() {
        let types = catalog();
        let columns: DraftList<ColumnDraft> = vec![
            ColumnDraft::named("id", "2").with_id("col_a"),
            ColumnDraft::named("email", "1").with_id("col_b"),
        ]
        .into();
        let new_id = LocalId::new("col_b");
        let list = FieldsList::new(&columns, &types, &Dialect::Mysql, Some(&new_id));

        let names: Vec<&str> = list.rows().iter().map(|r| r.column().name.as_str()).collect();
        assert_eq!(names, vec!["id", "email"]);
        assert!(!list.rows()[0].is_new());
        assert_eq!(list.new_row().map(|r| r.local_id().as_str()), Some("col_b"));
    }
}
