//! Column row

use schemakit_core::{
    ColumnOption, Dialect, DialectDataType, available_column_options, find_data_type,
    format_type_display, search_data_types,
};

use crate::events::{ColumnUpdate, FacetField};
use crate::models::{ColumnDraft, LocalId};

/// One entry of the type picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeChoice<'a> {
    pub data_type: &'a DialectDataType,
    /// Lowercase SQL name shown on the button
    pub label: String,
    /// Whether this entry names the column's current type
    pub is_selected: bool,
}

impl TypeChoice<'_> {
    pub fn description(&self) -> &str {
        self.data_type.description()
    }
}

/// A boolean column option offered for the current dialect and type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOption {
    pub option: ColumnOption,
    pub label: &'static str,
    pub checked: bool,
}

/// A free-text input of the options menu with its current contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetInput {
    pub field: FacetField,
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Empty when unset
    pub value: String,
}

/// View over a single column draft
#[derive(Debug, Clone)]
pub struct ColumnField<'a> {
    column: &'a ColumnDraft,
    data_types: &'a [DialectDataType],
    dialect: &'a Dialect,
    is_new: bool,
}

impl<'a> ColumnField<'a> {
    pub fn new(
        column: &'a ColumnDraft,
        data_types: &'a [DialectDataType],
        dialect: &'a Dialect,
    ) -> Self {
        Self {
            column,
            data_types,
            dialect,
            is_new: false,
        }
    }

    /// Builder: mark as the row just added (its name input gets selected)
    pub fn with_new(mut self, is_new: bool) -> Self {
        self.is_new = is_new;
        self
    }

    pub fn column(&self) -> &'a ColumnDraft {
        self.column
    }

    pub fn local_id(&self) -> &'a LocalId {
        &self.column.local_id
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Catalog entry the column points at
    pub fn selected_type(&self) -> Option<&'a DialectDataType> {
        find_data_type(self.data_types, &self.column.data_type_id)
    }

    pub fn canonical_type_name(&self) -> Option<&'a str> {
        self.selected_type().and_then(|dt| dt.canonical_name())
    }

    /// Type label such as `varchar(255)`
    pub fn type_display(&self) -> String {
        format_type_display(
            self.selected_type().map(|dt| dt.sql_type.as_str()),
            self.column.length,
            self.column.precision,
            self.column.scale,
        )
    }

    /// Type picker entries for the search query
    pub fn type_choices(&self, query: &str) -> Vec<TypeChoice<'a>> {
        let selected = self.selected_type().map(|dt| dt.dedup_key());
        search_data_types(self.data_types, query)
            .into_iter()
            .map(|dt| {
                let label = dt.dedup_key();
                TypeChoice {
                    data_type: dt,
                    is_selected: selected.as_deref() == Some(label.as_str()),
                    label,
                }
            })
            .collect()
    }

    /// Options menu toggles available for this column
    pub fn toggle_options(&self) -> Vec<ToggleOption> {
        available_column_options(self.dialect, self.canonical_type_name())
            .into_iter()
            .map(|option| ToggleOption {
                option,
                label: option.label(),
                checked: self.column.option(option),
            })
            .collect()
    }

    /// Current contents of a facet input (empty when unset)
    pub fn facet_value(&self, field: FacetField) -> String {
        match field {
            FacetField::DefaultValue => self.column.default_value.clone().unwrap_or_default(),
            FacetField::Length => facet_text(self.column.length),
            FacetField::Precision => facet_text(self.column.precision),
            FacetField::Scale => facet_text(self.column.scale),
        }
    }

    /// Options menu inputs, in menu order
    pub fn facet_inputs(&self) -> Vec<FacetInput> {
        FacetField::all()
            .into_iter()
            .map(|field| FacetInput {
                field,
                label: field.label(),
                placeholder: field.placeholder(),
                value: self.facet_value(field),
            })
            .collect()
    }

    pub fn select_type(&self, choice: &TypeChoice<'_>) -> ColumnUpdate {
        ColumnUpdate::DataType(choice.data_type.id.clone())
    }

    pub fn toggle_nullable(&self) -> ColumnUpdate {
        ColumnUpdate::Nullable(!self.column.is_nullable)
    }

    pub fn toggle_primary_key(&self) -> ColumnUpdate {
        ColumnUpdate::PrimaryKey(!self.column.is_primary_key)
    }

    pub fn set_option(&self, option: ColumnOption, value: bool) -> ColumnUpdate {
        ColumnUpdate::Toggle(option, value)
    }

    pub fn nullable_hint(&self) -> &'static str {
        if self.column.is_nullable {
            "Nullable"
        } else {
            "Not Nullable"
        }
    }

    pub fn primary_key_hint(&self) -> &'static str {
        if self.column.is_primary_key {
            "Primary Key"
        } else {
            "Set as Primary Key"
        }
    }
}

fn facet_text(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
