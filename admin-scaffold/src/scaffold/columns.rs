//! Column classification heuristics
//!
//! Maps one schema column to at most one table column specification. Every
//! reachable column either matches an exclusion rule or receives a default
//! text-widget classification, so classification never fails.

use super::config::ClassifierConfig;
use crate::schema::{ColumnDescriptor, ColumnType, SchemaGraph, TableSchema};

/// The UI widget kind backing a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    /// Icon rendering, used for boolean flags
    Icon,
    /// Image rendering, used for image path columns
    Image,
    /// Plain text rendering
    Text,
}

impl Widget {
    /// Symbol name referenced by the generated code.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Icon => "IconColumn",
            Self::Image => "ImageColumn",
            Self::Text => "TextColumn",
        }
    }
}

/// A configuration call chained onto a rendered column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    /// Explicit label, overriding default titleization
    Label(String),
    /// Render the value as a boolean icon
    Boolean,
    /// Make the column searchable
    Searchable,
    /// Format as a date
    Date,
    /// Format as a date and time
    DateTime,
    /// Format as a plain number
    Numeric,
    /// Format as a monetary amount
    Money,
    /// Make the column sortable
    Sortable,
    /// Toggleable column, hidden until the user opts in
    ToggledHiddenByDefault,
}

/// One retained column, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Display path: the column name, or `relationship.title_column` for
    /// resolved foreign keys
    pub display_path: String,
    /// Widget kind
    pub widget: Widget,
    /// Modifiers in application order
    pub modifiers: Vec<Modifier>,
}

struct RuleInput<'a> {
    path: &'a str,
    column_type: ColumnType,
    widget: Widget,
}

struct ModifierRule {
    applies: fn(&RuleInput<'_>) -> bool,
    produce: fn(&RuleInput<'_>, &mut Vec<Modifier>),
}

/// Ordered modifier rules, evaluated in fixed sequence. Later rules assume
/// earlier ones already ran: `Sortable` always follows the type-specific
/// modifier, and the hidden-by-default rule always lands last.
const MODIFIER_RULES: &[ModifierRule] = &[
    ModifierRule {
        applies: |input| input.column_type.is_textual() && input.widget == Widget::Text,
        produce: |_, modifiers| modifiers.push(Modifier::Searchable),
    },
    ModifierRule {
        applies: |input| input.column_type == ColumnType::Date,
        produce: |_, modifiers| {
            modifiers.push(Modifier::Date);
            modifiers.push(Modifier::Sortable);
        },
    },
    ModifierRule {
        applies: |input| {
            matches!(input.column_type, ColumnType::DateTime | ColumnType::Timestamp)
        },
        produce: |_, modifiers| {
            modifiers.push(Modifier::DateTime);
            modifiers.push(Modifier::Sortable);
        },
    },
    ModifierRule {
        applies: |input| input.column_type.is_numeric(),
        produce: |input, modifiers| {
            let monetary = matches!(input.path, "cost" | "money" | "price")
                || input.column_type == ColumnType::Money;
            modifiers.push(if monetary {
                Modifier::Money
            } else {
                Modifier::Numeric
            });
            modifiers.push(Modifier::Sortable);
        },
    },
    ModifierRule {
        applies: |input| matches!(input.path, "created_at" | "updated_at" | "deleted_at"),
        produce: |_, modifiers| modifiers.push(Modifier::ToggledHiddenByDefault),
    },
];

/// Classify one column; `None` means the column is excluded from the table.
///
/// Exclusion rules, checked in order: auto-increment columns, `json`/`text`
/// typed columns, names matching an excluded suffix, names containing a
/// secret marker. Name matching is case-insensitive.
#[must_use]
pub fn classify_column(
    column: &ColumnDescriptor,
    table: &TableSchema,
    graph: &SchemaGraph,
    config: &ClassifierConfig,
) -> Option<ColumnSpec> {
    if column.auto_increment {
        return None;
    }

    if matches!(column.column_type, ColumnType::Json | ColumnType::Text) {
        return None;
    }

    let lowered = column.name.to_lowercase();
    if config
        .excluded_name_suffixes
        .iter()
        .any(|suffix| lowered.ends_with(&suffix.to_lowercase()))
    {
        return None;
    }
    if config
        .secret_name_markers
        .iter()
        .any(|marker| lowered.contains(&marker.to_lowercase()))
    {
        return None;
    }

    let display_path = display_path(column, table, graph, config);

    let mut modifiers = Vec::new();

    // UPPER-cased label for acronym-like names that titleize awkwardly.
    if matches!(display_path.as_str(), "id" | "sku" | "uuid") {
        modifiers.push(Modifier::Label(display_path.to_uppercase()));
    }

    let widget = if column.column_type == ColumnType::Boolean {
        modifiers.push(Modifier::Boolean);
        Widget::Icon
    } else if is_image_name(&display_path) {
        Widget::Image
    } else {
        Widget::Text
    };

    let input = RuleInput {
        path: &display_path,
        column_type: column.column_type,
        widget,
    };
    for rule in MODIFIER_RULES {
        if (rule.applies)(&input) {
            (rule.produce)(&input, &mut modifiers);
        }
    }

    Some(ColumnSpec {
        display_path,
        widget,
        modifiers,
    })
}

/// Classify a whole table's columns, preserving schema order.
#[must_use]
pub fn classify_columns(
    table: &TableSchema,
    graph: &SchemaGraph,
    config: &ClassifierConfig,
) -> Vec<ColumnSpec> {
    table
        .columns
        .iter()
        .filter_map(|column| classify_column(column, table, graph, config))
        .collect()
}

/// Rewrite `*_id` columns to `relationship.title_column` when the foreign
/// key resolves; otherwise keep the raw column name.
fn display_path(
    column: &ColumnDescriptor,
    table: &TableSchema,
    graph: &SchemaGraph,
    config: &ClassifierConfig,
) -> String {
    if !column.name.ends_with("_id") {
        return column.name.clone();
    }

    graph.belongs_to(table, &column.name).map_or_else(
        || column.name.clone(),
        |relation| {
            format!(
                "{}.{}",
                relation.name,
                relation.target.title_column(&config.title_column_candidates)
            )
        },
    )
}

fn is_image_name(path: &str) -> bool {
    path == "image"
        || path.starts_with("image_")
        || path.contains("_image_")
        || path.ends_with("_image")
}
