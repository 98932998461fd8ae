//! Table section orchestration and import bookkeeping
//!
//! [`TableGenerator`] ties the classifier and selectors together and renders
//! the table-building expression spliced into a generated resource file. It
//! also records every symbol the rendered code references so the surrounding
//! file-generation context can emit the matching imports.

use std::collections::BTreeSet;

use super::actions::{table_actions, table_bulk_actions, ActionKind, BulkActionKind};
use super::columns::{classify_columns, ColumnSpec, Modifier};
use super::config::{ClassifierConfig, ResourceOptions};
use super::expr::{render_section, Literal, MakeExpr};
use super::filters::{table_filters, FilterKind};
use crate::schema::SchemaGraph;

/// Symbols referenced by generated output, deduplicated and ordered.
#[derive(Debug, Clone, Default)]
pub struct ImportRegistry {
    symbols: BTreeSet<String>,
}

impl ImportRegistry {
    /// Record a referenced symbol.
    pub fn register(&mut self, symbol: &str) {
        self.symbols.insert(symbol.to_string());
    }

    /// Iterate the recorded symbols in deterministic order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

/// Generates the table section of an admin resource from a schema snapshot.
pub struct TableGenerator<'a> {
    graph: &'a SchemaGraph,
    options: ResourceOptions,
    config: ClassifierConfig,
    imports: ImportRegistry,
}

impl<'a> TableGenerator<'a> {
    /// Create a generator with the default classifier policy.
    #[must_use]
    pub fn new(graph: &'a SchemaGraph, options: ResourceOptions) -> Self {
        Self::with_config(graph, options, ClassifierConfig::default())
    }

    /// Create a generator with an explicit classifier policy.
    #[must_use]
    pub fn with_config(
        graph: &'a SchemaGraph,
        options: ResourceOptions,
        config: ClassifierConfig,
    ) -> Self {
        Self {
            graph,
            options,
            config,
            imports: ImportRegistry::default(),
        }
    }

    /// Classify the columns of `table` and record their widget imports.
    ///
    /// Returns an empty list when column generation is disabled or the table
    /// is missing from the graph; callers treat "no columns" as a valid
    /// outcome, not an error.
    pub fn table_columns(&mut self, table: &str) -> Vec<ColumnSpec> {
        if !self.options.generated {
            return Vec::new();
        }

        let Some(table) = self.graph.table(table) else {
            return Vec::new();
        };

        let columns = classify_columns(table, self.graph, &self.config);
        for column in &columns {
            self.imports.register(column.widget.symbol());
        }
        columns
    }

    /// Select filters and record their imports.
    pub fn table_filters(&mut self) -> Vec<FilterKind> {
        let filters = table_filters(self.options);
        for filter in &filters {
            self.imports.register(filter.symbol());
        }
        filters
    }

    /// Select row actions and record their imports.
    pub fn table_actions(&mut self) -> Vec<ActionKind> {
        let actions = table_actions(self.options);
        for action in &actions {
            self.imports.register(action.symbol());
        }
        actions
    }

    /// Select bulk actions and record their imports.
    pub fn table_bulk_actions(&mut self) -> Vec<BulkActionKind> {
        let actions = table_bulk_actions(self.options);
        for action in &actions {
            self.imports.register(action.symbol());
        }
        actions
    }

    /// Render the full table-building expression for `table`.
    pub fn table_body(&mut self, table: &str) -> String {
        self.imports.register("BulkActionGroup");

        let columns: Vec<MakeExpr> = self
            .table_columns(table)
            .iter()
            .map(column_expr)
            .collect();
        let filters: Vec<MakeExpr> = self
            .table_filters()
            .iter()
            .map(|filter| MakeExpr::new(filter.symbol()))
            .collect();
        let actions: Vec<MakeExpr> = self
            .table_actions()
            .iter()
            .map(|action| MakeExpr::new(action.symbol()))
            .collect();
        let bulk_actions: Vec<MakeExpr> = self
            .table_bulk_actions()
            .iter()
            .map(|action| MakeExpr::new(action.symbol()))
            .collect();

        let mut body = String::new();
        body.push_str("Table::builder()\n");
        body.push_str("    .columns([\n");
        body.push_str(&format!("        {}\n", render_section(&columns, 8)));
        body.push_str("    ])\n");
        body.push_str("    .filters([\n");
        body.push_str(&format!("        {}\n", render_section(&filters, 8)));
        body.push_str("    ])\n");
        body.push_str("    .record_actions([\n");
        body.push_str(&format!("        {}\n", render_section(&actions, 8)));
        body.push_str("    ])\n");
        body.push_str("    .bulk_actions([\n");
        body.push_str("        BulkActionGroup::make([\n");
        body.push_str(&format!("            {}\n", render_section(&bulk_actions, 12)));
        body.push_str("        ]),\n");
        body.push_str("    ])");
        body
    }

    /// Symbols referenced so far by generated output.
    #[must_use]
    pub const fn imports(&self) -> &ImportRegistry {
        &self.imports
    }
}

fn column_expr(column: &ColumnSpec) -> MakeExpr {
    let mut expr =
        MakeExpr::new(column.widget.symbol()).arg(Literal::Str(column.display_path.clone()));

    for modifier in &column.modifiers {
        expr = match modifier {
            Modifier::Label(label) => expr.call("label", vec![Literal::Str(label.clone())]),
            Modifier::Boolean => expr.call("boolean", Vec::new()),
            Modifier::Searchable => expr.call("searchable", Vec::new()),
            Modifier::Date => expr.call("date", Vec::new()),
            Modifier::DateTime => expr.call("date_time", Vec::new()),
            Modifier::Numeric => expr.call("numeric", Vec::new()),
            Modifier::Money => expr.call("money", Vec::new()),
            Modifier::Sortable => expr.call("sortable", Vec::new()),
            Modifier::ToggledHiddenByDefault => {
                expr.call("toggleable", vec![Literal::Bool(true)])
            }
        };
    }

    expr
}
