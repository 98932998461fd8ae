//! `table` command: generate the table section for one resource

use crate::{ClassifierConfig, ResourceOptions, SchemaGraph, TableGenerator};
use anyhow::{Context, Result};
use console::style;
use std::fs;
use std::path::PathBuf;

/// Generates the table section for one resource and prints or writes it,
/// preceded by the `use` lines the generated code needs.
pub struct TableCommand {
    /// Table name in the schema file
    pub table: String,
    /// Path to the schema JSON file
    pub schema: PathBuf,
    /// Optional classifier policy override file
    pub policy: Option<PathBuf>,
    /// Capability flags of the resource
    pub options: ResourceOptions,
    /// Output file; stdout when absent
    pub output: Option<PathBuf>,
}

impl TableCommand {
    /// Run the command.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema or policy file cannot be loaded, or
    /// the output file cannot be written.
    pub fn execute(&self) -> Result<()> {
        let graph = SchemaGraph::load(&self.schema)?;
        let config = match &self.policy {
            Some(path) => ClassifierConfig::load(path)?,
            None => ClassifierConfig::default(),
        };

        let mut generator = TableGenerator::with_config(&graph, self.options, config);
        let body = generator.table_body(&self.table);

        let mut source = String::new();
        for symbol in generator.imports().symbols() {
            source.push_str(&format!("use {};\n", import_path(symbol)));
        }
        source.push('\n');
        source.push_str(&body);
        source.push('\n');

        if let Some(path) = &self.output {
            fs::write(path, &source)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            println!(
                "{} table section for {} {} {}",
                style("Wrote").green().bold(),
                style(&self.table).cyan().bold(),
                style("to").dim(),
                style(path.display()).dim()
            );
        } else {
            println!(
                "{} {}\n",
                style("Table section for").cyan().bold(),
                style(&self.table).green().bold()
            );
            println!("{source}");
        }

        Ok(())
    }
}

/// Map a registered symbol to its import path in the target framework.
fn import_path(symbol: &str) -> String {
    let module = if symbol.ends_with("Action") || symbol.ends_with("ActionGroup") {
        "actions"
    } else if symbol.ends_with("Filter") {
        "tables::filters"
    } else {
        "tables::columns"
    };
    format!("admin_panel::{module}::{symbol}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_paths_by_symbol_family() {
        assert_eq!(
            import_path("TextColumn"),
            "admin_panel::tables::columns::TextColumn"
        );
        assert_eq!(
            import_path("TrashedFilter"),
            "admin_panel::tables::filters::TrashedFilter"
        );
        assert_eq!(import_path("EditAction"), "admin_panel::actions::EditAction");
        assert_eq!(
            import_path("BulkActionGroup"),
            "admin_panel::actions::BulkActionGroup"
        );
    }
}
