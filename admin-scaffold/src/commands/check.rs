//! `check` command: validate a schema file and summarize its contents

use crate::SchemaGraph;
use anyhow::Result;
use console::style;
use std::path::PathBuf;

/// Validates a schema file and lists its tables and columns.
pub struct CheckCommand {
    /// Path to the schema JSON file
    pub schema: PathBuf,
}

impl CheckCommand {
    /// Run the command.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema file cannot be read or parsed.
    pub fn execute(&self) -> Result<()> {
        let graph = SchemaGraph::load(&self.schema)?;

        println!(
            "{} {} ({} tables)",
            style("Schema OK:").green().bold(),
            style(self.schema.display()).dim(),
            graph.tables.len()
        );

        for table in &graph.tables {
            println!(
                "  {} ({} columns, {} relationships)",
                style(&table.name).cyan().bold(),
                table.columns.len(),
                table.belongs_to.len()
            );

            for column in &table.columns {
                let mut notes = Vec::new();
                if column.auto_increment {
                    notes.push("auto-increment");
                }
                if column.nullable {
                    notes.push("nullable");
                }
                let notes = if notes.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", notes.join(", "))
                };
                println!(
                    "    {} {}{}",
                    style(&column.name).dim(),
                    column.column_type,
                    style(notes).dim()
                );
            }
        }

        Ok(())
    }
}
