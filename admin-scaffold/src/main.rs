//! admin-scaffold CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use admin_scaffold::commands::{CheckCommand, TableCommand};
use admin_scaffold::ResourceOptions;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "admin-scaffold")]
#[command(version)]
#[command(about = "Schema-driven scaffolding for admin panel resources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the table section for a resource
    Table {
        /// Table name in the schema file
        table: String,
        /// Path to the schema JSON file
        #[arg(long, default_value = "schema.json")]
        schema: PathBuf,
        /// Optional classifier policy file
        #[arg(long)]
        policy: Option<PathBuf>,
        /// Resource supports soft deletion
        #[arg(long)]
        soft_deletes: bool,
        /// Resource runs in simple (modal) mode
        #[arg(long)]
        simple: bool,
        /// Resource has a view page
        #[arg(long)]
        view: bool,
        /// Write output to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Validate a schema file and list its tables
    Check {
        /// Path to the schema JSON file
        #[arg(long, default_value = "schema.json")]
        schema: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Table {
            table,
            schema,
            policy,
            soft_deletes,
            simple,
            view,
            output,
        } => {
            let options = ResourceOptions {
                generated: true,
                soft_deletable: soft_deletes,
                simple,
                view_operation: view,
            };
            let cmd = TableCommand {
                table,
                schema,
                policy,
                options,
                output,
            };
            cmd.execute()?;
        }
        Commands::Check { schema } => {
            let cmd = CheckCommand { schema };
            cmd.execute()?;
        }
    }

    Ok(())
}
