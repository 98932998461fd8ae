//! Schema-driven table scaffolding for admin panel resources
//!
//! Given a plain-data snapshot of a relational schema, this library decides
//! which columns an administrative table should display, which filters and
//! actions it should carry, and renders that decision as framework-style
//! source text ready to splice into a generated resource file.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod scaffold;
pub mod schema;

pub use scaffold::{
    ActionKind, BulkActionKind, ClassifierConfig, ColumnSpec, FilterKind, ImportRegistry,
    Modifier, ResourceOptions, TableGenerator, Widget,
};
pub use schema::{ColumnDescriptor, ColumnType, SchemaGraph, TableSchema};
