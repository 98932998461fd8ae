//! Table scaffolding for admin resources
//!
//! This module turns a schema snapshot into the table section of a generated
//! resource: column classification, filter and action selection, and the
//! rendering of the resulting table-building expression.

pub mod actions;
pub mod columns;
pub mod config;
pub mod expr;
pub mod filters;
pub mod table;

pub use actions::{ActionKind, BulkActionKind};
pub use columns::{ColumnSpec, Modifier, Widget};
pub use config::{ClassifierConfig, ResourceOptions};
pub use expr::{Literal, MakeExpr, MethodCall};
pub use filters::FilterKind;
pub use table::{ImportRegistry, TableGenerator};
