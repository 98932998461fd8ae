//! CLI command implementations

pub mod check;
pub mod table;

pub use check::CheckCommand;
pub use table::TableCommand;
