//! Table filter selection

use super::config::ResourceOptions;

/// A table filter kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Filter between live, trashed, and all records
    Trashed,
}

impl FilterKind {
    /// Symbol name referenced by the generated code.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Trashed => "TrashedFilter",
        }
    }
}

/// Select the filters for a resource's table.
///
/// Soft-deletable resources get exactly one trashed filter; everything else
/// gets none.
#[must_use]
pub fn table_filters(options: ResourceOptions) -> Vec<FilterKind> {
    let mut filters = Vec::new();

    if options.soft_deletable {
        filters.push(FilterKind::Trashed);
    }

    filters
}
