//! Row and bulk action selection

use super::config::ResourceOptions;

/// A single-row table action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Open the record's view page
    View,
    /// Open the record's edit page
    Edit,
    /// Delete the record
    Delete,
    /// Permanently delete a soft-deleted record
    ForceDelete,
    /// Restore a soft-deleted record
    Restore,
}

impl ActionKind {
    /// Symbol name referenced by the generated code.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::View => "ViewAction",
            Self::Edit => "EditAction",
            Self::Delete => "DeleteAction",
            Self::ForceDelete => "ForceDeleteAction",
            Self::Restore => "RestoreAction",
        }
    }
}

/// A multi-row selection action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkActionKind {
    /// Delete the selected records
    Delete,
    /// Permanently delete the selected soft-deleted records
    ForceDelete,
    /// Restore the selected soft-deleted records
    Restore,
}

impl BulkActionKind {
    /// Symbol name referenced by the generated code.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Delete => "DeleteBulkAction",
            Self::ForceDelete => "ForceDeleteBulkAction",
            Self::Restore => "RestoreBulkAction",
        }
    }
}

/// Select the row actions for a resource's table, in display order.
///
/// Edit is always present. View comes first when the resource has a view
/// operation. Simple-mode resources manage records inline, so they also get
/// delete (and, when soft-deletable, force-delete and restore) as row
/// actions.
#[must_use]
pub fn table_actions(options: ResourceOptions) -> Vec<ActionKind> {
    let mut actions = Vec::new();

    if options.view_operation {
        actions.push(ActionKind::View);
    }

    actions.push(ActionKind::Edit);

    if options.simple {
        actions.push(ActionKind::Delete);

        if options.soft_deletable {
            actions.push(ActionKind::ForceDelete);
            actions.push(ActionKind::Restore);
        }
    }

    actions
}

/// Select the bulk actions for a resource's table, in display order.
///
/// Delete always comes first; soft-deletable resources additionally get
/// force-delete and restore.
#[must_use]
pub fn table_bulk_actions(options: ResourceOptions) -> Vec<BulkActionKind> {
    let mut actions = vec![BulkActionKind::Delete];

    if options.soft_deletable {
        actions.push(BulkActionKind::ForceDelete);
        actions.push(BulkActionKind::Restore);
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_only_by_default() {
        assert_eq!(table_actions(ResourceOptions::default()), vec![ActionKind::Edit]);
    }

    #[test]
    fn test_view_comes_before_edit() {
        let options = ResourceOptions {
            view_operation: true,
            ..ResourceOptions::default()
        };
        assert_eq!(
            table_actions(options),
            vec![ActionKind::View, ActionKind::Edit]
        );
    }

    #[test]
    fn test_simple_mode_adds_delete() {
        let options = ResourceOptions {
            simple: true,
            ..ResourceOptions::default()
        };
        assert_eq!(
            table_actions(options),
            vec![ActionKind::Edit, ActionKind::Delete]
        );
    }

    #[test]
    fn test_simple_soft_deletable_adds_force_delete_and_restore() {
        let options = ResourceOptions {
            simple: true,
            soft_deletable: true,
            ..ResourceOptions::default()
        };
        assert_eq!(
            table_actions(options),
            vec![
                ActionKind::Edit,
                ActionKind::Delete,
                ActionKind::ForceDelete,
                ActionKind::Restore,
            ]
        );
    }

    #[test]
    fn test_soft_deletable_without_simple_mode_keeps_row_actions_minimal() {
        let options = ResourceOptions {
            soft_deletable: true,
            ..ResourceOptions::default()
        };
        assert_eq!(table_actions(options), vec![ActionKind::Edit]);
    }

    #[test]
    fn test_bulk_delete_always_first() {
        assert_eq!(
            table_bulk_actions(ResourceOptions::default()),
            vec![BulkActionKind::Delete]
        );

        let options = ResourceOptions {
            soft_deletable: true,
            ..ResourceOptions::default()
        };
        assert_eq!(
            table_bulk_actions(options),
            vec![
                BulkActionKind::Delete,
                BulkActionKind::ForceDelete,
                BulkActionKind::Restore,
            ]
        );
    }
}
