//! Column visibility preferences.

use crate::model::Column;
use crate::model::FieldKey;

/// Which columns of a table are shown.
///
/// Keeps the schema's column order. At least one column is always visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnVisibility {
    columns: Vec<(FieldKey, bool)>,
}

impl ColumnVisibility {
    /// Every column visible.
    pub fn all_visible(columns: &[Column]) -> Self {
        Self {
            columns: columns.iter().map(|c| (c.key, true)).collect(),
        }
    }

    /// Every column visible except `hidden`.
    ///
    /// If that would hide everything, the first column stays visible.
    pub fn with_hidden(columns: &[Column], hidden: &[FieldKey]) -> Self {
        let mut visibility = Self {
            columns: columns
                .iter()
                .map(|c| (c.key, !hidden.contains(&c.key)))
                .collect(),
        };
        if visibility.visible_count() == 0
            && let Some(first) = visibility.columns.first_mut()
        {
            first.1 = true;
        }
        visibility
    }

    /// Returns whether a column is visible; unknown columns are not.
    pub fn is_visible(&self, column: &str) -> bool {
        self.columns
            .iter()
            .any(|(key, visible)| *key == column && *visible)
    }

    /// Shows or hides a column.
    ///
    /// Returns `false` without changing anything when the column is unknown
    /// or when hiding it would leave no column visible.
    pub fn set(&mut self, column: &str, visible: bool) -> bool {
        let last_visible = self.visible_count() == 1;
        let Some(entry) = self.columns.iter_mut().find(|(key, _)| *key == column) else {
            return false;
        };

        if entry.1 == visible {
            return false;
        }
        if !visible && last_visible {
            return false;
        }

        entry.1 = visible;
        true
    }

    /// Number of visible columns.
    pub fn visible_count(&self) -> usize {
        self.columns.iter().filter(|(_, visible)| *visible).count()
    }

    /// Visible column keys, in display order.
    pub fn visible(&self) -> Vec<FieldKey> {
        self.columns
            .iter()
            .filter(|(_, visible)| *visible)
            .map(|(key, _)| *key)
            .collect()
    }

    /// All known columns with their visibility.
    pub fn entries(&self) -> &[(FieldKey, bool)] {
        &self.columns
    }

    /// Returns `true` if this visibility describes exactly the given columns.
    ///
    /// Used to reject stored preferences saved for a different schema.
    pub fn matches(&self, columns: &[Column]) -> bool {
        self.columns.len() == columns.len()
            && self
                .columns
                .iter()
                .zip(columns)
                .all(|((key, _), column)| *key == column.key)
    }
}
