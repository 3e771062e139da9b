//! Derived views: filtered → sorted → paginated.
//!
//! These are pure functions of the table state. They are recomputed on
//! every call and never cached.

use std::sync::Arc;

use super::ColumnVisibility;
use super::DialogState;
use super::Direction;
use super::LoadStatus;
use super::Pagination;
use super::SortState;
use crate::model::Column;
use crate::model::FieldKey;
use crate::model::Resource;

/// Structured predicate ANDed with the free-text filter.
pub type Predicate<R> = Arc<dyn Fn(&R) -> bool + Send + Sync>;

/// Returns `true` if any of `fields` contains `needle` (already lowercased).
pub fn matches_text<R: Resource>(row: &R, needle: &str, fields: &[FieldKey]) -> bool {
    needle.is_empty()
        || fields
            .iter()
            .any(|field| row.field(field).to_text().to_lowercase().contains(needle))
}

/// Rows matching the free-text filter and the optional predicate, in
/// collection order.
pub fn filter_rows<'a, R: Resource>(
    rows: &'a [R],
    text: &str,
    fields: &[FieldKey],
    predicate: Option<&Predicate<R>>,
) -> Vec<&'a R> {
    let needle = text.to_lowercase();
    rows.iter()
        .filter(|row| matches_text(*row, &needle, fields))
        .filter(|row| predicate.is_none_or(|p| p(*row)))
        .collect()
}

/// Stable sort by the sorted column; ties keep their relative order.
pub fn sort_rows<R: Resource>(rows: &mut [&R], sort: SortState) {
    let SortState::By { column, direction } = sort else {
        return;
    };

    rows.sort_by(|a, b| {
        let ordering = a.field(column).compare(&b.field(column));
        match direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });
}

/// The rows of the current page.
pub fn paginate<'a, 'r, R>(rows: &'a [&'r R], pagination: &Pagination) -> &'a [&'r R] {
    &rows[pagination.range(rows.len())]
}

/// Snapshot of everything a table renderer needs.
#[derive(Debug, Clone)]
pub struct TableView<R: Resource> {
    /// Rows of the current page, in display order.
    pub rows: Vec<R>,
    /// Rows in the whole collection.
    pub total_count: usize,
    /// Rows matching the filter.
    pub filtered_count: usize,
    /// Pages of filtered rows; zero when nothing matches.
    pub total_pages: usize,
    /// 1-based current page.
    pub current_page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Page sizes offered to the user.
    pub page_size_options: Vec<usize>,
    /// Current filter text.
    pub filter: String,
    /// Current sort.
    pub sort: SortState,
    /// Visible columns, in display order.
    pub columns: Vec<Column>,
    /// Visibility of every known column (for the settings menu).
    pub visibility: ColumnVisibility,
    /// Open dialog.
    pub dialog: DialogState<R>,
    /// Load status of the collection.
    pub status: LoadStatus,
}

impl<R: Resource> TableView<R> {
    /// Returns `true` while the collection is being fetched.
    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    /// Returns `true` if nothing matches the filter.
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}
