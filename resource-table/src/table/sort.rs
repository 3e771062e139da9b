//! Tri-state column sorting.

use crate::model::FieldKey;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// Current sort of a table.
///
/// A direction exists exactly when a column is sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    /// Rows appear in collection order.
    #[default]
    Unsorted,
    /// Rows are sorted by one column.
    By {
        column: FieldKey,
        direction: Direction,
    },
}

impl SortState {
    /// Returns the state after a header click on `column`.
    ///
    /// Clicking a different column sorts it ascending; clicking the sorted
    /// column cycles ascending → descending → unsorted.
    pub fn advance(self, column: FieldKey) -> Self {
        match self {
            SortState::By {
                column: current,
                direction: Direction::Asc,
            } if current == column => SortState::By {
                column,
                direction: Direction::Desc,
            },
            SortState::By {
                column: current,
                direction: Direction::Desc,
            } if current == column => SortState::Unsorted,
            _ => SortState::By {
                column,
                direction: Direction::Asc,
            },
        }
    }

    /// Returns the sorted column, if any.
    pub fn column(&self) -> Option<FieldKey> {
        match self {
            SortState::Unsorted => None,
            SortState::By { column, .. } => Some(*column),
        }
    }

    /// Returns the sort direction, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            SortState::Unsorted => None,
            SortState::By { direction, .. } => Some(*direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_returns_to_unsorted() {
        let state = SortState::default()
            .advance("name")
            .advance("name")
            .advance("name");
        assert_eq!(state, SortState::Unsorted);
    }

    #[test]
    fn test_cycle_steps() {
        let asc = SortState::Unsorted.advance("name");
        assert_eq!(asc.direction(), Some(Direction::Asc));
        let desc = asc.advance("name");
        assert_eq!(desc.direction(), Some(Direction::Desc));
        assert_eq!(desc.column(), Some("name"));
    }

    #[test]
    fn test_other_column_restarts_ascending() {
        let state = SortState::Unsorted.advance("name").advance("name").advance("price");
        assert_eq!(
            state,
            SortState::By {
                column: "price",
                direction: Direction::Asc
            }
        );
    }

    #[test]
    fn test_unsorted_has_no_direction() {
        assert_eq!(SortState::Unsorted.column(), None);
        assert_eq!(SortState::Unsorted.direction(), None);
    }
}
