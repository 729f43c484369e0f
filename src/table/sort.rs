//! Column sort order with a per-column three-state cycle.
//!
//! At most one column is active at a time. Activating a column starts
//! ascending; a second activation flips to descending; a third clears the
//! sort, returning the table to filtered (insertion) order. The sort is
//! stable, so equal keys keep their filtered order, and type-aware: ratings
//! compare numerically, names and comments as case-sensitive strings.

use super::store::ReviewStore;
use crate::domain::{Review, ReviewId};
use std::cmp::Ordering;

/// Sortable columns of the review table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    /// Restaurant name, lexicographic and case-sensitive.
    Name,
    /// Numeric rating.
    Rating,
    /// Review body, lexicographic and case-sensitive.
    Comment,
}

impl SortColumn {
    /// Column heading label as rendered.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::Rating => "RATING",
            Self::Comment => "REVIEW",
        }
    }
}

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The table's current sort order: one active column + direction, or none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOrder {
    active: Option<(SortColumn, SortDirection)>,
}

impl SortOrder {
    /// Creates an unsorted order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the three-state cycle for `column`.
    ///
    /// - inactive column: becomes the active column, ascending (any other
    ///   active column is deactivated)
    /// - active ascending: flips to descending
    /// - active descending: clears to unsorted
    pub fn cycle(&mut self, column: SortColumn) {
        self.active = match self.active {
            Some((active, SortDirection::Ascending)) if active == column => {
                Some((column, SortDirection::Descending))
            }
            Some((active, SortDirection::Descending)) if active == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };

        tracing::debug!(order = ?self.active, "sort order cycled");
    }

    /// The active column and direction, if the table is sorted.
    #[must_use]
    pub fn active(&self) -> Option<(SortColumn, SortDirection)> {
        self.active
    }

    /// The direction shown on a column heading, if that column is active.
    #[must_use]
    pub fn indicator(&self, column: SortColumn) -> Option<SortDirection> {
        match self.active {
            Some((active, direction)) if active == column => Some(direction),
            _ => None,
        }
    }

    /// Stably sorts a visible id list according to the active order.
    ///
    /// Unsorted leaves the filtered order untouched. Ids that no longer
    /// resolve in the store compare equal, which the stable sort leaves in
    /// place.
    pub fn apply(&self, rows: &mut [ReviewId], store: &ReviewStore) {
        let Some((column, direction)) = self.active else {
            return;
        };

        rows.sort_by(|a, b| {
            let ordering = match (store.get(*a), store.get(*b)) {
                (Some(left), Some(right)) => compare_by_column(left, right, column),
                _ => Ordering::Equal,
            };
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

/// Type-aware comparison of two reviews on one column.
fn compare_by_column(left: &Review, right: &Review, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Name => left.name.cmp(&right.name),
        SortColumn::Rating => left.rating.cmp(&right.rating),
        SortColumn::Comment => left.comment.cmp(&right.comment),
    }
}
