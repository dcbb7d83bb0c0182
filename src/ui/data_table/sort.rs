// SPDX-License-Identifier: MPL-2.0
//! Sort directives and the derived sorted view.

use super::cell::{CellValue, TableRow};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Direction of a sort directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Applies this direction to an ascending ordering.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// The column a table is sorted by, and in which direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDirective {
    pub column: String,
    pub direction: SortDirection,
}

impl SortDirective {
    #[must_use]
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    #[must_use]
    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Advances the sort cycle after a click on column `key`.
///
/// Same column: ascending, then descending, then unsorted. Another column
/// always starts at ascending.
#[must_use]
pub fn next_sort(current: Option<&SortDirective>, key: &str) -> Option<SortDirective> {
    match current {
        Some(directive) if directive.column == key => match directive.direction {
            SortDirection::Ascending => Some(SortDirective::descending(key)),
            SortDirection::Descending => None,
        },
        _ => Some(SortDirective::ascending(key)),
    }
}

/// Returns `rows` in display order without touching the input.
///
/// With no directive this is the input order. Otherwise rows are ordered by
/// the directive's field; the sort is stable in both directions, so equal
/// values keep their input order.
pub fn sorted_view<'a, T: TableRow>(
    rows: &'a [T],
    directive: Option<&SortDirective>,
) -> Vec<&'a T> {
    let Some(directive) = directive else {
        return rows.iter().collect();
    };

    let mut keyed: Vec<(CellValue, &'a T)> = rows
        .iter()
        .map(|row| (row.cell(&directive.column), row))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| directive.direction.apply(a.compare(b)));
    keyed.into_iter().map(|(_, row)| row).collect()
}
