//! Single-column sort stage.

use crate::model::{ColumnKey, Row};

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

/// Sort state machine.
///
/// Sum type enforces exactly one state: either no sort is applied and
/// the search-stage order passes through untouched, or exactly one
/// column sorts in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    /// No sort applied; rows keep their fetch order.
    #[default]
    Unsorted,
    /// Sorting by one column.
    By {
        /// The sorted column.
        column: ColumnKey,
        /// The direction.
        direction: SortDirection,
    },
}

impl SortState {
    /// Advance the cycle for a header activation.
    ///
    /// Same column: ascending, then descending, then cleared. A different
    /// column always starts ascending.
    pub fn cycle(&mut self, column: ColumnKey) {
        *self = match *self {
            SortState::By {
                column: current,
                direction: SortDirection::Ascending,
            } if current == column => SortState::By {
                column,
                direction: SortDirection::Descending,
            },
            SortState::By {
                column: current,
                direction: SortDirection::Descending,
            } if current == column => SortState::Unsorted,
            _ => SortState::By {
                column,
                direction: SortDirection::Ascending,
            },
        };
    }

    /// The direction applied to a column, if that column is sorted.
    pub fn direction_for(&self, column: ColumnKey) -> Option<SortDirection> {
        match self {
            SortState::By {
                column: current,
                direction,
            } if *current == column => Some(*direction),
            _ => None,
        }
    }
}

/// Order the searched subset by the sort state.
///
/// `order` is a list of indices into `rows` (the search-stage output).
/// Cleared sort returns it unchanged. An active sort compares cell
/// values as lowercase strings, lexicographically, so numeric-looking
/// claim numbers sort as text. The sort is stable for equal keys, and a
/// second application in the opposite direction is also stable.
///
/// Rows missing the sort column are ties against everything: they hold
/// their slots while valued rows reorder around them. They are never
/// pushed to one end and never cause an error.
pub fn sort_order(rows: &[Row], order: Vec<usize>, sort: &SortState) -> Vec<usize> {
    let (column, direction) = match sort {
        SortState::Unsorted => return order,
        SortState::By { column, direction } => (*column, *direction),
    };

    // Slots whose row carries the column, with their fold-cased keys.
    let mut valued: Vec<(String, usize)> = Vec::new();
    let mut slots: Vec<usize> = Vec::new();
    for (slot, &row_idx) in order.iter().enumerate() {
        if let Some(value) = rows.get(row_idx).and_then(|r| r.cell(column)) {
            valued.push((value.to_lowercase(), row_idx));
            slots.push(slot);
        }
    }

    match direction {
        SortDirection::Ascending => valued.sort_by(|a, b| a.0.cmp(&b.0)),
        SortDirection::Descending => valued.sort_by(|a, b| b.0.cmp(&a.0)),
    }

    let mut result = order;
    for (slot, (_, row_idx)) in slots.into_iter().zip(valued) {
        result[slot] = row_idx;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Row> {
        vec![
            Row::new("1").with_cell("name", "Vincent"),
            Row::new("2").with_cell("name", "abc"),
            Row::new("3").with_cell("name", "Delta"),
        ]
    }

    fn by(column: ColumnKey, direction: SortDirection) -> SortState {
        SortState::By { column, direction }
    }

    #[test]
    fn cycle_advances_asc_desc_cleared() {
        let mut sort = SortState::Unsorted;
        sort.cycle("name");
        assert_eq!(sort, by("name", SortDirection::Ascending));
        sort.cycle("name");
        assert_eq!(sort, by("name", SortDirection::Descending));
        sort.cycle("name");
        assert_eq!(sort, SortState::Unsorted);
    }

    #[test]
    fn cycle_to_other_column_resets_to_ascending() {
        let mut sort = by("name", SortDirection::Descending);
        sort.cycle("status");
        assert_eq!(sort, by("status", SortDirection::Ascending));
    }

    #[test]
    fn unsorted_passes_order_through() {
        let order = vec![2, 0, 1];
        assert_eq!(
            sort_order(&rows(), order.clone(), &SortState::Unsorted),
            order
        );
    }

    #[test]
    fn ascending_compares_lowercased() {
        let order = sort_order(
            &rows(),
            vec![0, 1, 2],
            &by("name", SortDirection::Ascending),
        );
        // abc < delta < vincent once case is folded.
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn descending_reverses_comparison_not_the_slice() {
        let order = sort_order(
            &rows(),
            vec![0, 1, 2],
            &by("name", SortDirection::Descending),
        );
        assert_eq!(order, vec![0, 2, 1]);
    }

    #[test]
    fn numeric_looking_values_sort_lexicographically() {
        let rows = vec![
            Row::new("1").with_cell("claim", "C9"),
            Row::new("2").with_cell("claim", "C10"),
            Row::new("3").with_cell("claim", "C100"),
        ];
        let order = sort_order(
            &rows,
            vec![0, 1, 2],
            &by("claim", SortDirection::Ascending),
        );
        // "c10" < "c100" < "c9" as text.
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn equal_keys_keep_their_relative_order() {
        let rows = vec![
            Row::new("1").with_cell("status", "Pending"),
            Row::new("2").with_cell("status", "pending"),
            Row::new("3").with_cell("status", "Completed"),
        ];
        let asc = sort_order(
            &rows,
            vec![0, 1, 2],
            &by("status", SortDirection::Ascending),
        );
        assert_eq!(asc, vec![2, 0, 1]);
        let desc = sort_order(
            &rows,
            vec![0, 1, 2],
            &by("status", SortDirection::Descending),
        );
        assert_eq!(desc, vec![0, 1, 2]);
    }

    #[test]
    fn rows_missing_the_column_hold_their_slots() {
        let rows = vec![
            Row::new("1").with_cell("name", "zeta"),
            Row::new("2"),
            Row::new("3").with_cell("name", "alpha"),
        ];
        let order = sort_order(&rows, vec![0, 1, 2], &by("name", SortDirection::Ascending));
        // The valueless row stays in the middle slot.
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn all_rows_missing_the_column_is_identity() {
        let rows = vec![Row::new("1"), Row::new("2")];
        let order = sort_order(&rows, vec![0, 1], &by("name", SortDirection::Ascending));
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn direction_for_reports_only_the_sorted_column() {
        let sort = by("name", SortDirection::Descending);
        assert_eq!(
            sort.direction_for("name"),
            Some(SortDirection::Descending)
        );
        assert_eq!(sort.direction_for("status"), None);
    }
}
