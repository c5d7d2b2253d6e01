//! Free-text search stage.

use crate::model::Row;
use crate::table::TableSpec;

/// Select the rows matching a free-text query.
///
/// A row matches when at least one of the spec's searchable columns
/// contains the query as a case-insensitive substring. An empty or
/// whitespace-only query is the identity: every index, in input order.
/// A row missing a searchable field simply cannot match on that field.
///
/// This is a linear scan per keystroke. The row slice is a single page
/// of data, not the full dataset; the true filter (date range, trigger
/// type) happens at the data source before rows ever get here.
pub fn search_order(spec: &TableSpec, rows: &[Row], query: &str) -> Vec<usize> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return (0..rows.len()).collect();
    }
    let needle = trimmed.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row_matches(spec, row, &needle))
        .map(|(idx, _)| idx)
        .collect()
}

fn row_matches(spec: &TableSpec, row: &Row, needle: &str) -> bool {
    spec.searchable().iter().copied().any(|key| {
        row.cell(key)
            .is_some_and(|value| value.to_lowercase().contains(needle))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;

    fn spec() -> TableSpec {
        TableSpec::new(
            vec![
                Column::new("claim_number", "Claim Number"),
                Column::new("hospital_name", "Hospital Name"),
                Column::new("status", "Status"),
                Column::new("notes", "Notes"),
            ],
            vec!["claim_number", "hospital_name", "status"],
            vec![],
            "claim_number",
        )
    }

    fn rows() -> Vec<Row> {
        vec![
            Row::new("1")
                .with_cell("claim_number", "C100")
                .with_cell("status", "Pending"),
            Row::new("2")
                .with_cell("claim_number", "C200")
                .with_cell("status", "Completed"),
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        assert_eq!(search_order(&spec(), &rows(), ""), vec![0, 1]);
    }

    #[test]
    fn whitespace_query_is_identity() {
        assert_eq!(search_order(&spec(), &rows(), "   "), vec![0, 1]);
    }

    #[test]
    fn matches_are_case_insensitive() {
        assert_eq!(search_order(&spec(), &rows(), "c1"), vec![0]);
        assert_eq!(search_order(&spec(), &rows(), "PENDING"), vec![0]);
    }

    #[test]
    fn query_can_match_any_searchable_column() {
        let rows = vec![
            Row::new("1")
                .with_cell("claim_number", "C100")
                .with_cell("hospital_name", "Vincent Hospital"),
            Row::new("2")
                .with_cell("claim_number", "C200")
                .with_cell("hospital_name", "ABC Hospital"),
        ];
        assert_eq!(search_order(&spec(), &rows, "vincent"), vec![0]);
        assert_eq!(search_order(&spec(), &rows, "hospital"), vec![0, 1]);
    }

    #[test]
    fn unsearchable_columns_never_match() {
        let rows = vec![Row::new("1")
            .with_cell("claim_number", "C100")
            .with_cell("notes", "urgent")];
        assert_eq!(search_order(&spec(), &rows, "urgent"), Vec::<usize>::new());
    }

    #[test]
    fn missing_field_is_not_a_match_and_not_an_error() {
        let rows = vec![
            Row::new("1").with_cell("status", "Pending"),
            Row::new("2")
                .with_cell("claim_number", "C200")
                .with_cell("status", "Pending"),
        ];
        assert_eq!(search_order(&spec(), &rows, "c2"), vec![1]);
    }

    #[test]
    fn result_preserves_input_order() {
        let rows = vec![
            Row::new("1").with_cell("status", "Pending"),
            Row::new("2").with_cell("status", "Completed"),
            Row::new("3").with_cell("status", "Pending"),
        ];
        assert_eq!(search_order(&spec(), &rows, "pending"), vec![0, 2]);
    }
}
