//! Public-API property tests for the table engine.

use darc::model::{Column, Row};
use darc::table::{page_window, search_order, PageItem, TableSpec, TableViewState};
use proptest::prelude::*;

fn spec() -> TableSpec {
    TableSpec::new(
        vec![
            Column::new("claim_number", "Claim Number"),
            Column::new("status", "Status"),
        ],
        vec!["claim_number", "status"],
        vec![],
        "claim_number",
    )
}

fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
    proptest::collection::vec(
        ("[A-Z][0-9]{1,4}", proptest::option::of("[A-Za-z]{1,8}")),
        0..40,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(idx, (claim, status))| {
                let mut row = Row::new(format!("{idx}"));
                row.set("claim_number", claim);
                if let Some(status) = status {
                    row.set("status", status);
                }
                row
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn search_is_contraction_and_identity_on_empty(rows in arb_rows(), query in "[a-z0-9]{0,3}") {
        let spec = spec();
        let all = search_order(&spec, &rows, "");
        prop_assert_eq!(all.len(), rows.len());

        let narrowed = search_order(&spec, &rows, &query);
        prop_assert!(narrowed.len() <= rows.len());
        prop_assert!(narrowed.iter().all(|idx| all.contains(idx)));
    }

    #[test]
    fn three_clicks_restore_the_original_projection(rows in arb_rows()) {
        let spec = spec();
        let mut view = TableViewState::new(&spec);
        let before = view.derive_order(&spec, &rows);
        view.sort.cycle("claim_number");
        view.sort.cycle("claim_number");
        view.sort.cycle("claim_number");
        prop_assert_eq!(view.derive_order(&spec, &rows), before);
    }

    #[test]
    fn window_endpoints_always_present(total in 1usize..300, current in 1usize..300) {
        let items = page_window(current, total);
        let first = items.first();
        let last = items.last();
        prop_assert_eq!(first, Some(&PageItem::Page(1)));
        prop_assert_eq!(last, Some(&PageItem::Page(total)));
    }
}
