//! Public-API acceptance: records file in, derived table out.

use chrono::NaiveDate;
use darc::model::column::{audit as col, audit_table_spec};
use darc::model::{TriggerType, UserRole};
use darc::source::{AuditQuery, Backend, JsonlStore};
use darc::table::{PageState, TableViewState};

fn write_records(lines: &[&str]) -> std::path::PathBuf {
    use std::sync::atomic::{AtomicUsize, Ordering};
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let path = std::env::temp_dir().join(format!(
        "darc_pipeline_{}_{}.jsonl",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    std::fs::write(&path, lines.join("\n")).unwrap();
    path
}

fn audit_line(id: usize, claim: &str, hospital: &str, day: u32) -> String {
    format!(
        r#"{{"type":"audit","id":"A-{id}","claim_number":"{claim}","claim_date":"2023-05-{day:02}","hospital_name":"{hospital}","trigger_type":"Ai"}}"#
    )
}

#[test]
fn file_to_rendered_order_round_trip() {
    let lines = vec![
        audit_line(1, "C300", "Vincent Hospital", 1),
        audit_line(2, "C100", "ABC Hospital", 2),
        audit_line(3, "C200", "Sunrise Care", 3),
        "this line is broken".to_string(),
    ];
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let path = write_records(&refs);

    let mut store = JsonlStore::open(path.clone()).unwrap();
    let _ = std::fs::remove_file(&path);

    let page = store
        .fetch_audits(&AuditQuery {
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            trigger: TriggerType::Ai,
            page: 1,
            page_size: 10,
        })
        .unwrap();
    assert_eq!(page.total, 3, "the broken line is skipped, not fatal");

    let rows: Vec<_> = page.records.iter().map(|r| r.to_row()).collect();
    let spec = audit_table_spec(UserRole::DeskAuditor);
    let mut view = TableViewState::new(&spec);

    // Unsorted keeps fetch order.
    let order = view.derive_order(&spec, &rows);
    assert_eq!(order, vec![0, 1, 2]);

    // Sort by claim number: C100, C200, C300.
    view.sort.cycle(col::CLAIM_NUMBER);
    let order = view.derive_order(&spec, &rows);
    let claims: Vec<_> = order
        .iter()
        .map(|&i| rows[i].cell(col::CLAIM_NUMBER).unwrap())
        .collect();
    assert_eq!(claims, vec!["C100", "C200", "C300"]);

    // Search narrows to the Vincent row regardless of sort.
    view.search = "vincent".to_string();
    let order = view.derive_order(&spec, &rows);
    assert_eq!(order.len(), 1);
    assert_eq!(rows[order[0]].cell(col::CLAIM_NUMBER), Some("C300"));
}

#[test]
fn server_side_pagination_meets_the_local_window() {
    let lines: Vec<String> = (1..=95)
        .map(|i| audit_line(i, &format!("C{i:03}"), "ABC Hospital", (i % 28) as u32 + 1))
        .collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let path = write_records(&refs);
    let mut store = JsonlStore::open(path.clone()).unwrap();
    let _ = std::fs::remove_file(&path);

    let mut page_state = PageState::new(10);
    let query = |page: usize| AuditQuery {
        start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
        trigger: TriggerType::Ai,
        page,
        page_size: 10,
    };

    let first = store.fetch_audits(&query(1)).unwrap();
    page_state.set_total(first.total);
    assert_eq!(page_state.total_pages(), 10);

    page_state.set_page(5);
    let fifth = store.fetch_audits(&query(page_state.page())).unwrap();
    assert_eq!(fifth.records.len(), 10);
    assert_eq!(fifth.records[0].claim_number, "C041");

    let window = darc::table::page_window(page_state.page(), page_state.total_pages());
    let numbers: Vec<_> = window
        .iter()
        .filter_map(|item| match item {
            darc::table::PageItem::Page(n) => Some(*n),
            darc::table::PageItem::Ellipsis => None,
        })
        .collect();
    assert_eq!(numbers, vec![1, 4, 5, 6, 10]);

    // The last page is short, exactly as the arithmetic says.
    page_state.set_page(10);
    let last = store.fetch_audits(&query(10)).unwrap();
    assert_eq!(last.records.len(), 5);
    assert_eq!(page_state.showing_range(), Some((91, 95)));
}
