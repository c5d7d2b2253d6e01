//! Shared builders for tests.

use crate::model::{AuditRecord, RiskRule};
use crate::source::AuditPage;

/// Build an audit record with the interesting fields set and sensible
/// defaults everywhere else.
pub fn audit_record(id: &str, claim_number: &str, hospital: &str, status: &str) -> AuditRecord {
    serde_json::from_str(&format!(
        r#"{{
            "id": "{id}",
            "claim_number": "{claim_number}",
            "claim_date": "2023-06-15",
            "hospital_name": "{hospital}",
            "status": "{status}",
            "trigger_type": "Ai"
        }}"#
    ))
    .expect("test record must parse")
}

/// Build a fetched page: `count` generated records and the given total.
pub fn audit_page(total: usize, count: usize) -> AuditPage {
    let records = (0..count)
        .map(|i| {
            audit_record(
                &format!("A-{}", i + 1),
                &format!("C{}", 100 + i),
                "ABC Hospital",
                if i % 2 == 0 { "Pending" } else { "Completed" },
            )
        })
        .collect();
    AuditPage { records, total }
}

/// The demo rule set, for screens that want realistic rules.
pub fn demo_rules() -> Vec<RiskRule> {
    crate::source::demo::demo_records().1
}
