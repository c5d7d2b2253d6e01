//! Data-source boundary.
//!
//! The table engine never fetches; screens describe what they want with
//! an [`AuditQuery`] and a [`Backend`] answers with one page of records
//! plus the total count, the way the remote audit service does. The
//! shipped implementation is a JSONL-file store (or its built-in demo
//! twin); tests substitute their own.

use crate::model::{AuditRecord, InputError, RiskRule, TriggerType};
use chrono::NaiveDate;
use std::path::PathBuf;

pub mod demo;
pub mod jsonl;

pub use jsonl::JsonlStore;

/// Parameters of one paginated audit fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditQuery {
    /// Claim-date range start, inclusive.
    pub start_date: NaiveDate,
    /// Claim-date range end, inclusive.
    pub end_date: NaiveDate,
    /// Trigger-type selector.
    pub trigger: TriggerType,
    /// Requested page, 1-based.
    pub page: usize,
    /// Rows per page, at least 1.
    pub page_size: usize,
}

/// One page of audit records plus the filtered total.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuditPage {
    /// The records of the requested page, in store order.
    pub records: Vec<AuditRecord>,
    /// Total records matching the query across all pages.
    pub total: usize,
}

/// The remote-data collaborator the screens talk to.
pub trait Backend {
    /// Fetch one page of desk audits matching the query.
    fn fetch_audits(&mut self, query: &AuditQuery) -> Result<AuditPage, InputError>;

    /// Fetch the full rule set. Rules are filtered and paginated
    /// client-side.
    fn fetch_rules(&mut self) -> Result<Vec<RiskRule>, InputError>;
}

/// Pick the backend from CLI intent: a records file when a path is
/// given, the demo dataset on `--demo`, otherwise refuse.
pub fn detect_backend(file: Option<PathBuf>, demo: bool) -> Result<JsonlStore, InputError> {
    match file {
        Some(path) => JsonlStore::open(path),
        None if demo => Ok(JsonlStore::demo()),
        None => Err(InputError::NoInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_prefers_a_file_path() {
        let temp = std::env::temp_dir().join("darc_detect_file.jsonl");
        std::fs::write(&temp, "").unwrap();
        let result = detect_backend(Some(temp.clone()), false);
        let _ = std::fs::remove_file(&temp);
        assert!(result.is_ok());
    }

    #[test]
    fn detect_missing_file_fails_even_with_demo() {
        let missing = std::env::temp_dir().join("darc_detect_missing_12345.jsonl");
        let result = detect_backend(Some(missing.clone()), true);
        assert!(
            matches!(result, Err(InputError::FileNotFound { path }) if path == missing),
            "explicit file beats --demo and must exist"
        );
    }

    #[test]
    fn detect_falls_back_to_demo() {
        assert!(detect_backend(None, true).is_ok());
    }

    #[test]
    fn detect_refuses_when_nothing_was_asked() {
        assert!(matches!(
            detect_backend(None, false),
            Err(InputError::NoInput)
        ));
    }
}
