//! JSONL-file record store.

use crate::model::{AuditRecord, InputError, RiskRule};
use crate::parser;
use crate::source::{AuditPage, AuditQuery, Backend};
use std::path::PathBuf;
use tracing::{info, warn};

/// Record store backed by a JSONL file, read once at startup.
///
/// The store answers queries the way the remote audit service would:
/// the date-range and trigger-type filter runs here, "server-side",
/// before pagination; the table engine only ever sees one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonlStore {
    audits: Vec<AuditRecord>,
    rules: Vec<RiskRule>,
}

impl JsonlStore {
    /// Load a records file. Malformed lines are logged and skipped; a
    /// missing file is an error.
    pub fn open(path: PathBuf) -> Result<Self, InputError> {
        if !path.exists() {
            return Err(InputError::FileNotFound { path });
        }
        let contents = std::fs::read_to_string(&path).map_err(|source| InputError::Io {
            path: path.clone(),
            source,
        })?;
        let document = parser::parse_document(&contents);
        for malformed in &document.malformed {
            warn!(
                "Parse error at line {}: {}",
                malformed.line_number(),
                malformed.error_message()
            );
        }
        info!(
            audits = document.audits.len(),
            rules = document.rules.len(),
            skipped = document.malformed.len(),
            path = %path.display(),
            "Loaded records file"
        );
        Ok(Self {
            audits: document.audits,
            rules: document.rules,
        })
    }

    /// The built-in demo dataset.
    pub fn demo() -> Self {
        let (audits, rules) = crate::source::demo::demo_records();
        Self { audits, rules }
    }

    /// Build a store from already-parsed records. Test seam.
    pub fn from_records(audits: Vec<AuditRecord>, rules: Vec<RiskRule>) -> Self {
        Self { audits, rules }
    }
}

impl Backend for JsonlStore {
    fn fetch_audits(&mut self, query: &AuditQuery) -> Result<AuditPage, InputError> {
        let matching: Vec<&AuditRecord> = self
            .audits
            .iter()
            .filter(|record| {
                record.claim_date >= query.start_date
                    && record.claim_date <= query.end_date
                    && record.trigger_type == query.trigger
            })
            .collect();
        let total = matching.len();

        let page_size = query.page_size.max(1);
        let start = query.page.saturating_sub(1).saturating_mul(page_size);
        let records = matching
            .into_iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect();

        Ok(AuditPage { records, total })
    }

    fn fetch_rules(&mut self) -> Result<Vec<RiskRule>, InputError> {
        Ok(self.rules.clone())
    }
}
