//! Desk-audit records as they arrive from the data source.

use crate::model::column::audit as col;
use crate::model::identifiers::AuditId;
use crate::model::row::Row;
use chrono::NaiveDate;
use std::fmt;

/// How a claim was flagged for audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TriggerType {
    /// Flagged by the fraud-detection model.
    Ai,
    /// Flagged by a human reviewer.
    Manual,
}

impl TriggerType {
    /// Parse the wire/CLI spelling (`Ai` / `Manual`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Ai" => Some(Self::Ai),
            "Manual" => Some(Self::Manual),
            _ => None,
        }
    }

    /// Wire/CLI spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "Ai",
            Self::Manual => "Manual",
        }
    }

    /// The other trigger type. Used by the filter editor to cycle.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Ai => Self::Manual,
            Self::Manual => Self::Ai,
        }
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One desk-audit record.
///
/// This is the wire shape read from the records stream. `claim_date` is a
/// real date because the server-side filter ranges over it; the remaining
/// date-ish fields are display-only and stay strings.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct AuditRecord {
    /// Stable record id.
    pub id: AuditId,
    /// Claim number, e.g. "C100".
    pub claim_number: String,
    /// Date the claim was filed.
    pub claim_date: NaiveDate,
    /// Treating hospital.
    pub hospital_name: String,
    /// Hospital location.
    #[serde(default)]
    pub hospital_location: String,
    /// HTPA location.
    #[serde(default)]
    pub htpa_location: String,
    /// Date of admission (display-only).
    #[serde(default)]
    pub admission_date: String,
    /// Date of discharge (display-only).
    #[serde(default)]
    pub discharge_date: String,
    /// Raised fraud triggers, comma-joined.
    #[serde(default)]
    pub fraud_triggers: String,
    /// Field investigation date, if one happened.
    #[serde(default)]
    pub field_investigation_date: String,
    /// Claim workflow status.
    #[serde(default)]
    pub claim_status: String,
    /// Audit status, defaults to "Pending" when the source omits it.
    #[serde(default = "default_status")]
    pub status: String,
    /// Desk-audit referral date.
    #[serde(default)]
    pub desk_audit_referral_date: String,
    /// Turn-around-time compliance.
    #[serde(default)]
    pub tat_compliance: String,
    /// Claim intimation aging.
    #[serde(default)]
    pub claim_intimation_aging: String,
    /// AI vs manual trigger classification.
    pub trigger_type: TriggerType,
    /// Auditor allocation, when one has been made.
    #[serde(default)]
    pub allocation: Option<String>,
    /// Fraud findings already raised against this claim.
    #[serde(default)]
    pub findings: Vec<String>,
}

fn default_status() -> String {
    "Pending".to_string()
}

impl AuditRecord {
    /// Project this record into an opaque table row.
    ///
    /// Every known audit column gets a cell; `allocation` is only present
    /// when an allocation exists, so the row degrades the way the table
    /// engine expects for non-admin roles and unallocated claims.
    pub fn to_row(&self) -> Row {
        let mut row = Row::new(self.id.as_str())
            .with_cell(col::CLAIM_NUMBER, &self.claim_number)
            .with_cell(col::CLAIM_DATE, self.claim_date.format("%Y-%m-%d").to_string())
            .with_cell(col::HOSPITAL_NAME, &self.hospital_name)
            .with_cell(col::HOSPITAL_LOCATION, &self.hospital_location)
            .with_cell(col::HTPA_LOCATION, &self.htpa_location)
            .with_cell(col::DATE_OF_ADMISSION, &self.admission_date)
            .with_cell(col::DATE_OF_DISCHARGE, &self.discharge_date)
            .with_cell(col::FRAUD_TRIGGERS, &self.fraud_triggers)
            .with_cell(col::FIELD_INVESTIGATION_DATE, &self.field_investigation_date)
            .with_cell(col::CLAIM_STATUS, &self.claim_status)
            .with_cell(col::STATUS, &self.status)
            .with_cell(col::DESK_AUDIT_REFERRAL_DATE, &self.desk_audit_referral_date)
            .with_cell(col::TAT_COMPLIANCE, &self.tat_compliance)
            .with_cell(col::CLAIM_INTIMATION_AGING, &self.claim_intimation_aging)
            .with_cell(col::TRIGGER, self.trigger_type.as_str());
        if let Some(allocation) = &self.allocation {
            row.set(col::ALLOCATION, allocation);
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json() -> &'static str {
        r#"{
            "id": "A-1001",
            "claim_number": "C100",
            "claim_date": "2023-04-12",
            "hospital_name": "ABC Hospital",
            "trigger_type": "Ai",
            "status": "Pending"
        }"#
    }

    #[test]
    fn deserializes_with_defaults_for_optional_fields() {
        let record: AuditRecord = serde_json::from_str(record_json()).unwrap();
        assert_eq!(record.claim_number, "C100");
        assert_eq!(record.hospital_location, "");
        assert_eq!(record.allocation, None);
        assert!(record.findings.is_empty());
    }

    #[test]
    fn status_defaults_to_pending() {
        let json = r#"{
            "id": "A-1",
            "claim_number": "C1",
            "claim_date": "2023-01-05",
            "hospital_name": "Vincent Hospital",
            "trigger_type": "Manual"
        }"#;
        let record: AuditRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, "Pending");
    }

    #[test]
    fn rejects_bad_date() {
        let json = record_json().replace("2023-04-12", "12/04/2023");
        assert!(serde_json::from_str::<AuditRecord>(&json).is_err());
    }

    #[test]
    fn rejects_unknown_trigger_type() {
        let json = record_json().replace("\"Ai\"", "\"Robot\"");
        assert!(serde_json::from_str::<AuditRecord>(&json).is_err());
    }

    #[test]
    fn to_row_uses_audit_id_as_row_id() {
        let record: AuditRecord = serde_json::from_str(record_json()).unwrap();
        let row = record.to_row();
        assert_eq!(row.id(), "A-1001");
        assert_eq!(row.cell(col::CLAIM_NUMBER), Some("C100"));
        assert_eq!(row.cell(col::CLAIM_DATE), Some("2023-04-12"));
        assert_eq!(row.cell(col::TRIGGER), Some("Ai"));
    }

    #[test]
    fn to_row_omits_allocation_when_absent() {
        let record: AuditRecord = serde_json::from_str(record_json()).unwrap();
        assert_eq!(record.to_row().cell(col::ALLOCATION), None);
    }

    #[test]
    fn to_row_includes_allocation_when_present() {
        let mut record: AuditRecord = serde_json::from_str(record_json()).unwrap();
        record.allocation = Some("Desk Auditor 1".to_string());
        assert_eq!(
            record.to_row().cell(col::ALLOCATION),
            Some("Desk Auditor 1")
        );
    }

    #[test]
    fn trigger_type_cycle_flips() {
        assert_eq!(TriggerType::Ai.toggled(), TriggerType::Manual);
        assert_eq!(TriggerType::Manual.toggled(), TriggerType::Ai);
    }
}
