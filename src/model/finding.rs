//! Fraud findings attached to a claim.

use crate::model::identifiers::FindingId;

/// Review state of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FindingStatus {
    /// Not yet reviewed.
    #[default]
    Pending,
    /// Confirmed by the auditor.
    Accepted,
    /// Rejected by the auditor.
    Declined,
}

impl FindingStatus {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Declined => "Declined",
        }
    }
}

/// One fraud finding on a claim, reviewed inside the claim-details view.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// Stable finding id.
    pub id: FindingId,
    /// Finding description from the catalog.
    pub description: String,
    /// Review state.
    pub status: FindingStatus,
    /// Free-text auditor remarks.
    pub remarks: Option<String>,
}

impl Finding {
    /// Create a pending finding.
    pub fn pending(id: FindingId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            status: FindingStatus::Pending,
            remarks: None,
        }
    }
}

/// Catalog of findings the backend knows about. The add-finding picker
/// offers exactly these.
pub const FINDINGS_CATALOG: &[&str] = &[
    "Duplicate Claim Detected",
    "Billing Error",
    "Gender And Diagnosis Mismatch",
    "Patient admitted early morning",
    "Reimbursement claims from Network Hospitals",
    "Claim in last month of policy expiration",
    "Large claim amount",
    "Patient travel more than 50 Km",
    "Claim during year end",
    "Claim during month end",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_finding_has_no_remarks() {
        let finding = Finding::pending(
            FindingId::new("finding-1").unwrap(),
            "Duplicate Claim Detected",
        );
        assert_eq!(finding.status, FindingStatus::Pending);
        assert_eq!(finding.remarks, None);
    }

    #[test]
    fn status_labels() {
        assert_eq!(FindingStatus::Pending.label(), "Pending");
        assert_eq!(FindingStatus::Accepted.label(), "Accepted");
        assert_eq!(FindingStatus::Declined.label(), "Declined");
    }

    #[test]
    fn catalog_has_ten_known_findings() {
        assert_eq!(FINDINGS_CATALOG.len(), 10);
        assert!(FINDINGS_CATALOG.contains(&"Billing Error"));
    }
}
