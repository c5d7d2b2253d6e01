//! Known columns for the audit and rules tables.
//!
//! Column order here is display order. Role decides which audit columns
//! exist at all; the visibility map decides which of them render.

use crate::model::role::UserRole;
use crate::table::TableSpec;

/// Key identifying a column inside a [`crate::model::Row`].
pub type ColumnKey = &'static str;

/// A table column: stable key plus the header title shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Stable key used to look cells up in a row.
    pub key: ColumnKey,
    /// Header title.
    pub title: &'static str,
}

impl Column {
    /// Shorthand constructor.
    pub const fn new(key: ColumnKey, title: &'static str) -> Self {
        Self { key, title }
    }
}

/// Column keys of the audit table.
pub mod audit {
    use super::ColumnKey;

    /// Claim number (anchor column, never hidden).
    pub const CLAIM_NUMBER: ColumnKey = "claim_number";
    /// Date the claim was filed.
    pub const CLAIM_DATE: ColumnKey = "claim_date";
    /// Treating hospital.
    pub const HOSPITAL_NAME: ColumnKey = "hospital_name";
    /// Hospital location.
    pub const HOSPITAL_LOCATION: ColumnKey = "hospital_location";
    /// HTPA location.
    pub const HTPA_LOCATION: ColumnKey = "htpa_location";
    /// Date of admission.
    pub const DATE_OF_ADMISSION: ColumnKey = "admission_date";
    /// Date of discharge.
    pub const DATE_OF_DISCHARGE: ColumnKey = "discharge_date";
    /// Raised fraud triggers.
    pub const FRAUD_TRIGGERS: ColumnKey = "fraud_triggers";
    /// Date of the field investigation, if any.
    pub const FIELD_INVESTIGATION_DATE: ColumnKey = "field_investigation_date";
    /// Claim workflow status.
    pub const CLAIM_STATUS: ColumnKey = "claim_status";
    /// Audit status.
    pub const STATUS: ColumnKey = "status";
    /// Desk-audit referral date.
    pub const DESK_AUDIT_REFERRAL_DATE: ColumnKey = "desk_audit_referral_date";
    /// Turn-around-time compliance.
    pub const TAT_COMPLIANCE: ColumnKey = "tat_compliance";
    /// Claim intimation aging.
    pub const CLAIM_INTIMATION_AGING: ColumnKey = "claim_intimation_aging";
    /// AI vs manual trigger classification.
    pub const TRIGGER: ColumnKey = "trigger_type";
    /// Auditor allocation (admin roles only).
    pub const ALLOCATION: ColumnKey = "allocation";
}

/// Column keys of the rules table.
pub mod rule {
    use super::ColumnKey;

    /// Rule id (anchor column, never hidden).
    pub const RULE_ID: ColumnKey = "rule_id";
    /// Rule name.
    pub const NAME: ColumnKey = "name";
    /// First category.
    pub const CATEGORY1: ColumnKey = "category1";
    /// Second category.
    pub const CATEGORY2: ColumnKey = "category2";
    /// Third category.
    pub const CATEGORY3: ColumnKey = "category3";
    /// Active / inactive.
    pub const STATUS: ColumnKey = "status";
    /// Rule validity start.
    pub const START_DATE: ColumnKey = "rule_start_date";
    /// Rule validity end.
    pub const END_DATE: ColumnKey = "rule_end_date";
    /// Author of the rule.
    pub const CREATED_BY: ColumnKey = "created_by";
    /// Creation date.
    pub const CREATED_DATE: ColumnKey = "created_date";
    /// Last editor.
    pub const MODIFIED_BY: ColumnKey = "modified_by";
    /// Last modification date.
    pub const MODIFIED_DATE: ColumnKey = "modified_date";
    /// Rule version.
    pub const VERSION: ColumnKey = "version";
}

const AUDIT_COLUMNS: &[Column] = &[
    Column::new(audit::CLAIM_NUMBER, "Claim Number"),
    Column::new(audit::CLAIM_DATE, "Claim Date"),
    Column::new(audit::HOSPITAL_NAME, "Hospital Name"),
    Column::new(audit::HOSPITAL_LOCATION, "Hospital Location"),
    Column::new(audit::HTPA_LOCATION, "HTPA Location"),
    Column::new(audit::DATE_OF_ADMISSION, "Date of Admission"),
    Column::new(audit::DATE_OF_DISCHARGE, "Date of Discharge"),
    Column::new(audit::FRAUD_TRIGGERS, "Fraud Triggers"),
    Column::new(audit::FIELD_INVESTIGATION_DATE, "Field Investigation Date"),
    Column::new(audit::CLAIM_STATUS, "Claim Status"),
    Column::new(audit::STATUS, "Status"),
    Column::new(audit::DESK_AUDIT_REFERRAL_DATE, "Desk Audit Referral Date"),
    Column::new(audit::TAT_COMPLIANCE, "TAT Compliance"),
    Column::new(audit::CLAIM_INTIMATION_AGING, "Claim Intimation Aging"),
    Column::new(audit::TRIGGER, "AI/Manual Trigger"),
];

const RULE_COLUMNS: &[Column] = &[
    Column::new(rule::RULE_ID, "Rule ID"),
    Column::new(rule::NAME, "Name"),
    Column::new(rule::CATEGORY1, "Category 1"),
    Column::new(rule::CATEGORY2, "Category 2"),
    Column::new(rule::CATEGORY3, "Category 3"),
    Column::new(rule::STATUS, "Status"),
    Column::new(rule::START_DATE, "Rule Start Date"),
    Column::new(rule::END_DATE, "Rule End Date"),
    Column::new(rule::CREATED_BY, "Created By"),
    Column::new(rule::CREATED_DATE, "Created Date"),
    Column::new(rule::MODIFIED_BY, "Modified By"),
    Column::new(rule::MODIFIED_DATE, "Modified Date"),
    Column::new(rule::VERSION, "Version"),
];

/// Build the audit-table spec for a role.
///
/// Admin roles get the extra "Allocation" column appended. Long,
/// low-priority columns start hidden to limit horizontal scroll.
pub fn audit_table_spec(role: UserRole) -> TableSpec {
    let mut columns = AUDIT_COLUMNS.to_vec();
    if role.is_admin() {
        columns.push(Column::new(audit::ALLOCATION, "Allocation"));
    }
    TableSpec::new(
        columns,
        vec![audit::CLAIM_NUMBER, audit::HOSPITAL_NAME, audit::STATUS],
        vec![
            audit::HOSPITAL_LOCATION,
            audit::HTPA_LOCATION,
            audit::DESK_AUDIT_REFERRAL_DATE,
            audit::TAT_COMPLIANCE,
            audit::CLAIM_INTIMATION_AGING,
        ],
        audit::CLAIM_NUMBER,
    )
}

/// Build the rules-table spec (same for every role).
pub fn rules_table_spec() -> TableSpec {
    TableSpec::new(
        RULE_COLUMNS.to_vec(),
        vec![rule::RULE_ID, rule::NAME],
        vec![
            rule::CREATED_BY,
            rule::CREATED_DATE,
            rule::MODIFIED_BY,
            rule::MODIFIED_DATE,
            rule::VERSION,
        ],
        rule::RULE_ID,
    )
}
