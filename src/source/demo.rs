//! Built-in demo dataset.
//!
//! Lets the console run without a records file. Claim dates sit inside
//! the default filter range so a fresh start shows data immediately.

use crate::model::{AuditRecord, RiskRule};

const DEMO_AUDITS: &str = r#"
{"type":"audit","id":"A-1001","claim_number":"C100","claim_date":"2023-02-14","hospital_name":"ABC Hospital","hospital_location":"Pune","htpa_location":"Pune West","admission_date":"2023-02-01","discharge_date":"2023-02-09","fraud_triggers":"Duplicate Claim Detected","field_investigation_date":"2023-02-20","claim_status":"Under Review","status":"Pending","desk_audit_referral_date":"2023-02-16","tat_compliance":"4 Days","claim_intimation_aging":"2 Days","trigger_type":"Ai","findings":["Duplicate Claim Detected","Billing Error"]}
{"type":"audit","id":"A-1002","claim_number":"C200","claim_date":"2023-03-03","hospital_name":"Vincent Hospital","hospital_location":"Mumbai","htpa_location":"Mumbai Central","admission_date":"2023-02-21","discharge_date":"2023-03-01","fraud_triggers":"Large claim amount","field_investigation_date":"","claim_status":"Approved","status":"Completed","desk_audit_referral_date":"2023-03-05","tat_compliance":"2 Days","claim_intimation_aging":"1 Day","trigger_type":"Ai","allocation":"Desk Auditor 1"}
{"type":"audit","id":"A-1003","claim_number":"C215","claim_date":"2023-04-18","hospital_name":"Region 1 Medical","hospital_location":"Nashik","htpa_location":"Nashik","admission_date":"2023-04-02","discharge_date":"2023-04-12","fraud_triggers":"Patient travel more than 50 Km","field_investigation_date":"2023-04-25","claim_status":"Under Review","status":"Pending","desk_audit_referral_date":"2023-04-20","tat_compliance":"6 Days","claim_intimation_aging":"3 Days","trigger_type":"Ai"}
{"type":"audit","id":"A-1004","claim_number":"C238","claim_date":"2023-05-09","hospital_name":"ABC Hospital","hospital_location":"Pune","htpa_location":"Pune West","admission_date":"2023-05-01","discharge_date":"2023-05-06","fraud_triggers":"Claim during month end","field_investigation_date":"","claim_status":"Rejected","status":"Completed","desk_audit_referral_date":"2023-05-11","tat_compliance":"3 Days","claim_intimation_aging":"1 Day","trigger_type":"Manual","allocation":"RO Admin 2"}
{"type":"audit","id":"A-1005","claim_number":"C251","claim_date":"2023-06-27","hospital_name":"Vincent Hospital","hospital_location":"Mumbai","htpa_location":"Mumbai Central","admission_date":"2023-06-15","discharge_date":"2023-06-24","fraud_triggers":"Gender And Diagnosis Mismatch","field_investigation_date":"2023-07-02","claim_status":"Under Review","status":"Pending","desk_audit_referral_date":"2023-06-29","tat_compliance":"5 Days","claim_intimation_aging":"2 Days","trigger_type":"Ai"}
{"type":"audit","id":"A-1006","claim_number":"C266","claim_date":"2023-07-15","hospital_name":"Sunrise Care","hospital_location":"Nagpur","htpa_location":"Nagpur","admission_date":"2023-07-04","discharge_date":"2023-07-11","fraud_triggers":"Patient admitted early morning","field_investigation_date":"","claim_status":"Approved","status":"Completed","desk_audit_referral_date":"2023-07-17","tat_compliance":"2 Days","claim_intimation_aging":"1 Day","trigger_type":"Manual"}
{"type":"audit","id":"A-1007","claim_number":"C270","claim_date":"2023-08-02","hospital_name":"Sunrise Care","hospital_location":"Nagpur","htpa_location":"Nagpur","admission_date":"2023-07-22","discharge_date":"2023-07-30","fraud_triggers":"Claim during year end","field_investigation_date":"2023-08-10","claim_status":"Under Review","status":"Pending","desk_audit_referral_date":"2023-08-04","tat_compliance":"7 Days","claim_intimation_aging":"4 Days","trigger_type":"Ai","findings":["Large claim amount"]}
{"type":"audit","id":"A-1008","claim_number":"C284","claim_date":"2023-09-21","hospital_name":"ABC Hospital","hospital_location":"Pune","htpa_location":"Pune West","admission_date":"2023-09-09","discharge_date":"2023-09-18","fraud_triggers":"Reimbursement claims from Network Hospitals","field_investigation_date":"","claim_status":"Approved","status":"Completed","desk_audit_referral_date":"2023-09-23","tat_compliance":"1 Day","claim_intimation_aging":"1 Day","trigger_type":"Ai","allocation":"Desk Auditor 1"}
{"type":"audit","id":"A-1009","claim_number":"C290","claim_date":"2023-10-12","hospital_name":"Region 1 Medical","hospital_location":"Nashik","htpa_location":"Nashik","admission_date":"2023-10-01","discharge_date":"2023-10-08","fraud_triggers":"Billing Error","field_investigation_date":"2023-10-20","claim_status":"Under Review","status":"Pending","desk_audit_referral_date":"2023-10-14","tat_compliance":"4 Days","claim_intimation_aging":"2 Days","trigger_type":"Ai"}
{"type":"audit","id":"A-1010","claim_number":"C301","claim_date":"2023-11-05","hospital_name":"Vincent Hospital","hospital_location":"Mumbai","htpa_location":"Mumbai Central","admission_date":"2023-10-25","discharge_date":"2023-11-02","fraud_triggers":"Claim in last month of policy expiration","field_investigation_date":"","claim_status":"Rejected","status":"Completed","desk_audit_referral_date":"2023-11-07","tat_compliance":"3 Days","claim_intimation_aging":"2 Days","trigger_type":"Manual","allocation":"RO Admin 1"}
{"type":"audit","id":"A-1011","claim_number":"C312","claim_date":"2023-11-28","hospital_name":"Sunrise Care","hospital_location":"Nagpur","htpa_location":"Nagpur","admission_date":"2023-11-16","discharge_date":"2023-11-25","fraud_triggers":"Duplicate Claim Detected","field_investigation_date":"2023-12-04","claim_status":"Under Review","status":"Pending","desk_audit_referral_date":"2023-11-30","tat_compliance":"5 Days","claim_intimation_aging":"3 Days","trigger_type":"Ai"}
{"type":"audit","id":"A-1012","claim_number":"C320","claim_date":"2023-12-19","hospital_name":"ABC Hospital","hospital_location":"Pune","htpa_location":"Pune West","admission_date":"2023-12-06","discharge_date":"2023-12-15","fraud_triggers":"Large claim amount","field_investigation_date":"","claim_status":"Approved","status":"Completed","desk_audit_referral_date":"2023-12-21","tat_compliance":"2 Days","claim_intimation_aging":"1 Day","trigger_type":"Ai"}
"#;

const DEMO_RULES: &str = r#"
{"type":"rule","id":"R001","name":"High Value Claims","category1":"Financial","category2":"Claims","category3":"Amount","status":true,"rule_start_date":"2024-01-01","rule_end_date":"2024-12-31","created_by":"John Doe","created_date":"2024-01-01","modified_by":"Jane Smith","modified_date":"2024-03-15","version":"1.0"}
{"type":"rule","id":"R002","name":"Duplicate Claims Check","category1":"Validation","category2":"Claims","category3":"Duplicates","status":false,"rule_start_date":"2024-02-01","rule_end_date":"2024-12-31","created_by":"Jane Smith","created_date":"2024-02-01","modified_by":"John Doe","modified_date":"2024-03-20","version":"1.1"}
{"type":"rule","id":"R003","name":"Provider Verification","category1":"Compliance","category2":"Provider","category3":"Verification","status":true,"rule_start_date":"2024-03-01","rule_end_date":"2024-12-31","created_by":"Mike Johnson","created_date":"2024-03-01","modified_by":"Sarah Williams","modified_date":"2024-04-02","version":"1.0"}
{"type":"rule","id":"R004","name":"Early Morning Admissions","category1":"Behavioral","category2":"Admission","category3":"Timing","status":true,"rule_start_date":"2024-01-15","rule_end_date":"2024-12-31","created_by":"Sarah Williams","created_date":"2024-01-15","modified_by":"Mike Johnson","modified_date":"2024-02-28","version":"1.2"}
{"type":"rule","id":"R005","name":"Network Hospital Reimbursements","category1":"Financial","category2":"Provider","category3":"Network","status":false,"rule_start_date":"2024-04-01","rule_end_date":"2024-12-31","created_by":"John Doe","created_date":"2024-04-01","modified_by":"Jane Smith","modified_date":"2024-04-18","version":"1.0"}
{"type":"rule","id":"R006","name":"Policy Expiry Claims","category1":"Validation","category2":"Policy","category3":"Expiry","status":true,"rule_start_date":"2024-02-15","rule_end_date":"2024-12-31","created_by":"Jane Smith","created_date":"2024-02-15","modified_by":"John Doe","modified_date":"2024-03-30","version":"1.1"}
{"type":"rule","id":"R007","name":"Distant Patient Travel","category1":"Behavioral","category2":"Patient","category3":"Distance","status":true,"rule_start_date":"2024-03-10","rule_end_date":"2024-12-31","created_by":"Mike Johnson","created_date":"2024-03-10","modified_by":"Sarah Williams","modified_date":"2024-04-05","version":"1.0"}
{"type":"rule","id":"R008","name":"Month End Claim Spikes","category1":"Behavioral","category2":"Claims","category3":"Timing","status":false,"rule_start_date":"2024-01-01","rule_end_date":"2024-12-31","created_by":"Sarah Williams","created_date":"2024-01-01","modified_by":"Mike Johnson","modified_date":"2024-02-14","version":"1.3"}
{"type":"rule","id":"R009","name":"Gender Diagnosis Mismatch","category1":"Validation","category2":"Clinical","category3":"Consistency","status":true,"rule_start_date":"2024-02-01","rule_end_date":"2024-12-31","created_by":"John Doe","created_date":"2024-02-01","modified_by":"Jane Smith","modified_date":"2024-03-12","version":"1.0"}
{"type":"rule","id":"R010","name":"Billing Irregularities","category1":"Financial","category2":"Billing","category3":"Errors","status":true,"rule_start_date":"2024-01-20","rule_end_date":"2024-12-31","created_by":"Jane Smith","created_date":"2024-01-20","modified_by":"John Doe","modified_date":"2024-03-25","version":"1.1"}
{"type":"rule","id":"R011","name":"Year End Claim Surge","category1":"Behavioral","category2":"Claims","category3":"Timing","status":false,"rule_start_date":"2024-05-01","rule_end_date":"2024-12-31","created_by":"Mike Johnson","created_date":"2024-05-01","modified_by":"Sarah Williams","modified_date":"2024-05-15","version":"1.0"}
{"type":"rule","id":"R012","name":"Repeat Hospital Pairings","category1":"Compliance","category2":"Provider","category3":"Patterns","status":true,"rule_start_date":"2024-04-15","rule_end_date":"2024-12-31","created_by":"Sarah Williams","created_date":"2024-04-15","modified_by":"Mike Johnson","modified_date":"2024-05-02","version":"1.0"}
"#;

/// Parse the embedded demo dataset.
///
/// The dataset is JSONL exactly like a user-supplied records file, so it
/// exercises the same parse path.
pub fn demo_records() -> (Vec<AuditRecord>, Vec<RiskRule>) {
    let audits = crate::parser::parse_document(DEMO_AUDITS);
    let rules = crate::parser::parse_document(DEMO_RULES);
    debug_assert!(audits.malformed.is_empty(), "demo audits must parse");
    debug_assert!(rules.malformed.is_empty(), "demo rules must parse");
    (audits.audits, rules.rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TriggerType;

    #[test]
    fn demo_dataset_parses_cleanly() {
        let (audits, rules) = demo_records();
        assert_eq!(audits.len(), 12);
        assert_eq!(rules.len(), 12);
    }

    #[test]
    fn demo_audits_cover_both_trigger_types() {
        let (audits, _) = demo_records();
        assert!(audits.iter().any(|a| a.trigger_type == TriggerType::Ai));
        assert!(audits.iter().any(|a| a.trigger_type == TriggerType::Manual));
    }

    #[test]
    fn demo_claim_dates_sit_inside_the_default_range() {
        use crate::state::AuditFilters;
        let filters = AuditFilters::default();
        let (audits, _) = demo_records();
        assert!(audits
            .iter()
            .all(|a| a.claim_date >= filters.start_date && a.claim_date <= filters.end_date));
    }

    #[test]
    fn some_demo_audits_carry_findings_and_allocations() {
        let (audits, _) = demo_records();
        assert!(audits.iter().any(|a| !a.findings.is_empty()));
        assert!(audits.iter().any(|a| a.allocation.is_some()));
    }
}
