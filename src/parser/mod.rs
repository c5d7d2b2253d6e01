//! JSONL parser for audit and rule records.
//!
//! One JSON object per line, discriminated by a `type` field. Parsing is
//! graceful: a malformed line becomes a [`MalformedRecord`] carrying its
//! line number and reason, and the stream continues. The dashboard works
//! with whatever parsed.

use crate::model::{AuditRecord, RiskRule};
use serde::Deserialize;

/// A successfully parsed record line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    /// A desk-audit record.
    Audit(AuditRecord),
    /// A risk rule.
    Rule(RiskRule),
}

/// A line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    line_number: usize,
    error_message: String,
}

impl MalformedRecord {
    /// 1-indexed line number of the bad line.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Parser-provided reason.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

/// Result of parsing one line with graceful error handling.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    /// The line parsed.
    Valid(Box<Record>),
    /// The line did not parse; the stream continues.
    Malformed(MalformedRecord),
}

/// Parse a single records line. Blank lines yield `None` and are not an
/// error.
pub fn parse_line(raw: &str, line_number: usize) -> Option<ParseResult> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Record>(trimmed) {
        Ok(record) => Some(ParseResult::Valid(Box::new(record))),
        Err(err) => Some(ParseResult::Malformed(MalformedRecord {
            line_number,
            error_message: err.to_string(),
        })),
    }
}

/// Parse a whole records document, splitting audits from rules.
///
/// Malformed lines are returned alongside so the caller can log them;
/// they never abort the parse.
pub fn parse_document(input: &str) -> ParsedDocument {
    let mut document = ParsedDocument::default();
    for (idx, line) in input.lines().enumerate() {
        match parse_line(line, idx + 1) {
            Some(ParseResult::Valid(record)) => match *record {
                Record::Audit(audit) => document.audits.push(audit),
                Record::Rule(rule) => document.rules.push(rule),
            },
            Some(ParseResult::Malformed(malformed)) => document.malformed.push(malformed),
            None => {}
        }
    }
    document
}

/// Everything a records document contained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    /// Parsed audit records, file order.
    pub audits: Vec<AuditRecord>,
    /// Parsed risk rules, file order.
    pub rules: Vec<RiskRule>,
    /// Lines that failed to parse.
    pub malformed: Vec<MalformedRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUDIT_LINE: &str = r#"{"type":"audit","id":"A-1","claim_number":"C100","claim_date":"2023-04-12","hospital_name":"ABC Hospital","trigger_type":"Ai"}"#;
    const RULE_LINE: &str = r#"{"type":"rule","id":"R001","name":"High Value Claims","status":true}"#;

    #[test]
    fn parses_an_audit_line() {
        let result = parse_line(AUDIT_LINE, 1).unwrap();
        match result {
            ParseResult::Valid(record) => {
                assert!(matches!(*record, Record::Audit(_)));
            }
            ParseResult::Malformed(m) => panic!("unexpected malformed: {}", m.error_message()),
        }
    }

    #[test]
    fn parses_a_rule_line() {
        let result = parse_line(RULE_LINE, 1).unwrap();
        assert!(matches!(
            result,
            ParseResult::Valid(record) if matches!(*record, Record::Rule(_))
        ));
    }

    #[test]
    fn blank_lines_are_skipped_silently() {
        assert_eq!(parse_line("", 1), None);
        assert_eq!(parse_line("   \t", 2), None);
    }

    #[test]
    fn broken_json_becomes_malformed_with_line_number() {
        let result = parse_line("{not json", 7).unwrap();
        match result {
            ParseResult::Malformed(m) => {
                assert_eq!(m.line_number(), 7);
                assert!(!m.error_message().is_empty());
            }
            ParseResult::Valid(_) => panic!("expected malformed"),
        }
    }

    #[test]
    fn unknown_record_type_is_malformed() {
        let result = parse_line(r#"{"type":"invoice","id":"X"}"#, 3).unwrap();
        assert!(matches!(result, ParseResult::Malformed(_)));
    }

    #[test]
    fn empty_id_is_malformed() {
        let line = AUDIT_LINE.replace("\"A-1\"", "\"\"");
        let result = parse_line(&line, 4).unwrap();
        assert!(matches!(result, ParseResult::Malformed(_)));
    }

    #[test]
    fn document_splits_audits_rules_and_failures() {
        let input = format!("{AUDIT_LINE}\n\n{RULE_LINE}\nnot json at all\n");
        let document = parse_document(&input);
        assert_eq!(document.audits.len(), 1);
        assert_eq!(document.rules.len(), 1);
        assert_eq!(document.malformed.len(), 1);
        assert_eq!(document.malformed[0].line_number(), 4);
    }

    #[test]
    fn document_preserves_file_order() {
        let input = format!(
            "{}\n{}\n",
            AUDIT_LINE.replace("A-1", "A-2").replace("C100", "C200"),
            AUDIT_LINE
        );
        let document = parse_document(&input);
        assert_eq!(document.audits[0].claim_number, "C200");
        assert_eq!(document.audits[1].claim_number, "C100");
    }
}
