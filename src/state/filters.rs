//! Filter criteria owned by the screens.
//!
//! Filters are collaborators of the table engine, not part of it: their
//! committed values drive the data source (audits) or a client-side
//! pre-filter (rules). Committing a filter resets pagination; it never
//! touches sort, search or column visibility.

use crate::model::{RiskRule, TriggerType};
use chrono::NaiveDate;

/// Committed audit-screen filters, sent to the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditFilters {
    /// Start of the claim-date range, inclusive.
    pub start_date: NaiveDate,
    /// End of the claim-date range, inclusive.
    pub end_date: NaiveDate,
    /// Trigger-type selector.
    pub trigger: TriggerType,
}

impl Default for AuditFilters {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid default date"),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid default date"),
            trigger: TriggerType::Ai,
        }
    }
}

/// Which audit-filter field the editor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditFilterField {
    /// Editing the range start.
    StartDate,
    /// Editing the range end.
    EndDate,
    /// Cycling the trigger type.
    Trigger,
}

impl AuditFilterField {
    /// The field to the right, wrapping.
    pub fn next(self) -> Self {
        match self {
            Self::StartDate => Self::EndDate,
            Self::EndDate => Self::Trigger,
            Self::Trigger => Self::StartDate,
        }
    }

    /// The field to the left, wrapping.
    pub fn prev(self) -> Self {
        match self {
            Self::StartDate => Self::Trigger,
            Self::EndDate => Self::StartDate,
            Self::Trigger => Self::EndDate,
        }
    }
}

/// In-progress edit of the audit filters.
///
/// Dates are edited as text and only parsed on commit, so a half-typed
/// date never corrupts the committed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditFilterDraft {
    /// Field under the cursor.
    pub field: AuditFilterField,
    /// Start-date text buffer.
    pub start_input: String,
    /// End-date text buffer.
    pub end_input: String,
    /// Trigger selection.
    pub trigger: TriggerType,
}

/// Why a draft refused to commit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterDraftError {
    /// A date buffer is not a valid `YYYY-MM-DD` date.
    #[error("Invalid date '{input}', expected YYYY-MM-DD")]
    BadDate {
        /// The rejected buffer content.
        input: String,
    },
    /// The range is inverted.
    #[error("Date range start {start} is after end {end}")]
    InvertedRange {
        /// Committed start.
        start: NaiveDate,
        /// Committed end.
        end: NaiveDate,
    },
}

impl AuditFilterDraft {
    /// Start editing from the committed filters.
    pub fn from_filters(filters: &AuditFilters) -> Self {
        Self {
            field: AuditFilterField::StartDate,
            start_input: filters.start_date.format("%Y-%m-%d").to_string(),
            end_input: filters.end_date.format("%Y-%m-%d").to_string(),
            trigger: filters.trigger,
        }
    }

    /// Append a character to the focused date buffer. Only date-shaped
    /// characters are accepted; the trigger field ignores typing.
    pub fn push_char(&mut self, ch: char) {
        match self.field {
            AuditFilterField::StartDate => push_date_char(&mut self.start_input, ch),
            AuditFilterField::EndDate => push_date_char(&mut self.end_input, ch),
            AuditFilterField::Trigger => {}
        }
    }

    /// Delete the last character of the focused date buffer.
    pub fn backspace(&mut self) {
        match self.field {
            AuditFilterField::StartDate => {
                self.start_input.pop();
            }
            AuditFilterField::EndDate => {
                self.end_input.pop();
            }
            AuditFilterField::Trigger => {}
        }
    }

    /// Flip the trigger selection when the trigger field is focused.
    pub fn cycle_value(&mut self) {
        if self.field == AuditFilterField::Trigger {
            self.trigger = self.trigger.toggled();
        }
    }

    /// Parse and validate the draft into committed filters.
    pub fn commit(&self) -> Result<AuditFilters, FilterDraftError> {
        let start_date = parse_date(&self.start_input)?;
        let end_date = parse_date(&self.end_input)?;
        if start_date > end_date {
            return Err(FilterDraftError::InvertedRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(AuditFilters {
            start_date,
            end_date,
            trigger: self.trigger,
        })
    }
}

/// Append a date-shaped character to a `YYYY-MM-DD` buffer, capped at
/// ten characters. Shared by every inline date editor.
pub(crate) fn push_date_char(buffer: &mut String, ch: char) {
    if !(ch.is_ascii_digit() || ch == '-') {
        return;
    }
    if buffer.len() < 10 {
        buffer.push(ch);
    }
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, FilterDraftError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| FilterDraftError::BadDate {
        input: input.to_string(),
    })
}

/// Committed rules-screen filters, applied client-side before the table
/// engine sees the rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleFilters {
    /// Active / inactive selector; `None` means all.
    pub status: Option<bool>,
    /// First-category selector; `None` means all.
    pub category1: Option<String>,
    /// Second-category selector; `None` means all.
    pub category2: Option<String>,
    /// Third-category selector; `None` means all.
    pub category3: Option<String>,
}

impl RuleFilters {
    /// Whether a rule passes every committed selector.
    pub fn matches(&self, rule: &RiskRule) -> bool {
        if let Some(status) = self.status {
            if rule.status != status {
                return false;
            }
        }
        if let Some(category) = &self.category1 {
            if &rule.category1 != category {
                return false;
            }
        }
        if let Some(category) = &self.category2 {
            if &rule.category2 != category {
                return false;
            }
        }
        if let Some(category) = &self.category3 {
            if &rule.category3 != category {
                return false;
            }
        }
        true
    }

    /// Cycle the status selector: all, active, inactive.
    pub fn cycle_status(&mut self) {
        self.status = match self.status {
            None => Some(true),
            Some(true) => Some(false),
            Some(false) => None,
        };
    }

    /// Clear every selector.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_match_the_product_defaults() {
        let filters = AuditFilters::default();
        assert_eq!(filters.start_date.to_string(), "2023-01-01");
        assert_eq!(filters.end_date.to_string(), "2024-01-01");
        assert_eq!(filters.trigger, TriggerType::Ai);
    }

    #[test]
    fn draft_round_trips_committed_filters() {
        let filters = AuditFilters::default();
        let draft = AuditFilterDraft::from_filters(&filters);
        assert_eq!(draft.commit().unwrap(), filters);
    }

    #[test]
    fn draft_rejects_malformed_date() {
        let mut draft = AuditFilterDraft::from_filters(&AuditFilters::default());
        draft.start_input = "2023-13-99".to_string();
        assert!(matches!(
            draft.commit(),
            Err(FilterDraftError::BadDate { .. })
        ));
    }

    #[test]
    fn draft_rejects_inverted_range() {
        let mut draft = AuditFilterDraft::from_filters(&AuditFilters::default());
        draft.start_input = "2024-06-01".to_string();
        draft.end_input = "2023-06-01".to_string();
        assert!(matches!(
            draft.commit(),
            Err(FilterDraftError::InvertedRange { .. })
        ));
    }

    #[test]
    fn typing_only_accepts_date_characters() {
        let mut draft = AuditFilterDraft::from_filters(&AuditFilters::default());
        draft.start_input.clear();
        for ch in "2x0!2 3-05-0a9".chars() {
            draft.push_char(ch);
        }
        assert_eq!(draft.start_input, "2023-05-09");
    }

    #[test]
    fn date_buffer_caps_at_ten_characters() {
        let mut draft = AuditFilterDraft::from_filters(&AuditFilters::default());
        for ch in "123456789012345".chars() {
            draft.push_char(ch);
        }
        assert_eq!(draft.start_input.len(), 10);
    }

    #[test]
    fn cycle_value_only_affects_trigger_field() {
        let mut draft = AuditFilterDraft::from_filters(&AuditFilters::default());
        draft.cycle_value();
        assert_eq!(draft.trigger, TriggerType::Ai, "date field ignores cycle");
        draft.field = AuditFilterField::Trigger;
        draft.cycle_value();
        assert_eq!(draft.trigger, TriggerType::Manual);
    }

    #[test]
    fn field_navigation_wraps_both_ways() {
        assert_eq!(
            AuditFilterField::Trigger.next(),
            AuditFilterField::StartDate
        );
        assert_eq!(
            AuditFilterField::StartDate.prev(),
            AuditFilterField::Trigger
        );
    }

    fn rule(status: bool, c1: &str) -> RiskRule {
        serde_json::from_str(&format!(
            r#"{{"id":"R1","name":"r","category1":"{c1}","status":{status}}}"#
        ))
        .unwrap()
    }

    #[test]
    fn rule_filters_default_matches_everything() {
        let filters = RuleFilters::default();
        assert!(filters.matches(&rule(true, "Financial")));
        assert!(filters.matches(&rule(false, "Compliance")));
    }

    #[test]
    fn rule_filters_apply_status_and_category() {
        let filters = RuleFilters {
            status: Some(true),
            category1: Some("Financial".to_string()),
            ..Default::default()
        };
        assert!(filters.matches(&rule(true, "Financial")));
        assert!(!filters.matches(&rule(false, "Financial")));
        assert!(!filters.matches(&rule(true, "Compliance")));
    }

    #[test]
    fn status_cycle_walks_all_active_inactive() {
        let mut filters = RuleFilters::default();
        filters.cycle_status();
        assert_eq!(filters.status, Some(true));
        filters.cycle_status();
        assert_eq!(filters.status, Some(false));
        filters.cycle_status();
        assert_eq!(filters.status, None);
    }
}
