//! Fraud-detection risk rules.

use crate::model::column::rule as col;
use crate::model::identifiers::RuleId;
use crate::model::row::Row;

/// One configurable risk rule.
///
/// Rules arrive wholesale from the data source and are filtered and
/// paginated client-side on the Risk Management screen.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct RiskRule {
    /// Stable rule id, e.g. "R001".
    pub id: RuleId,
    /// Human-readable rule name.
    pub name: String,
    /// First category.
    #[serde(default)]
    pub category1: String,
    /// Second category.
    #[serde(default)]
    pub category2: String,
    /// Third category.
    #[serde(default)]
    pub category3: String,
    /// Whether the rule is active.
    pub status: bool,
    /// Validity window start (display string, edited in place).
    #[serde(default)]
    pub rule_start_date: String,
    /// Validity window end (display string, edited in place).
    #[serde(default)]
    pub rule_end_date: String,
    /// Author.
    #[serde(default)]
    pub created_by: String,
    /// Creation date.
    #[serde(default)]
    pub created_date: String,
    /// Last editor.
    #[serde(default)]
    pub modified_by: String,
    /// Last modification date.
    #[serde(default)]
    pub modified_date: String,
    /// Version string, e.g. "1.0".
    #[serde(default)]
    pub version: String,
}

impl RiskRule {
    /// Display label of the active/inactive state.
    pub fn status_label(&self) -> &'static str {
        if self.status {
            "Active"
        } else {
            "Inactive"
        }
    }

    /// Project this rule into an opaque table row.
    pub fn to_row(&self) -> Row {
        Row::new(self.id.as_str())
            .with_cell(col::RULE_ID, self.id.as_str())
            .with_cell(col::NAME, &self.name)
            .with_cell(col::CATEGORY1, &self.category1)
            .with_cell(col::CATEGORY2, &self.category2)
            .with_cell(col::CATEGORY3, &self.category3)
            .with_cell(col::STATUS, self.status_label())
            .with_cell(col::START_DATE, &self.rule_start_date)
            .with_cell(col::END_DATE, &self.rule_end_date)
            .with_cell(col::CREATED_BY, &self.created_by)
            .with_cell(col::CREATED_DATE, &self.created_date)
            .with_cell(col::MODIFIED_BY, &self.modified_by)
            .with_cell(col::MODIFIED_DATE, &self.modified_date)
            .with_cell(col::VERSION, &self.version)
    }
}
