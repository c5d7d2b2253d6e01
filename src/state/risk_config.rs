//! Risk Configuration screen state.
//!
//! Two panes: the weighted feature list on the left, the selected
//! feature's rules on the right. Saving validates both 100% totals and
//! surfaces the result on the status line.

use crate::model::{RiskConfig, WeightError};

/// Which pane owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigPane {
    /// The feature list.
    #[default]
    Features,
    /// The rule list of the selected feature.
    Rules,
}

/// All state of the risk-configuration screen.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskConfigState {
    /// The configuration being edited.
    pub config: RiskConfig,
    /// Id of the feature whose rules show on the right.
    pub selected_feature: &'static str,
    /// Active pane.
    pub pane: ConfigPane,
    /// Cursor in the feature list.
    pub feature_cursor: usize,
    /// Cursor in the rule list.
    pub rule_cursor: usize,
}

impl Default for RiskConfigState {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskConfigState {
    /// Fresh screen over the shipped configuration.
    pub fn new() -> Self {
        Self {
            config: RiskConfig::initial(),
            selected_feature: "meta-data-analytics",
            pane: ConfigPane::Features,
            feature_cursor: 0,
            rule_cursor: 0,
        }
    }

    /// Switch between the feature and rule panes.
    pub fn switch_pane(&mut self) {
        self.pane = match self.pane {
            ConfigPane::Features => ConfigPane::Rules,
            ConfigPane::Rules => ConfigPane::Features,
        };
    }

    /// Move the active pane's cursor up.
    pub fn cursor_up(&mut self) {
        match self.pane {
            ConfigPane::Features => self.feature_cursor = self.feature_cursor.saturating_sub(1),
            ConfigPane::Rules => self.rule_cursor = self.rule_cursor.saturating_sub(1),
        }
    }

    /// Move the active pane's cursor down.
    pub fn cursor_down(&mut self) {
        match self.pane {
            ConfigPane::Features => {
                let len = self.config.features.len();
                if len > 0 {
                    self.feature_cursor = (self.feature_cursor + 1).min(len - 1);
                }
            }
            ConfigPane::Rules => {
                let len = self.config.rules_for(self.selected_feature).len();
                if len > 0 {
                    self.rule_cursor = (self.rule_cursor + 1).min(len - 1);
                }
            }
        }
    }

    /// Select the feature under the cursor, so its rules show on the
    /// right, and reset the rule cursor.
    pub fn select_feature_under_cursor(&mut self) {
        if let Some(feature) = self.config.features.get(self.feature_cursor) {
            self.selected_feature = feature.id;
            self.rule_cursor = 0;
        }
    }

    /// Toggle the item under the active cursor on or off.
    pub fn toggle_current(&mut self) {
        match self.pane {
            ConfigPane::Features => {
                if let Some(feature) = self.config.features.get(self.feature_cursor) {
                    let id = feature.id;
                    self.config.toggle_feature(id);
                }
            }
            ConfigPane::Rules => {
                if let Some(rule) = self.config.rules_for(self.selected_feature).get(self.rule_cursor)
                {
                    let id = rule.id;
                    self.config.toggle_rule(id);
                }
            }
        }
    }

    /// Nudge the weight under the active cursor by a signed step.
    pub fn nudge_current(&mut self, step: i32) {
        match self.pane {
            ConfigPane::Features => {
                if let Some(feature) = self.config.features.get(self.feature_cursor) {
                    let id = feature.id;
                    self.config.nudge_feature_weight(id, step);
                }
            }
            ConfigPane::Rules => {
                if let Some(rule) = self.config.rules_for(self.selected_feature).get(self.rule_cursor)
                {
                    let id = rule.id;
                    self.config.nudge_rule_weight(id, step);
                }
            }
        }
    }

    /// Validate for saving. The caller surfaces the result.
    pub fn save(&self) -> Result<(), WeightError> {
        self.config.validate(self.selected_feature)
    }
}
