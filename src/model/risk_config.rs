//! Weighted fraud-detection configuration.
//!
//! Features carry a percentage weight; each feature owns a set of rules
//! that carry their own weights. A configuration only saves when the
//! feature weights total exactly 100 and the selected feature's rule
//! weights total exactly 100.

use thiserror::Error;

/// Default weight assigned when a feature is switched on.
pub const FEATURE_DEFAULT_WEIGHT: u32 = 25;

/// Default weight assigned when a rule is switched on.
pub const RULE_DEFAULT_WEIGHT: u32 = 5;

/// A top-level detection feature with a percentage weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    /// Stable feature id, e.g. "meta-data-analytics".
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Whether the feature participates in scoring.
    pub enabled: bool,
    /// Percentage weight, 0 when disabled.
    pub weight: u32,
}

/// A rule under a feature, with its own percentage weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRule {
    /// Stable rule id, e.g. "rule-1".
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Whether the rule participates in scoring.
    pub enabled: bool,
    /// Percentage weight, 0 when disabled.
    pub weight: u32,
    /// Owning feature id.
    pub feature_id: &'static str,
}

/// Why a configuration refused to save.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightError {
    /// The feature weights do not total 100.
    #[error("Total configuration rules % for features must be 100!")]
    Features {
        /// The offending total.
        total: u32,
    },
    /// The selected feature's rule weights do not total 100.
    #[error("Total configuration rules % for selected feature's rules must be 100!")]
    Rules {
        /// The offending total.
        total: u32,
    },
}

/// The whole weighted configuration edited on the Risk Configuration
/// screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskConfig {
    /// All detection features, display order.
    pub features: Vec<Feature>,
    /// All rules across features, display order.
    pub rules: Vec<FeatureRule>,
}

impl RiskConfig {
    /// The configuration as shipped: three features carrying 25% each
    /// (one short of a valid total, the user finishes the job) and the
    /// meta-data rules at 5% each.
    pub fn initial() -> Self {
        let features = vec![
            Feature {
                id: "meta-data-analytics",
                name: "Meta Data Analytics",
                enabled: true,
                weight: 25,
            },
            Feature {
                id: "entity-analytics",
                name: "Entity Analytics",
                enabled: false,
                weight: 0,
            },
            Feature {
                id: "stamp-data-analytics",
                name: "Stamp Data Analytics",
                enabled: true,
                weight: 25,
            },
            Feature {
                id: "class-mismatch",
                name: "Class Mismatch",
                enabled: false,
                weight: 1,
            },
            Feature {
                id: "matchings",
                name: "Matchings",
                enabled: false,
                weight: 1,
            },
            Feature {
                id: "tampering-analytics",
                name: "Tampering Analytics",
                enabled: true,
                weight: 25,
            },
        ];
        let rules = vec![
            FeatureRule {
                id: "rule-1",
                name: "Missing Creation Date",
                enabled: true,
                weight: 5,
                feature_id: "meta-data-analytics",
            },
            FeatureRule {
                id: "rule-2",
                name: "Missing Author",
                enabled: true,
                weight: 5,
                feature_id: "meta-data-analytics",
            },
            FeatureRule {
                id: "rule-3",
                name: "Missing Modification Date",
                enabled: true,
                weight: 5,
                feature_id: "meta-data-analytics",
            },
            FeatureRule {
                id: "rule-4",
                name: "Missing Title",
                enabled: true,
                weight: 5,
                feature_id: "meta-data-analytics",
            },
            FeatureRule {
                id: "rule-5",
                name: "Missing Creator",
                enabled: true,
                weight: 5,
                feature_id: "meta-data-analytics",
            },
            FeatureRule {
                id: "rule-6",
                name: "Missing Producer",
                enabled: true,
                weight: 5,
                feature_id: "meta-data-analytics",
            },
        ];
        Self { features, rules }
    }

    /// Sum of all feature weights.
    pub fn features_total(&self) -> u32 {
        self.features.iter().map(|f| f.weight).sum()
    }

    /// Sum of the rule weights under one feature.
    pub fn rules_total_for(&self, feature_id: &str) -> u32 {
        self.rules
            .iter()
            .filter(|r| r.feature_id == feature_id)
            .map(|r| r.weight)
            .sum()
    }

    /// Rules under one feature, display order.
    pub fn rules_for(&self, feature_id: &str) -> Vec<&FeatureRule> {
        self.rules
            .iter()
            .filter(|r| r.feature_id == feature_id)
            .collect()
    }

    /// Flip a feature on or off. Switching on assigns the default weight,
    /// switching off zeroes it.
    pub fn toggle_feature(&mut self, feature_id: &str) {
        if let Some(feature) = self.features.iter_mut().find(|f| f.id == feature_id) {
            feature.enabled = !feature.enabled;
            feature.weight = if feature.enabled {
                FEATURE_DEFAULT_WEIGHT
            } else {
                0
            };
        }
    }

    /// Flip a rule on or off. Switching on assigns the default weight,
    /// switching off zeroes it.
    pub fn toggle_rule(&mut self, rule_id: &str) {
        if let Some(rule) = self.rules.iter_mut().find(|r| r.id == rule_id) {
            rule.enabled = !rule.enabled;
            rule.weight = if rule.enabled { RULE_DEFAULT_WEIGHT } else { 0 };
        }
    }

    /// Adjust a feature weight by a signed step, clamped to [0, 100].
    pub fn nudge_feature_weight(&mut self, feature_id: &str, step: i32) {
        if let Some(feature) = self.features.iter_mut().find(|f| f.id == feature_id) {
            feature.weight = nudged(feature.weight, step);
        }
    }

    /// Adjust a rule weight by a signed step, clamped to [0, 100].
    pub fn nudge_rule_weight(&mut self, rule_id: &str, step: i32) {
        if let Some(rule) = self.rules.iter_mut().find(|r| r.id == rule_id) {
            rule.weight = nudged(rule.weight, step);
        }
    }

    /// Validate the configuration for saving: feature weights must total
    /// 100, and so must the selected feature's rule weights.
    pub fn validate(&self, selected_feature: &str) -> Result<(), WeightError> {
        let features_total = self.features_total();
        if features_total != 100 {
            return Err(WeightError::Features {
                total: features_total,
            });
        }
        let rules_total = self.rules_total_for(selected_feature);
        if rules_total != 100 {
            return Err(WeightError::Rules { total: rules_total });
        }
        Ok(())
    }
}

fn nudged(weight: u32, step: i32) -> u32 {
    let next = weight as i32 + step;
    next.clamp(0, 100) as u32
}
