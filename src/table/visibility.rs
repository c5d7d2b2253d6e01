//! Per-column visibility state.

use crate::model::ColumnKey;
use crate::table::TableSpec;
use std::collections::HashMap;

/// Mapping from column key to "is this column shown".
///
/// Independent of search, sort and pagination; none of those reset it.
/// The spec's anchor column can never be hidden: toggling it is a no-op
/// and "hide all" keeps it, so a table always has at least one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityMap {
    visible: HashMap<ColumnKey, bool>,
    anchor: ColumnKey,
}

impl VisibilityMap {
    /// Default visibility for a spec: everything shown except the
    /// spec's default-hidden columns.
    pub fn from_spec(spec: &TableSpec) -> Self {
        let visible = spec
            .columns()
            .iter()
            .map(|c| (c.key, !spec.default_hidden().contains(&c.key)))
            .collect();
        Self {
            visible,
            anchor: spec.anchor(),
        }
    }

    /// Whether a column is currently shown. Unknown keys read as shown
    /// so a stale key can never blank a column out.
    pub fn is_visible(&self, key: ColumnKey) -> bool {
        self.visible.get(key).copied().unwrap_or(true)
    }

    /// Flip one column. Toggling the anchor is a no-op.
    pub fn toggle(&mut self, key: ColumnKey) {
        if key == self.anchor {
            return;
        }
        if let Some(flag) = self.visible.get_mut(key) {
            *flag = !*flag;
        }
    }

    /// Show every known column.
    pub fn show_all(&mut self) {
        for flag in self.visible.values_mut() {
            *flag = true;
        }
    }

    /// Hide every known column except the anchor.
    pub fn hide_all(&mut self) {
        let anchor = self.anchor;
        for (key, flag) in self.visible.iter_mut() {
            *flag = *key == anchor;
        }
    }

    /// The anchor column key.
    pub fn anchor(&self) -> ColumnKey {
        self.anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;

    fn spec() -> TableSpec {
        TableSpec::new(
            vec![
                Column::new("claim_number", "Claim Number"),
                Column::new("status", "Status"),
                Column::new("tat", "TAT Compliance"),
            ],
            vec!["claim_number"],
            vec!["tat"],
            "claim_number",
        )
    }

    #[test]
    fn defaults_follow_the_spec() {
        let map = VisibilityMap::from_spec(&spec());
        assert!(map.is_visible("claim_number"));
        assert!(map.is_visible("status"));
        assert!(!map.is_visible("tat"));
    }

    #[test]
    fn toggle_twice_is_identity() {
        let spec = spec();
        let original = VisibilityMap::from_spec(&spec);
        let mut map = original.clone();
        map.toggle("status");
        assert!(!map.is_visible("status"));
        map.toggle("status");
        assert_eq!(map, original);
    }

    #[test]
    fn anchor_cannot_be_hidden() {
        let mut map = VisibilityMap::from_spec(&spec());
        map.toggle("claim_number");
        assert!(map.is_visible("claim_number"));
        map.hide_all();
        assert!(map.is_visible("claim_number"));
        assert!(!map.is_visible("status"));
        assert!(!map.is_visible("tat"));
    }

    #[test]
    fn show_all_reveals_default_hidden_columns() {
        let mut map = VisibilityMap::from_spec(&spec());
        map.show_all();
        assert!(map.is_visible("tat"));
    }

    #[test]
    fn unknown_key_reads_as_visible_and_toggles_to_nothing() {
        let mut map = VisibilityMap::from_spec(&spec());
        assert!(map.is_visible("no_such_column"));
        map.toggle("no_such_column");
        assert!(map.is_visible("no_such_column"));
    }
}
