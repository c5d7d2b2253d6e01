//! Opaque table rows.

use crate::model::column::ColumnKey;
use std::collections::HashMap;

/// One record shown in a table.
///
/// A row is an opaque mapping from column key to string value plus a
/// stable identifier used as a render/selection key. No schema is
/// enforced beyond the set of known column keys: a row missing a field
/// reads as absent, which search treats as non-matching and sort treats
/// as a tie.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    id: String,
    cells: HashMap<ColumnKey, String>,
}

impl Row {
    /// Create an empty row with the given stable identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cells: HashMap::new(),
        }
    }

    /// Builder-style cell insertion.
    pub fn with_cell(mut self, key: ColumnKey, value: impl Into<String>) -> Self {
        self.cells.insert(key, value.into());
        self
    }

    /// Insert or replace a cell value.
    pub fn set(&mut self, key: ColumnKey, value: impl Into<String>) {
        self.cells.insert(key, value.into());
    }

    /// Stable identifier of this row.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Cell value for a column, if the row carries one.
    pub fn cell(&self, key: ColumnKey) -> Option<&str> {
        self.cells.get(key).map(String::as_str)
    }

    /// Cell value for a column, empty string when absent. Render path
    /// helper; search and sort use [`Row::cell`] to keep absence visible.
    pub fn cell_or_empty(&self, key: ColumnKey) -> &str {
        self.cell(key).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cell_reads_as_none() {
        let row = Row::new("r1");
        assert_eq!(row.cell("claim_number"), None);
        assert_eq!(row.cell_or_empty("claim_number"), "");
    }

    #[test]
    fn with_cell_stores_value() {
        let row = Row::new("r1").with_cell("claim_number", "C100");
        assert_eq!(row.cell("claim_number"), Some("C100"));
    }

    #[test]
    fn set_replaces_existing_value() {
        let mut row = Row::new("r1").with_cell("status", "Pending");
        row.set("status", "Completed");
        assert_eq!(row.cell("status"), Some("Completed"));
    }

    #[test]
    fn id_is_stable() {
        let row = Row::new("A-1001").with_cell("status", "Pending");
        assert_eq!(row.id(), "A-1001");
    }
}
