//! The tabular data view engine (pure).
//!
//! One parameterized engine serves every table screen: a [`TableSpec`]
//! describes the known columns, which of them are searchable, which start
//! hidden and which one is the anchor; a [`TableViewState`] holds the
//! user-driven view state (search query, sort, column visibility). The
//! engine never fetches and never renders: it derives an ordered subset
//! of row indices from an in-memory row slice, and the shell decides what
//! to do with it.
//!
//! Pagination is a separate piece of state ([`PageState`]) because the
//! page cursor is fed by the remote collaborator on the dashboard and by
//! local slicing on the rules screen.

pub mod pagination;
pub mod search;
pub mod sort;
pub mod visibility;

pub use pagination::{PageItem, PageState, page_window};
pub use search::search_order;
pub use sort::{SortDirection, SortState, sort_order};
pub use visibility::VisibilityMap;

use crate::model::{Column, ColumnKey, Row};

/// Static description of one table: its known columns and engine knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    columns: Vec<Column>,
    searchable: Vec<ColumnKey>,
    default_hidden: Vec<ColumnKey>,
    anchor: ColumnKey,
}

impl TableSpec {
    /// Build a spec. `anchor` must be one of `columns`; it is the column
    /// that can never be hidden.
    pub fn new(
        columns: Vec<Column>,
        searchable: Vec<ColumnKey>,
        default_hidden: Vec<ColumnKey>,
        anchor: ColumnKey,
    ) -> Self {
        debug_assert!(
            columns.iter().any(|c| c.key == anchor),
            "anchor must be a known column"
        );
        Self {
            columns,
            searchable,
            default_hidden,
            anchor,
        }
    }

    /// Known columns in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Columns the free-text search scans.
    pub fn searchable(&self) -> &[ColumnKey] {
        &self.searchable
    }

    /// Columns hidden until the user shows them.
    pub fn default_hidden(&self) -> &[ColumnKey] {
        &self.default_hidden
    }

    /// The always-visible column.
    pub fn anchor(&self) -> ColumnKey {
        self.anchor
    }
}

/// User-driven view state of one table.
///
/// Survives wholesale row replacement: a refetch or filter change keeps
/// the search query, the sort and the visibility map.
#[derive(Debug, Clone, PartialEq)]
pub struct TableViewState {
    /// Free-text search query, applied live.
    pub search: String,
    /// Single-column sort state.
    pub sort: SortState,
    /// Per-column visibility.
    pub visibility: VisibilityMap,
}

impl TableViewState {
    /// Fresh view state for a spec: empty search, no sort, default
    /// visibility.
    pub fn new(spec: &TableSpec) -> Self {
        Self {
            search: String::new(),
            sort: SortState::Unsorted,
            visibility: VisibilityMap::from_spec(spec),
        }
    }

    /// Derive the ordered row subset: search first, then sort. The result
    /// is a list of indices into `rows`.
    pub fn derive_order(&self, spec: &TableSpec, rows: &[Row]) -> Vec<usize> {
        let searched = search_order(spec, rows, &self.search);
        sort_order(rows, searched, &self.sort)
    }

    /// The columns to render, in known-column order.
    pub fn visible_columns<'a>(&self, spec: &'a TableSpec) -> Vec<&'a Column> {
        spec.columns()
            .iter()
            .filter(|c| self.visibility.is_visible(c.key))
            .collect()
    }
}
