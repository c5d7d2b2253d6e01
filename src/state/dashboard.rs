//! Desk-audit dashboard screen state.
//!
//! The dashboard is remote-paginated: every page, page-size or filter
//! change queues a query for the data source, and the engine's local
//! search/sort runs over the one page the source returned. View state
//! (search, sort, visibility) survives row replacement; the page cursor
//! resets on filter commit, page-size change and refresh, but not on a
//! fetch the user caused by paging.

use crate::model::column::audit_table_spec;
use crate::model::{AuditRecord, Row, UserRole};
use crate::source::{AuditPage, AuditQuery};
use crate::state::claim_modal::ClaimModalState;
use crate::state::fetch::{FetchTickets, RequestSeq};
use crate::state::filters::{AuditFilterDraft, AuditFilters};
use crate::table::{PageState, TableSpec, TableViewState};
use tracing::debug;

/// Cursor state of the column-visibility menu popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnMenuState {
    /// Index into the spec's known columns.
    pub cursor: usize,
}

/// All state of the dashboard screen.
#[derive(Debug)]
pub struct DashboardState {
    spec: TableSpec,
    records: Vec<AuditRecord>,
    rows: Vec<Row>,
    /// True while a fetch is outstanding; the view renders a placeholder.
    pub loading: bool,
    /// Engine view state: search, sort, visibility.
    pub view: TableViewState,
    /// Remote pagination state.
    pub page: PageState,
    /// Committed filters.
    pub filters: AuditFilters,
    /// In-progress filter edit, when the filter bar has focus.
    pub filter_draft: Option<AuditFilterDraft>,
    /// True while the search box has focus.
    pub searching: bool,
    /// Row cursor, an index into the derived order.
    pub cursor: usize,
    /// Selected column, an index into the visible columns.
    pub selected_column: usize,
    /// Open column-visibility menu, if any.
    pub column_menu: Option<ColumnMenuState>,
    /// Open claim-details view, if any.
    pub modal: Option<ClaimModalState>,
    tickets: FetchTickets,
    pending: Option<AuditQuery>,
}

impl DashboardState {
    /// Fresh dashboard for a role, with the first fetch already queued.
    pub fn new(role: UserRole, page_size: usize, filters: AuditFilters) -> Self {
        let spec = audit_table_spec(role);
        let view = TableViewState::new(&spec);
        let mut state = Self {
            spec,
            records: Vec::new(),
            rows: Vec::new(),
            loading: false,
            view,
            page: PageState::new(page_size),
            filters,
            filter_draft: None,
            searching: false,
            cursor: 0,
            selected_column: 0,
            column_menu: None,
            modal: None,
            tickets: FetchTickets::new(),
            pending: None,
        };
        state.queue_fetch();
        state
    }

    /// The table spec for this role.
    pub fn spec(&self) -> &TableSpec {
        &self.spec
    }

    /// The current page of rows, as fetched.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Derived row order after local search and sort.
    pub fn derived_order(&self) -> Vec<usize> {
        self.view.derive_order(&self.spec, &self.rows)
    }

    /// The record behind the cursor, if the derived order is non-empty.
    pub fn record_under_cursor(&self) -> Option<&AuditRecord> {
        let order = self.derived_order();
        let row_idx = *order.get(self.cursor)?;
        let row = self.rows.get(row_idx)?;
        self.records.iter().find(|r| r.id.as_str() == row.id())
    }

    // ===== Fetch plumbing =====

    /// The query that should be in flight for the current state.
    fn build_query(&self) -> AuditQuery {
        AuditQuery {
            start_date: self.filters.start_date,
            end_date: self.filters.end_date,
            trigger: self.filters.trigger,
            page: self.page.page(),
            page_size: self.page.page_size(),
        }
    }

    fn queue_fetch(&mut self) {
        self.loading = true;
        self.pending = Some(self.build_query());
    }

    /// Hand the queued query (if any) to the shell, stamped with a fresh
    /// sequence number.
    pub fn take_pending(&mut self) -> Option<(RequestSeq, AuditQuery)> {
        let query = self.pending.take()?;
        Some((self.tickets.issue(), query))
    }

    /// Apply a completed fetch. Stale responses are dropped and the
    /// method reports whether the page was applied. Rows are replaced
    /// wholesale; search, sort and visibility survive.
    pub fn apply_response(&mut self, seq: RequestSeq, page: AuditPage) -> bool {
        if !self.tickets.accept(seq) {
            return false;
        }
        self.rows = page.records.iter().map(AuditRecord::to_row).collect();
        self.records = page.records;
        self.page.set_total(page.total);
        self.loading = false;
        self.clamp_cursor();
        debug!(
            rows = self.rows.len(),
            total = self.page.total(),
            page = self.page.page(),
            "Applied audit page"
        );
        true
    }

    /// Record a failed fetch. The last-known rows stay on screen; only
    /// the loading flag drops, and only when the failure is current.
    pub fn apply_error(&mut self, seq: RequestSeq) {
        if self.tickets.accept(seq) {
            self.loading = false;
        }
    }

    // ===== Pagination intents =====

    /// Page forward and refetch. The cursor stays on the requested page.
    pub fn next_page(&mut self) {
        let before = self.page.page();
        self.page.next_page();
        if self.page.page() != before {
            self.queue_fetch();
        }
    }

    /// Page back and refetch.
    pub fn prev_page(&mut self) {
        let before = self.page.page();
        self.page.prev_page();
        if self.page.page() != before {
            self.queue_fetch();
        }
    }

    /// Jump to a page (clamped) and refetch if it moved.
    pub fn set_page(&mut self, page: usize) {
        let before = self.page.page();
        self.page.set_page(page);
        if self.page.page() != before {
            self.queue_fetch();
        }
    }

    /// Cycle the page size, which resets to page 1, and refetch.
    pub fn cycle_page_size(&mut self) {
        self.page.cycle_page_size();
        self.queue_fetch();
    }

    /// Refetch the current filters from page 1.
    pub fn refresh(&mut self) {
        self.page.reset();
        self.queue_fetch();
    }

    // ===== Filter intents =====

    /// Open the filter editor seeded from the committed filters.
    pub fn start_filter_edit(&mut self) {
        self.filter_draft = Some(AuditFilterDraft::from_filters(&self.filters));
    }

    /// Commit the open draft: new filters, page 1, refetch. Returns the
    /// draft error when the buffers do not parse, leaving the draft open.
    pub fn commit_filter_draft(&mut self) -> Result<(), crate::state::filters::FilterDraftError> {
        let Some(draft) = &self.filter_draft else {
            return Ok(());
        };
        let filters = draft.commit()?;
        self.filters = filters;
        self.filter_draft = None;
        self.page.reset();
        self.queue_fetch();
        Ok(())
    }

    /// Drop the open draft without committing.
    pub fn cancel_filter_edit(&mut self) {
        self.filter_draft = None;
    }

    // ===== Search intents =====

    /// Append a character to the live search query.
    pub fn search_push(&mut self, ch: char) {
        self.view.search.push(ch);
        self.cursor = 0;
    }

    /// Delete the last character of the search query.
    pub fn search_backspace(&mut self) {
        self.view.search.pop();
        self.cursor = 0;
    }

    /// Leave search mode, clearing the query.
    pub fn search_cancel(&mut self) {
        self.searching = false;
        self.view.search.clear();
        self.cursor = 0;
    }

    // ===== Column and sort intents =====

    /// Key of the currently selected visible column.
    pub fn selected_column_key(&self) -> Option<&'static str> {
        let visible = self.view.visible_columns(&self.spec);
        visible.get(self.selected_column).map(|c| c.key)
    }

    /// Move the column selection left.
    pub fn column_left(&mut self) {
        self.selected_column = self.selected_column.saturating_sub(1);
    }

    /// Move the column selection right.
    pub fn column_right(&mut self) {
        let visible = self.view.visible_columns(&self.spec).len();
        if visible > 0 {
            self.selected_column = (self.selected_column + 1).min(visible - 1);
        }
    }

    /// Cycle the sort on the selected column.
    pub fn sort_selected(&mut self) {
        if let Some(key) = self.selected_column_key() {
            self.view.sort.cycle(key);
        }
    }

    /// Toggle visibility of the selected column, keeping the selection
    /// in range afterwards.
    pub fn toggle_selected_column(&mut self) {
        if let Some(key) = self.selected_column_key() {
            self.view.visibility.toggle(key);
            self.clamp_selected_column();
        }
    }

    /// Show every column.
    pub fn show_all_columns(&mut self) {
        self.view.visibility.show_all();
    }

    /// Hide everything but the anchor.
    pub fn hide_all_columns(&mut self) {
        self.view.visibility.hide_all();
        self.clamp_selected_column();
    }

    // ===== Cursor =====

    /// Move the row cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the row cursor down.
    pub fn cursor_down(&mut self) {
        let len = self.derived_order().len();
        if len > 0 {
            self.cursor = (self.cursor + 1).min(len - 1);
        }
    }

    /// Open the claim-details view for the row under the cursor.
    pub fn open_details(&mut self) {
        let modal = self.record_under_cursor().map(ClaimModalState::open);
        if modal.is_some() {
            self.modal = modal;
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.derived_order().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    fn clamp_selected_column(&mut self) {
        let visible = self.view.visible_columns(&self.spec).len();
        self.selected_column = self.selected_column.min(visible.saturating_sub(1));
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
