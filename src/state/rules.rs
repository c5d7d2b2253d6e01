//! Risk-rules screen state.
//!
//! The rules screen is fully client-side: the whole rule set arrives
//! once, the committed filters narrow it, the table engine searches and
//! sorts the narrowed rows, and the page state slices the result
//! locally. Selection, the status-toggle confirmation and in-place
//! date edits mutate the canonical rule list, after which the row
//! projection is rebuilt.

use crate::model::column::rules_table_spec;
use crate::model::{RiskRule, Row, RuleId};
use crate::state::dashboard::ColumnMenuState;
use crate::state::filters::{parse_date, push_date_char, FilterDraftError, RuleFilters};
use crate::table::{PageState, TableSpec, TableViewState};
use std::collections::HashSet;

/// Which half of a rule's validity window is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleDateField {
    /// The start date.
    Start,
    /// The end date.
    End,
}

impl RuleDateField {
    /// The other field.
    pub fn toggled(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// In-place edit of one rule's validity window. Buffers are parsed on
/// commit only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDateDraft {
    /// The rule being edited.
    pub id: RuleId,
    /// Field under the cursor.
    pub field: RuleDateField,
    /// Start-date text buffer.
    pub start_input: String,
    /// End-date text buffer.
    pub end_input: String,
}

impl RuleDateDraft {
    /// Append a character to the focused buffer.
    pub fn push_char(&mut self, ch: char) {
        match self.field {
            RuleDateField::Start => push_date_char(&mut self.start_input, ch),
            RuleDateField::End => push_date_char(&mut self.end_input, ch),
        }
    }

    /// Delete the last character of the focused buffer.
    pub fn backspace(&mut self) {
        match self.field {
            RuleDateField::Start => {
                self.start_input.pop();
            }
            RuleDateField::End => {
                self.end_input.pop();
            }
        }
    }
}

/// All state of the rules screen.
#[derive(Debug)]
pub struct RulesState {
    spec: TableSpec,
    rules: Vec<RiskRule>,
    filtered_rows: Vec<Row>,
    /// True while the initial rule fetch is outstanding.
    pub loading: bool,
    /// Engine view state: search, sort, visibility.
    pub view: TableViewState,
    /// Local pagination over the derived order.
    pub page: PageState,
    /// Committed client-side filters.
    pub filters: RuleFilters,
    /// True while the search box has focus.
    pub searching: bool,
    /// Selected rule ids.
    pub selected: HashSet<RuleId>,
    /// Row cursor, an index into the current page slice.
    pub cursor: usize,
    /// Selected column, an index into the visible columns.
    pub selected_column: usize,
    /// Open column-visibility menu, if any.
    pub column_menu: Option<ColumnMenuState>,
    /// Rule awaiting status-toggle confirmation.
    pub confirm_toggle: Option<RuleId>,
    /// In-progress edit of a rule's validity window.
    pub date_draft: Option<RuleDateDraft>,
}

impl RulesState {
    /// Fresh rules screen with nothing loaded yet.
    pub fn new(page_size: usize) -> Self {
        let spec = rules_table_spec();
        let view = TableViewState::new(&spec);
        Self {
            spec,
            rules: Vec::new(),
            filtered_rows: Vec::new(),
            loading: true,
            view,
            page: PageState::new(page_size),
            filters: RuleFilters::default(),
            searching: false,
            selected: HashSet::new(),
            cursor: 0,
            selected_column: 0,
            column_menu: None,
            confirm_toggle: None,
            date_draft: None,
        }
    }

    /// The table spec.
    pub fn spec(&self) -> &TableSpec {
        &self.spec
    }

    /// Ask for a refetch. The shell notices the loading flag and asks
    /// the data source again.
    pub fn refresh(&mut self) {
        self.loading = true;
    }

    /// Replace the canonical rule set (initial fetch or refresh).
    pub fn set_rules(&mut self, rules: Vec<RiskRule>) {
        self.rules = rules;
        self.loading = false;
        self.page.reset();
        self.rebuild();
    }

    /// Rows that passed the committed filters, pre-engine.
    pub fn rows(&self) -> &[Row] {
        &self.filtered_rows
    }

    /// Derived order over the filtered rows, after search and sort.
    pub fn derived_order(&self) -> Vec<usize> {
        self.view.derive_order(&self.spec, &self.filtered_rows)
    }

    /// The slice of the derived order covered by the current page.
    pub fn page_order(&self) -> Vec<usize> {
        let order = self.derived_order();
        let (start, end) = self.page.slice_bounds(order.len());
        order[start..end].to_vec()
    }

    /// The rule behind the cursor on the current page.
    pub fn rule_under_cursor(&self) -> Option<&RiskRule> {
        let page_order = self.page_order();
        let row_idx = *page_order.get(self.cursor)?;
        let row = self.filtered_rows.get(row_idx)?;
        self.rules.iter().find(|r| r.id.as_str() == row.id())
    }

    /// Recompute the filtered projection and the pagination total. Runs
    /// after anything that changes which rows exist or match.
    fn rebuild(&mut self) {
        self.filtered_rows = self
            .rules
            .iter()
            .filter(|rule| self.filters.matches(rule))
            .map(RiskRule::to_row)
            .collect();
        let derived = self.derived_order().len();
        self.page.set_total(derived);
        self.clamp_cursor();
    }

    // ===== Filter intents =====

    /// Cycle the status filter and re-apply from page 1.
    pub fn cycle_status_filter(&mut self) {
        self.filters.cycle_status();
        self.page.reset();
        self.rebuild();
    }

    /// Cycle one category filter through the values present in the rule
    /// set (plus "all").
    pub fn cycle_category_filter(&mut self, which: usize) {
        let values = self.category_values(which);
        let current = match which {
            1 => &mut self.filters.category1,
            2 => &mut self.filters.category2,
            _ => &mut self.filters.category3,
        };
        *current = match current.take() {
            None => values.first().cloned(),
            Some(value) => {
                let next = values.iter().position(|v| *v == value).map(|i| i + 1);
                match next {
                    Some(i) if i < values.len() => Some(values[i].clone()),
                    _ => None,
                }
            }
        };
        self.page.reset();
        self.rebuild();
    }

    /// Clear every filter and re-apply.
    pub fn reset_filters(&mut self) {
        self.filters.reset();
        self.page.reset();
        self.rebuild();
    }

    fn category_values(&self, which: usize) -> Vec<String> {
        let mut values: Vec<String> = self
            .rules
            .iter()
            .map(|r| match which {
                1 => r.category1.clone(),
                2 => r.category2.clone(),
                _ => r.category3.clone(),
            })
            .filter(|v| !v.is_empty())
            .collect();
        values.sort();
        values.dedup();
        values
    }

    // ===== Search intents =====

    /// Append a character to the live search query.
    pub fn search_push(&mut self, ch: char) {
        self.view.search.push(ch);
        self.page.reset();
        self.rebuild();
    }

    /// Delete the last character of the search query.
    pub fn search_backspace(&mut self) {
        self.view.search.pop();
        self.page.reset();
        self.rebuild();
    }

    /// Leave search mode, clearing the query.
    pub fn search_cancel(&mut self) {
        self.searching = false;
        self.view.search.clear();
        self.page.reset();
        self.rebuild();
    }

    // ===== Pagination intents =====

    /// Page forward over the local result.
    pub fn next_page(&mut self) {
        self.page.next_page();
        self.clamp_cursor();
    }

    /// Page back.
    pub fn prev_page(&mut self) {
        self.page.prev_page();
        self.clamp_cursor();
    }

    /// Cycle the page size, resetting to page 1.
    pub fn cycle_page_size(&mut self) {
        self.page.cycle_page_size();
        self.clamp_cursor();
    }

    // ===== Sort and columns =====

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
            self.clamp_cursor();
        }
    }

    /// Toggle visibility of the selected column.
    pub fn toggle_selected_column(&mut self) {
        if let Some(key) = self.selected_column_key() {
            self.view.visibility.toggle(key);
            let visible = self.view.visible_columns(&self.spec).len();
            self.selected_column = self.selected_column.min(visible.saturating_sub(1));
        }
    }

    // ===== Cursor and selection =====

    /// Move the row cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the row cursor down within the page.
    pub fn cursor_down(&mut self) {
        let len = self.page_order().len();
        if len > 0 {
            self.cursor = (self.cursor + 1).min(len - 1);
        }
    }

    /// Toggle selection of the rule under the cursor.
    pub fn toggle_select_current(&mut self) {
        let id = self.rule_under_cursor().map(|rule| rule.id.clone());
        if let Some(id) = id {
            if !self.selected.remove(&id) {
                self.selected.insert(id);
            }
        }
    }

    /// Select every rule on the page, or clear the page's selection when
    /// all of them already are selected.
    pub fn toggle_select_all_on_page(&mut self) {
        let page_ids: Vec<RuleId> = self
            .page_order()
            .iter()
            .filter_map(|&idx| self.filtered_rows.get(idx))
            .filter_map(|row| {
                self.rules
                    .iter()
                    .find(|r| r.id.as_str() == row.id())
                    .map(|r| r.id.clone())
            })
            .collect();
        if page_ids.is_empty() {
            return;
        }
        let all_selected = page_ids.iter().all(|id| self.selected.contains(id));
        for id in page_ids {
            if all_selected {
                self.selected.remove(&id);
            } else {
                self.selected.insert(id);
            }
        }
    }

    // ===== Validity-window editing =====

    /// Open the date editor for the rule under the cursor, seeded with
    /// its current window.
    pub fn start_date_edit(&mut self) {
        self.date_draft = self.rule_under_cursor().map(|rule| RuleDateDraft {
            id: rule.id.clone(),
            field: RuleDateField::Start,
            start_input: rule.rule_start_date.clone(),
            end_input: rule.rule_end_date.clone(),
        });
    }

    /// Commit the open date draft onto its rule. Both buffers must be
    /// valid dates in order; otherwise the draft stays open and the
    /// error is returned for the status line.
    pub fn commit_date_draft(&mut self) -> Result<(), FilterDraftError> {
        let Some(draft) = &self.date_draft else {
            return Ok(());
        };
        let start = parse_date(&draft.start_input)?;
        let end = parse_date(&draft.end_input)?;
        if start > end {
            return Err(FilterDraftError::InvertedRange { start, end });
        }
        let id = draft.id.clone();
        if let Some(rule) = self.rules.iter_mut().find(|r| r.id == id) {
            rule.rule_start_date = start.format("%Y-%m-%d").to_string();
            rule.rule_end_date = end.format("%Y-%m-%d").to_string();
        }
        self.date_draft = None;
        self.rebuild();
        Ok(())
    }

    /// Drop the open date draft without applying.
    pub fn cancel_date_edit(&mut self) {
        self.date_draft = None;
    }

    // ===== Status toggle with confirmation =====

    /// Ask for confirmation before toggling the rule under the cursor.
    pub fn request_status_toggle(&mut self) {
        self.confirm_toggle = self.rule_under_cursor().map(|r| r.id.clone());
    }

    /// Apply the pending status toggle. Returns the toggled rule id.
    pub fn confirm_status_toggle(&mut self) -> Option<RuleId> {
        let id = self.confirm_toggle.take()?;
        if let Some(rule) = self.rules.iter_mut().find(|r| r.id == id) {
            rule.status = !rule.status;
        }
        self.rebuild();
        Some(id)
    }

    /// Drop the pending status toggle.
    pub fn cancel_status_toggle(&mut self) {
        self.confirm_toggle = None;
    }

    fn clamp_cursor(&mut self) {
        let len = self.page_order().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
