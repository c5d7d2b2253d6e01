//! Table rendering.
//!
//! Renders the visible columns in known-column order, a header row with
//! sort indicators, the cursor row highlighted, and the loading and
//! empty placeholder states.

use crate::model::Row;
use crate::table::{SortDirection, TableSpec, TableViewState};
use crate::view::styles;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row as TableRow, Table};
use ratatui::Frame;
use std::collections::HashSet;
use unicode_width::UnicodeWidthStr;

const MIN_COLUMN_WIDTH: usize = 6;
const MAX_COLUMN_WIDTH: usize = 24;

/// Everything the table widget needs for one frame.
pub struct TableParams<'a> {
    /// The screen's table spec.
    pub spec: &'a TableSpec,
    /// The engine view state.
    pub view: &'a TableViewState,
    /// The row collection behind the order.
    pub rows: &'a [Row],
    /// Derived row order to render, top to bottom.
    pub order: &'a [usize],
    /// Cursor position within `order`.
    pub cursor: usize,
    /// Selected column index within the visible columns.
    pub selected_column: usize,
    /// Render the loading placeholder instead of rows.
    pub loading: bool,
    /// Row ids rendered with a selection mark, when the screen has
    /// row selection.
    pub marked: Option<&'a HashSet<String>>,
}

/// Render the table into `area`.
pub fn render_table(frame: &mut Frame, area: Rect, params: &TableParams<'_>) {
    let block = Block::default().borders(Borders::ALL);

    if params.loading {
        let placeholder = Paragraph::new(Line::styled("Loading...", styles::dim()))
            .centered()
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    if params.order.is_empty() {
        let placeholder = Paragraph::new(Line::styled("No matching records", styles::dim()))
            .centered()
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let columns = params.view.visible_columns(params.spec);
    let has_mark_column = params.marked.is_some();

    // Header: titles plus a direction indicator on the sorted column.
    let mut header_cells: Vec<Cell> = Vec::new();
    if has_mark_column {
        header_cells.push(Cell::from(" "));
    }
    for (idx, column) in columns.iter().enumerate() {
        let title = header_title(params.view, column.key, column.title);
        let style = if idx == params.selected_column {
            styles::header_selected()
        } else {
            styles::header()
        };
        header_cells.push(Cell::from(title).style(style));
    }
    let header = TableRow::new(header_cells).style(styles::header());

    // Body rows from the derived order.
    let mut body: Vec<TableRow> = Vec::new();
    for (position, &row_idx) in params.order.iter().enumerate() {
        let Some(row) = params.rows.get(row_idx) else {
            continue;
        };
        let mut cells: Vec<Cell> = Vec::new();
        if let Some(marked) = params.marked {
            let mark = if marked.contains(row.id()) { "x" } else { " " };
            cells.push(Cell::from(mark));
        }
        for column in &columns {
            cells.push(Cell::from(truncate_cell(
                row.cell_or_empty(column.key),
                MAX_COLUMN_WIDTH,
            )));
        }
        let mut table_row = TableRow::new(cells);
        if position == params.cursor {
            table_row = table_row.style(styles::row_selected());
        }
        body.push(table_row);
    }

    let widths = column_widths(params, &columns, has_mark_column);
    let table = Table::new(body, widths)
        .header(header)
        .column_spacing(1)
        .block(block);
    frame.render_widget(table, area);
}

/// Header title with the sort indicator appended.
pub fn header_title(view: &TableViewState, key: &'static str, title: &str) -> String {
    match view.sort.direction_for(key) {
        Some(SortDirection::Ascending) => format!("{title} ^"),
        Some(SortDirection::Descending) => format!("{title} v"),
        None => title.to_string(),
    }
}

fn column_widths(
    params: &TableParams<'_>,
    columns: &[&crate::model::Column],
    has_mark_column: bool,
) -> Vec<Constraint> {
    let mut widths = Vec::new();
    if has_mark_column {
        widths.push(Constraint::Length(1));
    }
    for column in columns {
        let mut width = UnicodeWidthStr::width(column.title) + 2;
        for &row_idx in params.order {
            if let Some(row) = params.rows.get(row_idx) {
                width = width.max(UnicodeWidthStr::width(row.cell_or_empty(column.key)));
            }
        }
        let width = width.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
        widths.push(Constraint::Length(width as u16));
    }
    widths
}

/// Truncate a cell to a display width, marking the cut with an
/// ellipsis character.
pub fn truncate_cell(value: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(value) <= max_width {
        return value.to_string();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in value.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
