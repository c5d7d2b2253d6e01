//! Help overlay.

use crate::view::column_menu::centered;
use crate::view::styles;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const HELP_LINES: &[(&str, &str)] = &[
    ("1 / 2 / 3", "switch screen (risk screens need an admin role)"),
    ("j / k, arrows", "move the row cursor"),
    ("h / l", "select a column"),
    ("s", "sort by the selected column (asc, desc, off)"),
    ("/", "search; Enter keeps the query, Esc clears it"),
    ("v", "toggle the selected column"),
    ("V / Ctrl+v", "show all / hide all but the anchor column"),
    ("c", "column menu"),
    ("n / p", "next / previous page"),
    ("z", "cycle page size (10, 20, 50, 100)"),
    ("f", "edit filters"),
    ("Enter", "open claim details (dashboard)"),
    ("Space / a", "select rule / select page (rules)"),
    ("t", "toggle rule status, with confirmation (rules)"),
    ("e", "edit the rule's start/end dates (rules)"),
    ("Tab, +, -", "switch pane, adjust weight (configuration)"),
    ("S", "save the weighted configuration"),
    ("r", "refresh from the data source"),
    ("b", "toggle the sidebar"),
    ("?", "this help"),
    ("q / Ctrl+c", "quit"),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup = centered(area, 64, HELP_LINES.len() as u16 + 4);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(keys, what)| Line::raw(format!("{keys:<14} {what}")))
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::styled("Esc or ? to close", styles::dim()));

    let block = Block::default().borders(Borders::ALL).title(" Help ");
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
