//! Centralized styles so every screen renders the same way.

use crate::state::StatusKind;
use ratatui::style::{Color, Modifier, Style};

/// Table header row.
pub fn header() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

/// Header cell of the currently selected column.
pub fn header_selected() -> Style {
    header().add_modifier(Modifier::UNDERLINED)
}

/// The row under the cursor.
pub fn row_selected() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

/// Screen title line.
pub fn title() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// De-emphasized chrome: hints, inactive entries, placeholders.
pub fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// The active page number in the pager.
pub fn pager_current() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Focused field of an inline editor.
pub fn field_focused() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
}

/// Accepted findings and valid totals.
pub fn ok() -> Style {
    Style::default().fg(Color::Green)
}

/// Declined findings and broken totals.
pub fn bad() -> Style {
    Style::default().fg(Color::Red)
}

/// Status line, by severity.
pub fn status(kind: StatusKind) -> Style {
    match kind {
        StatusKind::Info => Style::default().fg(Color::Cyan),
        StatusKind::Success => ok(),
        StatusKind::Error => bad().add_modifier(Modifier::BOLD),
    }
}

/// Sidebar entry of the active screen.
pub fn sidebar_active() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}
