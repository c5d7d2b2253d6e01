//! Navigation sidebar.

use crate::model::UserRole;
use crate::state::Screen;
use crate::view::styles;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const ENTRIES: &[(Screen, &str)] = &[
    (Screen::Dashboard, "DA"),
    (Screen::RiskManagement, "RM"),
    (Screen::RiskConfiguration, "RC"),
];

/// Render the sidebar. Expanded shows full labels with the screen
/// number; collapsed shows two-letter initials. Risk entries are dimmed
/// for non-admin roles.
pub fn render_sidebar(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    current: Screen,
    role: UserRole,
    expanded: bool,
) {
    let mut lines = Vec::new();
    lines.push(Line::styled(
        if expanded { "darc" } else { "dc" },
        styles::title(),
    ));
    lines.push(Line::raw(""));
    for (idx, (screen, initials)) in ENTRIES.iter().enumerate() {
        let gated = *screen != Screen::Dashboard && !role.is_admin();
        let label = if expanded {
            format!("{} {}", idx + 1, screen.title())
        } else {
            (*initials).to_string()
        };
        let style = if *screen == current {
            styles::sidebar_active()
        } else if gated {
            styles::dim()
        } else {
            ratatui::style::Style::default()
        };
        lines.push(Line::styled(label, style));
    }
    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::RIGHT));
    frame.render_widget(paragraph, area);
}
