//! Column-visibility menu popup.

use crate::state::dashboard::ColumnMenuState;
use crate::table::{TableSpec, VisibilityMap};
use crate::view::styles;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Render the column menu centered over the table.
///
/// One checkbox line per known column, in display order. The anchor
/// column is labelled as always visible; toggling it does nothing.
pub fn render_column_menu(
    frame: &mut Frame,
    area: Rect,
    spec: &TableSpec,
    visibility: &VisibilityMap,
    menu: &ColumnMenuState,
) {
    let popup = centered(area, 34, spec.columns().len() as u16 + 4);
    frame.render_widget(Clear, popup);

    let mut lines = Vec::new();
    for (idx, column) in spec.columns().iter().enumerate() {
        let checkbox = if visibility.is_visible(column.key) {
            "[x]"
        } else {
            "[ ]"
        };
        let suffix = if column.key == spec.anchor() {
            " (always)"
        } else {
            ""
        };
        let style = if idx == menu.cursor {
            styles::row_selected()
        } else {
            Style::default()
        };
        lines.push(Line::styled(
            format!("{checkbox} {}{suffix}", column.title),
            style,
        ));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Space toggle · a show all · x hide all · Esc close",
        styles::dim(),
    ));

    let block = Block::default().borders(Borders::ALL).title(" Columns ");
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Center a popup of the wanted size inside `area`, clamped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_popup_stays_inside_the_area() {
        let area = Rect::new(2, 3, 80, 24);
        let popup = centered(area, 30, 10);
        assert!(popup.x >= area.x && popup.y >= area.y);
        assert!(popup.x + popup.width <= area.x + area.width);
        assert!(popup.y + popup.height <= area.y + area.height);
    }

    #[test]
    fn oversized_popup_clamps_to_the_area() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = centered(area, 100, 50);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 5);
    }
}
