//! Filter bars of the two table screens.

use crate::state::{AuditFilterDraft, AuditFilterField, AuditFilters, RuleFilters};
use crate::view::styles;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the dashboard filter bar: date range and trigger type, plus
/// the live search box. While a draft is open the focused field is
/// highlighted and edited in place.
pub fn render_audit_filter_bar(
    frame: &mut Frame,
    area: Rect,
    filters: &AuditFilters,
    draft: Option<&AuditFilterDraft>,
    search: &str,
    searching: bool,
) {
    let line = match draft {
        Some(draft) => draft_line(draft),
        None => committed_line(filters),
    };
    let mut lines = vec![line, search_line(search, searching)];
    if draft.is_some() {
        lines.push(Line::styled(
            "type dates · Space cycles trigger · Tab next field · Enter apply · Esc cancel",
            styles::dim(),
        ));
    }
    let block = Block::default().borders(Borders::ALL).title(" Filters ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn committed_line(filters: &AuditFilters) -> Line<'static> {
    Line::from(vec![
        Span::raw("From "),
        Span::raw(filters.start_date.format("%Y-%m-%d").to_string()),
        Span::raw("  To "),
        Span::raw(filters.end_date.format("%Y-%m-%d").to_string()),
        Span::raw("  Trigger "),
        Span::raw(filters.trigger.as_str()),
        Span::styled("   (f to edit)", styles::dim()),
    ])
}

fn draft_line(draft: &AuditFilterDraft) -> Line<'static> {
    let focus = |field: AuditFilterField| -> Style {
        if draft.field == field {
            styles::field_focused()
        } else {
            Style::default()
        }
    };
    Line::from(vec![
        Span::raw("From "),
        Span::styled(
            draft.start_input.clone(),
            focus(AuditFilterField::StartDate),
        ),
        Span::raw("  To "),
        Span::styled(draft.end_input.clone(), focus(AuditFilterField::EndDate)),
        Span::raw("  Trigger "),
        Span::styled(draft.trigger.as_str(), focus(AuditFilterField::Trigger)),
    ])
}

/// Render the rules filter bar: status and category selectors plus the
/// search box.
pub fn render_rule_filter_bar(
    frame: &mut Frame,
    area: Rect,
    filters: &RuleFilters,
    search: &str,
    searching: bool,
) {
    let status = match filters.status {
        None => "All",
        Some(true) => "Active",
        Some(false) => "Inactive",
    };
    let category = |value: &Option<String>| -> String {
        value.clone().unwrap_or_else(|| "All".to_string())
    };
    let summary = Line::from(vec![
        Span::raw("Status "),
        Span::raw(status.to_string()),
        Span::raw("  Cat1 "),
        Span::raw(category(&filters.category1)),
        Span::raw("  Cat2 "),
        Span::raw(category(&filters.category2)),
        Span::raw("  Cat3 "),
        Span::raw(category(&filters.category3)),
        Span::styled(
            "   (f status · F1..F3 categories · x reset · e dates)",
            styles::dim(),
        ),
    ]);
    let block = Block::default().borders(Borders::ALL).title(" Filters ");
    frame.render_widget(
        Paragraph::new(vec![summary, search_line(search, searching)]).block(block),
        area,
    );
}

fn search_line(search: &str, searching: bool) -> Line<'static> {
    let mut spans = vec![Span::raw("Search: ")];
    if searching {
        spans.push(Span::styled(format!("{search}_"), styles::field_focused()));
        spans.push(Span::styled("  Enter keep · Esc clear", styles::dim()));
    } else if search.is_empty() {
        spans.push(Span::styled("(/ to search)", styles::dim()));
    } else {
        spans.push(Span::raw(search.to_string()));
    }
    Line::from(spans)
}
