//! Pager line: Prev/Next, the windowed page links, and the record range.

use crate::table::{page_window, PageItem, PageState};
use crate::view::styles;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Render the pager line.
pub fn render_pager(frame: &mut Frame, area: Rect, page: &PageState) {
    frame.render_widget(Paragraph::new(pager_line(page)), area);
}

/// Build the pager line. Separated from rendering so tests can assert
/// on the exact content.
pub fn pager_line(page: &PageState) -> Line<'static> {
    let total_pages = page.total_pages();
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        "< Prev ",
        if page.page() > 1 {
            Style::default()
        } else {
            styles::dim()
        },
    ));

    for item in page_window(page.page(), total_pages) {
        match item {
            PageItem::Page(n) => {
                let style = if n == page.page() {
                    styles::pager_current()
                } else {
                    Style::default()
                };
                spans.push(Span::styled(format!(" {n} "), style));
            }
            PageItem::Ellipsis => spans.push(Span::styled(" … ", styles::dim())),
        }
    }

    spans.push(Span::styled(
        " Next >",
        if page.page() < total_pages {
            Style::default()
        } else {
            styles::dim()
        },
    ));

    match page.showing_range() {
        Some((first, last)) => spans.push(Span::styled(
            format!(
                "   Showing {first} to {last} of {} entries · {}/page",
                page.total(),
                page.page_size()
            ),
            styles::dim(),
        )),
        None => spans.push(Span::styled("   No entries", styles::dim())),
    }

    Line::from(spans)
}

/// Plain-text rendering of the pager line, for tests and logs.
pub fn pager_text(page: &PageState) -> String {
    pager_line(page)
        .spans
        .iter()
        .map(|span| span.content.as_ref())
        .collect()
}
