//! Claim-details modal rendering.
//!
//! Left half is the document-viewer placeholder; right half is the
//! fraud-findings table with per-finding actions. The remarks editor
//! and the add-finding picker render as nested popups.

use crate::model::finding::FINDINGS_CATALOG;
use crate::model::FindingStatus;
use crate::state::{ClaimModalFocus, ClaimModalState};
use crate::view::column_menu::centered;
use crate::view::styles;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Render the modal over the whole screen area.
pub fn render_claim_modal(frame: &mut Frame, area: Rect, modal: &ClaimModalState) {
    let popup = centered(area, area.width.saturating_sub(6), area.height.saturating_sub(4));
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Claim Details and Fraud Findings ");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let halves =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(inner);

    render_document_pane(frame, halves[0]);
    render_findings_pane(frame, halves[1], modal);

    match &modal.focus {
        ClaimModalFocus::Picker { cursor } => render_picker(frame, popup, *cursor),
        ClaimModalFocus::Remarks { input, .. } => render_remarks(frame, popup, input),
        ClaimModalFocus::Findings => {}
    }
}

fn render_document_pane(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::styled("Document Viewer", styles::title()),
        Line::styled("Yet to be implemented", styles::dim()),
    ];
    let block = Block::default().borders(Borders::RIGHT);
    frame.render_widget(Paragraph::new(lines).centered().block(block), area);
}

fn render_findings_pane(frame: &mut Frame, area: Rect, modal: &ClaimModalState) {
    let mut lines = Vec::new();
    lines.push(Line::from(vec![
        Span::styled("Claim ", styles::dim()),
        Span::styled(modal.claim_number.clone(), styles::title()),
        Span::styled(format!("  {}  {}", modal.hospital_name, modal.status), styles::dim()),
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::styled("Fraud Findings", styles::title()));

    for (idx, finding) in modal.findings.iter().enumerate() {
        let status_style = match finding.status {
            FindingStatus::Pending => styles::dim(),
            FindingStatus::Accepted => styles::ok(),
            FindingStatus::Declined => styles::bad(),
        };
        let row_style = if idx == modal.cursor && modal.focus == ClaimModalFocus::Findings {
            styles::row_selected()
        } else {
            Style::default()
        };
        let remarks = match &finding.remarks {
            Some(text) => format!("  · {text}"),
            None => String::new(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}  ", finding.description), row_style),
            Span::styled(format!("[{}]", finding.status.label()), status_style),
            Span::styled(remarks, styles::dim()),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "a accept · d decline · m remarks · + add finding · Esc close",
        styles::dim(),
    ));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_picker(frame: &mut Frame, area: Rect, cursor: usize) {
    let popup = centered(area, 48, FINDINGS_CATALOG.len() as u16 + 4);
    frame.render_widget(Clear, popup);
    let mut lines = Vec::new();
    for (idx, description) in FINDINGS_CATALOG.iter().enumerate() {
        let style = if idx == cursor {
            styles::row_selected()
        } else {
            Style::default()
        };
        lines.push(Line::styled(*description, style));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled("Enter add · Esc cancel", styles::dim()));
    let block = Block::default().borders(Borders::ALL).title(" Add Finding ");
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn render_remarks(frame: &mut Frame, area: Rect, input: &str) {
    let popup = centered(area, 52, 5);
    frame.render_widget(Clear, popup);
    let lines = vec![
        Line::raw(format!("{input}_")),
        Line::styled("Enter save · Esc cancel", styles::dim()),
    ];
    let block = Block::default().borders(Borders::ALL).title(" Remarks ");
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
