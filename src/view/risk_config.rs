//! Risk Configuration screen rendering.

use crate::state::{ConfigPane, RiskConfigState};
use crate::view::styles;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the two weighted-configuration cards side by side.
pub fn render_risk_config(frame: &mut Frame, area: Rect, state: &RiskConfigState) {
    let halves =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);
    render_features(frame, halves[0], state);
    render_rules(frame, halves[1], state);
}

fn render_features(frame: &mut Frame, area: Rect, state: &RiskConfigState) {
    let mut lines = Vec::new();
    lines.push(header_line("Feature Name", "Weightage"));
    for (idx, feature) in state.config.features.iter().enumerate() {
        let checkbox = if feature.enabled { "[x]" } else { "[ ]" };
        let marker = if feature.id == state.selected_feature {
            ">"
        } else {
            " "
        };
        let style = if idx == state.feature_cursor && state.pane == ConfigPane::Features {
            styles::row_selected()
        } else if feature.enabled {
            Style::default()
        } else {
            styles::dim()
        };
        lines.push(Line::styled(
            format!("{marker} {checkbox} {:<28} {:>3}%", feature.name, feature.weight),
            style,
        ));
    }
    lines.push(Line::raw(""));
    lines.push(total_line("Total", state.config.features_total()));
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Space toggle · +/- weight · Enter select · Tab rules · S save",
        styles::dim(),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Configuration Features ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_rules(frame: &mut Frame, area: Rect, state: &RiskConfigState) {
    let rules = state.config.rules_for(state.selected_feature);
    let feature_name = state
        .config
        .features
        .iter()
        .find(|f| f.id == state.selected_feature)
        .map(|f| f.name)
        .unwrap_or("?");

    let mut lines = Vec::new();
    lines.push(header_line("Rule Name", "Weightage"));
    if rules.is_empty() {
        lines.push(Line::styled("No rules for this feature", styles::dim()));
    }
    for (idx, rule) in rules.iter().enumerate() {
        let checkbox = if rule.enabled { "[x]" } else { "[ ]" };
        let style = if idx == state.rule_cursor && state.pane == ConfigPane::Rules {
            styles::row_selected()
        } else if rule.enabled {
            Style::default()
        } else {
            styles::dim()
        };
        lines.push(Line::styled(
            format!("  {checkbox} {:<28} {:>3}%", rule.name, rule.weight),
            style,
        ));
    }
    lines.push(Line::raw(""));
    lines.push(total_line(
        "Total",
        state.config.rules_total_for(state.selected_feature),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Rules · {feature_name} "));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn header_line(left: &'static str, right: &'static str) -> Line<'static> {
    Line::styled(format!("  {left:<32} {right}"), styles::title())
}

fn total_line(label: &'static str, total: u32) -> Line<'static> {
    let style = if total == 100 { styles::ok() } else { styles::bad() };
    Line::from(vec![
        Span::raw(format!("  {label}: ")),
        Span::styled(format!("{total}%"), style),
        Span::styled(if total == 100 { "" } else { "  (must be 100)" }, styles::bad()),
    ])
}
