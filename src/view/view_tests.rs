use super::*;
use crate::config::KeyBindings;
use crate::model::UserRole;
use crate::state::{AppState, AuditFilters};
use crate::test_harness::{audit_page, demo_rules};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn app(role: UserRole) -> AppState {
    let mut state = AppState::new(role, 10, AuditFilters::default(), true);
    let (seq, _query) = state.dashboard.take_pending().unwrap();
    state.dashboard.apply_response(seq, audit_page(25, 10));
    state
}

fn press(state: &mut AppState, code: KeyCode) -> bool {
    press_with(state, code, KeyModifiers::NONE)
}

fn press_with(state: &mut AppState, code: KeyCode, modifiers: KeyModifiers) -> bool {
    let bindings = KeyBindings::default();
    handle_key(state, &bindings, KeyEvent::new(code, modifiers))
}

fn rendered(state: &AppState) -> String {
    let backend = TestBackend::new(140, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(frame, state)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

// ===== Rendering =====

#[test]
fn dashboard_renders_title_headers_and_rows() {
    let state = app(UserRole::RoAdmin);
    let text = rendered(&state);
    assert!(text.contains("Desk Audit Module - RO Admin"));
    assert!(text.contains("Claim Number"));
    assert!(text.contains("C100"));
    assert!(text.contains("Showing 1 to 10 of 25 entries"));
}

#[test]
fn default_hidden_columns_do_not_render() {
    let state = app(UserRole::RoAdmin);
    let text = rendered(&state);
    assert!(!text.contains("TAT Compliance"));
    assert!(text.contains("Hospital Name"));
}

#[test]
fn loading_state_renders_a_placeholder() {
    let mut state = app(UserRole::RoAdmin);
    state.dashboard.refresh();
    assert!(state.dashboard.loading);
    let text = rendered(&state);
    assert!(text.contains("Loading..."));
    assert!(!text.contains("C100"));
}

#[test]
fn empty_search_result_renders_no_matching_records() {
    let mut state = app(UserRole::RoAdmin);
    press(&mut state, KeyCode::Char('/'));
    for ch in "zzzz".chars() {
        press(&mut state, KeyCode::Char(ch));
    }
    let text = rendered(&state);
    assert!(text.contains("No matching records"));
}

#[test]
fn sort_indicator_shows_in_the_header() {
    let mut state = app(UserRole::RoAdmin);
    press(&mut state, KeyCode::Char('s'));
    let text = rendered(&state);
    assert!(text.contains("Claim Number ^"));
    press(&mut state, KeyCode::Char('s'));
    let text = rendered(&state);
    assert!(text.contains("Claim Number v"));
}

#[test]
fn help_overlay_renders_over_the_screen() {
    let mut state = app(UserRole::RoAdmin);
    press(&mut state, KeyCode::Char('?'));
    let text = rendered(&state);
    assert!(text.contains(" Help "));
    assert!(text.contains("cycle page size"));
}

#[test]
fn column_menu_lists_every_known_column() {
    let mut state = app(UserRole::RoAdmin);
    press(&mut state, KeyCode::Char('c'));
    let text = rendered(&state);
    assert!(text.contains(" Columns "));
    assert!(text.contains("(always)"));
    assert!(text.contains("[ ] TAT Compliance"));
}

#[test]
fn claim_modal_renders_findings_and_placeholder() {
    let mut state = app(UserRole::RoAdmin);
    press(&mut state, KeyCode::Enter);
    assert!(state.dashboard.modal.is_some());
    let text = rendered(&state);
    assert!(text.contains("Claim Details and Fraud Findings"));
    assert!(text.contains("Document Viewer"));
    assert!(text.contains("Yet to be implemented"));
    assert!(text.contains("Duplicate Claim Detected"));
}

#[test]
fn rules_screen_renders_rule_rows() {
    let mut state = app(UserRole::HoAdmin);
    press(&mut state, KeyCode::Char('2'));
    state.rules.set_rules(demo_rules());
    let text = rendered(&state);
    assert!(text.contains("Rule ID"));
    assert!(text.contains("R001"));
    assert!(text.contains("High Value Claims"));
}

#[test]
fn risk_config_screen_renders_totals() {
    let mut state = app(UserRole::HoAdmin);
    press(&mut state, KeyCode::Char('3'));
    let text = rendered(&state);
    assert!(text.contains("Configuration Features"));
    assert!(text.contains("Meta Data Analytics"));
    assert!(text.contains("(must be 100)"));
}

#[test]
fn status_line_renders_messages() {
    let mut state = app(UserRole::DeskAuditor);
    press(&mut state, KeyCode::Char('2'));
    let text = rendered(&state);
    assert!(text.contains("You don't have permission"));
}

#[test]
fn collapsed_sidebar_uses_initials() {
    let mut state = app(UserRole::RoAdmin);
    press(&mut state, KeyCode::Char('b'));
    assert!(!state.sidebar_expanded);
    let text = rendered(&state);
    assert!(!text.contains("Risk Management\n"));
    assert!(text.contains("RM"));
}

// ===== Key flow =====

#[test]
fn quit_keys_quit() {
    let mut state = app(UserRole::RoAdmin);
    assert!(press(&mut state, KeyCode::Char('q')));
    assert!(press_with(
        &mut state,
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    ));
}

#[test]
fn help_captures_keys_until_closed() {
    let mut state = app(UserRole::RoAdmin);
    press(&mut state, KeyCode::Char('?'));
    assert!(state.help_visible);
    assert!(!press(&mut state, KeyCode::Char('j')), "keys are swallowed");
    assert_eq!(state.dashboard.cursor, 0);
    press(&mut state, KeyCode::Esc);
    assert!(!state.help_visible);
}

#[test]
fn search_flow_narrows_then_keeps_or_clears() {
    let mut state = app(UserRole::RoAdmin);
    press(&mut state, KeyCode::Char('/'));
    assert!(state.dashboard.searching);
    for ch in "c10".chars() {
        press(&mut state, KeyCode::Char(ch));
    }
    assert_eq!(state.dashboard.view.search, "c10");
    press(&mut state, KeyCode::Enter);
    assert!(!state.dashboard.searching);
    assert_eq!(state.dashboard.view.search, "c10", "Enter keeps the query");

    press(&mut state, KeyCode::Char('/'));
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.dashboard.view.search, "", "Esc clears the query");
}

#[test]
fn filter_draft_flow_commits_on_enter() {
    let mut state = app(UserRole::RoAdmin);
    press(&mut state, KeyCode::Char('f'));
    assert!(state.dashboard.filter_draft.is_some());
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Char(' '));
    press(&mut state, KeyCode::Enter);
    assert!(state.dashboard.filter_draft.is_none());
    assert_eq!(
        state.dashboard.filters.trigger,
        crate::model::TriggerType::Manual
    );
    assert!(state.dashboard.take_pending().is_some(), "commit refetches");
}

#[test]
fn modal_captures_keys_and_closes_on_esc() {
    let mut state = app(UserRole::RoAdmin);
    press(&mut state, KeyCode::Enter);
    assert!(state.dashboard.modal.is_some());

    press(&mut state, KeyCode::Char('a'));
    assert_eq!(
        state.status.as_ref().unwrap().text,
        "Finding Accepted"
    );
    assert_eq!(state.dashboard.cursor, 0, "screen behind does not move");

    press(&mut state, KeyCode::Esc);
    assert!(state.dashboard.modal.is_none());
}

#[test]
fn rules_confirm_dialog_gates_the_toggle() {
    let mut state = app(UserRole::HoAdmin);
    press(&mut state, KeyCode::Char('2'));
    state.rules.set_rules(demo_rules());
    let before = state.rules.rule_under_cursor().unwrap().status;

    press(&mut state, KeyCode::Char('t'));
    assert!(state.rules.confirm_toggle.is_some());
    press(&mut state, KeyCode::Char('n'));
    assert_eq!(state.rules.rule_under_cursor().unwrap().status, before);

    press(&mut state, KeyCode::Char('t'));
    press(&mut state, KeyCode::Char('y'));
    assert_eq!(state.rules.rule_under_cursor().unwrap().status, !before);
}

#[test]
fn risk_config_save_surfaces_validation_errors() {
    let mut state = app(UserRole::HoAdmin);
    press(&mut state, KeyCode::Char('3'));
    press_with(&mut state, KeyCode::Char('S'), KeyModifiers::SHIFT);
    let status = state.status.as_ref().unwrap();
    assert!(status.text.contains("must be 100"));
}

#[test]
fn desk_auditor_cannot_reach_risk_screens_by_key() {
    let mut state = app(UserRole::DeskAuditor);
    press(&mut state, KeyCode::Char('3'));
    assert_eq!(state.screen, crate::state::Screen::Dashboard);
}

#[test]
fn dashboard_ignores_rules_only_actions() {
    let mut state = app(UserRole::RoAdmin);
    press(&mut state, KeyCode::Char(' '));
    press(&mut state, KeyCode::Char('t'));
    assert!(state.status.is_none());
    assert!(state.dashboard.modal.is_none());
}

#[test]
fn hide_all_keeps_the_anchor_visible_in_render() {
    let mut state = app(UserRole::RoAdmin);
    press_with(&mut state, KeyCode::Char('v'), KeyModifiers::CONTROL);
    let text = rendered(&state);
    assert!(text.contains("Claim Number"));
    assert!(!text.contains("Hospital Name"));
}

#[test]
fn stale_modal_key_handling_requires_an_open_modal() {
    let mut state = app(UserRole::RoAdmin);
    // 'a' is SelectAll on the dashboard and must not panic or open
    // anything when no modal is up.
    press(&mut state, KeyCode::Char('a'));
    assert!(state.dashboard.modal.is_none());
}
