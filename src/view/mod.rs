//! TUI rendering and terminal management (impure shell).

mod claim_modal;
mod column_menu;
mod filter_bar;
mod help;
mod layout;
mod pager;
mod risk_config;
mod sidebar;
mod styles;
mod table;

pub use claim_modal::render_claim_modal;
pub use column_menu::render_column_menu;
pub use help::render_help_overlay;
pub use layout::{compute, ScreenLayout};
pub use pager::{pager_line, pager_text, render_pager};
pub use table::{render_table, TableParams};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::KeyAction;
use crate::source::Backend as DataBackend;
use crate::state::dashboard::ColumnMenuState;
use crate::state::{AppState, ClaimModalFocus, Screen, StatusKind};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::{Frame, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Data-source error during startup.
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),
}

/// Main TUI application: terminal, state, data source, key bindings.
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: AppState,
    backend: Box<dyn DataBackend>,
    bindings: KeyBindings,
}

/// Run the console against a data source until the user quits.
pub fn run_with_backend(
    backend: Box<dyn DataBackend>,
    config: ResolvedConfig,
) -> Result<(), TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let state = AppState::new(
        config.role,
        config.page_size,
        config.filters,
        config.sidebar_expanded,
    );
    info!(role = %config.role, "Starting console");

    let mut app = TuiApp {
        terminal,
        state,
        backend,
        bindings: KeyBindings::default(),
    };
    let result = app.run();

    // Always restore the terminal, even when the loop failed.
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);
    result
}

impl TuiApp {
    /// The main event loop. Returns when the user quits.
    fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        loop {
            self.pump();
            self.terminal.draw(|frame| render(frame, &self.state))?;

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if handle_key(&mut self.state, &self.bindings, key) {
                            return Ok(());
                        }
                    }
                    // Resize repaints on the next loop iteration.
                    _ => {}
                }
            }
        }
    }

    /// Dispatch any queued data-source work. Synchronous, but routed
    /// through the sequence guard so the state logic stays honest about
    /// out-of-order completions.
    fn pump(&mut self) {
        if let Some((seq, query)) = self.state.dashboard.take_pending() {
            match self.backend.fetch_audits(&query) {
                Ok(page) => {
                    self.state.dashboard.apply_response(seq, page);
                }
                Err(err) => {
                    self.state.dashboard.apply_error(seq);
                    self.state.set_status(StatusKind::Error, err.to_string());
                }
            }
        }

        if self.state.screen == Screen::RiskManagement && self.state.rules.loading {
            match self.backend.fetch_rules() {
                Ok(rules) => self.state.rules.set_rules(rules),
                Err(err) => {
                    self.state.rules.loading = false;
                    self.state.set_status(StatusKind::Error, err.to_string());
                }
            }
        }
    }
}

// ===== Key handling =====

/// Handle one key press. Returns true when the app should quit.
///
/// Contexts stack: text editors (remarks, filter dates, search) capture
/// printable keys before the binding map is consulted, popups capture
/// everything while open.
pub fn handle_key(state: &mut AppState, bindings: &KeyBindings, key: KeyEvent) -> bool {
    // Ctrl+C always quits, even from inside an editor.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if state.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            state.help_visible = false;
        }
        return false;
    }

    if state.dashboard.modal.is_some() {
        handle_modal_key(state, key);
        return false;
    }

    if state.screen == Screen::Dashboard && state.dashboard.column_menu.is_some() {
        handle_column_menu_key(state, key, Screen::Dashboard);
        return false;
    }
    if state.screen == Screen::RiskManagement && state.rules.column_menu.is_some() {
        handle_column_menu_key(state, key, Screen::RiskManagement);
        return false;
    }

    if state.rules.confirm_toggle.is_some() && state.screen == Screen::RiskManagement {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if state.rules.confirm_status_toggle().is_some() {
                    state.set_status(StatusKind::Success, "Rule status updated");
                }
            }
            KeyCode::Char('n') | KeyCode::Esc => state.rules.cancel_status_toggle(),
            _ => {}
        }
        return false;
    }

    if state.screen == Screen::Dashboard && state.dashboard.filter_draft.is_some() {
        handle_filter_draft_key(state, key);
        return false;
    }

    if state.screen == Screen::RiskManagement && state.rules.date_draft.is_some() {
        handle_rule_date_key(state, key);
        return false;
    }

    if screen_is_searching(state) {
        handle_search_key(state, key);
        return false;
    }

    // Screen-specific raw keys that are not worth a binding.
    if state.screen == Screen::RiskManagement {
        match key.code {
            KeyCode::F(n @ 1..=3) => {
                state.rules.cycle_category_filter(n as usize);
                return false;
            }
            KeyCode::Char('x') => {
                state.rules.reset_filters();
                return false;
            }
            KeyCode::Char('e') => {
                state.rules.start_date_edit();
                return false;
            }
            _ => {}
        }
    }

    let Some(action) = bindings.get(key) else {
        return false;
    };

    match action {
        KeyAction::Quit => return true,
        KeyAction::Help => state.help_visible = true,
        KeyAction::ToggleSidebar => state.sidebar_expanded = !state.sidebar_expanded,
        KeyAction::ScreenDashboard => state.switch_screen(Screen::Dashboard),
        KeyAction::ScreenRules => state.switch_screen(Screen::RiskManagement),
        KeyAction::ScreenRiskConfig => state.switch_screen(Screen::RiskConfiguration),
        KeyAction::Cancel => state.clear_status(),
        _ => match state.screen {
            Screen::Dashboard => handle_dashboard_action(state, action),
            Screen::RiskManagement => handle_rules_action(state, action),
            Screen::RiskConfiguration => handle_risk_config_action(state, action),
        },
    }
    false
}

fn screen_is_searching(state: &AppState) -> bool {
    match state.screen {
        Screen::Dashboard => state.dashboard.searching,
        Screen::RiskManagement => state.rules.searching,
        Screen::RiskConfiguration => false,
    }
}

fn handle_search_key(state: &mut AppState, key: KeyEvent) {
    let dashboard = state.screen == Screen::Dashboard;
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if dashboard {
                state.dashboard.search_push(ch);
            } else {
                state.rules.search_push(ch);
            }
        }
        KeyCode::Backspace => {
            if dashboard {
                state.dashboard.search_backspace();
            } else {
                state.rules.search_backspace();
            }
        }
        KeyCode::Enter => {
            if dashboard {
                state.dashboard.searching = false;
            } else {
                state.rules.searching = false;
            }
        }
        KeyCode::Esc => {
            if dashboard {
                state.dashboard.search_cancel();
            } else {
                state.rules.search_cancel();
            }
        }
        _ => {}
    }
}

fn handle_filter_draft_key(state: &mut AppState, key: KeyEvent) {
    let dashboard = &mut state.dashboard;
    let Some(draft) = dashboard.filter_draft.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('j') | KeyCode::Char('k') => draft.cycle_value(),
        KeyCode::Char(ch) => draft.push_char(ch),
        KeyCode::Backspace => draft.backspace(),
        KeyCode::Tab | KeyCode::Right => draft.field = draft.field.next(),
        KeyCode::BackTab | KeyCode::Left => draft.field = draft.field.prev(),
        KeyCode::Enter => {
            if let Err(err) = dashboard.commit_filter_draft() {
                state.set_status(StatusKind::Error, err.to_string());
            }
        }
        KeyCode::Esc => dashboard.cancel_filter_edit(),
        _ => {}
    }
}

fn handle_rule_date_key(state: &mut AppState, key: KeyEvent) {
    let rules = &mut state.rules;
    let Some(draft) = rules.date_draft.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            draft.field = draft.field.toggled();
        }
        KeyCode::Char(ch) => draft.push_char(ch),
        KeyCode::Backspace => draft.backspace(),
        KeyCode::Enter => {
            if let Err(err) = rules.commit_date_draft() {
                state.set_status(StatusKind::Error, err.to_string());
            } else {
                state.set_status(StatusKind::Success, "Rule dates updated");
            }
        }
        KeyCode::Esc => rules.cancel_date_edit(),
        _ => {}
    }
}

fn handle_column_menu_key(state: &mut AppState, key: KeyEvent, screen: Screen) {
    // Both table screens share the menu; pick the right spec and state.
    let (spec_len, menu, view) = match screen {
        Screen::Dashboard => {
            let len = state.dashboard.spec().columns().len();
            (
                len,
                &mut state.dashboard.column_menu,
                &mut state.dashboard.view,
            )
        }
        _ => {
            let len = state.rules.spec().columns().len();
            (len, &mut state.rules.column_menu, &mut state.rules.view)
        }
    };
    let Some(menu_state) = menu.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            menu_state.cursor = (menu_state.cursor + 1).min(spec_len.saturating_sub(1));
        }
        KeyCode::Char('k') | KeyCode::Up => {
            menu_state.cursor = menu_state.cursor.saturating_sub(1);
        }
        KeyCode::Char(' ') => {
            let cursor = menu_state.cursor;
            let key = match screen {
                Screen::Dashboard => state.dashboard.spec().columns().get(cursor).map(|c| c.key),
                _ => state.rules.spec().columns().get(cursor).map(|c| c.key),
            };
            if let Some(key) = key {
                match screen {
                    Screen::Dashboard => state.dashboard.view.visibility.toggle(key),
                    _ => state.rules.view.visibility.toggle(key),
                }
            }
        }
        KeyCode::Char('a') => view.visibility.show_all(),
        KeyCode::Char('x') => view.visibility.hide_all(),
        KeyCode::Esc | KeyCode::Char('c') => match screen {
            Screen::Dashboard => state.dashboard.column_menu = None,
            _ => state.rules.column_menu = None,
        },
        _ => {}
    }
}

fn handle_modal_key(state: &mut AppState, key: KeyEvent) {
    let Some(modal) = state.dashboard.modal.as_mut() else {
        return;
    };
    match modal.focus.clone() {
        ClaimModalFocus::Remarks { .. } => match key.code {
            KeyCode::Enter => {
                modal.save_remarks();
                state.set_status(StatusKind::Success, "Remarks Saved");
            }
            KeyCode::Esc => {
                modal.cancel_inner();
            }
            KeyCode::Backspace => modal.remarks_backspace(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                modal.remarks_push(ch)
            }
            _ => {}
        },
        ClaimModalFocus::Picker { .. } => match key.code {
            KeyCode::Char('j') | KeyCode::Down => modal.picker_move(1),
            KeyCode::Char('k') | KeyCode::Up => modal.picker_move(-1),
            KeyCode::Enter => {
                if modal.picker_confirm().is_some() {
                    state.set_status(StatusKind::Success, "Finding Added");
                }
            }
            KeyCode::Esc => {
                modal.cancel_inner();
            }
            _ => {}
        },
        ClaimModalFocus::Findings => match key.code {
            KeyCode::Char('j') | KeyCode::Down => modal.cursor_down(),
            KeyCode::Char('k') | KeyCode::Up => modal.cursor_up(),
            KeyCode::Char('a') => {
                if modal.accept_current().is_some() {
                    state.set_status(StatusKind::Success, "Finding Accepted");
                }
            }
            KeyCode::Char('d') => {
                if modal.decline_current().is_some() {
                    state.set_status(StatusKind::Error, "Finding Declined");
                }
            }
            KeyCode::Char('m') => modal.open_remarks(),
            KeyCode::Char('+') | KeyCode::Char('=') => modal.open_picker(),
            KeyCode::Esc | KeyCode::Char('q') => state.dashboard.modal = None,
            _ => {}
        },
    }
}

fn handle_dashboard_action(state: &mut AppState, action: KeyAction) {
    let dashboard = &mut state.dashboard;
    match action {
        KeyAction::CursorUp => dashboard.cursor_up(),
        KeyAction::CursorDown => dashboard.cursor_down(),
        KeyAction::ColumnLeft => dashboard.column_left(),
        KeyAction::ColumnRight => dashboard.column_right(),
        KeyAction::NextPage => dashboard.next_page(),
        KeyAction::PrevPage => dashboard.prev_page(),
        KeyAction::CyclePageSize => dashboard.cycle_page_size(),
        KeyAction::SortSelected => dashboard.sort_selected(),
        KeyAction::ToggleColumn => dashboard.toggle_selected_column(),
        KeyAction::ShowAllColumns => dashboard.show_all_columns(),
        KeyAction::HideAllColumns => dashboard.hide_all_columns(),
        KeyAction::ColumnMenu => dashboard.column_menu = Some(ColumnMenuState::default()),
        KeyAction::StartSearch => dashboard.searching = true,
        KeyAction::EditFilters => dashboard.start_filter_edit(),
        KeyAction::OpenDetails => dashboard.open_details(),
        KeyAction::Refresh => dashboard.refresh(),
        _ => {}
    }
}

fn handle_rules_action(state: &mut AppState, action: KeyAction) {
    let rules = &mut state.rules;
    match action {
        KeyAction::CursorUp => rules.cursor_up(),
        KeyAction::CursorDown => rules.cursor_down(),
        KeyAction::ColumnLeft => rules.column_left(),
        KeyAction::ColumnRight => rules.column_right(),
        KeyAction::NextPage => rules.next_page(),
        KeyAction::PrevPage => rules.prev_page(),
        KeyAction::CyclePageSize => rules.cycle_page_size(),
        KeyAction::SortSelected => rules.sort_selected(),
        KeyAction::ToggleColumn => rules.toggle_selected_column(),
        KeyAction::ShowAllColumns => rules.view.visibility.show_all(),
        KeyAction::HideAllColumns => rules.view.visibility.hide_all(),
        KeyAction::ColumnMenu => rules.column_menu = Some(ColumnMenuState::default()),
        KeyAction::StartSearch => rules.searching = true,
        KeyAction::EditFilters => rules.cycle_status_filter(),
        KeyAction::Select => rules.toggle_select_current(),
        KeyAction::SelectAll => rules.toggle_select_all_on_page(),
        KeyAction::ToggleStatus => rules.request_status_toggle(),
        KeyAction::Refresh => rules.refresh(),
        _ => {}
    }
}

fn handle_risk_config_action(state: &mut AppState, action: KeyAction) {
    match action {
        KeyAction::CursorUp => state.risk.cursor_up(),
        KeyAction::CursorDown => state.risk.cursor_down(),
        KeyAction::SwitchPane => state.risk.switch_pane(),
        KeyAction::Select => state.risk.toggle_current(),
        KeyAction::WeightUp => state.risk.nudge_current(1),
        KeyAction::WeightDown => state.risk.nudge_current(-1),
        KeyAction::OpenDetails => state.risk.select_feature_under_cursor(),
        KeyAction::SaveConfig => match state.risk.save() {
            Ok(()) => state.set_status(StatusKind::Success, "Configuration saved successfully!"),
            Err(err) => state.set_status(StatusKind::Error, err.to_string()),
        },
        _ => {}
    }
}

// ===== Rendering =====

/// Render one frame of the whole console.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let layout = compute(area, state.sidebar_expanded);

    sidebar::render_sidebar(frame, layout.sidebar, state.screen, state.role, state.sidebar_expanded);
    frame.render_widget(
        Paragraph::new(Line::styled(state.screen_title(), styles::title())),
        layout.header,
    );

    match state.screen {
        Screen::Dashboard => render_dashboard(frame, &layout, state),
        Screen::RiskManagement => render_rules_screen(frame, &layout, state),
        Screen::RiskConfiguration => {
            risk_config::render_risk_config(frame, layout.body, &state.risk)
        }
    }

    render_status(frame, layout.status, state);

    // Overlays, innermost last.
    if state.screen == Screen::Dashboard {
        if let Some(menu) = &state.dashboard.column_menu {
            render_column_menu(
                frame,
                layout.body,
                state.dashboard.spec(),
                &state.dashboard.view.visibility,
                menu,
            );
        }
        if let Some(modal) = &state.dashboard.modal {
            render_claim_modal(frame, area, modal);
        }
    }
    if state.screen == Screen::RiskManagement {
        if let Some(menu) = &state.rules.column_menu {
            render_column_menu(
                frame,
                layout.body,
                state.rules.spec(),
                &state.rules.view.visibility,
                menu,
            );
        }
        if state.rules.confirm_toggle.is_some() {
            render_confirm_dialog(frame, layout.body);
        }
        if let Some(draft) = &state.rules.date_draft {
            render_rule_date_editor(frame, layout.body, draft);
        }
    }
    if state.help_visible {
        render_help_overlay(frame, area);
    }
}

fn render_dashboard(frame: &mut Frame, layout: &ScreenLayout, state: &AppState) {
    filter_bar::render_audit_filter_bar(
        frame,
        layout.filter_bar,
        &state.dashboard.filters,
        state.dashboard.filter_draft.as_ref(),
        &state.dashboard.view.search,
        state.dashboard.searching,
    );

    let order = state.dashboard.derived_order();
    let params = TableParams {
        spec: state.dashboard.spec(),
        view: &state.dashboard.view,
        rows: state.dashboard.rows(),
        order: &order,
        cursor: state.dashboard.cursor,
        selected_column: state.dashboard.selected_column,
        loading: state.dashboard.loading,
        marked: None,
    };
    render_table(frame, layout.body, &params);
    render_pager(frame, layout.pager, &state.dashboard.page);
}

fn render_rules_screen(frame: &mut Frame, layout: &ScreenLayout, state: &AppState) {
    filter_bar::render_rule_filter_bar(
        frame,
        layout.filter_bar,
        &state.rules.filters,
        &state.rules.view.search,
        state.rules.searching,
    );

    let order = state.rules.page_order();
    let marked: std::collections::HashSet<String> = state
        .rules
        .selected
        .iter()
        .map(|id| id.as_str().to_string())
        .collect();
    let params = TableParams {
        spec: state.rules.spec(),
        view: &state.rules.view,
        rows: state.rules.rows(),
        order: &order,
        cursor: state.rules.cursor,
        selected_column: state.rules.selected_column,
        loading: state.rules.loading,
        marked: Some(&marked),
    };
    render_table(frame, layout.body, &params);
    render_pager(frame, layout.pager, &state.rules.page);
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match &state.status {
        Some(status) => Line::styled(status.text.clone(), styles::status(status.kind)),
        None => Line::styled("? help · q quit", styles::dim()),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_rule_date_editor(frame: &mut Frame, area: Rect, draft: &crate::state::RuleDateDraft) {
    use crate::state::RuleDateField;

    let popup = column_menu::centered(area, 44, 5);
    frame.render_widget(Clear, popup);
    let focus = |field: RuleDateField| -> Style {
        if draft.field == field {
            styles::field_focused()
        } else {
            Style::default()
        }
    };
    let lines = vec![
        Line::from(vec![
            ratatui::text::Span::raw("Start "),
            ratatui::text::Span::styled(draft.start_input.clone(), focus(RuleDateField::Start)),
            ratatui::text::Span::raw("  End "),
            ratatui::text::Span::styled(draft.end_input.clone(), focus(RuleDateField::End)),
        ]),
        Line::styled("Tab switch · Enter apply · Esc cancel", styles::dim()),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Rule Dates · {} ", draft.id));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn render_confirm_dialog(frame: &mut Frame, area: Rect) {
    let popup = column_menu::centered(area, 40, 5);
    frame.render_widget(Clear, popup);
    let lines = vec![
        Line::raw("Are you sure you want to change the"),
        Line::raw("status of this rule?"),
        Line::styled("y confirm · n cancel", styles::dim()),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confirm Status Change ")
        .style(Style::default());
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod view_tests;
