//! End-to-end flows over the dashboard state and a scripted backend.
//!
//! These tests drive the same path the shell drives: queue a query,
//! answer it through the Backend trait, apply the response through the
//! sequence guard, and look at what the engine derives.

use crate::model::column::audit as col;
use crate::model::{InputError, RiskRule, TriggerType, UserRole};
use crate::source::{AuditPage, AuditQuery, Backend, JsonlStore};
use crate::state::{AppState, AuditFilters, Screen, StatusKind};
use crate::table::SortDirection;

/// Backend whose audit queries can be told to fail.
struct ScriptedBackend {
    store: JsonlStore,
    fail_audits: bool,
}

impl ScriptedBackend {
    fn demo() -> Self {
        Self {
            store: JsonlStore::demo(),
            fail_audits: false,
        }
    }
}

impl Backend for ScriptedBackend {
    fn fetch_audits(&mut self, query: &AuditQuery) -> Result<AuditPage, InputError> {
        if self.fail_audits {
            return Err(InputError::NoInput);
        }
        self.store.fetch_audits(query)
    }

    fn fetch_rules(&mut self) -> Result<Vec<RiskRule>, InputError> {
        self.store.fetch_rules()
    }
}

/// Drive the dashboard's queued fetch against a backend, the way the
/// shell's pump does.
fn pump(state: &mut AppState, backend: &mut ScriptedBackend) {
    if let Some((seq, query)) = state.dashboard.take_pending() {
        match backend.fetch_audits(&query) {
            Ok(page) => {
                state.dashboard.apply_response(seq, page);
            }
            Err(err) => {
                state.dashboard.apply_error(seq);
                state.set_status(StatusKind::Error, err.to_string());
            }
        }
    }
}

fn booted() -> (AppState, ScriptedBackend) {
    let mut state = AppState::new(UserRole::RoAdmin, 10, AuditFilters::default(), true);
    let mut backend = ScriptedBackend::demo();
    pump(&mut state, &mut backend);
    (state, backend)
}

#[test]
fn boot_fetches_the_first_page_of_demo_audits() {
    let (state, _) = booted();
    assert!(!state.dashboard.loading);
    assert!(!state.dashboard.rows().is_empty());
    // Default trigger filter is Ai; the demo Manual records are not in
    // the page and the total counts Ai records only.
    assert!(state
        .dashboard
        .rows()
        .iter()
        .all(|row| row.cell(col::TRIGGER) == Some("Ai")));
    assert_eq!(state.dashboard.page.total(), 9);
}

#[test]
fn trigger_filter_round_trip_through_the_store() {
    let (mut state, mut backend) = booted();
    state.dashboard.start_filter_edit();
    let draft = state.dashboard.filter_draft.as_mut().unwrap();
    draft.field = crate::state::AuditFilterField::Trigger;
    draft.cycle_value();
    state.dashboard.commit_filter_draft().unwrap();
    pump(&mut state, &mut backend);

    assert_eq!(state.dashboard.filters.trigger, TriggerType::Manual);
    assert_eq!(state.dashboard.page.total(), 3);
    assert!(state
        .dashboard
        .rows()
        .iter()
        .all(|row| row.cell(col::TRIGGER) == Some("Manual")));
}

#[test]
fn date_filter_narrows_the_total() {
    let (mut state, mut backend) = booted();
    state.dashboard.start_filter_edit();
    {
        let draft = state.dashboard.filter_draft.as_mut().unwrap();
        draft.start_input = "2023-06-01".to_string();
        draft.end_input = "2023-08-31".to_string();
    }
    state.dashboard.commit_filter_draft().unwrap();
    pump(&mut state, &mut backend);
    // Demo Ai audits in June..August: C251, C266 is Manual, C270.
    assert_eq!(state.dashboard.page.total(), 2);
}

#[test]
fn paging_walks_the_filtered_set() {
    let (mut state, mut backend) = booted();
    state.dashboard.cycle_page_size();
    pump(&mut state, &mut backend);
    // 20 per page swallows all 9 records; shrink instead.
    state.dashboard.page.set_page_size(4);
    state.dashboard.refresh();
    pump(&mut state, &mut backend);
    assert_eq!(state.dashboard.rows().len(), 4);

    state.dashboard.next_page();
    pump(&mut state, &mut backend);
    assert_eq!(state.dashboard.page.page(), 2);
    assert_eq!(state.dashboard.rows().len(), 4);

    state.dashboard.next_page();
    pump(&mut state, &mut backend);
    assert_eq!(state.dashboard.rows().len(), 1, "last partial page");
}

#[test]
fn failed_fetch_keeps_rows_and_reports() {
    let (mut state, mut backend) = booted();
    let rows_before = state.dashboard.rows().len();

    backend.fail_audits = true;
    state.dashboard.refresh();
    pump(&mut state, &mut backend);

    assert!(!state.dashboard.loading);
    assert_eq!(state.dashboard.rows().len(), rows_before);
    assert_eq!(state.status.as_ref().unwrap().kind, StatusKind::Error);
}

#[test]
fn local_search_and_sort_compose_over_the_fetched_page() {
    let (mut state, _) = booted();
    for ch in "hospital".chars() {
        state.dashboard.search_push(ch);
    }
    state.dashboard.view.sort.cycle(col::HOSPITAL_NAME);
    assert_eq!(
        state.dashboard.view.sort.direction_for(col::HOSPITAL_NAME),
        Some(SortDirection::Ascending)
    );
    let order = state.dashboard.derived_order();
    let names: Vec<&str> = order
        .iter()
        .map(|&idx| state.dashboard.rows()[idx].cell(col::HOSPITAL_NAME).unwrap())
        .collect();
    let mut sorted = names.clone();
    sorted.sort_by_key(|name| name.to_lowercase());
    assert_eq!(names, sorted);
}

#[test]
fn rules_screen_loads_once_and_filters_locally() {
    let (mut state, mut backend) = booted();
    state.switch_screen(Screen::RiskManagement);
    // The shell pump fetches rules when the screen is visible and
    // loading is set.
    if state.screen == Screen::RiskManagement && state.rules.loading {
        let rules = backend.fetch_rules().unwrap();
        state.rules.set_rules(rules);
    }
    assert_eq!(state.rules.page.total(), 12);

    state.rules.cycle_status_filter();
    let active = state.rules.page.total();
    state.rules.cycle_status_filter();
    let inactive = state.rules.page.total();
    assert_eq!(active + inactive, 12);
}
