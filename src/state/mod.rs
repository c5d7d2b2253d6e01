//! Application state and transitions (pure).
//!
//! Everything under this module is plain data plus synchronous
//! transition functions. The terminal shell in `view` feeds key events
//! in and reads state out; the data source is only ever touched through
//! queries the state asks for.

pub mod app_state;
pub mod claim_modal;
pub mod dashboard;
pub mod fetch;
pub mod filters;
pub mod risk_config;
pub mod rules;

pub use app_state::{AppState, Screen, StatusKind, StatusMessage};
pub use claim_modal::{ClaimModalFocus, ClaimModalState};
pub use dashboard::DashboardState;
pub use fetch::{FetchTickets, RequestSeq};
pub use filters::{
    AuditFilterDraft, AuditFilterField, AuditFilters, FilterDraftError, RuleFilters,
};
pub use risk_config::{ConfigPane, RiskConfigState};
pub use rules::{RuleDateDraft, RuleDateField, RulesState};
