//! Root application state.
//!
//! Pure data in the Elm style: key handling produces synchronous
//! transitions on this tree, and the shell renders whatever is here.

use crate::model::UserRole;
use crate::state::dashboard::DashboardState;
use crate::state::filters::AuditFilters;
use crate::state::risk_config::RiskConfigState;
use crate::state::rules::RulesState;

/// The screens of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Desk-audit table.
    Dashboard,
    /// Risk-rules table.
    RiskManagement,
    /// Weighted feature/rule configuration.
    RiskConfiguration,
}

impl Screen {
    /// Sidebar label.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Desk Audit",
            Self::RiskManagement => "Risk Management",
            Self::RiskConfiguration => "Risk Configuration",
        }
    }
}

/// Severity of a status-line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Neutral information.
    Info,
    /// Something worked.
    Success,
    /// Something was refused or failed.
    Error,
}

/// One transient status-line message. Replaces toast notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// The text shown.
    pub text: String,
    /// Severity, which picks the style.
    pub kind: StatusKind,
}

/// Root state of the application.
#[derive(Debug)]
pub struct AppState {
    /// Role of the signed-in user.
    pub role: UserRole,
    /// Active screen.
    pub screen: Screen,
    /// Desk-audit dashboard state.
    pub dashboard: DashboardState,
    /// Risk-rules screen state.
    pub rules: RulesState,
    /// Risk-configuration screen state.
    pub risk: RiskConfigState,
    /// Whether the sidebar renders expanded. Explicit state, toggled by
    /// a key binding and passed down to the renderer.
    pub sidebar_expanded: bool,
    /// Whether the help overlay is up.
    pub help_visible: bool,
    /// Latest status-line message, if any.
    pub status: Option<StatusMessage>,
}

impl AppState {
    /// Build the initial state for a role. The dashboard queues its
    /// first fetch immediately; the rules screen loads on first visit.
    pub fn new(role: UserRole, page_size: usize, filters: AuditFilters, sidebar: bool) -> Self {
        Self {
            role,
            screen: Screen::Dashboard,
            dashboard: DashboardState::new(role, page_size, filters),
            rules: RulesState::new(page_size),
            risk: RiskConfigState::new(),
            sidebar_expanded: sidebar,
            help_visible: false,
            status: None,
        }
    }

    /// Switch screens, enforcing the role gate: only admins may open
    /// the risk screens. A denied switch leaves the screen alone and
    /// raises an error status.
    pub fn switch_screen(&mut self, screen: Screen) {
        let gated = matches!(screen, Screen::RiskManagement | Screen::RiskConfiguration);
        if gated && !self.role.is_admin() {
            self.set_status(
                StatusKind::Error,
                format!("You don't have permission to access {}", screen.title()),
            );
            return;
        }
        self.screen = screen;
    }

    /// Replace the status-line message.
    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    /// Drop the status-line message.
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Title of the active screen, role-aware on the dashboard.
    pub fn screen_title(&self) -> &'static str {
        match self.screen {
            Screen::Dashboard => self.role.dashboard_title(),
            Screen::RiskManagement => "Risk Management",
            Screen::RiskConfiguration => "Risk Configuration",
        }
    }
}
