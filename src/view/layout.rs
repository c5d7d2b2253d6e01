//! Screen geometry.
//!
//! The sidebar width comes from explicit application state; nothing in
//! the renderer ever infers layout by inspecting what was drawn.

use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar width when expanded.
pub const SIDEBAR_WIDTH_EXPANDED: u16 = 22;

/// Sidebar width when collapsed.
pub const SIDEBAR_WIDTH_COLLAPSED: u16 = 4;

/// The rectangles of one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Navigation sidebar.
    pub sidebar: Rect,
    /// Screen title line.
    pub header: Rect,
    /// Filter bar (three lines, boxed).
    pub filter_bar: Rect,
    /// Table or configuration body.
    pub body: Rect,
    /// Pager line.
    pub pager: Rect,
    /// Status line.
    pub status: Rect,
}

/// Split the terminal area.
pub fn compute(area: Rect, sidebar_expanded: bool) -> ScreenLayout {
    let sidebar_width = if sidebar_expanded {
        SIDEBAR_WIDTH_EXPANDED
    } else {
        SIDEBAR_WIDTH_COLLAPSED
    };
    let columns = Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(area);
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(columns[1]);
    ScreenLayout {
        sidebar: columns[0],
        header: rows[0],
        filter_bar: rows[1],
        body: rows[2],
        pager: rows[3],
        status: rows[4],
    }
}
