//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// `config::KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Screens
    /// Switch to the desk-audit dashboard. Default: 1
    ScreenDashboard,
    /// Switch to the risk-rules screen (admin roles). Default: 2
    ScreenRules,
    /// Switch to the risk-configuration screen (admin roles). Default: 3
    ScreenRiskConfig,

    // Cursor / column selection
    /// Move the row cursor up. Default: k/↑
    CursorUp,
    /// Move the row cursor down. Default: j/↓
    CursorDown,
    /// Select the previous visible column. Default: h/←
    ColumnLeft,
    /// Select the next visible column. Default: l/→
    ColumnRight,

    // Pagination
    /// Go to the next page. Default: n/Page Down
    NextPage,
    /// Go to the previous page. Default: p/Page Up
    PrevPage,
    /// Cycle the page size through 10/20/50/100. Default: z
    CyclePageSize,

    // Table controls
    /// Cycle the sort on the selected column. Default: s
    SortSelected,
    /// Toggle visibility of the selected column. Default: v
    ToggleColumn,
    /// Make every column visible. Default: V/Shift+v
    ShowAllColumns,
    /// Hide every column except the anchor. Default: Ctrl+v
    HideAllColumns,
    /// Open the column-visibility menu. Default: c
    ColumnMenu,
    /// Activate the search box. Default: /
    StartSearch,
    /// Edit the screen's filters. Default: f
    EditFilters,

    // Selection and row actions
    /// Toggle selection of the current row. Default: Space
    Select,
    /// Select or clear every row on the page. Default: a
    SelectAll,
    /// Toggle the active status of the current rule. Default: t
    ToggleStatus,
    /// Open details for the current row. Default: Enter
    OpenDetails,

    // Risk configuration
    /// Increase the weight under the cursor. Default: +/=
    WeightUp,
    /// Decrease the weight under the cursor. Default: -
    WeightDown,
    /// Switch between the features and rules panes. Default: Tab
    SwitchPane,
    /// Save the weighted configuration. Default: S/Shift+s
    SaveConfig,

    // Application
    /// Refetch from the data source. Default: r
    Refresh,
    /// Toggle the navigation sidebar. Default: b
    ToggleSidebar,
    /// Dismiss the active popup or input. Default: Esc
    Cancel,
    /// Show the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
