//! Action enum: user intents flowing from components to the App.

/// Focusable panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    InputPanel,
    ResultPane,
}

/// All actions that can flow through the system.
/// Components produce Actions; the App dispatches them.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ── Input ────────────────────────────────────────────────────────────────
    EditText(String),
    EditUrl(String),
    ToggleMode,
    Submit,
    Clear,
    AnalyzeAnother,

    // ── Navigation ───────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    FocusPane(ComponentId),
    ScrollUp(usize),
    ScrollDown(usize),
    ScrollTop,
    ScrollBottom,

    // ── Appearance ───────────────────────────────────────────────────────────
    ToggleTheme,
    CycleThemeStyle,

    // ── System ───────────────────────────────────────────────────────────────
    Quit,
}
