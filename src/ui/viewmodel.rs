//! View model types representing renderable UI state.
//!
//! Immutable view models computed from application state. They contain no
//! business logic, only display-ready data: truncated cell text, checkbox
//! marks resolved from the identity-keyed selection, sort indicators, and the
//! mode-dependent chrome (search bar, entry form, empty state).

use crate::table::{SelectAllStatus, SortDirection};

/// Complete view model for one frame.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Visible rows inside the current window, in display order.
    pub rows: Vec<RowItem>,

    /// Cursor position relative to the window start.
    pub cursor_index: usize,

    /// Header information (title with counts).
    pub header: HeaderInfo,

    /// Column headings with sort indicators, in display order.
    pub columns: Vec<ColumnHeading>,

    /// Tri-state status driving the select-all checkbox glyph.
    pub select_all: SelectAllStatus,

    /// Footer keybinding hints for the active mode.
    pub footer: FooterInfo,

    /// Message shown when no rows can be displayed.
    pub empty_state: Option<EmptyState>,

    /// Search bar contents while search mode is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Entry form contents while form mode is active.
    pub form: Option<FormInfo>,
}

/// Display information for a single review row.
#[derive(Debug, Clone)]
pub struct RowItem {
    /// Restaurant name, truncated to the NAME column.
    pub name: String,

    /// Rating rendered as text.
    pub rating: String,

    /// Review body, truncated to the REVIEW column.
    pub comment: String,

    /// Human-readable age ("just now", "5m ago", ...).
    pub added: String,

    /// Whether the cursor is on this row.
    pub is_cursor: bool,

    /// Whether this row's checkbox is checked.
    pub is_selected: bool,
}

/// One sortable column heading.
#[derive(Debug, Clone)]
pub struct ColumnHeading {
    /// Heading label ("NAME", "RATING", "REVIEW").
    pub label: &'static str,

    /// Sort direction to indicate, when this column is the active sort.
    pub indicator: Option<SortDirection>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, including visible/total counts and selection tally.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the active mode.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No reviews yet").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Raw query text as typed (the committed predicate may lag behind).
    pub query: String,

    /// Whether an edit is still waiting out its quiet period.
    pub pending: bool,
}

/// Entry form display information.
#[derive(Debug, Clone)]
pub struct FormInfo {
    /// The three fields in render order.
    pub fields: Vec<FormFieldInfo>,
}

/// One entry-form field.
#[derive(Debug, Clone)]
pub struct FormFieldInfo {
    /// Field label.
    pub label: &'static str,

    /// Current field text.
    pub value: String,

    /// Whether this field receives keystrokes.
    pub is_focused: bool,
}
