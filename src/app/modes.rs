//! Input mode state types.
//!
//! This module defines the state machine enums that control how keyboard
//! input is interpreted: plain table navigation, search-bar editing, or
//! review-form editing. The active mode also determines footer hints and
//! which chrome (search bar, form box) is rendered.

/// Focus state within search mode.
///
/// Determines whether keystrokes edit the query or navigate the filtered
/// rows. Row checkboxes stay reachable while navigating, so rows can be
/// selected under an active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keystrokes append to the search query.
    Typing,

    /// j/k move the cursor through the filtered rows; space toggles.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how character input is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation mode: move the cursor, toggle checkboxes, cycle
    /// sorts, delete the selection.
    Normal,

    /// Search mode with a focus sub-state; the search bar is rendered and
    /// every query edit is debounced before it commits.
    Search(SearchFocus),

    /// Review entry form is open; keystrokes edit the focused field.
    Form,
}
