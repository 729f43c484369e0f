//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! timer ticks, translating them into state changes and runtime actions. All
//! mutations run synchronously on the event loop: each event is fully applied
//! before the render that follows it, so no render ever observes a partially
//! updated store, selection, or view.
//!
//! # Event flow
//!
//! 1. The terminal runtime maps raw key events to [`Event`]s per input mode
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. `(should_render, actions)` is returned for the runtime to execute

use crate::app::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::table::SortColumn;
use std::time::Instant;

/// Events triggered by user input or the debounce timer.
///
/// Each event is a discrete occurrence that may cause state changes and
/// action emissions. The handler processes them sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down one row (wraps to top).
    CursorDown,
    /// Moves the cursor up one row (wraps to bottom).
    CursorUp,
    /// Toggles the checkbox of the row under the cursor.
    ToggleSelect,
    /// Applies the tri-state select-all control to the visible rows.
    ToggleSelectAll,
    /// Deletes every selected review and clears the selection.
    DeleteSelected,
    /// Advances the three-state sort cycle on a column.
    CycleSort(SortColumn),
    /// Enters search mode with typing focus, clearing any previous query.
    SearchMode,
    /// Returns focus to the search input (from navigating focus).
    FocusSearchBar,
    /// Moves focus from the search input to the filtered rows.
    FocusResults,
    /// Exits search mode and clears the query immediately.
    ExitSearch,
    /// Opens the review entry form.
    OpenForm,
    /// Moves form focus to the next field.
    NextField,
    /// Submits the entry form, appending its draft.
    Submit,
    /// A typed character, routed to the search query or the focused form field.
    Char(char),
    /// Removes the last character from the search query or focused form field.
    Backspace,
    /// Context-dependent escape: discards the form, exits search, or clears
    /// the active filter in normal mode.
    Escape,
    /// Requests application exit.
    Quit,
    /// Timer tick; commits a debounced filter edit whose quiet period passed.
    Tick,
}

/// Processes an event, mutates application state, and returns what to do next.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI must be redrawn, plus runtime
/// actions to execute in order.
///
/// # Errors
///
/// Reserved for state transitions that can fail; every current transition is
/// infallible by design (absent ids and hidden rows are no-ops, never errors).
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::ToggleSelect => {
            if state.cursor_review().is_none() {
                tracing::debug!("no row under cursor to toggle");
                return Ok((false, vec![]));
            }
            state.toggle_cursor_selection();
            Ok((true, vec![]))
        }
        Event::ToggleSelectAll => {
            if state.visible.is_empty() {
                tracing::debug!("no visible rows for select-all");
                return Ok((false, vec![]));
            }
            state.toggle_all_visible();
            Ok((true, vec![]))
        }
        Event::DeleteSelected => {
            if state.selection.is_empty() {
                tracing::debug!("delete requested with empty selection");
                return Ok((false, vec![]));
            }
            let removed = state.delete_selected();
            tracing::debug!(removed = removed, "bulk delete handled");
            Ok((true, vec![]))
        }
        Event::CycleSort(column) => {
            state.sort.cycle(*column);
            state.apply_view();
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.filter.clear();
            state.apply_view();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.filter.raw().is_empty() {
                state.input_mode = InputMode::Normal;
                state.filter.clear();
                state.apply_view();
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.filter.raw(), "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.filter.clear();
            state.apply_view();
            Ok((true, vec![]))
        }
        Event::OpenForm => {
            tracing::debug!("opening review form");
            state.input_mode = InputMode::Form;
            state.form = crate::app::form::ReviewForm::new();
            Ok((true, vec![]))
        }
        Event::NextField => {
            if state.input_mode != InputMode::Form {
                return Ok((false, vec![]));
            }
            state.form.focus_next();
            Ok((true, vec![]))
        }
        Event::Submit => {
            if state.input_mode != InputMode::Form {
                return Ok((false, vec![]));
            }
            let id = state.submit_form();
            tracing::debug!(review_id = %id, "review added from form");
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search(_) => {
                state.filter.push_char(*c, Instant::now());
                Ok((true, vec![]))
            }
            InputMode::Form => {
                state.form.push_char(*c);
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search(_) => {
                state.filter.pop_char(Instant::now());
                Ok((true, vec![]))
            }
            InputMode::Form => {
                state.form.pop_char();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Escape => match state.input_mode {
            InputMode::Form => {
                tracing::debug!("discarding review form");
                state.input_mode = InputMode::Normal;
                state.form = crate::app::form::ReviewForm::new();
                Ok((true, vec![]))
            }
            InputMode::Search(_) => {
                state.input_mode = InputMode::Normal;
                state.filter.clear();
                state.apply_view();
                Ok((true, vec![]))
            }
            InputMode::Normal => {
                if state.filter.committed().is_none() && !state.filter.is_pending() {
                    return Ok((false, vec![]));
                }
                state.filter.clear();
                state.apply_view();
                Ok((true, vec![]))
            }
        },
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::Tick => {
            let changed = state.poll_filter(Instant::now());
            Ok((changed, vec![]))
        }
    }
}
