//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container composing the
//! table engines (store, filter, sort, selection) with the cursor, input mode,
//! and entry form. It is the single source of truth for all transient UI
//! state.
//!
//! # Architecture
//!
//! `AppState` separates owned data (the review store, the selection set) from
//! derived state (the `visible` row list, the cursor position). The visible
//! list is recomputed by [`AppState::apply_view`] whenever the store, the
//! committed filter, or the sort order changes; view models are computed
//! on demand from state snapshots.
//!
//! # Invariants
//!
//! - `visible` holds review ids, never positions: the same id keeps its
//!   checkbox through any filter or sort change.
//! - `cursor` is clamped into `visible` bounds on every recompute.
//! - Bulk removal ([`AppState::delete_selected`]) updates the store, clears
//!   the selection, and recomputes the view in one synchronous transition, so
//!   the next render never sees a removed id anywhere.

use crate::app::form::ReviewForm;
use crate::app::modes::{InputMode, SearchFocus};
use crate::domain::{Review, ReviewDraft, ReviewId};
use crate::table::{
    ReviewStore, SearchFilter, SelectAllStatus, Selection, SortColumn, SortOrder,
};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ColumnHeading, EmptyState, FooterInfo, FormFieldInfo, FormInfo, HeaderInfo, RowItem,
    SearchBarInfo, UiViewModel,
};
use std::time::{Duration, Instant};

/// Fixed width of the NAME column in characters.
const NAME_COLUMN_WIDTH: usize = 24;

/// Fixed width of the RATING column in characters.
const RATING_COLUMN_WIDTH: usize = 8;

/// Fixed width of the ADDED column in characters.
const ADDED_COLUMN_WIDTH: usize = 12;

/// Width of the per-row checkbox cell, including trailing space.
const CHECKBOX_CELL_WIDTH: usize = 4;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Authoritative review collection, insertion-ordered.
    pub store: ReviewStore,

    /// Debounced search filter over restaurant names.
    pub filter: SearchFilter,

    /// Active column sort, if any.
    pub sort: SortOrder,

    /// Identity-keyed checkbox selection.
    pub selection: Selection,

    /// Ids of the reviews surviving the filter, in display order.
    ///
    /// Recomputed by [`apply_view`](Self::apply_view). Row positions derive
    /// from this list at render time only.
    pub visible: Vec<ReviewId>,

    /// Zero-based cursor position within `visible`.
    ///
    /// Clamped to valid bounds on every view recompute; wraps during
    /// navigation.
    pub cursor: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Entry form buffers; live only while `input_mode` is `Form`.
    pub form: ReviewForm,

    /// Color scheme for rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates application state with the given theme and debounce delay.
    #[must_use]
    pub fn new(theme: Theme, debounce: Duration) -> Self {
        Self {
            store: ReviewStore::new(),
            filter: SearchFilter::new(debounce),
            sort: SortOrder::new(),
            selection: Selection::new(),
            visible: vec![],
            cursor: 0,
            input_mode: InputMode::Normal,
            form: ReviewForm::new(),
            theme,
        }
    }

    /// Recomputes the visible row list from store, committed filter, and sort.
    ///
    /// The filter pass preserves store (insertion) order; the sort pass then
    /// stably reorders it. The cursor is clamped into the new bounds.
    pub fn apply_view(&mut self) {
        let _span = tracing::debug_span!(
            "apply_view",
            total = self.store.len(),
            needle = ?self.filter.committed(),
            sort = ?self.sort.active()
        )
        .entered();

        self.visible = self
            .store
            .iter()
            .filter(|review| self.filter.matches(&review.name))
            .map(|review| review.id)
            .collect();

        self.sort.apply(&mut self.visible, &self.store);

        if self.visible.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.visible.len() - 1);
        }

        tracing::debug!(visible = self.visible.len(), "view recomputed");
    }

    /// Moves the cursor down one row, wrapping to the top at the end.
    pub fn move_cursor_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.visible.len();
    }

    /// Moves the cursor up one row, wrapping to the bottom at the start.
    pub fn move_cursor_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.visible.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// The review under the cursor, if any row is visible.
    #[must_use]
    pub fn cursor_review(&self) -> Option<&Review> {
        self.visible
            .get(self.cursor)
            .and_then(|id| self.store.get(*id))
    }

    /// Toggles the checkbox of the row under the cursor.
    ///
    /// No-op when nothing is visible.
    pub fn toggle_cursor_selection(&mut self) {
        if let Some(id) = self.visible.get(self.cursor).copied() {
            self.selection.toggle(id);
        }
    }

    /// Applies the tri-state select-all control over the visible rows.
    pub fn toggle_all_visible(&mut self) {
        let visible = self.visible.clone();
        self.selection.toggle_all(&visible);
    }

    /// Tri-state status of the select-all control over the visible rows.
    #[must_use]
    pub fn select_all_status(&self) -> SelectAllStatus {
        self.selection.status(&self.visible)
    }

    /// Appends a draft to the store and recomputes the view.
    pub fn append_review(&mut self, draft: ReviewDraft) -> ReviewId {
        let id = self.store.append(draft);
        self.apply_view();
        id
    }

    /// Deletes every selected review and clears the selection.
    ///
    /// One atomic transition: the selection set is taken (leaving it empty),
    /// the store drops those ids, and the view recomputes — no intermediate
    /// state is observable. Selected ids currently hidden by the filter are
    /// deleted too; selection is about identity, not visibility. Returns the
    /// number of reviews removed.
    pub fn delete_selected(&mut self) -> usize {
        let ids = self.selection.take();
        if ids.is_empty() {
            return 0;
        }

        let removed = self.store.remove(&ids);
        self.apply_view();

        tracing::debug!(removed = removed, "selected reviews deleted");
        removed
    }

    /// Submits the entry form, appending its draft, and returns to normal mode.
    pub fn submit_form(&mut self) -> ReviewId {
        let draft = self.form.submit();
        tracing::debug!(name = %draft.name, rating = draft.rating, "form submitted");
        self.input_mode = InputMode::Normal;
        self.append_review(draft)
    }

    /// Commits a pending filter edit whose quiet period has elapsed.
    ///
    /// Returns `true` when the committed predicate changed (the view has been
    /// recomputed and a render is due).
    pub fn poll_filter(&mut self, now: Instant) -> bool {
        if self.filter.poll(now) {
            self.apply_view();
            true
        } else {
            false
        }
    }

    /// The next instant the event loop must wake to commit a filter edit.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.filter.deadline()
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// Windows the visible rows around the cursor, truncates cell text to the
    /// column layout, and assembles mode-dependent chrome (search bar, form).
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UiViewModel {
        let empty_state = self.compute_empty_state();

        if empty_state.is_some() {
            return UiViewModel {
                rows: vec![],
                cursor_index: 0,
                header: self.compute_header(),
                columns: self.compute_columns(),
                select_all: self.select_all_status(),
                footer: self.compute_footer(),
                empty_state,
                search_bar: self.compute_search_bar(),
                form: self.compute_form(),
            };
        }

        let available_rows = self.calculate_available_rows(rows);

        let mut window_start = self.cursor.saturating_sub(available_rows / 2);
        let window_end = (window_start + available_rows).min(self.visible.len());

        let actual_count = window_end - window_start;
        if actual_count < available_rows && self.visible.len() >= available_rows {
            window_start = window_end.saturating_sub(available_rows);
        }

        let row_items: Vec<RowItem> = self.visible[window_start..window_end]
            .iter()
            .enumerate()
            .filter_map(|(relative_idx, id)| {
                let absolute_idx = window_start + relative_idx;
                self.store
                    .get(*id)
                    .map(|review| self.compute_row_item(review, absolute_idx, cols))
            })
            .collect();

        UiViewModel {
            rows: row_items,
            cursor_index: self.cursor.saturating_sub(window_start),
            header: self.compute_header(),
            columns: self.compute_columns(),
            select_all: self.select_all_status(),
            footer: self.compute_footer(),
            empty_state: None,
            search_bar: self.compute_search_bar(),
            form: self.compute_form(),
        }
    }

    /// Builds the display item for one visible review.
    fn compute_row_item(&self, review: &Review, absolute_idx: usize, cols: usize) -> RowItem {
        let comment_width = cols.saturating_sub(
            CHECKBOX_CELL_WIDTH + NAME_COLUMN_WIDTH + RATING_COLUMN_WIDTH + ADDED_COLUMN_WIDTH + 2,
        );

        RowItem {
            name: crate::ui::helpers::truncate_text(&review.name, NAME_COLUMN_WIDTH - 2),
            rating: review.rating.to_string(),
            comment: crate::ui::helpers::truncate_text(&review.comment, comment_width),
            added: review.added_ago(),
            is_cursor: absolute_idx == self.cursor,
            is_selected: self.selection.contains(review.id),
        }
    }

    /// Header title with visible/total counts and the selection tally.
    fn compute_header(&self) -> HeaderInfo {
        let title = if self.selection.is_empty() {
            format!(
                " Tastebook ({}/{}) ",
                self.visible.len(),
                self.store.len()
            )
        } else {
            format!(
                " Tastebook ({}/{}) · {} selected ",
                self.visible.len(),
                self.store.len(),
                self.selection.len()
            )
        };
        HeaderInfo { title }
    }

    /// Column headings with the active sort indicator.
    fn compute_columns(&self) -> Vec<ColumnHeading> {
        [SortColumn::Name, SortColumn::Rating, SortColumn::Comment]
            .into_iter()
            .map(|column| ColumnHeading {
                label: column.label(),
                indicator: self.sort.indicator(column),
            })
            .collect()
    }

    /// Mode-dependent footer keybinding hints.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "j/k: move  space: select  a: select all  n: new  d: delete  1/2/3: sort  /: search  q: quit"
                    .to_string()
            }
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: clear search  Enter: browse results  Type to filter by name".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: clear search  /: edit query  j/k: move  space: select  d: delete".to_string()
            }
            InputMode::Form => "Tab: next field  Enter: save  ESC: discard".to_string(),
        };
        FooterInfo { keybindings }
    }

    /// Search bar contents while search mode is active.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.filter.raw().to_string(),
                pending: self.filter.is_pending(),
            })
        } else {
            None
        }
    }

    /// Entry form contents while form mode is active.
    fn compute_form(&self) -> Option<FormInfo> {
        if self.input_mode != InputMode::Form {
            return None;
        }

        use crate::app::form::FormField;
        let fields = [
            (FormField::Name, &self.form.name),
            (FormField::Rating, &self.form.rating),
            (FormField::Comment, &self.form.comment),
        ]
        .into_iter()
        .map(|(field, value)| FormFieldInfo {
            label: field.label(),
            value: value.clone(),
            is_focused: self.form.focus == field,
        })
        .collect();

        Some(FormInfo { fields })
    }

    /// Empty-state message when no rows can be shown.
    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.input_mode == InputMode::Form {
            // The form overlays the table; keep the table area blank instead
            // of messaging over it.
            return None;
        }

        if self.store.is_empty() {
            Some(EmptyState {
                message: "No reviews yet".to_string(),
                subtitle: "Press 'n' to add the first one".to_string(),
            })
        } else if self.visible.is_empty() {
            Some(EmptyState {
                message: "No matching reviews".to_string(),
                subtitle: "Adjust the search or press ESC to clear it".to_string(),
            })
        } else {
            None
        }
    }

    /// Rows left for the table after subtracting UI chrome.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(6),
            InputMode::Search(_) => total_rows.saturating_sub(9),
            InputMode::Form => total_rows.saturating_sub(12),
        }
    }
}
