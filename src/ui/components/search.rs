//! Search bar component renderer.
//!
//! Renders the search input box with a bordered frame, the raw query text,
//! and a pending marker while an edit is still waiting out its debounce
//! quiet period.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box at the specified row.
///
/// Displays a 3-line bordered box containing the raw query. While an edit is
/// pending commit, a `…` marker is shown at the right edge of the box —
/// the table still reflects the previously committed filter until the quiet
/// period elapses.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Search: query  … │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let search_text = format!(" Search: {}", search.query);
    let marker = if search.pending { "… " } else { "" };
    let used = search_text.chars().count() + marker.chars().count();
    let padding = inner_width.saturating_sub(used);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{marker}");
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
