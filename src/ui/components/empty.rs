//! Empty state component renderer.
//!
//! Renders the centered message displayed when no reviews can be shown:
//! either the table is empty or the active filter matches nothing.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Row where the empty state message starts.
const MESSAGE_ROW: usize = 8;

/// Renders the empty state message.
///
/// Displays a centered two-line message. The message uses the
/// `empty_state_fg` theme color, the subtitle uses `text_dim` with dim
/// styling.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    let msg_len = empty.message.chars().count();
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(MESSAGE_ROW, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = empty.subtitle.chars().count();
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    position_cursor(MESSAGE_ROW + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
