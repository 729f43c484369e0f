//! Entry form component renderer.
//!
//! Renders the review entry form as a bordered box with one line per field.
//! The focused field is marked with a `▌` bar and rendered in normal text;
//! unfocused fields are dimmed.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormInfo;

/// Horizontal margin for the form box (spaces on left and right).
const FORM_BOX_MARGIN: usize = 5;

/// Width reserved for field labels inside the box.
const LABEL_WIDTH: usize = 18;

/// Renders the entry form box at the specified row.
///
/// Displays a bordered box with one line per form field:
///
/// ```text
/// [margin] ┌────────────────────────────────┐ [margin]
/// [margin] │ ▌Restaurant Name   Pasta Place │ [margin]
/// [margin] │  Rating (1-5)      4           │ [margin]
/// [margin] │  Review            Great pasta │ [margin]
/// [margin] └────────────────────────────────┘ [margin]
/// ```
///
/// # Returns
///
/// The next available row position (row + field count + 2)
pub fn render_form(row: usize, form: &FormInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(FORM_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(FORM_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    for field in &form.fields {
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(FORM_BOX_MARGIN));
        print!("{}", Theme::fg(&theme.colors.input_border));
        print!("│");

        let focus_mark = if field.is_focused { "▌" } else { " " };
        if field.is_focused {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{focus_mark}");
        print!("{:<width$}", field.label, width = LABEL_WIDTH);
        print!("{}", field.value);

        let used = 1 + LABEL_WIDTH + field.value.chars().count();
        print!("{}", " ".repeat(inner_width.saturating_sub(used)));

        print!("{}", Theme::fg(&theme.colors.input_border));
        print!("│");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    position_cursor(current_row, 1);
    print!("{}", " ".repeat(FORM_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    current_row + 1
}
