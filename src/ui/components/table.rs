//! Table component renderer.
//!
//! Renders the review list as a four-column table (NAME, RATING, REVIEW,
//! ADDED) behind a checkbox column. The heading row carries the tri-state
//! select-all glyph and the active column's sort direction indicator; body
//! rows show per-row checkboxes and cursor highlighting.

use crate::table::{SelectAllStatus, SortDirection};
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnHeading, RowItem};

/// Width of the checkbox cell, including trailing space.
const CHECKBOX_CELL_WIDTH: usize = 4;

/// Fixed width of the NAME column.
const NAME_COLUMN_WIDTH: usize = 24;

/// Fixed width of the RATING column.
const RATING_COLUMN_WIDTH: usize = 8;

/// Fixed width of the trailing ADDED column.
const ADDED_COLUMN_WIDTH: usize = 12;

/// Checkbox glyph for the tri-state select-all control.
///
/// `[ ]` when no visible row is selected, `[~]` when some are, `[x]` when
/// every visible row is — the indeterminate middle state is what makes the
/// control tri-state rather than a plain checkbox.
const fn select_all_mark(status: SelectAllStatus) -> &'static str {
    match status {
        SelectAllStatus::None => "[ ]",
        SelectAllStatus::Some => "[~]",
        SelectAllStatus::All => "[x]",
    }
}

/// Sort direction glyph appended to the active column heading.
const fn direction_mark(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

/// Renders the table heading row at the specified row position.
///
/// Layout: select-all glyph, NAME, RATING, REVIEW, then ADDED. The heading of
/// the active sort column carries a direction glyph in the indicator color.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headings(
    row: usize,
    columns: &[ColumnHeading],
    select_all: SelectAllStatus,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<width$}",
        select_all_mark(select_all),
        width = CHECKBOX_CELL_WIDTH
    );

    let widths = column_widths(cols);
    for (heading, width) in columns.iter().zip(widths) {
        print!("{}", heading.label);
        let mut used = heading.label.chars().count();

        if let Some(direction) = heading.indicator {
            print!("{}", Theme::fg(&theme.colors.sort_indicator_fg));
            print!(" {}", direction_mark(direction));
            print!("{}", Theme::fg(&theme.colors.header_fg));
            used += 2;
        }

        print!("{}", " ".repeat(width.saturating_sub(used)));
    }

    print!("{:<width$}", "ADDED", width = ADDED_COLUMN_WIDTH);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row position.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(row: usize, items: &[RowItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single review row.
///
/// The cursor row gets the full-width highlight background; a checked row
/// shows `[x]` in the checkbox color unless the cursor highlight already owns
/// the row's colors. The row is padded to the terminal width so the highlight
/// covers the whole line.
fn render_table_row(row: usize, item: &RowItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_cursor {
        print!("{}", Theme::fg(&theme.colors.cursor_fg));
        print!("{}", Theme::bg(&theme.colors.cursor_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let mark = if item.is_selected { "[x]" } else { "[ ]" };
    if item.is_selected && !item.is_cursor {
        print!("{}", Theme::fg(&theme.colors.checkbox_fg));
        print!("{mark:<width$}", width = CHECKBOX_CELL_WIDTH);
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{mark:<width$}", width = CHECKBOX_CELL_WIDTH);
    }

    let [name_width, rating_width, comment_width] = column_widths(cols);
    print!("{:<width$}", item.name, width = name_width);
    print!("{:<width$}", item.rating, width = rating_width);
    print!("{:<width$}", item.comment, width = comment_width);

    if !item.is_cursor {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{:<width$}", item.added, width = ADDED_COLUMN_WIDTH);

    let line_len = CHECKBOX_CELL_WIDTH
        + name_width
        + rating_width
        + comment_width
        + ADDED_COLUMN_WIDTH;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Widths of the NAME, RATING, and REVIEW columns for a terminal width.
///
/// NAME and RATING are fixed; REVIEW absorbs whatever remains after the
/// checkbox cell and the trailing ADDED column.
const fn column_widths(cols: usize) -> [usize; 3] {
    let comment = cols.saturating_sub(
        CHECKBOX_CELL_WIDTH + NAME_COLUMN_WIDTH + RATING_COLUMN_WIDTH + ADDED_COLUMN_WIDTH,
    );
    [NAME_COLUMN_WIDTH, RATING_COLUMN_WIDTH, comment]
}
