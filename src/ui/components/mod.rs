//! Composable UI component renderers.
//!
//! Each component renders one part of the interface with `print!`-based ANSI
//! output and returns the next free row, so layouts compose by threading the
//! row position through the components.
//!
//! # Components
//!
//! - [`header`]: Title bar with counts
//! - [`footer`]: Keybinding hints for the active mode
//! - [`search`]: Search input box with pending-commit marker
//! - [`form`]: Review entry form box
//! - [`table`]: Heading row (select-all glyph, sort indicators) and review rows
//! - [`empty`]: Centered message when nothing can be shown
//!
//! # Layout modes
//!
//! Three high-level layouts, chosen by the renderer from the view model:
//! [`render_normal_mode`], [`render_search_mode`], and [`render_form_mode`].

mod empty;
mod footer;
mod form;
mod header;
mod search;
mod table;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormInfo, SearchBarInfo, UiViewModel};

use footer::render_footer;
use form::render_form;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headings, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the normal mode layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Table headings]
/// [Table rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_normal_mode(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_table_headings(current_row, &vm.columns, vm.select_all, theme, cols);
    let _current_row = render_table_rows(current_row, &vm.rows, theme, cols);

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the search mode layout: like normal mode with the search box
/// between the header border and the table headings.
pub fn render_search_mode(
    vm: &UiViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    current_row = render_table_headings(current_row, &vm.columns, vm.select_all, theme, cols);
    let _current_row = render_table_rows(current_row, &vm.rows, theme, cols);

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the form mode layout: the entry form box above the table.
pub fn render_form_mode(
    vm: &UiViewModel,
    form: &FormInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_form(current_row, form, theme, cols);
    current_row = render_table_headings(current_row, &vm.columns, vm.select_all, theme, cols);
    let _current_row = render_table_rows(current_row, &vm.rows, theme, cols);

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the bottom border and footer anchored to the last two rows.
fn render_bottom_chrome(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
