//! Top-level rendering coordinator.
//!
//! Provides the main rendering entry point, coordinating view model
//! computation and delegation to the UI components. Mode selection follows
//! the view model: form mode renders the entry box, search mode the search
//! bar, and an empty state replaces the table body when nothing is visible.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;

/// Renders the application UI to stdout.
///
/// Computes the view model from application state, clears the screen, and
/// delegates to the layout matching the active mode. Output is ANSI-styled
/// `print!` text; the caller flushes stdout once per frame.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    crate::ui::helpers::clear_screen();
    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model with mode-specific layout.
fn render_viewmodel(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(form) = &vm.form {
        components::render_form_mode(vm, form, theme, cols, rows);
        return;
    }

    if let Some(search) = &vm.search_bar {
        components::render_search_mode(vm, search, theme, cols, rows);
        if let Some(empty) = &vm.empty_state {
            components::render_empty_state(empty, theme, cols);
        }
        return;
    }

    components::render_normal_mode(vm, theme, cols, rows);
    if let Some(empty) = &vm.empty_state {
        components::render_empty_state(empty, theme, cols);
    }
}
