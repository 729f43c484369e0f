use std::time::{Duration, Instant};
use tastebook::app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
use tastebook::domain::ReviewDraft;
use tastebook::table::SelectAllStatus;
use tastebook::ui::Theme;

const DEBOUNCE: Duration = Duration::from_millis(1000);

fn state_with_reviews() -> AppState {
    let mut state = AppState::new(Theme::default(), DEBOUNCE);
    state.append_review(ReviewDraft::new("Pasta Place", 4, "solid"));
    state.append_review(ReviewDraft::new("Sushi Bar", 5, "fresh"));
    state.append_review(ReviewDraft::new("Pizza Pasta", 3, "decent"));
    state
}

#[test]
fn cursor_navigation_wraps_both_ways() {
    let mut state = state_with_reviews();

    handle_event(&mut state, &Event::CursorUp).unwrap();
    assert_eq!(state.cursor, 2);

    handle_event(&mut state, &Event::CursorDown).unwrap();
    assert_eq!(state.cursor, 0);
}

#[test]
fn space_toggles_the_row_under_the_cursor() {
    let mut state = state_with_reviews();
    let first = state.visible[0];

    let (render, _) = handle_event(&mut state, &Event::ToggleSelect).unwrap();
    assert!(render);
    assert!(state.selection.contains(first));

    handle_event(&mut state, &Event::ToggleSelect).unwrap();
    assert!(!state.selection.contains(first));
}

#[test]
fn toggle_select_with_no_rows_is_ignored() {
    let mut state = AppState::new(Theme::default(), DEBOUNCE);

    let (render, actions) = handle_event(&mut state, &Event::ToggleSelect).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
}

#[test]
fn delete_selected_goes_through_the_handler_atomically() {
    let mut state = state_with_reviews();

    handle_event(&mut state, &Event::ToggleSelectAll).unwrap();
    assert_eq!(state.select_all_status(), SelectAllStatus::All);

    let (render, _) = handle_event(&mut state, &Event::DeleteSelected).unwrap();
    assert!(render);
    assert!(state.store.is_empty());
    assert!(state.selection.is_empty());
    assert!(state.visible.is_empty());
}

#[test]
fn delete_with_empty_selection_is_a_noop() {
    let mut state = state_with_reviews();

    let (render, _) = handle_event(&mut state, &Event::DeleteSelected).unwrap();
    assert!(!render);
    assert_eq!(state.store.len(), 3);
}

#[test]
fn search_typing_echoes_immediately_and_commits_on_tick() {
    let mut state = state_with_reviews();

    handle_event(&mut state, &Event::SearchMode).unwrap();
    assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Typing));

    for c in "pasta".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }

    // Raw text is visible at once; the table still shows everything.
    assert_eq!(state.filter.raw(), "pasta");
    assert_eq!(state.visible.len(), 3);

    // The tick that follows the quiet period commits the predicate. The
    // handler reads the real clock, so drive the filter directly past it.
    let deadline = state.next_deadline().unwrap();
    assert!(state.poll_filter(deadline + Duration::from_millis(1)));
    assert_eq!(state.visible.len(), 2);
}

#[test]
fn tick_without_pending_edit_requests_no_render() {
    let mut state = state_with_reviews();

    let (render, actions) = handle_event(&mut state, &Event::Tick).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
}

#[test]
fn escape_exits_search_and_restores_the_full_table() {
    let mut state = state_with_reviews();

    handle_event(&mut state, &Event::SearchMode).unwrap();
    for c in "sushi".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }
    let deadline = state.next_deadline().unwrap();
    state.poll_filter(deadline + Duration::from_millis(1));
    assert_eq!(state.visible.len(), 1);

    handle_event(&mut state, &Event::ExitSearch).unwrap();
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.visible.len(), 3);
    assert_eq!(state.filter.raw(), "");
}

#[test]
fn enter_moves_from_typing_to_navigating_when_query_nonempty() {
    let mut state = state_with_reviews();

    handle_event(&mut state, &Event::SearchMode).unwrap();
    handle_event(&mut state, &Event::Char('p')).unwrap();
    handle_event(&mut state, &Event::FocusResults).unwrap();
    assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));

    // With an empty query, Enter leaves search mode instead.
    handle_event(&mut state, &Event::ExitSearch).unwrap();
    handle_event(&mut state, &Event::SearchMode).unwrap();
    handle_event(&mut state, &Event::FocusResults).unwrap();
    assert_eq!(state.input_mode, InputMode::Normal);
}

#[test]
fn form_flow_appends_a_review_with_parsed_rating() {
    let mut state = state_with_reviews();

    handle_event(&mut state, &Event::OpenForm).unwrap();
    assert_eq!(state.input_mode, InputMode::Form);

    for c in "Taco Stand".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }
    handle_event(&mut state, &Event::NextField).unwrap();
    handle_event(&mut state, &Event::Char('5')).unwrap();
    handle_event(&mut state, &Event::NextField).unwrap();
    for c in "al pastor".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }

    handle_event(&mut state, &Event::Submit).unwrap();

    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.store.len(), 4);
    let added = state.store.iter().last().unwrap();
    assert_eq!(added.name, "Taco Stand");
    assert_eq!(added.rating, 5);
    assert_eq!(added.comment, "al pastor");
}

#[test]
fn form_rating_garbage_is_stored_as_zero() {
    let mut state = AppState::new(Theme::default(), DEBOUNCE);

    handle_event(&mut state, &Event::OpenForm).unwrap();
    handle_event(&mut state, &Event::NextField).unwrap();
    for c in "five".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }
    handle_event(&mut state, &Event::Submit).unwrap();

    let added = state.store.iter().last().unwrap();
    assert_eq!(added.rating, 0);
}

#[test]
fn escape_discards_the_form_without_appending() {
    let mut state = state_with_reviews();

    handle_event(&mut state, &Event::OpenForm).unwrap();
    handle_event(&mut state, &Event::Char('x')).unwrap();
    handle_event(&mut state, &Event::Escape).unwrap();

    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.store.len(), 3);
    assert_eq!(state.form.name, "");
}

#[test]
fn quit_emits_the_quit_action_without_rendering() {
    let mut state = state_with_reviews();

    let (render, actions) = handle_event(&mut state, &Event::Quit).unwrap();
    assert!(!render);
    assert_eq!(actions, vec![Action::Quit]);
}

#[test]
fn sort_events_recompute_the_view() {
    use tastebook::table::SortColumn;

    let mut state = state_with_reviews();
    let original = state.visible.clone();

    handle_event(&mut state, &Event::CycleSort(SortColumn::Rating)).unwrap();
    assert_ne!(state.visible, original);

    handle_event(&mut state, &Event::CycleSort(SortColumn::Rating)).unwrap();
    handle_event(&mut state, &Event::CycleSort(SortColumn::Rating)).unwrap();
    assert_eq!(state.visible, original);
}
