use std::time::{Duration, Instant};
use tastebook::app::AppState;
use tastebook::domain::{ReviewDraft, ReviewId};
use tastebook::table::{ReviewStore, SelectAllStatus, Selection, SortColumn};
use tastebook::ui::Theme;

const DEBOUNCE: Duration = Duration::from_millis(1000);

fn seeded_state() -> (AppState, Vec<ReviewId>) {
    let mut state = AppState::new(Theme::default(), DEBOUNCE);
    let ids = vec![
        state.append_review(ReviewDraft::new("Pasta Place", 4, "solid")),
        state.append_review(ReviewDraft::new("Sushi Bar", 5, "fresh")),
        state.append_review(ReviewDraft::new("Pizza Pasta", 3, "decent")),
    ];
    (state, ids)
}

/// Mints `n` real identities from a throwaway store.
fn minted_ids(n: usize) -> Vec<ReviewId> {
    let mut store = ReviewStore::new();
    (0..n)
        .map(|i| store.append(ReviewDraft::new(format!("r{i}"), 1, "")))
        .collect()
}

/// Commits a filter needle immediately, bypassing the quiet period.
fn commit_filter(state: &mut AppState, needle: &str) {
    let start = Instant::now();
    state.filter.edit(needle.to_string(), start);
    assert!(state.poll_filter(start + DEBOUNCE));
}

#[test]
fn tristate_status_tracks_visible_selection_counts() {
    let mut selection = Selection::new();
    let visible = minted_ids(3);

    assert_eq!(selection.status(&visible), SelectAllStatus::None);

    selection.toggle(visible[0]);
    assert_eq!(selection.status(&visible), SelectAllStatus::Some);

    selection.toggle(visible[1]);
    selection.toggle(visible[2]);
    assert_eq!(selection.status(&visible), SelectAllStatus::All);
}

#[test]
fn status_over_an_empty_visible_set_is_none() {
    let mut selection = Selection::new();
    selection.toggle(minted_ids(1)[0]);

    assert_eq!(selection.status(&[]), SelectAllStatus::None);
}

#[test]
fn toggle_all_selects_then_clears_only_visible_ids() {
    let mut selection = Selection::new();
    let ids = minted_ids(3);
    let hidden = ids[0];
    selection.toggle(hidden);

    let visible = vec![ids[1], ids[2]];

    selection.toggle_all(&visible);
    assert_eq!(selection.status(&visible), SelectAllStatus::All);
    assert!(selection.contains(hidden));

    selection.toggle_all(&visible);
    assert_eq!(selection.status(&visible), SelectAllStatus::None);
    // The hidden selection was never touched by either pass.
    assert!(selection.contains(hidden));
    assert_eq!(selection.len(), 1);
}

#[test]
fn partial_selection_selects_the_rest_instead_of_clearing() {
    let mut selection = Selection::new();
    let visible = minted_ids(3);

    selection.toggle(visible[1]);
    assert_eq!(selection.status(&visible), SelectAllStatus::Some);

    selection.toggle_all(&visible);
    assert_eq!(selection.status(&visible), SelectAllStatus::All);
}

#[test]
fn hiding_a_selected_row_recomputes_status_over_the_new_visible_set() {
    let (mut state, ids) = seeded_state();

    // Select Sushi Bar, then filter it out.
    state.selection.toggle(ids[1]);
    assert_eq!(state.select_all_status(), SelectAllStatus::Some);

    commit_filter(&mut state, "pasta");
    assert_eq!(state.visible, vec![ids[0], ids[2]]);

    // The selected review is hidden, so the visible intersection is empty.
    assert_eq!(state.select_all_status(), SelectAllStatus::None);
    assert!(state.selection.contains(ids[1]));
}

#[test]
fn selection_follows_identity_through_sorting() {
    let (mut state, ids) = seeded_state();

    // Cursor on the first row: Pasta Place.
    state.toggle_cursor_selection();
    assert!(state.selection.contains(ids[0]));

    // Ascending rating puts Pizza Pasta (3) first; the checkbox must stay on
    // Pasta Place, not on whatever row 0 now holds.
    state.sort.cycle(SortColumn::Rating);
    state.apply_view();
    assert_eq!(state.visible[0], ids[2]);
    assert!(state.selection.contains(ids[0]));
    assert!(!state.selection.contains(ids[2]));
}

#[test]
fn delete_removes_exactly_the_selected_identity_after_reordering() {
    let (mut state, ids) = seeded_state();

    // Select Pasta Place while it sits at row 0.
    state.selection.toggle(ids[0]);

    // Reorder so a different review occupies row 0, then delete.
    state.sort.cycle(SortColumn::Rating);
    state.apply_view();
    assert_eq!(state.visible[0], ids[2]);

    let removed = state.delete_selected();

    assert_eq!(removed, 1);
    assert!(state.store.get(ids[0]).is_none());
    assert!(state.store.get(ids[1]).is_some());
    assert!(state.store.get(ids[2]).is_some());
}

#[test]
fn delete_clears_selection_and_store_in_one_transition() {
    let (mut state, ids) = seeded_state();

    state.selection.toggle(ids[0]);
    state.selection.toggle(ids[2]);

    let removed = state.delete_selected();

    // The very next observable state: no removed id anywhere, empty selection.
    assert_eq!(removed, 2);
    assert!(state.selection.is_empty());
    assert_eq!(state.store.ids().collect::<Vec<_>>(), vec![ids[1]]);
    assert_eq!(state.visible, vec![ids[1]]);
}

#[test]
fn delete_also_removes_selected_rows_hidden_by_the_filter() {
    let (mut state, ids) = seeded_state();

    // Select Sushi Bar, then hide it behind a filter before deleting.
    state.selection.toggle(ids[1]);
    commit_filter(&mut state, "pasta");

    let removed = state.delete_selected();

    assert_eq!(removed, 1);
    assert!(state.store.get(ids[1]).is_none());
    assert_eq!(state.store.len(), 2);
}

#[test]
fn toggle_all_under_filter_touches_only_matching_rows() {
    let (mut state, ids) = seeded_state();

    commit_filter(&mut state, "pasta");
    state.toggle_all_visible();

    assert!(state.selection.contains(ids[0]));
    assert!(!state.selection.contains(ids[1]));
    assert!(state.selection.contains(ids[2]));
}

#[test]
fn toggling_a_hidden_id_is_accepted_and_surfaces_when_visible_again() {
    let (mut state, ids) = seeded_state();

    commit_filter(&mut state, "sushi");
    assert_eq!(state.visible, vec![ids[1]]);

    // Pasta Place is hidden; toggling it is a silent success.
    state.selection.toggle(ids[0]);
    assert_eq!(state.select_all_status(), SelectAllStatus::None);

    // Clearing the filter brings the checkbox with it.
    state.filter.clear();
    state.apply_view();
    assert!(state.selection.contains(ids[0]));
    assert_eq!(state.select_all_status(), SelectAllStatus::Some);
}
