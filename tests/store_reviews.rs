use std::collections::HashSet;
use tastebook::domain::ReviewDraft;
use tastebook::table::ReviewStore;

fn draft(name: &str, rating: i64) -> ReviewDraft {
    ReviewDraft::new(name, rating, format!("{name} review"))
}

#[test]
fn append_assigns_distinct_ids_in_insertion_order() {
    let mut store = ReviewStore::new();

    let a = store.append(draft("Pasta Place", 4));
    let b = store.append(draft("Sushi Bar", 5));
    let c = store.append(draft("Pizza Pasta", 3));

    let ids: Vec<_> = store.ids().collect();
    assert_eq!(ids, vec![a, b, c]);

    let unique: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(unique.len(), 3);
}

#[test]
fn append_then_remove_restores_prior_content_and_order() {
    let mut store = ReviewStore::new();
    let a = store.append(draft("Pasta Place", 4));
    let b = store.append(draft("Sushi Bar", 5));

    let before: Vec<_> = store.iter().cloned().collect();

    let c = store.append(draft("Pizza Pasta", 3));
    let removed = store.remove(&HashSet::from([c]));

    assert_eq!(removed, 1);
    let after: Vec<_> = store.iter().cloned().collect();
    assert_eq!(after, before);
    assert_eq!(store.ids().collect::<Vec<_>>(), vec![a, b]);
}

#[test]
fn remove_preserves_relative_order_of_remainder() {
    let mut store = ReviewStore::new();
    let a = store.append(draft("A", 1));
    let b = store.append(draft("B", 2));
    let c = store.append(draft("C", 3));
    let d = store.append(draft("D", 4));

    store.remove(&HashSet::from([b, d]));

    assert_eq!(store.ids().collect::<Vec<_>>(), vec![a, c]);
}

#[test]
fn remove_of_absent_ids_is_a_noop() {
    let mut store = ReviewStore::new();
    let a = store.append(draft("Pasta Place", 4));
    let ghost = store.append(draft("Ghost Kitchen", 1));
    store.remove(&HashSet::from([ghost]));

    // Removing the same id again, alone or mixed with live ids, never errors.
    assert_eq!(store.remove(&HashSet::from([ghost])), 0);
    assert_eq!(store.remove(&HashSet::from([ghost, a])), 1);
    assert!(store.is_empty());
}

#[test]
fn remove_with_empty_set_changes_nothing() {
    let mut store = ReviewStore::new();
    store.append(draft("Pasta Place", 4));

    assert_eq!(store.remove(&HashSet::new()), 0);
    assert_eq!(store.len(), 1);
}

#[test]
fn ids_are_never_reused_after_removal() {
    let mut store = ReviewStore::new();
    let a = store.append(draft("First", 1));
    store.remove(&HashSet::from([a]));

    let b = store.append(draft("Second", 2));

    assert_ne!(a, b);
    assert!(!store.contains(a));
    assert!(store.contains(b));
    assert_eq!(store.get(b).map(|r| r.name.as_str()), Some("Second"));
}

#[test]
fn drafts_are_stored_as_given_without_validation() {
    let mut store = ReviewStore::new();

    // Out-of-range rating and empty name are the form layer's problem; the
    // store accepts them unchanged.
    let id = store.append(ReviewDraft::new("", 99, ""));

    let review = store.get(id).unwrap();
    assert_eq!(review.name, "");
    assert_eq!(review.rating, 99);
    assert_eq!(review.comment, "");
}
