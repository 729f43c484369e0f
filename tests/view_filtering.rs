use std::time::{Duration, Instant};
use tastebook::domain::ReviewDraft;
use tastebook::table::{ReviewStore, SearchFilter};

const DEBOUNCE: Duration = Duration::from_millis(1000);

fn seeded_store() -> ReviewStore {
    let mut store = ReviewStore::new();
    store.append(ReviewDraft::new("Pasta Place", 4, "solid"));
    store.append(ReviewDraft::new("Sushi Bar", 5, "fresh"));
    store.append(ReviewDraft::new("Pizza Pasta", 3, "decent"));
    store
}

fn visible_names(store: &ReviewStore, filter: &SearchFilter) -> Vec<String> {
    store
        .iter()
        .filter(|review| filter.matches(&review.name))
        .map(|review| review.name.clone())
        .collect()
}

#[test]
fn committed_filter_matches_case_insensitive_substring_in_store_order() {
    let store = seeded_store();
    let mut filter = SearchFilter::new(DEBOUNCE);
    let start = Instant::now();

    filter.edit("PaStA".to_string(), start);
    assert!(filter.poll(start + DEBOUNCE));

    assert_eq!(
        visible_names(&store, &filter),
        vec!["Pasta Place".to_string(), "Pizza Pasta".to_string()]
    );
}

#[test]
fn raw_text_updates_immediately_but_predicate_waits_for_quiescence() {
    let store = seeded_store();
    let mut filter = SearchFilter::new(DEBOUNCE);
    let start = Instant::now();

    filter.push_char('s', start);
    filter.push_char('u', start + Duration::from_millis(100));

    assert_eq!(filter.raw(), "su");
    // Nothing committed yet: all three reviews stay visible.
    assert!(!filter.poll(start + Duration::from_millis(900)));
    assert_eq!(visible_names(&store, &filter).len(), 3);

    // 1000ms after the last keystroke the predicate commits.
    assert!(filter.poll(start + Duration::from_millis(1100)));
    assert_eq!(visible_names(&store, &filter), vec!["Sushi Bar".to_string()]);
}

#[test]
fn burst_of_keystrokes_commits_once_with_the_last_value() {
    let mut filter = SearchFilter::new(DEBOUNCE);
    let start = Instant::now();

    for (i, c) in ['p', 'a', 's', 't', 'a'].into_iter().enumerate() {
        filter.push_char(c, start + Duration::from_millis(50 * i as u64));
    }

    let mut commits = 0;
    for ms in (0..4000).step_by(50) {
        if filter.poll(start + Duration::from_millis(ms)) {
            commits += 1;
        }
    }

    assert_eq!(commits, 1);
    assert_eq!(filter.committed(), Some("pasta"));
}

#[test]
fn whitespace_only_text_commits_as_no_filter() {
    let store = seeded_store();
    let mut filter = SearchFilter::new(DEBOUNCE);
    let start = Instant::now();

    filter.edit("   ".to_string(), start);
    // The committed predicate stays "no filter", so nothing changes.
    assert!(!filter.poll(start + DEBOUNCE));
    assert_eq!(filter.committed(), None);
    assert_eq!(visible_names(&store, &filter).len(), 3);
}

#[test]
fn clear_resets_immediately_and_cancels_pending_commit() {
    let store = seeded_store();
    let mut filter = SearchFilter::new(DEBOUNCE);
    let start = Instant::now();

    filter.edit("pasta".to_string(), start);
    assert!(filter.poll(start + DEBOUNCE));

    filter.edit("sushi".to_string(), start + Duration::from_millis(1500));
    filter.clear();

    // The cancelled "sushi" commit never fires, and the reset needs no
    // quiet period.
    assert_eq!(filter.raw(), "");
    assert_eq!(filter.committed(), None);
    assert!(!filter.poll(start + Duration::from_millis(10_000)));
    assert_eq!(visible_names(&store, &filter).len(), 3);
}

#[test]
fn backspace_edits_reschedule_the_commit() {
    let mut filter = SearchFilter::new(DEBOUNCE);
    let start = Instant::now();

    filter.edit("pastaa".to_string(), start);
    filter.pop_char(start + Duration::from_millis(500));

    // The original deadline passes without a commit; the pop rescheduled it.
    assert!(!filter.poll(start + Duration::from_millis(1100)));
    assert!(filter.poll(start + Duration::from_millis(1500)));
    assert_eq!(filter.committed(), Some("pasta"));
}

#[test]
fn deadline_tracks_the_latest_edit() {
    let mut filter = SearchFilter::new(DEBOUNCE);
    let start = Instant::now();

    assert_eq!(filter.deadline(), None);

    filter.push_char('p', start);
    assert_eq!(filter.deadline(), Some(start + DEBOUNCE));

    let later = start + Duration::from_millis(700);
    filter.push_char('a', later);
    assert_eq!(filter.deadline(), Some(later + DEBOUNCE));
}
