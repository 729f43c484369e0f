//! Debounced free-text search filter.
//!
//! Maintains two values: the raw text (updated on every keystroke, echoed in
//! the search bar) and the committed predicate (updated only after the quiet
//! period elapses). The committed predicate is a case-insensitive substring
//! match against the review's restaurant name; empty or whitespace-only text
//! commits as "no filter".

use super::debounce::Debouncer;
use std::time::{Duration, Instant};

/// Search filter with raw echo text and a debounce-committed predicate.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    /// Text as currently typed, displayed in the search bar.
    raw: String,

    /// Committed, lowercased needle. `None` means all reviews are visible.
    committed: Option<String>,

    /// Pending commit of the raw text after input quiescence.
    debounce: Debouncer<String>,
}

impl SearchFilter {
    /// Creates a filter with the given debounce quiet period.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            raw: String::new(),
            committed: None,
            debounce: Debouncer::new(delay),
        }
    }

    /// The raw text as typed, for display echo.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The committed needle, if a filter is active.
    #[must_use]
    pub fn committed(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    /// Replaces the raw text and reschedules the commit.
    ///
    /// The raw value updates immediately; the committed predicate will update
    /// only once no further edit arrives within the quiet period. An earlier
    /// pending commit is cancelled, so only the last value typed in a
    /// quiescence window ever commits.
    pub fn edit(&mut self, text: String, now: Instant) {
        tracing::trace!(query = %text, "search text edited");
        self.raw = text;
        self.debounce.schedule(self.raw.clone(), now);
    }

    /// Appends one character to the raw text and reschedules the commit.
    pub fn push_char(&mut self, c: char, now: Instant) {
        let mut text = self.raw.clone();
        text.push(c);
        self.edit(text, now);
    }

    /// Removes the last character from the raw text and reschedules the commit.
    pub fn pop_char(&mut self, now: Instant) {
        let mut text = self.raw.clone();
        text.pop();
        self.edit(text, now);
    }

    /// Commits the pending text if its quiet period has elapsed.
    ///
    /// Returns `true` when the committed predicate changed, which is the
    /// caller's signal to recompute the visible set.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(text) = self.debounce.poll(now) else {
            return false;
        };

        let needle = text.trim().to_lowercase();
        let committed = if needle.is_empty() {
            None
        } else {
            Some(needle)
        };

        if committed == self.committed {
            return false;
        }

        tracing::debug!(needle = ?committed, "search filter committed");
        self.committed = committed;
        true
    }

    /// Clears raw text, committed predicate, and any pending commit at once.
    ///
    /// Used when leaving search mode: the reset takes effect immediately, not
    /// after a quiet period, and the cancelled commit never fires.
    pub fn clear(&mut self) {
        self.raw.clear();
        self.committed = None;
        self.debounce.cancel();
    }

    /// Whether a review name passes the committed predicate.
    ///
    /// Case-insensitive substring match; with no committed filter every name
    /// passes.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.committed
            .as_ref()
            .map_or(true, |needle| name.to_lowercase().contains(needle))
    }

    /// Deadline of the pending commit, for event-loop poll timeouts.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Whether an uncommitted edit is waiting out its quiet period.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.debounce.is_pending()
    }
}
