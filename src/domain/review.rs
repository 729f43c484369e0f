//! Review domain model.
//!
//! This module defines the core `Review` type representing one user-submitted
//! restaurant review, the `ReviewDraft` payload produced by the entry form,
//! and the opaque `ReviewId` identity that selection and removal are keyed by.

use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Permanent, opaque identity of a review.
///
/// Assigned once by [`ReviewStore::append`](crate::table::ReviewStore::append)
/// from a monotonic counter, never reused and never reassigned. All selection
/// and removal logic is keyed by this identity; row positions exist only at
/// render time, so sorting and filtering can never change which reviews are
/// selected or deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReviewId(pub(crate) u64);

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One restaurant review in the table.
///
/// Reviews are immutable once created; the store replaces, never edits. The
/// `rating` and `comment` fields hold whatever the form submitted — rating
/// bounds (1-5) and non-empty names are the form layer's concern, and the
/// table stores malformed values as given.
///
/// # Fields
///
/// - `id`: permanent identity assigned at append
/// - `name`: restaurant name, the field the search filter matches against
/// - `rating`: numeric rating as submitted (intended range 1-5, not enforced)
/// - `comment`: free-text review body
/// - `created_at`: Unix timestamp recorded when the review was appended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub name: String,
    pub rating: i64,
    pub comment: String,
    pub created_at: i64,
}

impl Review {
    /// Returns a human-readable string describing how long ago the review was added.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago" (e.g., "5m ago")
    /// - Less than 1 day: "Xh ago" (e.g., "3h ago")
    /// - 1 day or more: "Xd ago" (e.g., "7d ago")
    #[must_use]
    pub fn added_ago(&self) -> String {
        let now = chrono::Utc::now().timestamp();
        let diff = now - self.created_at;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

/// Validated review payload produced by the entry form.
///
/// The form adapter owns whatever validation happens (parsing the rating text,
/// trimming); the store appends the draft as-is and only adds identity and a
/// creation timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    /// Restaurant name as typed.
    pub name: String,

    /// Rating as parsed by the form (0 when the text was not a number).
    pub rating: i64,

    /// Free-text review body as typed.
    pub comment: String,
}

impl ReviewDraft {
    /// Creates a draft from the three form fields.
    pub fn new(name: impl Into<String>, rating: i64, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rating,
            comment: comment.into(),
        }
    }
}
