//! Review entry form.
//!
//! The form is the adapter between raw text fields and the store: it owns the
//! three field buffers and the focus, and on submit parses the rating text
//! into the draft the store appends. Parsing is the only "validation" that
//! happens — a rating that is not a number becomes 0 and an empty name is
//! submitted as-is, mirroring the deliberately thin validation of the
//! original entry form.

use crate::domain::ReviewDraft;

/// The form field currently receiving keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Rating,
    Comment,
}

impl FormField {
    /// Label rendered next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Restaurant Name",
            Self::Rating => "Rating (1-5)",
            Self::Comment => "Review",
        }
    }

    /// The next field in tab order, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Rating,
            Self::Rating => Self::Comment,
            Self::Comment => Self::Name,
        }
    }
}

/// Field buffers and focus of the review entry form.
#[derive(Debug, Clone)]
pub struct ReviewForm {
    pub name: String,
    pub rating: String,
    pub comment: String,
    pub focus: FormField,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            rating: String::new(),
            comment: String::new(),
            focus: FormField::Name,
        }
    }
}

impl ReviewForm {
    /// Creates an empty form focused on the name field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a character to the focused field.
    pub fn push_char(&mut self, c: char) {
        self.focused_field_mut().push(c);
    }

    /// Removes the last character from the focused field.
    pub fn pop_char(&mut self) {
        self.focused_field_mut().pop();
    }

    /// Moves focus to the next field in tab order.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Builds the draft to append and resets the form.
    ///
    /// The rating text is parsed as an integer, defaulting to 0 when it is
    /// not one; bounds are not checked here or anywhere in the core.
    pub fn submit(&mut self) -> ReviewDraft {
        let form = std::mem::take(self);
        ReviewDraft {
            name: form.name,
            rating: form.rating.trim().parse().unwrap_or(0),
            comment: form.comment,
        }
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Rating => &mut self.rating,
            FormField::Comment => &mut self.comment,
        }
    }
}
