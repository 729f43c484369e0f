//! Shared rendering utilities.
//!
//! Low-level helpers used across UI components: ANSI cursor positioning,
//! screen clearing, and character-safe text truncation for fixed-width
//! columns.

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\x1b[{row};{col}H`. Coordinates are
/// 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Clears the whole screen and homes the cursor.
///
/// Issued once per frame before the component renderers run; individual rows
/// are additionally padded to the full terminal width, so stale cells cannot
/// survive a redraw.
pub fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[H");
}

/// Truncates text to at most `max` characters, appending `...` when cut.
///
/// Operates on characters, not bytes, so multi-byte names never split in the
/// middle of a code point. A `max` of 3 or less degenerates to a plain cut.
#[must_use]
pub fn truncate_text(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }

    if max <= 3 {
        return text.chars().take(max).collect();
    }

    let mut truncated: String = text.chars().take(max - 3).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::truncate_text;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate_text("Sushi Bar", 24), "Sushi Bar");
    }

    #[test]
    fn long_text_gets_ellipsis_within_budget() {
        let out = truncate_text("An Extremely Long Restaurant Name", 12);
        assert_eq!(out.chars().count(), 12);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn multibyte_text_truncates_on_char_boundary() {
        let out = truncate_text("Čevabdžinica Željo", 10);
        assert_eq!(out.chars().count(), 10);
    }
}
