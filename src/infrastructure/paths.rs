//! Filesystem path utilities.
//!
//! Resolves the user data directory (trace files live there) and expands
//! tilde-prefixed theme-file paths.

use std::path::PathBuf;

/// Returns the data directory for Tastebook files.
///
/// Resolution order:
///
/// 1. `$XDG_DATA_HOME/tastebook` when `XDG_DATA_HOME` is set
/// 2. `$HOME/.local/share/tastebook`
/// 3. `.tastebook` relative to the working directory, as a last resort
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("tastebook");
        }
    }

    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("tastebook");
        }
    }

    PathBuf::from(".tastebook")
}

/// Expands a leading tilde to the user's home directory.
///
/// Paths without a tilde prefix are returned unchanged, as is everything when
/// `HOME` is unset.
///
/// # Examples
///
/// ```
/// use tastebook::infrastructure::paths::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Ok(home) = std::env::var("HOME") else {
        return path.to_string();
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
