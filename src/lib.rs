//! Tastebook: an interactive terminal table of restaurant reviews.
//!
//! Tastebook keeps an in-memory table of user-submitted reviews (name,
//! rating, comment) and provides:
//! - an entry form appending new reviews
//! - free-text filtering on restaurant names with a 1-second input debounce
//! - per-column sorting with a three-state cycle (ascending, descending, off)
//! - multi-row selection with a tri-state "select all" checkbox
//! - bulk deletion of the selected rows
//!
//! # Architecture
//!
//! The crate follows a layered, event-driven architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal runtime (main.rs)                         │  ← raw mode, key mapping
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application layer (app/)                           │  ← event handling
//! │  - State container and view recompute               │  ← mode machine
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                        │
//! ┌───────────────────┐   ┌───────────────────┐
//! │ Table core        │   │ UI layer          │
//! │ (table/)          │   │ (ui/)             │
//! │ - Review store    │   │ - Components      │
//! │ - Debounced filter│   │ - Theming         │
//! │ - Sort, selection │   │ - View models     │
//! └───────────────────┘   └───────────────────┘
//!         │                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, infrastructure, observability              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The row list the user sees is derived state: the store owns the reviews in
//! insertion order, the filter and sort produce a list of review *ids*, and
//! the selection is a set of ids — so reordering or filtering the view can
//! never change which reviews are selected or deleted.
//!
//! # Identity over position
//!
//! Every review receives a permanent [`domain::ReviewId`] at append. All
//! selection and removal logic is keyed by that id; translating ids to row
//! positions happens only at render time. Deleting the selection under an
//! active sort or filter therefore removes exactly the chosen reviews, never
//! "whatever now sits at row 3".
//!
//! # Example
//!
//! ```
//! use tastebook::app::{handle_event, AppState, Event};
//! use tastebook::domain::ReviewDraft;
//! use tastebook::ui::Theme;
//! use std::time::Duration;
//!
//! let mut state = AppState::new(Theme::default(), Duration::from_millis(1000));
//! state.append_review(ReviewDraft::new("Pasta Place", 4, "great carbonara"));
//!
//! let (should_render, actions) = handle_event(&mut state, &Event::CursorDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), tastebook::domain::TastebookError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod table;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{Result, Review, ReviewDraft, ReviewId, TastebookError};
pub use ui::Theme;

use std::time::Duration;

/// Default debounce quiet period for the search filter, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

/// Application configuration parsed from environment variables.
///
/// | Variable | Meaning | Default |
/// |---|---|---|
/// | `TASTEBOOK_THEME` | Built-in theme name | `catppuccin-mocha` |
/// | `TASTEBOOK_THEME_FILE` | Path to a custom TOML theme | unset |
/// | `TASTEBOOK_TRACE_LEVEL` | Span filter level for trace export | `info` |
/// | `TASTEBOOK_DEBOUNCE_MS` | Search debounce quiet period | `1000` |
#[derive(Debug, Clone)]
pub struct Config {
    /// Built-in theme name. Ignored when `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; takes precedence over `theme_name`.
    /// A leading `~` expands to the home directory.
    pub theme_file: Option<String>,

    /// Tracing level for span export (`trace`, `debug`, `info`, `warn`,
    /// `error`). `RUST_LOG` overrides this when set.
    pub trace_level: Option<String>,

    /// Search debounce quiet period in milliseconds.
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Unset variables fall back to defaults; a malformed
    /// `TASTEBOOK_DEBOUNCE_MS` falls back rather than erroring, matching the
    /// lenient parsing the rest of the configuration uses.
    #[must_use]
    pub fn from_env() -> Self {
        let get = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let debounce_ms = get("TASTEBOOK_DEBOUNCE_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_DEBOUNCE_MS);

        Self {
            theme_name: get("TASTEBOOK_THEME"),
            theme_file: get("TASTEBOOK_THEME_FILE"),
            trace_level: get("TASTEBOOK_TRACE_LEVEL"),
            debounce_ms,
        }
    }

    /// The debounce quiet period as a [`Duration`].
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Creates the initial application state from configuration.
///
/// Resolves the theme (custom file first, then built-in name, then default)
/// and constructs an empty [`AppState`] ready for event processing. Theme
/// loading failures fall back to the default theme with a debug trace rather
/// than aborting startup.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing tastebook");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |name| {
                Theme::from_name(name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |file| {
            let path = infrastructure::paths::expand_tilde(file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme, config.debounce())
}
