//! Error types for Tastebook.
//!
//! This module defines the centralized error type [`TastebookError`] and a type
//! alias [`Result`] used throughout the crate. Errors are implemented with the
//! `thiserror` crate.
//!
//! The table core itself is infallible by design: removing absent ids and
//! toggling hidden ids are no-ops, not errors. Fallible surfaces are terminal
//! setup, theme loading, and configuration parsing.

use thiserror::Error;

/// The main error type for Tastebook operations.
///
/// Consolidates the error conditions that can occur outside the in-memory
/// table core: terminal I/O, theme loading, and configuration parsing.
///
/// # Examples
///
/// ```
/// use tastebook::domain::TastebookError;
///
/// fn load_theme() -> Result<(), TastebookError> {
///     Err(TastebookError::Theme("missing colors table".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum TastebookError {
    /// Terminal or filesystem I/O failed.
    ///
    /// Wraps errors from standard library I/O operations and terminal setup.
    /// Automatically converts from `std::io::Error` via `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML cannot be parsed.
    /// The string describes what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when an environment-provided configuration value is malformed.
    /// The string describes the specific problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Tastebook operations.
///
/// Type alias for `std::result::Result<T, TastebookError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, TastebookError>;
