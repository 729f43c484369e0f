//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the terminal runtime (main.rs) and the table/ui
//! layers, implementing the event-driven architecture that powers the
//! interactive table.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key / Tick → Events → Event Handler → State Mutations → Actions → Runtime
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Runtime side-effect commands emitted by the event handler
//! - [`form`]: Review entry form buffers and submit parsing
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use form::{FormField, ReviewForm};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use state::AppState;
