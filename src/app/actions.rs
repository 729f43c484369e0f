//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Actions are the boundary between pure state transitions and anything the
//! terminal runtime must do on the app's behalf. The review table mutates
//! only in-memory state, so the vocabulary is small: the single effect the
//! app asks of its runtime is to stop the event loop.

/// Commands for the terminal runtime, produced by the event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the event loop, restore the terminal, and exit.
    Quit,
}
