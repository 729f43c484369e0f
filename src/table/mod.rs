//! The review-table core: store, filter, sort, and selection.
//!
//! This layer owns the state machine with real invariants:
//!
//! - identities are permanent and never reused ([`store`])
//! - the committed filter lags typing by a quiet period ([`filter`],
//!   [`debounce`])
//! - sorting is stable, type-aware, and cycles per column ([`sort`])
//! - selection is keyed by identity and must survive any reordering of the
//!   view ([`selection`])
//!
//! Everything here is pure in-memory state mutated from the single-threaded
//! event loop; no operation blocks or fails.

pub mod debounce;
pub mod filter;
pub mod selection;
pub mod sort;
pub mod store;

pub use debounce::Debouncer;
pub use filter::SearchFilter;
pub use selection::{SelectAllStatus, Selection};
pub use sort::{SortColumn, SortDirection, SortOrder};
pub use store::ReviewStore;
