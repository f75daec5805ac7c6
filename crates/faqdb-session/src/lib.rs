//! faqdb-session
//!
//! Caller-side state for an FAQ view: pure filter-state transitions, a
//! session that re-runs the search when the state changes, and a debouncer
//! for keystroke-driven queries.

pub mod debounce;
pub mod session;
pub mod state;

pub use debounce::Debouncer;
pub use session::{FaqSession, SearchView};
