//! Student portal client core.
//!
//! Identity state, remote data gateway, per-panel fetch state machines, and
//! the navigation guard, kept independent of the terminal shell in `main.rs`
//! so every transition is testable without a running API.

pub mod dashboard;
pub mod entry;
pub mod gateway;
pub mod guard;
pub mod panel;
pub mod state;
pub mod types;
