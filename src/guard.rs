//! Navigation guard: which screen a navigation attempt lands on.

use crate::types::UserIdentity;

/// The two logical screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Entry,
    Dashboard,
}

/// Pure predicate gating the dashboard. Re-evaluated on every navigation
/// attempt; never cached, since the identity can be cleared between visits.
pub fn dashboard_allowed(identity: &UserIdentity) -> bool {
    identity.is_complete()
}

/// Resolve a path against the current identity. `/dashboard` admits only a
/// complete identity; everything else, known or not, lands on the entry
/// screen.
pub fn resolve(path: &str, identity: &UserIdentity) -> Screen {
    match path {
        "/dashboard" if dashboard_allowed(identity) => Screen::Dashboard,
        _ => Screen::Entry,
    }
}
