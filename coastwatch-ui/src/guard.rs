//! Role Guard
//!
//! Decides whether a session may enter a role-restricted view. The guard
//! only returns a verdict; the router turns a redirect into navigation.

use crate::routes::AppRoute;
use crate::session::{Role, Session};

/// Outcome of a guard check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(AppRoute),
}

/// True iff a session is present and holds the required role
pub fn can_enter(session: Option<&Session>, required: Role) -> bool {
    matches!(session, Some(s) if s.role == required)
}

/// Allow, or send the visitor to the login view
pub fn check(session: Option<&Session>, required: Role) -> Access {
    if can_enter(session, required) {
        Access::Allow
    } else {
        Access::Redirect(AppRoute::Login)
    }
}
