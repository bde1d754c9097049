//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by `state::session::SessionStore`; read by the route guard and
//! identity-aware components (nav bar, forms that attach the submitter email).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Identity, Role};

/// Where the session is in its startup lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup resolution has not begun.
    #[default]
    Unresolved,
    /// `GET /user` is in flight.
    Resolving,
    /// The identity (or its absence) is known.
    Resolved,
}

/// A session operation currently in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingOp {
    /// Startup resolution (`GET /user`).
    Resolve,
    Login,
    Signup,
    Logout,
}

/// Authentication state tracking the current user and lifecycle phase.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<Identity>,
    pub phase: SessionPhase,
    pub pending: Option<PendingOp>,
}

impl AuthState {
    /// True until startup resolution has settled.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.phase != SessionPhase::Resolved
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Whether a login/signup/logout is in flight (forms disable submit).
    #[must_use]
    pub fn busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the login and signup forms may submit.
    #[must_use]
    pub fn accepts_submit(&self) -> bool {
        !self.loading() && !self.busy()
    }
}
