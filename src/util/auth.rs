//! Route guard: decides whether a protected view may render.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route is wrapped in `ProtectedRoute`, which evaluates the
//! guard against the shared `AuthState` and applies redirects through
//! [`install_guard_redirect`]. No page repeats this logic.
//!
//! DESIGN
//! ======
//! Rules, first match wins:
//! 1. session still resolving: placeholder, no decision yet
//! 2. no identity: login
//! 3. role outside a non-empty allowed set: the role's home view (login for
//!    unrecognized roles)
//! 4. the home view: the role's home view, even when allowed
//! 5. otherwise render

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::{NavigationIntent, ViewKind, role_home};
use crate::state::auth::AuthState;

/// What a protected route should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Placeholder,
    Redirect(ViewKind),
    Render,
}

impl GuardOutcome {
    /// Redirect target, if any.
    #[must_use]
    pub fn redirect_target(self) -> Option<ViewKind> {
        match self {
            Self::Redirect(view) => Some(view),
            _ => None,
        }
    }
}

/// Evaluate the guard for one navigation.
#[must_use]
pub fn evaluate(state: &AuthState, intent: &NavigationIntent) -> GuardOutcome {
    if state.loading() {
        return GuardOutcome::Placeholder;
    }
    let Some(user) = &state.user else {
        return GuardOutcome::Redirect(ViewKind::Login);
    };
    let dispatch = GuardOutcome::Redirect(role_home(user.role).unwrap_or(ViewKind::Login));
    if !intent.allowed_roles.is_empty() && !intent.allowed_roles.contains(&user.role) {
        return dispatch;
    }
    if intent.view == ViewKind::Home {
        return dispatch;
    }
    GuardOutcome::Render
}

/// Navigate whenever the guard outcome for `intent` is a redirect.
///
/// Redirects replace the history entry so "back" does not bounce through the
/// guarded view again.
pub fn install_guard_redirect<F>(auth: RwSignal<AuthState>, intent: NavigationIntent, navigate: F) -> Memo<GuardOutcome>
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let outcome = Memo::new(move |_| auth.with(|state| evaluate(state, &intent)));
    Effect::new(move || {
        if let Some(target) = outcome.get().redirect_target() {
            log::info!("guard: redirecting to {}", target.path());
            navigate(target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
    outcome
}

/// Leave the login/signup forms for `/` once an identity is present; the
/// home view then dispatches by role.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let signed_in = auth.with(|state| !state.loading() && state.user.is_some());
        if signed_in {
            navigate(ViewKind::Home.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
