//! Session store: the single owner of "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once in `App` and provided through context. Pages call
//! `login`/`signup`/`logout`; the route guard only reads the `AuthState` the
//! store writes.
//!
//! DESIGN
//! ======
//! Lifecycle is `Unresolved -> Resolving -> Resolved(identity | none)`.
//! Startup resolution always settles in `Resolved`, even when its future is
//! dropped, because the route guard blocks on it.
//!
//! Resolution, login, signup, and logout are serialized: while one is in
//! flight the others return `SessionError::Busy`, so a late `GET /user`
//! answer can never overwrite a session established after it was sent. The
//! pending marker is held by a drop guard so a cancelled operation cannot
//! wedge the forms.
//!
//! A successful identity change calls the invalidation hook so cached data
//! refetches under the new identity instead of reloading the page.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::auth::AuthApi;
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{AuthResponse, Identity};
use crate::state::auth::{AuthState, PendingOp, SessionPhase};
use crate::state::credentials::CredentialStore;
use crate::state::toast::{Notifier, Toast};
use crate::util::validate::{self, SignupForm};

const LOGIN_TOAST: &str = "login";
const SIGNUP_TOAST: &str = "signup";

/// Session store wired to the browser HTTP client and reactive state.
pub type AppSession = SessionStore<ApiClient, RwSignal<AuthState>>;

/// Errors returned by session operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("another session operation is in progress: {0:?}")]
    Busy(PendingOp),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Result of a logout: whether the server acknowledged the invalidation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutOutcome {
    Confirmed,
    /// The server call failed; only the local session was cleared.
    LocalOnly,
}

/// Storage for the session's `AuthState`.
pub trait SessionCell: Clone {
    fn snapshot(&self) -> AuthState;
    fn modify(&self, f: impl FnOnce(&mut AuthState));
}

impl SessionCell for RwSignal<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.try_get_untracked().unwrap_or_default()
    }

    fn modify(&self, f: impl FnOnce(&mut AuthState)) {
        self.update(f);
    }
}

/// Applies `reset` to the cell when dropped.
struct Settle<C: SessionCell> {
    cell: C,
    reset: fn(&mut AuthState),
}

impl<C: SessionCell> Drop for Settle<C> {
    fn drop(&mut self) {
        self.cell.modify(self.reset);
    }
}

fn clear_pending(state: &mut AuthState) {
    state.pending = None;
}

fn settle_resolution(state: &mut AuthState) {
    if state.phase == SessionPhase::Resolving {
        state.phase = SessionPhase::Resolved;
    }
    clear_pending(state);
}

pub struct SessionStore<A, C> {
    api: Arc<A>,
    cell: C,
    credentials: Arc<dyn CredentialStore + Send + Sync>,
    notifier: Arc<dyn Notifier + Send + Sync>,
    invalidate: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl<A, C: Clone> Clone for SessionStore<A, C> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            cell: self.cell.clone(),
            credentials: Arc::clone(&self.credentials),
            notifier: Arc::clone(&self.notifier),
            invalidate: self.invalidate.clone(),
        }
    }
}

impl<A: AuthApi, C: SessionCell> SessionStore<A, C> {
    pub fn new(
        api: A,
        cell: C,
        credentials: Arc<dyn CredentialStore + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
    ) -> Self {
        Self { api: Arc::new(api), cell, credentials, notifier, invalidate: None }
    }

    /// Call `hook` whenever the identity changes.
    #[must_use]
    pub fn with_invalidation(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.invalidate = Some(Arc::new(hook));
        self
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.cell.snapshot()
    }

    /// Resolve the identity behind the stored credential.
    ///
    /// Failure of any kind leaves no identity and clears the stale credential.
    /// Nothing is surfaced to the user. Skipped while another operation is in
    /// flight; that operation settles the identity itself.
    pub async fn resolve_current_identity(&self) {
        let before = self.cell.snapshot();
        if before.phase == SessionPhase::Resolving || before.pending.is_some() {
            return;
        }
        self.cell.modify(|s| {
            s.phase = SessionPhase::Resolving;
            s.pending = Some(PendingOp::Resolve);
        });
        let _settle = Settle { cell: self.cell.clone(), reset: settle_resolution };

        let user = match self.api.current_user().await {
            Ok(user) => {
                log::info!("session: resolved identity {} ({})", user.id, user.role.label());
                Some(user)
            }
            Err(e) => {
                if e.is_auth_failure() {
                    log::info!("session: no active session: {e}");
                } else {
                    log::warn!("session: identity resolution failed: {e}");
                }
                if self.credentials.token().is_some() {
                    self.credentials.clear();
                }
                None
            }
        };

        let changed = before.user.as_ref().map(|u| &u.id) != user.as_ref().map(|u| &u.id);
        self.cell.modify(|s| {
            s.user = user;
            s.phase = SessionPhase::Resolved;
        });
        if changed {
            self.invalidate();
        }
    }

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// `Busy` while another operation (including startup resolution) is
    /// pending, `Validation` for unusable
    /// input (no request is sent), `Api` when the server rejects the login.
    /// The error has already been shown to the user.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, SessionError> {
        let _pending = self.begin(PendingOp::Login)?;
        let request = validate::login(email, password).map_err(|m| self.reject(m))?;

        self.notifier.show(Toast::loading("Logging in...").keyed(LOGIN_TOAST));
        match self.api.login(&request).await {
            Ok(response) => Ok(self.establish(response, LOGIN_TOAST, "Logged in successfully")),
            Err(e) => Err(self.fail(e, LOGIN_TOAST, "Login failed")),
        }
    }

    /// Register a new account and log in as it.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::login`]. A form without an uploaded avatar is
    /// a `Validation` error.
    pub async fn signup(&self, form: &SignupForm) -> Result<Identity, SessionError> {
        let _pending = self.begin(PendingOp::Signup)?;
        let request = validate::signup(form).map_err(|m| self.reject(m))?;

        self.notifier.show(Toast::loading("Creating account...").keyed(SIGNUP_TOAST));
        match self.api.signup(&request).await {
            Ok(response) => Ok(self.establish(response, SIGNUP_TOAST, "Signed up successfully")),
            Err(e) => Err(self.fail(e, SIGNUP_TOAST, "Signup failed")),
        }
    }

    /// End the session. Local identity and credential are always cleared;
    /// a failed server call is only logged.
    ///
    /// # Errors
    ///
    /// `Busy` while another operation is pending.
    pub async fn logout(&self) -> Result<LogoutOutcome, SessionError> {
        let _pending = self.begin(PendingOp::Logout)?;

        let outcome = match self.api.logout().await {
            Ok(()) => LogoutOutcome::Confirmed,
            Err(e) => {
                log::warn!("session: server logout failed: {e}");
                LogoutOutcome::LocalOnly
            }
        };

        self.credentials.clear();
        self.cell.modify(|s| {
            s.user = None;
            s.phase = SessionPhase::Resolved;
        });
        self.invalidate();
        log::info!("session: logged out ({outcome:?})");
        Ok(outcome)
    }

    fn begin(&self, op: PendingOp) -> Result<Settle<C>, SessionError> {
        if let Some(current) = self.cell.snapshot().pending {
            return Err(SessionError::Busy(current));
        }
        self.cell.modify(|s| s.pending = Some(op));
        Ok(Settle { cell: self.cell.clone(), reset: clear_pending })
    }

    fn reject(&self, message: &str) -> SessionError {
        self.notifier.show(Toast::error(message));
        SessionError::Validation(message.to_owned())
    }

    fn establish(&self, response: AuthResponse, key: &'static str, fallback: &str) -> Identity {
        let AuthResponse { token, user, message } = response;
        self.credentials.save(&token);
        let identity = user.clone();
        self.cell.modify(|s| {
            s.user = Some(user);
            s.phase = SessionPhase::Resolved;
        });
        self.invalidate();
        log::info!("session: signed in as {} ({})", identity.id, identity.role.label());
        self.notifier.show(Toast::success(message.unwrap_or_else(|| fallback.to_owned())).keyed(key));
        identity
    }

    fn fail(&self, error: ApiError, key: &'static str, fallback: &str) -> SessionError {
        let shown = error.server_message().unwrap_or(fallback).to_owned();
        log::error!("session: {key} failed: {error}");
        self.notifier.show(Toast::error(shown).keyed(key));
        SessionError::Api(error)
    }

    fn invalidate(&self) {
        if let Some(hook) = &self.invalidate {
            hook();
        }
    }
}
