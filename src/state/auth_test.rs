use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.role().is_none());
}

#[test]
fn auth_state_default_is_loading_until_resolved() {
    let state = AuthState::default();
    assert_eq!(state.phase, SessionPhase::Unresolved);
    assert!(state.loading());
}

#[test]
fn auth_state_resolving_is_loading() {
    let state = AuthState { phase: SessionPhase::Resolving, ..AuthState::default() };
    assert!(state.loading());
}

#[test]
fn auth_state_resolved_is_not_loading() {
    let state = AuthState { phase: SessionPhase::Resolved, ..AuthState::default() };
    assert!(!state.loading());
}

// =============================================================
// pending operations
// =============================================================

#[test]
fn auth_state_busy_tracks_pending_op() {
    let mut state = AuthState::default();
    assert!(!state.busy());
    state.pending = Some(PendingOp::Login);
    assert!(state.busy());
}

#[test]
fn auth_state_refuses_submit_while_resolving_or_busy() {
    let resolving = AuthState { phase: SessionPhase::Resolving, ..AuthState::default() };
    assert!(!resolving.accepts_submit());

    let mut state = AuthState { phase: SessionPhase::Resolved, ..AuthState::default() };
    assert!(state.accepts_submit());
    state.pending = Some(PendingOp::Signup);
    assert!(!state.accepts_submit());
}
