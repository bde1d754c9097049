use super::*;
use crate::net::types::{Identity, Role};
use crate::state::auth::{PendingOp, SessionPhase};

const ALL_VIEWS: &[ViewKind] = &[
    ViewKind::Home,
    ViewKind::Lessons,
    ViewKind::LessonStudy,
    ViewKind::Tutorials,
    ViewKind::Dashboard,
    ViewKind::AddLesson,
    ViewKind::AddVocabulary,
    ViewKind::ManageUsers,
    ViewKind::LessonManagement,
    ViewKind::VocabularyManagement,
    ViewKind::TutorialManagement,
];

fn user(role: Role) -> Identity {
    Identity {
        id: "u1".to_owned(),
        name: "Hana".to_owned(),
        email: "hana@example.com".to_owned(),
        avatar: None,
        role,
        registered_at: None,
    }
}

fn resolved(role: Option<Role>) -> AuthState {
    AuthState { user: role.map(user), phase: SessionPhase::Resolved, pending: None }
}

fn role_sets() -> Vec<Vec<Role>> {
    vec![vec![], vec![Role::User], vec![Role::Admin], vec![Role::User, Role::Admin]]
}

// =============================================================================
// rule 1: loading
// =============================================================================

#[test]
fn loading_always_yields_placeholder() {
    for phase in [SessionPhase::Unresolved, SessionPhase::Resolving] {
        for identity in [None, Some(Role::User), Some(Role::Admin), Some(Role::Unknown)] {
            for roles in role_sets() {
                for view in ALL_VIEWS {
                    let state = AuthState { user: identity.map(user), phase, pending: None };
                    let intent = NavigationIntent::with_roles(*view, &roles);
                    assert_eq!(evaluate(&state, &intent), GuardOutcome::Placeholder, "{phase:?} {view:?} {roles:?}");
                }
            }
        }
    }
}

// =============================================================================
// rule 2: no identity
// =============================================================================

#[test]
fn missing_identity_always_redirects_to_login() {
    let state = resolved(None);
    for roles in role_sets() {
        for view in ALL_VIEWS {
            let intent = NavigationIntent::with_roles(*view, &roles);
            assert_eq!(evaluate(&state, &intent), GuardOutcome::Redirect(ViewKind::Login), "{view:?} {roles:?}");
        }
    }
}

#[test]
fn pending_operation_does_not_block_decision() {
    let state = AuthState { pending: Some(PendingOp::Logout), ..resolved(Some(Role::User)) };
    assert_eq!(evaluate(&state, &NavigationIntent::for_view(ViewKind::Lessons)), GuardOutcome::Render);
}

// =============================================================================
// rule 3: role mismatch
// =============================================================================

#[test]
fn user_on_admin_view_goes_to_lessons() {
    let intent = NavigationIntent::with_roles(ViewKind::Dashboard, &[Role::Admin]);
    assert_eq!(evaluate(&resolved(Some(Role::User)), &intent), GuardOutcome::Redirect(ViewKind::Lessons));
}

#[test]
fn admin_on_user_view_goes_to_dashboard() {
    let intent = NavigationIntent::with_roles(ViewKind::Lessons, &[Role::User]);
    assert_eq!(evaluate(&resolved(Some(Role::Admin)), &intent), GuardOutcome::Redirect(ViewKind::Dashboard));
}

#[test]
fn unrecognized_role_falls_back_to_login() {
    let intent = NavigationIntent::for_view(ViewKind::Tutorials);
    assert_eq!(evaluate(&resolved(Some(Role::Unknown)), &intent), GuardOutcome::Redirect(ViewKind::Login));
}

#[test]
fn empty_role_set_admits_any_identity() {
    let intent = NavigationIntent::with_roles(ViewKind::Tutorials, &[]);
    for role in [Role::User, Role::Admin, Role::Unknown] {
        assert_eq!(evaluate(&resolved(Some(role)), &intent), GuardOutcome::Render, "{role:?}");
    }
}

// =============================================================================
// rule 4: home dispatch
// =============================================================================

#[test]
fn home_dispatches_user_to_lessons_even_when_allowed() {
    let intent = NavigationIntent::with_roles(ViewKind::Home, &[Role::User]);
    assert_eq!(evaluate(&resolved(Some(Role::User)), &intent), GuardOutcome::Redirect(ViewKind::Lessons));
}

#[test]
fn home_dispatches_admin_to_dashboard() {
    let intent = NavigationIntent::with_roles(ViewKind::Home, &[]);
    assert_eq!(evaluate(&resolved(Some(Role::Admin)), &intent), GuardOutcome::Redirect(ViewKind::Dashboard));
}

// =============================================================================
// rule 5: render
// =============================================================================

#[test]
fn allowed_role_renders_view() {
    assert_eq!(
        evaluate(&resolved(Some(Role::Admin)), &NavigationIntent::for_view(ViewKind::ManageUsers)),
        GuardOutcome::Render
    );
    assert_eq!(
        evaluate(&resolved(Some(Role::User)), &NavigationIntent::for_view(ViewKind::LessonStudy)),
        GuardOutcome::Render
    );
}

#[test]
fn redirect_target_only_for_redirects() {
    assert_eq!(GuardOutcome::Redirect(ViewKind::Login).redirect_target(), Some(ViewKind::Login));
    assert_eq!(GuardOutcome::Render.redirect_target(), None);
    assert_eq!(GuardOutcome::Placeholder.redirect_target(), None);
}
