use super::*;

#[test]
fn role_home_dispatches_known_roles() {
    assert_eq!(role_home(Role::User), Some(ViewKind::Lessons));
    assert_eq!(role_home(Role::Admin), Some(ViewKind::Dashboard));
    assert_eq!(role_home(Role::Unknown), None);
}

#[test]
fn public_views_are_unprotected() {
    assert!(!ViewKind::Login.is_protected());
    assert!(!ViewKind::Signup.is_protected());
    assert!(ViewKind::Home.is_protected());
}

#[test]
fn admin_menu_views_are_admin_only() {
    for view in ADMIN_MENU {
        assert_eq!(view.allowed_roles(), &[Role::Admin], "{view:?}");
        assert!(view.path().starts_with("/dashboard"), "{view:?}");
    }
}

#[test]
fn learner_views_are_user_only() {
    for view in [ViewKind::Home, ViewKind::Lessons, ViewKind::LessonStudy, ViewKind::Tutorials] {
        assert_eq!(view.allowed_roles(), &[Role::User], "{view:?}");
    }
}

#[test]
fn lesson_study_path_embeds_number() {
    assert_eq!(lesson_study_path(7), "/lessons/7");
}

#[test]
fn intent_for_view_copies_declared_policy() {
    let intent = NavigationIntent::for_view(ViewKind::Dashboard);
    assert_eq!(intent.view, ViewKind::Dashboard);
    assert_eq!(intent.allowed_roles, vec![Role::Admin]);
}
