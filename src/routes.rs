//! View tags, paths, and role policies.
//!
//! DESIGN
//! ======
//! Every routed view is named by a [`ViewKind`] tag chosen at the routing
//! layer. The route guard reads the tag (never the rendered output) to decide
//! whether a view is the home dispatcher or which roles may see it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

/// Tag identifying a routed view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// `/`: no content of its own, only dispatches by role.
    Home,
    Login,
    Signup,
    Lessons,
    LessonStudy,
    Tutorials,
    Dashboard,
    AddLesson,
    AddVocabulary,
    ManageUsers,
    LessonManagement,
    VocabularyManagement,
    TutorialManagement,
}

const USER_ONLY: &[Role] = &[Role::User];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Entries shown in the admin sidebar, in display order.
pub const ADMIN_MENU: &[ViewKind] = &[
    ViewKind::Dashboard,
    ViewKind::AddLesson,
    ViewKind::AddVocabulary,
    ViewKind::ManageUsers,
    ViewKind::LessonManagement,
    ViewKind::VocabularyManagement,
    ViewKind::TutorialManagement,
];

impl ViewKind {
    /// Router path. `LessonStudy` is parameterized; use [`lesson_study_path`].
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Lessons => "/lessons",
            Self::LessonStudy => "/lessons/:id",
            Self::Tutorials => "/tutorials",
            Self::Dashboard => "/dashboard",
            Self::AddLesson => "/dashboard/add-lessons",
            Self::AddVocabulary => "/dashboard/add-vocabularies",
            Self::ManageUsers => "/dashboard/manage-users",
            Self::LessonManagement => "/dashboard/lesson-management",
            Self::VocabularyManagement => "/dashboard/vocabulary-management",
            Self::TutorialManagement => "/dashboard/tutorial-management",
        }
    }

    /// Roles allowed to render this view. Empty means any authenticated role.
    #[must_use]
    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            Self::Login | Self::Signup => &[],
            Self::Home | Self::Lessons | Self::LessonStudy | Self::Tutorials => USER_ONLY,
            Self::Dashboard
            | Self::AddLesson
            | Self::AddVocabulary
            | Self::ManageUsers
            | Self::LessonManagement
            | Self::VocabularyManagement
            | Self::TutorialManagement => ADMIN_ONLY,
        }
    }

    /// Whether the view sits behind the route guard.
    #[must_use]
    pub fn is_protected(self) -> bool {
        !matches!(self, Self::Login | Self::Signup)
    }

    /// Heading shown by the admin layout and sidebar.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Log in",
            Self::Signup => "Sign up",
            Self::Lessons => "Lessons",
            Self::LessonStudy => "Lesson",
            Self::Tutorials => "Tutorials",
            Self::Dashboard => "Dashboard",
            Self::AddLesson => "Add Lessons",
            Self::AddVocabulary => "Add Vocabularies",
            Self::ManageUsers => "Manage Users",
            Self::LessonManagement => "Lesson Management",
            Self::VocabularyManagement => "Vocabulary Management",
            Self::TutorialManagement => "Tutorial Management",
        }
    }
}

/// Path of the study view for a lesson number.
#[must_use]
pub fn lesson_study_path(lesson_number: u32) -> String {
    format!("/lessons/{lesson_number}")
}

/// The view a role lands on when it has nowhere more specific to go.
/// `None` for roles this client does not recognize.
#[must_use]
pub fn role_home(role: Role) -> Option<ViewKind> {
    match role {
        Role::User => Some(ViewKind::Lessons),
        Role::Admin => Some(ViewKind::Dashboard),
        Role::Unknown => None,
    }
}

/// A requested view plus the roles allowed to see it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    pub view: ViewKind,
    pub allowed_roles: Vec<Role>,
}

impl NavigationIntent {
    /// Intent carrying the view's declared role policy.
    #[must_use]
    pub fn for_view(view: ViewKind) -> Self {
        Self { view, allowed_roles: view.allowed_roles().to_vec() }
    }

    /// Intent with an explicit role policy.
    #[must_use]
    pub fn with_roles(view: ViewKind, allowed_roles: &[Role]) -> Self {
        Self { view, allowed_roles: allowed_roles.to_vec() }
    }
}
