//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{admin_layout::AdminLayout, nav_bar::NavBar, protected_route::ProtectedRoute, toaster::Toaster};
use crate::config::AppConfig;
use crate::net::http::ApiClient;
use crate::pages::admin::{
    add_lesson::AddLessonPage, add_vocabulary::AddVocabularyPage, dashboard::DashboardPage,
    lesson_management::LessonManagementPage, manage_users::ManageUsersPage,
    tutorial_management::TutorialManagementPage, vocabulary_management::VocabularyManagementPage,
};
use crate::pages::{
    lesson_study::LessonStudyPage, lessons::LessonsPage, login::LoginPage, not_found::NotFoundPage,
    signup::SignupPage, tutorials::TutorialsPage,
};
use crate::routes::ViewKind;
use crate::state::{
    auth::AuthState,
    cache::{CacheState, invalidate},
    credentials::CookieCredentials,
    session::{AppSession, SessionStore},
    toast::ToastState,
};

/// Build-time config, falling back to defaults when malformed.
fn load_config() -> AppConfig {
    AppConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("config: {e}; using defaults");
        AppConfig::default()
    })
}

fn learner_route<V: IntoView + 'static>(kind: ViewKind, page: fn() -> V) -> impl IntoView {
    view! { <ProtectedRoute kind=kind>{page()}</ProtectedRoute> }
}

fn admin_route<V: IntoView + 'static>(kind: ViewKind, page: fn() -> V) -> impl IntoView {
    view! {
        <ProtectedRoute kind=kind>
            <AdminLayout kind=kind>{page()}</AdminLayout>
        </ProtectedRoute>
    }
}

/// Root application component.
///
/// Constructs the session store, provides all shared contexts, starts
/// identity resolution, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    log::info!("api base url: {}", config.api_base_url);
    let api = ApiClient::new(config);

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    let cache = RwSignal::new(CacheState::default());

    let session: AppSession = SessionStore::new(api.clone(), auth, Arc::new(CookieCredentials), Arc::new(toasts))
        .with_invalidation(move || invalidate(cache));

    provide_context(api);
    provide_context(auth);
    provide_context(toasts);
    provide_context(cache);
    provide_context(session.clone());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        session.resolve_current_identity().await;
    });
    #[cfg(not(feature = "csr"))]
    drop(session);

    view! {
        <Title text="Nihongo"/>

        <Router>
            <NavBar/>
            <Toaster/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=|| learner_route(ViewKind::Home, || ())/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("lessons") view=|| learner_route(ViewKind::Lessons, LessonsPage)/>
                <Route
                    path=(StaticSegment("lessons"), ParamSegment("id"))
                    view=|| learner_route(ViewKind::LessonStudy, LessonStudyPage)
                />
                <Route path=StaticSegment("tutorials") view=|| learner_route(ViewKind::Tutorials, TutorialsPage)/>
                <Route path=StaticSegment("dashboard") view=|| admin_route(ViewKind::Dashboard, DashboardPage)/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("add-lessons"))
                    view=|| admin_route(ViewKind::AddLesson, AddLessonPage)
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("add-vocabularies"))
                    view=|| admin_route(ViewKind::AddVocabulary, AddVocabularyPage)
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("manage-users"))
                    view=|| admin_route(ViewKind::ManageUsers, ManageUsersPage)
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("lesson-management"))
                    view=|| admin_route(ViewKind::LessonManagement, LessonManagementPage)
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("vocabulary-management"))
                    view=|| admin_route(ViewKind::VocabularyManagement, VocabularyManagementPage)
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("tutorial-management"))
                    view=|| admin_route(ViewKind::TutorialManagement, TutorialManagementPage)
                />
            </Routes>
        </Router>
    }
}
