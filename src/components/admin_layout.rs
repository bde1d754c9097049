//! Admin shell: sidebar menu plus the current view's title.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin view renders inside this layout; the sidebar entries come from
//! `routes::ADMIN_MENU` so the menu and the route table cannot drift.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::routes::{ADMIN_MENU, ViewKind};
use crate::state::auth::AuthState;
use crate::state::session::AppSession;

#[component]
pub fn AdminLayout(kind: ViewKind, children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();

    let admin_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let admin_email = move || auth.with(|a| a.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let _ = session.logout().await;
        });
    };

    let menu = ADMIN_MENU
        .iter()
        .map(|entry| {
            let active = *entry == kind;
            view! {
                <li class:admin-menu__item--active=active>
                    <A href=entry.path()>{entry.title()}</A>
                </li>
            }
        })
        .collect_view();

    view! {
        <Title text=format!("{} | Nihongo Admin", kind.title())/>
        <div class="admin-layout">
            <aside class="admin-layout__sidebar">
                <ul class="admin-menu">{menu}</ul>
                <div class="admin-layout__user">
                    <span>{admin_name}</span>
                    <span class="admin-layout__email">{admin_email}</span>
                    <button on:click=on_logout disabled=move || auth.with(AuthState::busy)>
                        "Logout"
                    </button>
                </div>
            </aside>
            <main class="admin-layout__content">
                <h1 class="admin-layout__title">{kind.title()}</h1>
                {children()}
            </main>
        </div>
    }
}
