//! Learner navigation bar.
//!
//! Hidden for admins, who navigate through the dashboard sidebar instead.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Role;
use crate::routes::ViewKind;
use crate::state::auth::AuthState;
use crate::state::session::AppSession;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = StoredValue::new(expect_context::<AppSession>());

    let hidden = move || auth.with(|a| a.role() == Some(Role::Admin));
    let user_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let avatar = move || auth.with(|a| a.user.as_ref().and_then(|u| u.avatar.clone()));
    let signed_in = move || auth.with(|a| a.user.is_some());

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let session = session.get_value();
        leptos::task::spawn_local(async move {
            let _ = session.logout().await;
        });
    };

    view! {
        <Show when=move || !hidden()>
            <nav class="nav-bar">
                <A href=ViewKind::Home.path() attr:class="nav-bar__brand">
                    "Nihongo"
                </A>
                <div class="nav-bar__links">
                    <A href=ViewKind::Home.path()>"Home"</A>
                    <A href=ViewKind::Lessons.path()>"Lessons"</A>
                    <A href=ViewKind::Tutorials.path()>"Tutorials"</A>
                </div>
                <Show
                    when=signed_in
                    fallback=|| view! { <A href=ViewKind::Login.path()>"Log in"</A> }
                >
                    <div class="nav-bar__user">
                        {move || avatar().map(|src| view! { <img class="nav-bar__avatar" src=src alt="avatar"/> })}
                        <span>{user_name}</span>
                        <button
                            class="nav-bar__logout"
                            on:click=on_logout
                            disabled=move || auth.with(AuthState::busy)
                        >
                            "Logout"
                        </button>
                    </div>
                </Show>
            </nav>
        </Show>
    }
}
