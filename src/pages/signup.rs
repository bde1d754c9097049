//! Signup page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The avatar is hosted by an external image service; this form takes the
//! resulting image URL. Submitting without one is allowed; the session store
//! rejects it with a notification before any request is made.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes::ViewKind;
use crate::state::auth::AuthState;
use crate::state::session::AppSession;
use crate::util::auth::install_signed_in_redirect;
use crate::util::validate::SignupForm;

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    install_signed_in_redirect(auth, use_navigate());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let avatar = RwSignal::new(String::new());

    let avatar_preview = move || {
        let url = avatar.get();
        let url = url.trim();
        (url.starts_with("http://") || url.starts_with("https://")).then(|| url.to_owned())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !auth.with_untracked(AuthState::accepts_submit) {
            return;
        }
        // A blank avatar is sent through so the store shows the picture notice.
        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            avatar: Some(avatar.get_untracked()),
        };
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let _ = session.signup(&form).await;
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__avatar">
                        {move || {
                            avatar_preview()
                                .map(|src| view! { <img class="auth-form__avatar-preview" src=src alt="avatar preview"/> })
                        }}
                        <label>
                            "Profile picture URL"
                            <input
                                class="auth-input"
                                type="url"
                                placeholder="https://..."
                                prop:value=move || avatar.get()
                                on:input=move |ev| avatar.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label>
                        "Name"
                        <input
                            class="auth-input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="auth-button" type="submit" disabled=move || !auth.with(AuthState::accepts_submit)>
                        "Sign up"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <A href=ViewKind::Login.path()>"Log in"</A>
                </p>
            </div>
        </div>
    }
}
