//! Login page: email + password.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes::ViewKind;
use crate::state::auth::{AuthState, PendingOp};
use crate::state::session::AppSession;
use crate::util::auth::install_signed_in_redirect;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    install_signed_in_redirect(auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !auth.with_untracked(AuthState::accepts_submit) {
            return;
        }
        let session = session.clone();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        leptos::task::spawn_local(async move {
            // Failures are already shown as toasts; keep the form input.
            if session.login(&email_value, &password_value).await.is_ok() {
                password.set(String::new());
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Log in to continue learning"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label>
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            class="auth-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || show_password.get()
                            on:change=move |ev| show_password.set(event_target_checked(&ev))
                        />
                        "Show password"
                    </label>
                    <button class="auth-button" type="submit" disabled=move || !auth.with(AuthState::accepts_submit)>
                        {move || if auth.with(|a| a.pending == Some(PendingOp::Login)) { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "New here? " <A href=ViewKind::Signup.path()>"Create an account"</A>
                </p>
            </div>
        </div>
    }
}
