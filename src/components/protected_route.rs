//! Route wrapper that applies the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected route in `App`. Children render only for a `Render`
//! outcome; redirects navigate with history replacement.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::{NavigationIntent, ViewKind};
use crate::state::auth::AuthState;
use crate::util::auth::{GuardOutcome, install_guard_redirect};

/// Guarded view. `kind` tags the view so the guard never inspects what is
/// rendered.
#[component]
pub fn ProtectedRoute(kind: ViewKind, children: ChildrenFn) -> impl IntoView {
    debug_assert!(kind.is_protected(), "{kind:?} is a public view");
    let auth = expect_context::<RwSignal<AuthState>>();
    let outcome = install_guard_redirect(auth, NavigationIntent::for_view(kind), use_navigate());

    view! {
        <Show
            when=move || outcome.get() == GuardOutcome::Render
            fallback=move || {
                (outcome.get() == GuardOutcome::Placeholder)
                    .then(|| view! { <div class="route-loading">"Loading..."</div> })
            }
        >
            {children()}
        </Show>
    }
}
