//! Fallback for unknown paths.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::ViewKind;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>"The page you're looking for seems to have wandered off."</p>
            <A href=ViewKind::Home.path() attr:class="not-found__home">"Go Home"</A>
        </div>
    }
}
