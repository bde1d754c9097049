//! Toast stack rendered once at the app root.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

fn kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Loading => "toast toast--loading",
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div class=kind_class(entry.toast.kind) on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            {entry.toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
