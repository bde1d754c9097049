//! Video tutorials: a player for the selected tutorial plus a thumbnail list.

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::net::types::Tutorial;
use crate::state::cache::Remote;
use crate::util::remote::load_remote;
use crate::util::youtube::{embed_url, thumbnail_url};

#[component]
pub fn TutorialsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let tutorials = load_remote(
        || (),
        move |()| {
            let api = api.clone();
            async move { api.tutorials().await }
        },
    );
    let selected = RwSignal::new(None::<String>);

    // First tutorial is selected by default, and again if the selection vanishes.
    Effect::new(move || {
        tutorials.with(|t| {
            let Some(list) = t.ready() else {
                return;
            };
            let still_listed = selected.with_untracked(|id| id.as_ref().is_some_and(|id| list.iter().any(|t| &t.id == id)));
            if !still_listed {
                selected.set(list.first().map(|t| t.id.clone()));
            }
        });
    });

    let current = move || {
        let id = selected.get()?;
        tutorials.with(|t| t.ready().and_then(|list| list.iter().find(|t| t.id == id).cloned()))
    };

    let player = move || {
        current().map(|tutorial: Tutorial| match embed_url(&tutorial.link) {
            Some(src) => {
                let title = tutorial.title.clone();
                view! {
                    <div class="tutorial-player">
                        <iframe src=src title=title allowfullscreen=true></iframe>
                        <h2>{tutorial.title}</h2>
                    </div>
                }
                .into_any()
            }
            None => view! {
                <div class="tutorial-player tutorial-player--invalid">
                    <h2>{tutorial.title}</h2>
                    <p>"This video link cannot be embedded."</p>
                </div>
            }
            .into_any(),
        })
    };

    let list = move |items: Vec<Tutorial>| {
        items
            .into_iter()
            .map(|tutorial| {
                let id = tutorial.id.clone();
                let active_id = tutorial.id.clone();
                let thumb = thumbnail_url(&tutorial.link).unwrap_or_default();
                view! {
                    <li
                        class="tutorial-item"
                        class:tutorial-item--active=move || selected.with(|s| s.as_deref() == Some(active_id.as_str()))
                        on:click=move |_| selected.set(Some(id.clone()))
                    >
                        <img src=thumb alt=""/>
                        <span>{tutorial.title}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <section class="tutorials-page">
            <h1>"Video Tutorials"</h1>
            {move || match tutorials.get() {
                Remote::Loading => view! { <p class="page-loading">"Loading tutorials..."</p> }.into_any(),
                Remote::Failed(_) => {
                    view! { <p class="page-error">"Error loading tutorials. Please try again later."</p> }.into_any()
                }
                Remote::Ready(items) if items.is_empty() => {
                    view! { <p class="page-empty">"No tutorials available yet."</p> }.into_any()
                }
                Remote::Ready(items) => {
                    view! {
                        <div class="tutorials-layout">
                            {player}
                            <ul class="tutorial-list">{list(items)}</ul>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
