//! Tutorial management: list, create, edit, delete.

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::net::types::Tutorial;
use crate::pages::admin::add_vocabulary::text_field;
use crate::state::cache::Remote;
use crate::util::browser::confirm;
use crate::util::remote::{Mutations, load_remote};
use crate::util::validate;
use crate::util::youtube::thumbnail_url;

#[component]
pub fn TutorialManagementPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let mutations = Mutations::from_context();

    let tutorials = load_remote(|| (), {
        let api = api.clone();
        move |()| {
            let api = api.clone();
            async move { api.admin_tutorials().await }
        }
    });

    let title = RwSignal::new(String::new());
    let link = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let editing = RwSignal::new(None::<String>);

    let reset_form = move || {
        title.set(String::new());
        link.set(String::new());
        editing.set(None);
    };

    let on_save = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if saving.get_untracked() {
                return;
            }
            let tutorial = match validate::tutorial(&title.get_untracked(), &link.get_untracked()) {
                Ok(tutorial) => tutorial,
                Err(message) => return mutations.reject(message),
            };
            saving.set(true);
            let api = api.clone();
            let target = editing.get_untracked();
            mutations.run(
                async move {
                    match target {
                        Some(id) => api.update_tutorial(&id, &tutorial).await,
                        None => api.create_tutorial(&tutorial).await.map(|_| ()),
                    }
                },
                "Tutorial saved!",
                "Error adding tutorial.",
                move |ok| {
                    saving.set(false);
                    if ok {
                        reset_form();
                    }
                },
            );
        }
    };

    let row = move |tutorial: Tutorial| {
        let on_edit = {
            let id = tutorial.id.clone();
            let current_title = tutorial.title.clone();
            let current_link = tutorial.link.clone();
            move |_: leptos::ev::MouseEvent| {
                title.set(current_title.clone());
                link.set(current_link.clone());
                editing.set(Some(id.clone()));
            }
        };
        let on_delete = {
            let api = api.clone();
            let id = tutorial.id.clone();
            let name = tutorial.title.clone();
            move |_: leptos::ev::MouseEvent| {
                if !confirm(&format!("Delete \"{name}\"?")) {
                    return;
                }
                let api = api.clone();
                let id = id.clone();
                mutations.run(
                    async move { api.delete_tutorial(&id).await },
                    "Tutorial Deleted.",
                    "Error deleting the tutorial!",
                    |_| {},
                );
            }
        };
        let thumb = thumbnail_url(&tutorial.link);
        let href = tutorial.link.clone();
        view! {
            <tr>
                <td>{thumb.map(|src| view! { <img class="admin-table__thumb" src=src alt=""/> })}</td>
                <td>{tutorial.title}</td>
                <td>
                    <a href=href target="_blank" rel="noopener noreferrer">
                        {tutorial.link}
                    </a>
                </td>
                <td class="admin-table__actions">
                    <button on:click=on_edit>"Edit"</button>
                    <button class="danger" on:click=on_delete>"Delete"</button>
                </td>
            </tr>
        }
    };

    view! {
        <form class="admin-form admin-form--inline" on:submit=on_save>
            {text_field("Title", title)}
            {text_field("Video Link", link)}
            <button type="submit" disabled=move || saving.get()>
                {move || if editing.with(Option::is_some) { "Update Tutorial" } else { "Add Tutorial" }}
            </button>
            <Show when=move || editing.with(Option::is_some)>
                <button type="button" on:click=move |_| reset_form()>"Cancel"</button>
            </Show>
        </form>
        {move || match tutorials.get() {
            Remote::Loading => view! { <p class="page-loading">"Loading tutorials..."</p> }.into_any(),
            Remote::Failed(_) => view! { <p class="page-error">"Error loading tutorials."</p> }.into_any(),
            Remote::Ready(list) => {
                let row = row.clone();
                view! {
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Preview"</th>
                                <th>"Title"</th>
                                <th>"Link"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>{list.into_iter().map(row).collect_view()}</tbody>
                    </table>
                }
                    .into_any()
            }
        }}
    }
}
