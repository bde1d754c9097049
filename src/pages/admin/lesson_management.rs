//! Lesson management: list with vocabulary counts, create, edit, delete.

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::net::types::Lesson;
use crate::pages::admin::add_vocabulary::text_field;
use crate::state::cache::Remote;
use crate::util::browser::confirm;
use crate::util::remote::{Mutations, load_remote};
use crate::util::validate;

#[component]
pub fn LessonManagementPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let mutations = Mutations::from_context();

    let lessons = load_remote(|| (), {
        let api = api.clone();
        move |()| {
            let api = api.clone();
            async move { api.admin_lessons_with_vocabulary().await }
        }
    });

    let name = RwSignal::new(String::new());
    let number = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    // Id of the lesson loaded into the form for editing.
    let editing = RwSignal::new(None::<String>);

    let reset_form = move || {
        name.set(String::new());
        number.set(String::new());
        editing.set(None);
    };

    let on_save = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if saving.get_untracked() {
                return;
            }
            let lesson = match validate::lesson(&name.get_untracked(), &number.get_untracked()) {
                Ok(lesson) => lesson,
                Err(message) => return mutations.reject(message),
            };
            saving.set(true);
            let api = api.clone();
            let target = editing.get_untracked();
            mutations.run(
                async move {
                    match target {
                        Some(id) => api.update_lesson(&id, &lesson).await,
                        None => api.create_lesson(&lesson).await.map(|_| ()),
                    }
                },
                "Lesson saved!",
                "Error adding lessons.",
                move |ok| {
                    saving.set(false);
                    if ok {
                        reset_form();
                    }
                },
            );
        }
    };

    let row = move |lesson: Lesson| {
        let on_edit = {
            let id = lesson.id.clone();
            let current_name = lesson.name.clone();
            let current_number = lesson.lesson_number;
            move |_: leptos::ev::MouseEvent| {
                name.set(current_name.clone());
                number.set(current_number.to_string());
                editing.set(Some(id.clone()));
            }
        };
        let on_delete = {
            let api = api.clone();
            let id = lesson.id.clone();
            let label = format!("Lesson {} ({})", lesson.lesson_number, lesson.name);
            move |_: leptos::ev::MouseEvent| {
                if !confirm(&format!("Delete {label}?")) {
                    return;
                }
                let api = api.clone();
                let id = id.clone();
                mutations.run(
                    async move { api.delete_lesson(&id).await },
                    "Lesson Deleted.",
                    "Error deleting the lesson!",
                    |_| {},
                );
            }
        };
        view! {
            <tr>
                <td>{lesson.lesson_number}</td>
                <td>{lesson.name}</td>
                <td>{lesson.vocabulary_count}</td>
                <td class="admin-table__actions">
                    <button on:click=on_edit>"Edit"</button>
                    <button class="danger" on:click=on_delete>"Delete"</button>
                </td>
            </tr>
        }
    };

    view! {
        <form class="admin-form admin-form--inline" on:submit=on_save>
            {text_field("Lesson Name", name)}
            {text_field("Lesson Number", number)}
            <button type="submit" disabled=move || saving.get()>
                {move || if editing.with(Option::is_some) { "Update Lesson" } else { "Add Lesson" }}
            </button>
            <Show when=move || editing.with(Option::is_some)>
                <button type="button" on:click=move |_| reset_form()>"Cancel"</button>
            </Show>
        </form>
        {move || match lessons.get() {
            Remote::Loading => view! { <p class="page-loading">"Loading lessons..."</p> }.into_any(),
            Remote::Failed(_) => view! { <p class="page-error">"Error loading lessons."</p> }.into_any(),
            Remote::Ready(list) => {
                let row = row.clone();
                view! {
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Number"</th>
                                <th>"Name"</th>
                                <th>"Vocabulary"</th>
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
