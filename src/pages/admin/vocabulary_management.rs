//! Vocabulary management: list filtered by lesson, create, edit, delete.

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::net::types::Vocabulary;
use crate::pages::admin::add_vocabulary::{lesson_options, text_field};
use crate::state::auth::AuthState;
use crate::state::cache::Remote;
use crate::util::browser::confirm;
use crate::util::remote::{Mutations, load_remote};
use crate::util::validate::{self, VocabularyForm};

#[component]
pub fn VocabularyManagementPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let mutations = Mutations::from_context();

    let filter = RwSignal::new(None::<u32>);
    let lessons = load_remote(|| (), {
        let api = api.clone();
        move |()| {
            let api = api.clone();
            async move { api.admin_lessons().await }
        }
    });
    let vocabularies = load_remote(move || filter.get(), {
        let api = api.clone();
        move |lesson| {
            let api = api.clone();
            async move { api.admin_vocabularies(lesson).await }
        }
    });

    let word = RwSignal::new(String::new());
    let pronunciation = RwSignal::new(String::new());
    let meaning = RwSignal::new(String::new());
    let when_to_say = RwSignal::new(String::new());
    let lesson_no = RwSignal::new(None::<u32>);
    let saving = RwSignal::new(false);
    let editing = RwSignal::new(None::<String>);

    let reset_form = move || {
        for field in [word, pronunciation, meaning, when_to_say] {
            field.set(String::new());
        }
        editing.set(None);
    };

    let on_save = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if saving.get_untracked() {
                return;
            }
            let form = VocabularyForm {
                word: word.get_untracked(),
                pronunciation: pronunciation.get_untracked(),
                meaning: meaning.get_untracked(),
                when_to_say: when_to_say.get_untracked(),
                lesson_no: lesson_no.get_untracked(),
            };
            let admin_email = auth.with_untracked(|a| a.user.as_ref().map(|u| u.email.clone()));
            let vocabulary = match validate::vocabulary(&form, admin_email.as_deref()) {
                Ok(vocabulary) => vocabulary,
                Err(message) => return mutations.reject(message),
            };
            saving.set(true);
            let api = api.clone();
            let target = editing.get_untracked();
            mutations.run(
                async move {
                    match target {
                        Some(id) => api.update_vocabulary(&id, &vocabulary).await,
                        None => api.create_vocabulary(&vocabulary).await.map(|_| ()),
                    }
                },
                "Vocabulary saved!",
                "Error saving vocabulary.",
                move |ok| {
                    saving.set(false);
                    if ok {
                        reset_form();
                    }
                },
            );
        }
    };

    let row = move |vocabulary: Vocabulary| {
        let on_edit = {
            let current = vocabulary.clone();
            move |_: leptos::ev::MouseEvent| {
                word.set(current.word.clone());
                pronunciation.set(current.pronunciation.clone());
                meaning.set(current.meaning.clone());
                when_to_say.set(current.when_to_say.clone());
                lesson_no.set(Some(current.lesson_no));
                editing.set(Some(current.id.clone()));
            }
        };
        let on_delete = {
            let api = api.clone();
            let id = vocabulary.id.clone();
            let word = vocabulary.word.clone();
            move |_: leptos::ev::MouseEvent| {
                if !confirm(&format!("Delete \"{word}\"?")) {
                    return;
                }
                let api = api.clone();
                let id = id.clone();
                mutations.run(
                    async move { api.delete_vocabulary(&id).await },
                    "Vocabulary Deleted.",
                    "Error deleting the vocabulary!",
                    |_| {},
                );
            }
        };
        view! {
            <tr>
                <td>{vocabulary.word}</td>
                <td>{vocabulary.pronunciation}</td>
                <td>{vocabulary.meaning}</td>
                <td>{vocabulary.when_to_say}</td>
                <td>{vocabulary.lesson_no}</td>
                <td class="admin-table__actions">
                    <button on:click=on_edit>"Edit"</button>
                    <button class="danger" on:click=on_delete>"Delete"</button>
                </td>
            </tr>
        }
    };

    let lesson_picker = move |selected: RwSignal<Option<u32>>, empty_label: &'static str| {
        view! {
            <select
                prop:value=move || selected.get().map(|n| n.to_string()).unwrap_or_default()
                on:change=move |ev| selected.set(validate::lesson_number(&event_target_value(&ev)))
            >
                <option value="">{empty_label}</option>
                {move || lessons.with(|l| l.ready().cloned()).map(lesson_options)}
            </select>
        }
    };

    view! {
        <form class="admin-form admin-form--inline" on:submit=on_save>
            {text_field("Word", word)}
            {text_field("Pronunciation", pronunciation)}
            {text_field("Meaning", meaning)}
            {text_field("When to Say", when_to_say)}
            <label>"Lesson" {lesson_picker(lesson_no, "Select a lesson")}</label>
            <button type="submit" disabled=move || saving.get()>
                {move || if editing.with(Option::is_some) { "Update Vocabulary" } else { "Add Vocabulary" }}
            </button>
            <Show when=move || editing.with(Option::is_some)>
                <button type="button" on:click=move |_| reset_form()>"Cancel"</button>
            </Show>
        </form>
        <label class="admin-filter">"Filter by lesson" {lesson_picker(filter, "All lessons")}</label>
        {move || match vocabularies.get() {
            Remote::Loading => view! { <p class="page-loading">"Loading vocabularies..."</p> }.into_any(),
            Remote::Failed(_) => view! { <p class="page-error">"Error loading vocabularies."</p> }.into_any(),
            Remote::Ready(list) if list.is_empty() => {
                view! { <p class="page-empty">"No vocabularies found."</p> }.into_any()
            }
            Remote::Ready(list) => {
                let row = row.clone();
                view! {
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Word"</th>
                                <th>"Pronunciation"</th>
                                <th>"Meaning"</th>
                                <th>"When to Say"</th>
                                <th>"Lesson"</th>
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
