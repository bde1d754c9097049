//! Add-vocabulary form. The submitter's email is attached from the session.

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::net::types::Lesson;
use crate::state::auth::AuthState;
use crate::state::cache::Remote;
use crate::util::remote::{Mutations, load_remote};
use crate::util::validate::{self, VocabularyForm};

/// `<option>` list for a lesson picker.
pub(crate) fn lesson_options(lessons: Vec<Lesson>) -> impl IntoView {
    lessons
        .into_iter()
        .map(|lesson| {
            view! {
                <option value=lesson.lesson_number.to_string()>
                    {format!("Lesson {} - {}", lesson.lesson_number, lesson.name)}
                </option>
            }
        })
        .collect_view()
}

/// Labelled single-line text input bound to `value`.
pub(crate) fn text_field(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label>
            {label}
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn AddVocabularyPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let mutations = Mutations::from_context();

    let lessons = load_remote(|| (), {
        let api = api.clone();
        move |()| {
            let api = api.clone();
            async move { api.admin_lessons().await }
        }
    });

    let word = RwSignal::new(String::new());
    let pronunciation = RwSignal::new(String::new());
    let meaning = RwSignal::new(String::new());
    let when_to_say = RwSignal::new(String::new());
    let lesson_no = RwSignal::new(None::<u32>);
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
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
        let success = format!("Vocabulary - ({}) Added Successfully", vocabulary.word);
        mutations.run(
            async move { api.create_vocabulary(&vocabulary).await },
            success,
            "Failed to Add Vocabulary",
            move |ok| {
                saving.set(false);
                if ok {
                    for field in [word, pronunciation, meaning, when_to_say] {
                        field.set(String::new());
                    }
                    lesson_no.set(None);
                }
            },
        );
    };

    view! {
        <form class="admin-form" on:submit=on_submit>
            {text_field("Word", word)}
            {text_field("Pronunciation", pronunciation)}
            {text_field("Meaning", meaning)}
            {text_field("When to Say", when_to_say)}
            <label>
                "Lesson Number"
                <select
                    prop:value=move || lesson_no.get().map(|n| n.to_string()).unwrap_or_default()
                    on:change=move |ev| lesson_no.set(validate::lesson_number(&event_target_value(&ev)))
                >
                    <option value="">"Select a lesson"</option>
                    {move || lessons.with(|l| l.ready().cloned()).map(lesson_options)}
                </select>
            </label>
            <Show when=move || lessons.with(|l| matches!(l, Remote::Failed(_)))>
                <p class="page-error">"Failed to load lessons."</p>
            </Show>
            <button type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Adding..." } else { "Add Vocabulary" }}
            </button>
        </form>
    }
}
