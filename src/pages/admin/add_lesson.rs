//! Add-lesson form.

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::util::remote::Mutations;
use crate::util::validate;

#[component]
pub fn AddLessonPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let mutations = Mutations::from_context();

    let name = RwSignal::new(String::new());
    let number = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
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
        let success = format!("Lesson - {} Added Successfully", lesson.name);
        mutations.run(
            async move { api.create_lesson(&lesson).await },
            success,
            "Failed to Add Lesson",
            move |ok| {
                saving.set(false);
                if ok {
                    name.set(String::new());
                    number.set(String::new());
                }
            },
        );
    };

    view! {
        <form class="admin-form" on:submit=on_submit>
            <label>
                "Lesson Name"
                <input
                    type="text"
                    placeholder="e.g. Greetings"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Lesson Number"
                <input
                    type="number"
                    min="1"
                    prop:value=move || number.get()
                    on:input=move |ev| number.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Adding..." } else { "Add Lesson" }}
            </button>
        </form>
    }
}
