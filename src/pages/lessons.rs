//! Lesson list for learners.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::http::ApiClient;
use crate::net::types::Lesson;
use crate::routes::lesson_study_path;
use crate::state::cache::Remote;
use crate::util::remote::load_remote;

fn lesson_card(lesson: Lesson) -> impl IntoView {
    view! {
        <A href=lesson_study_path(lesson.lesson_number) attr:class="lesson-card">
            <span class="lesson-card__number">{format!("Lesson {}", lesson.lesson_number)}</span>
            <h3 class="lesson-card__name">{lesson.name}</h3>
            <span class="lesson-card__count">{format!("{} Vocabulary Words", lesson.vocabulary_count)}</span>
        </A>
    }
}

#[component]
pub fn LessonsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let lessons = load_remote(
        || (),
        move |()| {
            let api = api.clone();
            async move { api.lessons_with_vocabulary().await }
        },
    );

    view! {
        <section class="lessons-page">
            <h1>"Japanese Lessons"</h1>
            {move || match lessons.get() {
                Remote::Loading => view! { <p class="page-loading">"Loading lessons..."</p> }.into_any(),
                Remote::Failed(_) => {
                    view! { <p class="page-error">"Error loading lessons. Please try again later."</p> }.into_any()
                }
                Remote::Ready(list) if list.is_empty() => {
                    view! { <p class="page-empty">"No lessons available yet."</p> }.into_any()
                }
                Remote::Ready(list) => {
                    view! { <div class="lesson-grid">{list.into_iter().map(lesson_card).collect_view()}</div> }
                        .into_any()
                }
            }}
        </section>
    }
}
