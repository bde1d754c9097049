//! Lesson study session page (`/lessons/:id`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives `state::study::StudySession`: fetches one vocabulary item per page,
//! counts down after completion, and returns to the lesson list through the
//! router.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{Vocabulary, VocabularyPage};
use crate::routes::ViewKind;
use crate::state::cache::Remote;
use crate::state::study::{STUDY_PAGE_SIZE, StudySession, StudyStep};
use crate::util::browser::{play, speak};
use crate::util::remote::load_remote;
use crate::util::validate::lesson_number;

fn vocabulary_card(item: Vocabulary) -> impl IntoView {
    let spoken = item.word.clone();
    view! {
        <div class="vocab-card">
            <div class="vocab-card__word">
                <span>{item.word}</span>
                <button class="vocab-card__speak" title="Pronounce" on:click=move |_| speak(&spoken)>
                    "🔊"
                </button>
            </div>
            <dl class="vocab-card__details">
                <dt>"Pronunciation"</dt>
                <dd>{item.pronunciation}</dd>
                <dt>"Meaning"</dt>
                <dd>{item.meaning}</dd>
                <dt>"When to say"</dt>
                <dd>{item.when_to_say}</dd>
            </dl>
        </div>
    }
}

#[component]
pub fn LessonStudyPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let navigate = use_navigate();

    let lesson = Memo::new(move |_| params.with(|p| p.get("id").as_deref().and_then(lesson_number)));
    let session = RwSignal::new(StudySession::new(lesson.get_untracked().unwrap_or_default()));

    // A new lesson id restarts the session.
    Effect::new(move || {
        if let Some(n) = lesson.get()
            && session.with_untracked(|s| s.lesson_number != n)
        {
            session.set(StudySession::new(n));
        }
    });

    let page = load_remote(
        move || (lesson.get(), session.with(|s| s.current_page)),
        move |(n, page)| {
            let api = api.clone();
            async move {
                let n = n.ok_or(ApiError::Response { status: 404, message: None })?;
                api.lesson_vocabulary_page(n, page, STUDY_PAGE_SIZE).await.map(|body| (page, body))
            }
        },
    );

    // Only a response for the page still on screen updates the total.
    Effect::new(move || {
        if let Remote::Ready((loaded_page, body)) = page.get() {
            session.update(|s| {
                s.page_loaded(loaded_page, body.total_pages);
            });
        }
    });

    // Completion countdown, one tick per second.
    Effect::new(move || {
        let (completed, countdown) = session.with(|s| (s.completed, s.countdown));
        if !completed {
            return;
        }
        if countdown == 0 {
            navigate(ViewKind::Lessons.path(), NavigateOptions::default());
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(1_000).await;
            let _ = session.try_update(|s| {
                if s.countdown == countdown {
                    s.tick();
                }
            });
        });
    });

    let on_next = move |_: leptos::ev::MouseEvent| {
        let step = session.try_update(StudySession::next);
        for cue in step.map(StudyStep::cues).unwrap_or_default() {
            play(*cue);
        }
        if step == Some(StudyStep::Completed) {
            log::info!("lesson {} completed", session.with_untracked(|s| s.lesson_number));
        }
    };
    let on_previous = move |_: leptos::ev::MouseEvent| {
        session.update(|s| {
            s.previous();
        });
    };
    let on_return_now = move |_: leptos::ev::MouseEvent| session.update(StudySession::skip_countdown);

    let study_view = move |body: VocabularyPage| {
        let lesson_name = body.lesson.name.clone();
        let heading = format!("{} (Lesson {})", body.lesson.name, body.lesson.lesson_number);
        let item = body.vocabularies.into_iter().next();
        if session.with(|s| s.completed) {
            return view! {
                <div class="study-complete">
                    <h2>"Congratulations! 🎉"</h2>
                    <p>{format!("You've mastered {lesson_name}!")}</p>
                    <p>{move || format!("Returning to lessons in {} seconds...", session.with(|s| s.countdown))}</p>
                    <button on:click=on_return_now>"Return to Lessons Now"</button>
                </div>
            }
            .into_any();
        }
        let Some(item) = item else {
            return view! {
                <div class="study-empty">
                    <h2>"No Vocabularies Found"</h2>
                    <p>"There are no vocabularies available for this lesson."</p>
                    <A href=ViewKind::Lessons.path() attr:class="study-empty__back">
                        "Return to Lessons"
                    </A>
                </div>
            }
            .into_any();
        };
        view! {
            <div class="study-card">
                <header class="study-card__header">
                    <span>{heading}</span>
                    <span>
                        {move || {
                            session
                                .with(|s| format!("{} / {}", s.current_page, s.total_pages.unwrap_or_default()))
                        }}
                    </span>
                </header>
                <progress max="100" value=move || format!("{:.0}", session.with(StudySession::progress_percent))></progress>
                {vocabulary_card(item)}
                <footer class="study-card__nav">
                    <button on:click=on_previous disabled=move || session.with(|s| s.current_page <= 1)>
                        "Previous"
                    </button>
                    <button on:click=on_next>
                        {move || {
                            if session.with(|s| s.total_pages.is_some_and(|t| s.current_page >= t)) {
                                "Complete"
                            } else {
                                "Next"
                            }
                        }}
                    </button>
                </footer>
            </div>
        }
        .into_any()
    };

    view! {
        <section class="study-page">
            {move || match page.get() {
                Remote::Loading => view! { <p class="page-loading">"Loading lesson..."</p> }.into_any(),
                Remote::Failed(_) => {
                    view! {
                        <p class="page-error">"An error occurred while loading the lesson vocabulary."</p>
                    }
                        .into_any()
                }
                Remote::Ready((_, body)) => study_view(body),
            }}
        </section>
    }
}
