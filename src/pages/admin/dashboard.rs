//! Admin dashboard: totals, recent signups, and vocabulary per lesson.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::net::types::{DashboardSummary, Identity, LessonVocabularyCount};
use crate::state::cache::Remote;
use crate::util::remote::load_remote;

/// Bar width for a lesson's count relative to the largest lesson.
fn bar_percent(count: u32, max: u32) -> u32 {
    if max == 0 { 0 } else { count.saturating_mul(100) / max }
}

fn stat_card(label: &'static str, value: u32) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
        </div>
    }
}

fn recent_user_row(user: Identity) -> impl IntoView {
    view! {
        <tr>
            <td>{user.name}</td>
            <td>{user.email}</td>
            <td>{user.role.label()}</td>
            <td>{user.registered_at.unwrap_or_default()}</td>
        </tr>
    }
}

fn lesson_bars(counts: Vec<LessonVocabularyCount>) -> impl IntoView {
    let max = counts.iter().map(|c| c.vocabulary_count).max().unwrap_or(0);
    counts
        .into_iter()
        .map(|c| {
            let width = format!("width:{}%;", bar_percent(c.vocabulary_count, max));
            view! {
                <li class="lesson-bar">
                    <span class="lesson-bar__label">{format!("Lesson {}", c.lesson_number)}</span>
                    <span class="lesson-bar__fill" style=width></span>
                    <span class="lesson-bar__count">{c.vocabulary_count}</span>
                </li>
            }
        })
        .collect_view()
}

fn summary_view(summary: DashboardSummary) -> impl IntoView {
    view! {
        <div class="stat-grid">
            {stat_card("Total Users", summary.total_users)}
            {stat_card("Total Lessons", summary.total_lessons)}
            {stat_card("Total Tutorials", summary.total_tutorials)}
            {stat_card("Total Vocabulary", summary.total_vocabulary)}
        </div>
        <div class="dashboard-panels">
            <section class="dashboard-panel">
                <h2>"Vocabulary by Lesson"</h2>
                <ul class="lesson-bars">{lesson_bars(summary.vocabulary_by_lesson)}</ul>
            </section>
            <section class="dashboard-panel">
                <h2>"Recent Users"</h2>
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Joined"</th>
                        </tr>
                    </thead>
                    <tbody>{summary.recent_users.into_iter().map(recent_user_row).collect_view()}</tbody>
                </table>
            </section>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let summary = load_remote(
        || (),
        move |()| {
            let api = api.clone();
            async move { api.dashboard_summary().await }
        },
    );

    move || match summary.get() {
        Remote::Loading => view! { <p class="page-loading">"Loading dashboard..."</p> }.into_any(),
        Remote::Failed(_) => view! { <p class="page-error">"Failed to load dashboard data."</p> }.into_any(),
        Remote::Ready(data) => summary_view(data).into_any(),
    }
}
