//! Learner and admin content endpoints.
//!
//! Each call is an independent request/response; list views refetch when the
//! cache epoch moves (see `state::cache`).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::ApiClient;
use super::types::{
    DashboardSummary, Identity, Lesson, NewLesson, NewTutorial, NewVocabulary, Role, RoleUpdate, Tutorial,
    Vocabulary, VocabularyPage,
};

pub const LEARNER_LESSONS_PATH: &str = "/api/lessons-with-vocabulary";
pub const LEARNER_TUTORIALS_PATH: &str = "/api/tutorials";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";
pub const ADMIN_LESSONS_PATH: &str = "/admin/lessons";
pub const ADMIN_LESSONS_WITH_VOCABULARY_PATH: &str = "/admin/lessons-with-vocabulary";
pub const ADMIN_VOCABULARIES_PATH: &str = "/admin/vocabularies";
pub const ADMIN_USERS_PATH: &str = "/admin/users";
pub const ADMIN_TUTORIALS_PATH: &str = "/admin/tutorials";

fn lesson_vocabulary_path(lesson_number: u32, page: u32, limit: u32) -> String {
    format!("/api/vocabularies/lesson/{lesson_number}?page={page}&limit={limit}")
}

fn admin_vocabularies_path(lesson_filter: Option<u32>) -> String {
    match lesson_filter {
        Some(n) => format!("{ADMIN_VOCABULARIES_PATH}?lessonNo={n}"),
        None => ADMIN_VOCABULARIES_PATH.to_owned(),
    }
}

fn item_path(collection: &str, id: &str) -> String {
    format!("{collection}/{id}")
}

fn user_role_path(user_id: &str) -> String {
    format!("{ADMIN_USERS_PATH}/{user_id}/role")
}

// =============================================================================
// LEARNER
// =============================================================================

impl ApiClient {
    /// Lessons with their vocabulary counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn lessons_with_vocabulary(&self) -> Result<Vec<Lesson>, ApiError> {
        self.get(LEARNER_LESSONS_PATH).await
    }

    /// One page of a lesson's vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn lesson_vocabulary_page(
        &self,
        lesson_number: u32,
        page: u32,
        limit: u32,
    ) -> Result<VocabularyPage, ApiError> {
        self.get(&lesson_vocabulary_path(lesson_number, page, limit)).await
    }

    /// Published video tutorials.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn tutorials(&self) -> Result<Vec<Tutorial>, ApiError> {
        self.get(LEARNER_TUTORIALS_PATH).await
    }
}

// =============================================================================
// ADMIN
// =============================================================================

#[allow(clippy::missing_errors_doc)]
impl ApiClient {
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.get(ADMIN_DASHBOARD_PATH).await
    }

    pub async fn admin_lessons(&self) -> Result<Vec<Lesson>, ApiError> {
        self.get(ADMIN_LESSONS_PATH).await
    }

    pub async fn admin_lessons_with_vocabulary(&self) -> Result<Vec<Lesson>, ApiError> {
        self.get(ADMIN_LESSONS_WITH_VOCABULARY_PATH).await
    }

    pub async fn create_lesson(&self, lesson: &NewLesson) -> Result<Lesson, ApiError> {
        self.post(ADMIN_LESSONS_PATH, lesson).await
    }

    /// Rename or renumber a lesson; its vocabulary stays attached.
    pub async fn update_lesson(&self, id: &str, lesson: &NewLesson) -> Result<(), ApiError> {
        self.put::<_, serde_json::Value>(&item_path(ADMIN_LESSONS_PATH, id), lesson).await.map(|_| ())
    }

    pub async fn delete_lesson(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&item_path(ADMIN_LESSONS_PATH, id)).await
    }

    pub async fn admin_vocabularies(&self, lesson_filter: Option<u32>) -> Result<Vec<Vocabulary>, ApiError> {
        self.get(&admin_vocabularies_path(lesson_filter)).await
    }

    pub async fn create_vocabulary(&self, vocabulary: &NewVocabulary) -> Result<Vocabulary, ApiError> {
        self.post(ADMIN_VOCABULARIES_PATH, vocabulary).await
    }

    pub async fn update_vocabulary(&self, id: &str, vocabulary: &NewVocabulary) -> Result<(), ApiError> {
        self.put::<_, serde_json::Value>(&item_path(ADMIN_VOCABULARIES_PATH, id), vocabulary).await.map(|_| ())
    }

    pub async fn delete_vocabulary(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&item_path(ADMIN_VOCABULARIES_PATH, id)).await
    }

    pub async fn admin_users(&self) -> Result<Vec<Identity>, ApiError> {
        self.get(ADMIN_USERS_PATH).await
    }

    /// Change a user's role; the response body is not needed by the UI.
    pub async fn update_user_role(&self, user_id: &str, role: Role) -> Result<(), ApiError> {
        self.patch::<_, serde_json::Value>(&user_role_path(user_id), &RoleUpdate { role })
            .await
            .map(|_| ())
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.delete(&item_path(ADMIN_USERS_PATH, user_id)).await
    }

    pub async fn admin_tutorials(&self) -> Result<Vec<Tutorial>, ApiError> {
        self.get(ADMIN_TUTORIALS_PATH).await
    }

    pub async fn create_tutorial(&self, tutorial: &NewTutorial) -> Result<Tutorial, ApiError> {
        self.post(ADMIN_TUTORIALS_PATH, tutorial).await
    }

    pub async fn update_tutorial(&self, id: &str, tutorial: &NewTutorial) -> Result<(), ApiError> {
        self.put::<_, serde_json::Value>(&item_path(ADMIN_TUTORIALS_PATH, id), tutorial).await.map(|_| ())
    }

    pub async fn delete_tutorial(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&item_path(ADMIN_TUTORIALS_PATH, id)).await
    }
}
