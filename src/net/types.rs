//! Wire DTOs for the REST API boundary.
//!
//! DESIGN
//! ======
//! Field names follow the API's JSON (`_id`, camelCase) through serde
//! attributes so the Rust side keeps snake_case names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authorization tier of an identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Learner.
    User,
    /// Content and user manager.
    Admin,
    /// Any role value this client does not recognize.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Role an admin toggles to from this one.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Admin => Self::User,
            Self::User | Self::Unknown => Self::Admin,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
            Self::Unknown => "Unknown",
        }
    }
}

/// An authenticated user's profile, as returned by auth and admin endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique user identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Display name.
    pub name: String,
    pub email: String,
    /// Hosted avatar image URL.
    #[serde(default)]
    pub avatar: Option<String>,
    pub role: Role,
    /// Registration timestamp (ISO-8601 string as sent by the API).
    #[serde(rename = "date", default)]
    pub registered_at: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: String,
}

/// Successful login/signup response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    /// Session credential issued by the API.
    pub token: String,
    pub user: Identity,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `GET /user`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CurrentUserResponse {
    pub user: Identity,
}

/// Error body shape used by the API for non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A lesson, optionally annotated with its vocabulary count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub lesson_number: u32,
    /// Only populated by the `*-with-vocabulary` endpoints.
    #[serde(default)]
    pub vocabulary_count: u32,
}

/// Payload for creating a lesson.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLesson {
    pub name: String,
    pub lesson_number: u32,
}

/// A vocabulary entry belonging to a lesson.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocabulary {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub word: String,
    pub pronunciation: String,
    pub meaning: String,
    pub when_to_say: String,
    pub lesson_no: u32,
    #[serde(default)]
    pub admin_email: Option<String>,
}

/// Payload for creating a vocabulary entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVocabulary {
    pub word: String,
    pub pronunciation: String,
    pub meaning: String,
    pub when_to_say: String,
    pub lesson_no: u32,
    pub admin_email: String,
}

/// One page of a lesson's vocabulary, used by the study session.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyPage {
    pub lesson: Lesson,
    #[serde(default)]
    pub vocabularies: Vec<Vocabulary>,
    pub total_pages: u32,
}

/// A video tutorial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tutorial {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    /// Video URL (YouTube watch link).
    pub link: String,
}

/// Payload for creating a tutorial.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTutorial {
    pub title: String,
    pub link: String,
}

/// Body of `PATCH /admin/users/:id/role`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RoleUpdate {
    pub role: Role,
}

/// Vocabulary count for one lesson number on the admin dashboard.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonVocabularyCount {
    #[serde(rename = "_id")]
    pub lesson_number: u32,
    pub vocabulary_count: u32,
}

/// Response of `GET /admin/dashboard`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_users: u32,
    pub total_lessons: u32,
    pub total_tutorials: u32,
    pub total_vocabulary: u32,
    #[serde(default)]
    pub recent_users: Vec<Identity>,
    #[serde(default)]
    pub vocabulary_by_lesson: Vec<LessonVocabularyCount>,
}
