//! Admin screens, rendered inside `components::admin_layout::AdminLayout`.

pub mod add_lesson;
pub mod add_vocabulary;
pub mod dashboard;
pub mod lesson_management;
pub mod manage_users;
pub mod tutorial_management;
pub mod vocabulary_management;
