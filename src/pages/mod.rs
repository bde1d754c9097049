//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, form state, mutations)
//! and delegates shared rules to `util` and `state`. Role gating happens in
//! `components::protected_route`, never inside a page.

pub mod admin;
pub mod lesson_study;
pub mod lessons;
pub mod login;
pub mod not_found;
pub mod signup;
pub mod tutorials;
