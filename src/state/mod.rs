//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `session`, `toast`, etc.) so components
//! depend on small focused models provided through Leptos context.

pub mod auth;
pub mod cache;
pub mod credentials;
pub mod session;
pub mod study;
pub mod toast;
