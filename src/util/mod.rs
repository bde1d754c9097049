//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision and parsing logic lives here so pages stay thin and the
//! rules are testable without a browser.

pub mod auth;
pub mod browser;
pub mod remote;
pub mod validate;
pub mod youtube;
