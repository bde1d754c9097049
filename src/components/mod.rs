//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome (navigation, admin shell, notifications) and
//! the route guard wrapper, reading shared state from Leptos context.

pub mod admin_layout;
pub mod nav_bar;
pub mod protected_route;
pub mod toaster;
