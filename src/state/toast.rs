//! Transient notifications ("toasts").
//!
//! DESIGN
//! ======
//! Producers only see the [`Notifier`] trait, so the session store can be
//! exercised with a recording notifier in tests. A keyed toast replaces the
//! previous toast with the same key, which turns "Logging in..." into the
//! final success or error message in place.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long non-loading toasts stay visible.
pub const TOAST_TTL_MS: u64 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Replacement key; `None` toasts never replace each other.
    pub key: Option<&'static str>,
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    #[must_use]
    pub fn loading(message: impl Into<String>) -> Self {
        Self { key: None, kind: ToastKind::Loading, message: message.into() }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { key: None, kind: ToastKind::Success, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { key: None, kind: ToastKind::Error, message: message.into() }
    }

    #[must_use]
    pub fn keyed(mut self, key: &'static str) -> Self {
        self.key = Some(key);
        self
    }
}

/// A toast with its display id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<ToastEntry>,
    next_id: u64,
}

impl ToastState {
    /// Show a toast, replacing any toast with the same key. Returns its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        if let Some(key) = toast.key {
            self.items.retain(|entry| entry.toast.key != Some(key));
        }
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(ToastEntry { id, toast });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|entry| entry.id != id);
    }
}

/// Sink for user-facing notifications.
pub trait Notifier {
    fn show(&self, toast: Toast);
}

impl Notifier for RwSignal<ToastState> {
    fn show(&self, toast: Toast) {
        let expires = toast.kind != ToastKind::Loading;
        let mut id = 0;
        self.update(|state| id = state.push(toast));

        #[cfg(feature = "csr")]
        if expires {
            let toasts = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
                let _ = toasts.try_update(|state| state.dismiss(id));
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (expires, id);
    }
}
