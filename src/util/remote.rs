//! Reactive data loading and mutation helpers for pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages declare what to load; these helpers own the fetch lifecycle. Loads
//! re-run when their key or the cache epoch changes, and mutations bump the
//! epoch so every dependent list refetches.
//!
//! DESIGN
//! ======
//! Each load issues a ticket. Only the response for the newest ticket is
//! applied, so out-of-order responses never overwrite newer data. While a
//! refetch is in flight the previous data stays visible.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::cache::{CacheState, Remote, invalidate};
use crate::state::toast::{Notifier, Toast, ToastState};

/// Monotonic request tickets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

/// Load `fetch(key())` into a signal, reloading when the key or the cache
/// epoch changes.
pub fn load_remote<K, T, S, F, Fut>(key: S, fetch: F) -> RwSignal<Remote<T>>
where
    K: 'static,
    T: Send + Sync + 'static,
    S: Fn() -> K + 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let cache = expect_context::<RwSignal<CacheState>>();
    let data = RwSignal::new(Remote::Loading);
    let seq = StoredValue::new(RequestSeq::default());

    Effect::new(move || {
        cache.track();
        let request = fetch(key());
        let mut ticket = 0;
        seq.update_value(|s| ticket = s.issue());
        // A failed load shows the spinner again; ready data stays up.
        if data.with_untracked(|d| d.ready().is_none() && !d.is_loading()) {
            data.set(Remote::Loading);
        }

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = request.await;
            match &result {
                Err(e) if e.retryable() => log::warn!("load failed (transient): {e}"),
                Err(e) => log::error!("load failed: {e}"),
                Ok(_) => {}
            }
            if seq.try_with_value(|s| s.is_current(ticket)).unwrap_or(false) {
                let _ = data.try_set(Remote::from_result(result));
            }
        });
        #[cfg(not(feature = "csr"))]
        drop((request, ticket));
    });

    data
}

/// Notification for a finished mutation.
#[must_use]
pub fn mutation_toast<T>(result: &Result<T, ApiError>, success: &str, failure: &str) -> Toast {
    match result {
        Ok(_) => Toast::success(success),
        Err(e) => Toast::error(e.server_message().unwrap_or(failure)),
    }
}

/// Handles for running admin mutations from event handlers.
#[derive(Clone, Copy)]
pub struct Mutations {
    cache: RwSignal<CacheState>,
    toasts: RwSignal<ToastState>,
}

impl Mutations {
    /// Capture the cache and toast signals from context.
    #[must_use]
    pub fn from_context() -> Self {
        Self { cache: expect_context::<RwSignal<CacheState>>(), toasts: expect_context::<RwSignal<ToastState>>() }
    }

    /// Show a validation message without sending anything.
    pub fn reject(self, message: &str) {
        self.toasts.show(Toast::error(message));
    }

    /// Run `request`; on success bump the cache epoch. Either way notify the
    /// user and call `done` with whether it succeeded.
    pub fn run<T, Fut>(
        self,
        request: Fut,
        success: impl Into<String>,
        failure: &'static str,
        done: impl FnOnce(bool) + 'static,
    ) where
        T: 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let success = success.into();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = request.await;
            self.finish(&result, &success, failure);
            done(result.is_ok());
        });
        #[cfg(not(feature = "csr"))]
        {
            drop(request);
            self.finish::<T>(&Err(ApiError::Unavailable), &success, failure);
            done(false);
        }
    }

    fn finish<T>(self, result: &Result<T, ApiError>, success: &str, failure: &str) {
        match result {
            Ok(_) => invalidate(self.cache),
            Err(e) => log::error!("{failure}: {e}"),
        }
        self.toasts.show(mutation_toast(result, success, failure));
    }
}
