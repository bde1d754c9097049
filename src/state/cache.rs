//! Data-fetching cache bookkeeping.
//!
//! DESIGN
//! ======
//! Every list view refetches when the epoch changes. Session changes and admin
//! mutations bump the epoch instead of reloading the page, so data fetched
//! under a previous identity is never shown to the next one.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use leptos::prelude::*;

/// Global invalidation counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheState {
    pub epoch: u64,
}

impl CacheState {
    /// Mark all cached data stale.
    pub fn invalidate_all(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }
}

/// Mark all cached data in the shared cache signal stale.
pub fn invalidate(cache: RwSignal<CacheState>) {
    cache.update(CacheState::invalidate_all);
}

/// Load state of one remote resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    #[must_use]
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
