//! Optimistic read-through cache of the remote collection.
//!
//! Mirrors the stale-while-revalidate mutate contract the web client relied
//! on: the entry keyed by the fetch-all URL is replaced with a locally
//! computed collection immediately, without revalidating against the server.
//! Readers (a UI layer, say) hold a shared handle and always see the latest
//! optimistic value.

use dashmap::DashMap;

use crate::board::List;

/// Last-known collection of top-level lists, keyed by the endpoint URL that
/// produced it.
#[derive(Debug, Default)]
pub struct BoardCache {
    entries: DashMap<String, Vec<List>>,
}

impl BoardCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cached collection for `key`, if any.
    pub fn get(&self, key: &str) -> Option<Vec<List>> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Seed or overwrite the entry for `key`.
    pub fn set(&self, key: impl Into<String>, lists: Vec<List>) {
        self.entries.insert(key.into(), lists);
    }

    /// Replace the entry for `key` with `f(current)`.
    ///
    /// A missing entry is treated as an empty collection, so optimistic
    /// updates still land before the first successful fetch.
    pub fn mutate<F>(&self, key: &str, f: F)
    where
        F: FnOnce(Vec<List>) -> Vec<List>,
    {
        let current = self.get(key).unwrap_or_default();
        self.entries.insert(key.to_string(), f(current));
    }
}
