//! Effect dispatcher — optimistic cache write plus fire-and-forget
//! persistence.
//!
//! For each [`SyncEffect`] the cache entry under the fetch-all URL is
//! replaced with the optimistic collection immediately, then the matching
//! HTTP request is spawned in the background and its handle dropped. The
//! outcome is never awaited: a failed request is logged at warn level and
//! the optimistic state stays in place (no rollback, no retry). Overlapping
//! requests carry no sequencing token and may resolve out of issue order.

use std::sync::Arc;

use crate::sync::{BoardCache, RemoteStore};
use crate::transition::SyncEffect;

/// Interprets sync effects against the shared cache and the remote store.
#[derive(Debug, Clone)]
pub struct SyncDispatcher {
    remote: RemoteStore,
    cache: Arc<BoardCache>,
}

impl SyncDispatcher {
    /// Create a dispatcher over the given remote and cache.
    pub fn new(remote: RemoteStore, cache: Arc<BoardCache>) -> Self {
        Self { remote, cache }
    }

    /// The cache key this dispatcher writes under.
    pub fn cache_key(&self) -> String {
        self.remote.fetch_url()
    }

    /// Apply the effect's cache reconciliation and spawn its remote call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&self, effect: SyncEffect) {
        self.reconcile_cache(&effect);
        self.spawn_remote(effect);
    }

    fn reconcile_cache(&self, effect: &SyncEffect) {
        let key = self.cache_key();
        match effect {
            SyncEffect::ListCreated(list) => {
                let list = list.clone();
                self.cache.mutate(&key, move |mut lists| {
                    lists.push(list);
                    lists
                });
            }
            SyncEffect::CardCreated(card) => {
                let card = card.clone();
                self.cache.mutate(&key, move |mut lists| {
                    if let Some(list) = lists.iter_mut().find(|l| l.id == card.parent_id) {
                        list.cards.push(card);
                    }
                    lists
                });
            }
            SyncEffect::ListUpdated(updated) => {
                let updated = updated.clone();
                self.cache.mutate(&key, move |mut lists| {
                    if let Some(list) = lists.iter_mut().find(|l| l.id == updated.id) {
                        *list = updated;
                    }
                    lists
                });
            }
            SyncEffect::CardUpdated(updated) => {
                let updated = updated.clone();
                self.cache.mutate(&key, move |mut lists| {
                    if let Some(list) = lists.iter_mut().find(|l| l.id == updated.parent_id) {
                        if let Some(card) = list.cards.iter_mut().find(|c| c.id == updated.id) {
                            *card = updated;
                        }
                    }
                    lists
                });
            }
            SyncEffect::ListDeleted { id } => {
                let id = id.clone();
                self.cache.mutate(&key, move |mut lists| {
                    lists.retain(|l| l.id != id);
                    lists
                });
            }
            SyncEffect::CardDeleted { parent_id, id } => {
                let parent_id = parent_id.clone();
                let id = id.clone();
                self.cache.mutate(&key, move |mut lists| {
                    if let Some(list) = lists.iter_mut().find(|l| l.id == parent_id) {
                        list.cards.retain(|c| c.id != id);
                    }
                    lists
                });
            }
            SyncEffect::CardMoved { lists, .. } => {
                self.cache.set(key, lists.clone());
            }
        }
    }

    fn spawn_remote(&self, effect: SyncEffect) {
        let remote = self.remote.clone();
        tokio::spawn(async move {
            let outcome = match effect {
                SyncEffect::ListCreated(list) => remote.create(&list).await,
                SyncEffect::CardCreated(card) => remote.create(&card).await,
                SyncEffect::ListUpdated(list) => remote.update(&list).await,
                SyncEffect::CardUpdated(card) => remote.update(&card).await,
                SyncEffect::ListDeleted { id } => remote.delete(&id).await,
                SyncEffect::CardDeleted { id, .. } => remote.delete(&id).await,
                SyncEffect::CardMoved { card, .. } => remote.update_moved(&card).await,
            };
            if let Err(err) = outcome {
                log::warn!("background persistence failed: {}", err);
            }
        });
    }
}
