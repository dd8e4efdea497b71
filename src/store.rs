//! The board state store — owned, single-writer, optimistic.
//!
//! [`BoardStore`] holds the in-memory [`Board`] and the sync machinery
//! behind it. Every mutation goes through `&mut self`, so a store has
//! exactly one writer by construction; other parts of an application
//! observe the optimistic collection through the shared [`BoardCache`]
//! handle instead of the board itself.

use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;

use crate::action::BoardAction;
use crate::board::{Board, List};
use crate::config::SyncConfig;
use crate::sync::{BoardCache, RemoteStore, RemoteStoreError, SyncDispatcher};
use crate::transition;

/// Owned board state plus its effect dispatcher.
#[derive(Debug)]
pub struct BoardStore {
    board: Board,
    remote: RemoteStore,
    dispatcher: SyncDispatcher,
    cache: Arc<BoardCache>,
}

impl BoardStore {
    /// Build an empty store over the configured remote.
    pub fn new(config: &SyncConfig) -> Result<Self, RemoteStoreError> {
        let remote = RemoteStore::new(config)?;
        let cache = Arc::new(BoardCache::new());
        let dispatcher = SyncDispatcher::new(remote.clone(), Arc::clone(&cache));
        Ok(Self {
            board: Board::new(),
            remote,
            dispatcher,
            cache,
        })
    }

    /// Current board state.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Shared handle to the optimistic cache.
    pub fn cache(&self) -> Arc<BoardCache> {
        Arc::clone(&self.cache)
    }

    /// The fetch-all URL this store caches under.
    pub fn cache_key(&self) -> String {
        self.remote.fetch_url()
    }

    /// Apply any action, dispatching the sync effect it produces.
    ///
    /// Must be called from within a tokio runtime; the remote request runs
    /// as an unawaited background task.
    pub fn apply(&mut self, action: BoardAction) {
        if let Some(effect) = transition::apply(&mut self.board, action) {
            self.dispatcher.dispatch(effect);
        }
    }

    /// Fetch the authoritative collection and hydrate the board from it.
    ///
    /// The one operation that observes the network: seeds both the board
    /// and the cache with whatever the server currently holds.
    pub async fn hydrate(&mut self) -> anyhow::Result<()> {
        let lists = self
            .remote
            .fetch_all()
            .await
            .context("hydrating board from remote store")?;
        self.cache.set(self.cache_key(), lists.clone());
        self.apply(BoardAction::ReplaceAll { lists });
        Ok(())
    }

    // Convenience wrappers, one per user action.

    /// Replace the whole board. No remote effect.
    pub fn replace_all(&mut self, lists: Vec<List>) {
        self.apply(BoardAction::ReplaceAll { lists });
    }

    /// Append a new empty list.
    pub fn add_list(&mut self, title: impl Into<String>) {
        self.apply(BoardAction::AddList {
            title: title.into(),
        });
    }

    /// Append a card to the list with `parent_id`. No-op if the list is
    /// missing.
    pub fn add_card(
        &mut self,
        parent_id: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Option<NaiveDate>,
    ) {
        self.apply(BoardAction::AddCard {
            parent_id: parent_id.to_string(),
            title: title.into(),
            description: description.into(),
            due_date,
        });
    }

    /// Rename a list. No-op if missing.
    pub fn update_list(&mut self, id: &str, title: impl Into<String>) {
        self.apply(BoardAction::UpdateList {
            id: id.to_string(),
            title: title.into(),
        });
    }

    /// Rewrite a card's editable fields. No-op if the list or card is
    /// missing.
    pub fn update_card(
        &mut self,
        parent_id: &str,
        id: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Option<NaiveDate>,
    ) {
        self.apply(BoardAction::UpdateCard {
            parent_id: parent_id.to_string(),
            id: id.to_string(),
            title: title.into(),
            description: description.into(),
            due_date,
        });
    }

    /// Remove a list. Idempotent.
    pub fn delete_list(&mut self, id: &str) {
        self.apply(BoardAction::DeleteList { id: id.to_string() });
    }

    /// Remove a card from its list. No-op if the list is missing.
    pub fn delete_card(&mut self, parent_id: &str, id: &str) {
        self.apply(BoardAction::DeleteCard {
            parent_id: parent_id.to_string(),
            id: id.to_string(),
        });
    }

    /// Move the list at `start_index` to `end_index`. Local-only.
    pub fn reorder_lists(&mut self, start_index: usize, end_index: usize) {
        self.apply(BoardAction::ReorderLists {
            start_index,
            end_index,
        });
    }

    /// Move a card between list positions, across or within lists.
    pub fn move_card(
        &mut self,
        source_list_id: &str,
        destination_list_id: &str,
        source_index: usize,
        destination_index: usize,
    ) {
        self.apply(BoardAction::MoveCard {
            source_list_id: source_list_id.to_string(),
            destination_list_id: destination_list_id.to_string(),
            source_index,
            destination_index,
        });
    }
}
