//! Board data model — ordered lists of cards, wire-compatible with the
//! hoopoe task API.
//!
//! The remote store exchanges the same JSON shapes the web client uses:
//! camelCase keys, cards embedded in their parent list, and a `parentId`
//! back-reference on every card. A [`Board`] serializes transparently as the
//! bare array of lists that `GET /fetch-task` returns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task card belonging to exactly one list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Opaque unique identifier.
    pub id: String,
    /// Card title.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Due date (ISO `YYYY-MM-DD`), if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Id of the list that currently contains this card.
    pub parent_id: String,
}

impl Card {
    /// Create a card with a fresh v4 id under the given parent list.
    pub fn new(
        parent_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            due_date,
            parent_id: parent_id.into(),
        }
    }
}

/// A named column holding an ordered run of cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// Opaque unique identifier.
    pub id: String,
    /// List title.
    pub title: String,
    /// Cards in display order.
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    /// Create an empty list with a fresh v4 id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Look up a card by id.
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub(crate) fn card_mut(&mut self, id: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }
}

/// The whole board: lists in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// Lists in display order.
    pub lists: Vec<List>,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a list by id.
    pub fn list(&self, id: &str) -> Option<&List> {
        self.lists.iter().find(|l| l.id == id)
    }

    pub(crate) fn list_mut(&mut self, id: &str) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| l.id == id)
    }

    /// Whether every card's `parent_id` matches the list that holds it.
    pub fn check_parent_links(&self) -> bool {
        self.lists
            .iter()
            .all(|list| list.cards.iter().all(|card| card.parent_id == list.id))
    }
}
