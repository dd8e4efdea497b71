//! Mutation actions accepted by the board store.
//!
//! One variant per user-facing operation. Payload fields mirror the action
//! shapes the web client dispatches, so actions round-trip through JSON with
//! the same camelCase keys as the rest of the wire format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::board::List;

/// A single board mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum BoardAction {
    /// Replace the whole board with the given lists. Used to hydrate from a
    /// fetch; the only mutation with no remote effect besides reordering.
    ReplaceAll { lists: Vec<List> },
    /// Append a new empty list with the given title.
    AddList { title: String },
    /// Append a card to the list identified by `parent_id`.
    AddCard {
        parent_id: String,
        title: String,
        description: String,
        due_date: Option<NaiveDate>,
    },
    /// Rename a list.
    UpdateList { id: String, title: String },
    /// Rewrite a card's editable fields in place.
    UpdateCard {
        parent_id: String,
        id: String,
        title: String,
        description: String,
        due_date: Option<NaiveDate>,
    },
    /// Remove a list and everything in it.
    DeleteList { id: String },
    /// Remove a card from the list identified by `parent_id`.
    DeleteCard { parent_id: String, id: String },
    /// Move the list at `start_index` to `end_index`. Local-only.
    ReorderLists { start_index: usize, end_index: usize },
    /// Move a card from one list position to another, across lists or within
    /// the same list.
    MoveCard {
        source_list_id: String,
        destination_list_id: String,
        source_index: usize,
        destination_index: usize,
    },
}
