//! Pure state transitions.
//!
//! [`apply`] mutates the board synchronously and reports the remote side
//! effect the mutation calls for, without performing it. Persistence and
//! cache reconciliation live in [`crate::sync`]; keeping them out of here
//! makes every transition arm testable without a runtime or a server.

use crate::action::BoardAction;
use crate::board::{Board, Card, List};

/// The persistence and cache-reconciliation work an applied action calls for.
///
/// Each variant carries the optimistic value the cache should take, already
/// in its final shape; the dispatcher only has to splice it in and fire the
/// matching HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEffect {
    /// POST the new list; append it to the cached collection.
    ListCreated(List),
    /// POST the new card; insert it into its cached parent list.
    CardCreated(Card),
    /// PUT the list; replace its cache entry.
    ListUpdated(List),
    /// PUT the card; replace it within its cached parent list.
    CardUpdated(Card),
    /// DELETE by id; drop the list from the cache.
    ListDeleted { id: String },
    /// DELETE by id; drop the card from its cached parent list.
    CardDeleted { parent_id: String, id: String },
    /// POST the moved card's new state; the cache takes the full board.
    CardMoved { card: Card, lists: Vec<List> },
}

/// Apply one action to the board.
///
/// Returns the sync effect the caller should dispatch, or `None` when the
/// action is local-only (`ReplaceAll`, `ReorderLists`) or degraded to a
/// no-op because a referenced list, card, or index does not exist.
pub fn apply(board: &mut Board, action: BoardAction) -> Option<SyncEffect> {
    match action {
        BoardAction::ReplaceAll { lists } => {
            board.lists = lists;
            None
        }
        BoardAction::AddList { title } => {
            let list = List::new(title);
            board.lists.push(list.clone());
            Some(SyncEffect::ListCreated(list))
        }
        BoardAction::AddCard {
            parent_id,
            title,
            description,
            due_date,
        } => {
            let list = board.list_mut(&parent_id)?;
            let card = Card::new(&*list.id, title, description, due_date);
            list.cards.push(card.clone());
            Some(SyncEffect::CardCreated(card))
        }
        BoardAction::UpdateList { id, title } => {
            let list = board.list_mut(&id)?;
            list.title = title;
            Some(SyncEffect::ListUpdated(list.clone()))
        }
        BoardAction::UpdateCard {
            parent_id,
            id,
            title,
            description,
            due_date,
        } => {
            // A missing parent list degrades to a no-op like every sibling
            // operation (the web client faulted here instead).
            let list = board.list_mut(&parent_id)?;
            let card = list.card_mut(&id)?;
            card.title = title;
            card.description = description;
            card.due_date = due_date;
            Some(SyncEffect::CardUpdated(card.clone()))
        }
        BoardAction::DeleteList { id } => {
            // Unconditional filter: deleting an absent id is a harmless
            // repeat of the same DELETE request.
            board.lists.retain(|l| l.id != id);
            Some(SyncEffect::ListDeleted { id })
        }
        BoardAction::DeleteCard { parent_id, id } => {
            let list = board.list_mut(&parent_id)?;
            list.cards.retain(|c| c.id != id);
            Some(SyncEffect::CardDeleted { parent_id, id })
        }
        BoardAction::ReorderLists {
            start_index,
            end_index,
        } => {
            if start_index < board.lists.len() {
                let list = board.lists.remove(start_index);
                let at = end_index.min(board.lists.len());
                board.lists.insert(at, list);
            }
            None
        }
        BoardAction::MoveCard {
            source_list_id,
            destination_list_id,
            source_index,
            destination_index,
        } => {
            board.list(&destination_list_id)?;
            let source = board.list_mut(&source_list_id)?;
            if source_index >= source.cards.len() {
                return None;
            }
            let mut card = source.cards.remove(source_index);
            card.parent_id = destination_list_id.clone();

            // Reborrow: source and destination may be the same list.
            let destination = board.list_mut(&destination_list_id)?;
            let at = destination_index.min(destination.cards.len());
            destination.cards.insert(at, card.clone());

            Some(SyncEffect::CardMoved {
                card,
                lists: board.lists.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_lists(titles: &[&str]) -> Board {
        let mut board = Board::new();
        for title in titles {
            apply(
                &mut board,
                BoardAction::AddList {
                    title: (*title).to_string(),
                },
            );
        }
        board
    }

    fn add_card(board: &mut Board, parent_id: &str, title: &str) -> Option<SyncEffect> {
        apply(
            board,
            BoardAction::AddCard {
                parent_id: parent_id.to_string(),
                title: title.to_string(),
                description: String::new(),
                due_date: None,
            },
        )
    }

    #[test]
    fn test_replace_all_has_no_effect() {
        let mut board = Board::new();
        let lists = vec![List::new("Todo"), List::new("Done")];
        let effect = apply(&mut board, BoardAction::ReplaceAll { lists: lists.clone() });
        assert!(effect.is_none());
        assert_eq!(board.lists, lists);
    }

    #[test]
    fn test_add_list_appends_empty_list() {
        let mut board = board_with_lists(&["Todo"]);
        let effect = apply(
            &mut board,
            BoardAction::AddList {
                title: "Doing".into(),
            },
        );

        assert_eq!(board.lists.len(), 2);
        let last = board.lists.last().unwrap();
        assert_eq!(last.title, "Doing");
        assert!(last.cards.is_empty());
        assert_ne!(last.id, board.lists[0].id);
        assert_eq!(effect, Some(SyncEffect::ListCreated(last.clone())));
    }

    #[test]
    fn test_add_card_appends_to_parent() {
        let mut board = board_with_lists(&["Todo"]);
        let parent_id = board.lists[0].id.clone();

        let effect = apply(
            &mut board,
            BoardAction::AddCard {
                parent_id: parent_id.clone(),
                title: "Task 1".into(),
                description: "notes".into(),
                due_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
            },
        );

        let card = &board.lists[0].cards[0];
        assert_eq!(card.title, "Task 1");
        assert_eq!(card.description, "notes");
        assert_eq!(card.parent_id, parent_id);
        assert_eq!(effect, Some(SyncEffect::CardCreated(card.clone())));
        assert!(board.check_parent_links());
    }

    #[test]
    fn test_add_card_to_missing_list_is_noop() {
        let mut board = board_with_lists(&["Todo"]);
        let before = board.clone();
        let effect = add_card(&mut board, "no-such-list", "Task");
        assert!(effect.is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn test_update_list_title() {
        let mut board = board_with_lists(&["Todo"]);
        let id = board.lists[0].id.clone();

        let effect = apply(
            &mut board,
            BoardAction::UpdateList {
                id,
                title: "In Progress".into(),
            },
        );

        assert_eq!(board.lists[0].title, "In Progress");
        assert_eq!(effect, Some(SyncEffect::ListUpdated(board.lists[0].clone())));
    }

    #[test]
    fn test_update_missing_list_is_noop() {
        let mut board = board_with_lists(&["Todo"]);
        let before = board.clone();
        let effect = apply(
            &mut board,
            BoardAction::UpdateList {
                id: "missing".into(),
                title: "x".into(),
            },
        );
        assert!(effect.is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn test_update_card_rewrites_fields() {
        let mut board = board_with_lists(&["Todo"]);
        let parent_id = board.lists[0].id.clone();
        add_card(&mut board, &parent_id, "Task 1");
        let card_id = board.lists[0].cards[0].id.clone();

        let due = chrono::NaiveDate::from_ymd_opt(2024, 6, 1);
        let effect = apply(
            &mut board,
            BoardAction::UpdateCard {
                parent_id,
                id: card_id,
                title: "Task 1b".into(),
                description: "updated".into(),
                due_date: due,
            },
        );

        let card = &board.lists[0].cards[0];
        assert_eq!(card.title, "Task 1b");
        assert_eq!(card.description, "updated");
        assert_eq!(card.due_date, due);
        assert_eq!(effect, Some(SyncEffect::CardUpdated(card.clone())));
    }

    #[test]
    fn test_update_card_missing_list_is_noop() {
        let mut board = board_with_lists(&["Todo"]);
        let before = board.clone();
        let effect = apply(
            &mut board,
            BoardAction::UpdateCard {
                parent_id: "missing".into(),
                id: "whatever".into(),
                title: "x".into(),
                description: String::new(),
                due_date: None,
            },
        );
        assert!(effect.is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn test_update_missing_card_is_noop() {
        let mut board = board_with_lists(&["Todo"]);
        let parent_id = board.lists[0].id.clone();
        let before = board.clone();
        let effect = apply(
            &mut board,
            BoardAction::UpdateCard {
                parent_id,
                id: "missing".into(),
                title: "x".into(),
                description: String::new(),
                due_date: None,
            },
        );
        assert!(effect.is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn test_delete_list_is_idempotent() {
        let mut board = board_with_lists(&["Todo", "Done"]);
        let id = board.lists[0].id.clone();

        apply(&mut board, BoardAction::DeleteList { id: id.clone() });
        assert_eq!(board.lists.len(), 1);
        let after_first = board.clone();

        // The repeat leaves the board alone but still emits the DELETE,
        // matching the unconditional filter semantics.
        let effect = apply(&mut board, BoardAction::DeleteList { id: id.clone() });
        assert_eq!(board, after_first);
        assert_eq!(effect, Some(SyncEffect::ListDeleted { id }));
    }

    #[test]
    fn test_delete_absent_card_still_emits_delete() {
        let mut board = board_with_lists(&["Todo"]);
        let parent_id = board.lists[0].id.clone();
        let before = board.clone();

        let effect = apply(
            &mut board,
            BoardAction::DeleteCard {
                parent_id: parent_id.clone(),
                id: "already-gone".into(),
            },
        );

        assert_eq!(board, before);
        assert_eq!(
            effect,
            Some(SyncEffect::CardDeleted {
                parent_id,
                id: "already-gone".into()
            })
        );
    }

    #[test]
    fn test_delete_card() {
        let mut board = board_with_lists(&["Todo"]);
        let parent_id = board.lists[0].id.clone();
        add_card(&mut board, &parent_id, "Task 1");
        let card_id = board.lists[0].cards[0].id.clone();

        let effect = apply(
            &mut board,
            BoardAction::DeleteCard {
                parent_id: parent_id.clone(),
                id: card_id.clone(),
            },
        );

        assert!(board.lists[0].cards.is_empty());
        assert_eq!(
            effect,
            Some(SyncEffect::CardDeleted {
                parent_id,
                id: card_id
            })
        );
    }

    #[test]
    fn test_delete_card_missing_list_is_noop() {
        let mut board = board_with_lists(&["Todo"]);
        let before = board.clone();
        let effect = apply(
            &mut board,
            BoardAction::DeleteCard {
                parent_id: "missing".into(),
                id: "whatever".into(),
            },
        );
        assert!(effect.is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn test_reorder_lists_moves_one_and_preserves_others() {
        let mut board = board_with_lists(&["a", "b", "c", "d"]);
        let ids: Vec<String> = board.lists.iter().map(|l| l.id.clone()).collect();

        let effect = apply(
            &mut board,
            BoardAction::ReorderLists {
                start_index: 0,
                end_index: 2,
            },
        );
        assert!(effect.is_none());

        let after: Vec<String> = board.lists.iter().map(|l| l.id.clone()).collect();
        assert_eq!(after, vec![
            ids[1].clone(),
            ids[2].clone(),
            ids[0].clone(),
            ids[3].clone()
        ]);
    }

    #[test]
    fn test_reorder_lists_out_of_range_is_noop() {
        let mut board = board_with_lists(&["a", "b"]);
        let before = board.clone();
        apply(
            &mut board,
            BoardAction::ReorderLists {
                start_index: 5,
                end_index: 0,
            },
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_reorder_lists_clamps_end_index() {
        let mut board = board_with_lists(&["a", "b", "c"]);
        let first = board.lists[0].id.clone();
        apply(
            &mut board,
            BoardAction::ReorderLists {
                start_index: 0,
                end_index: 99,
            },
        );
        assert_eq!(board.lists.last().unwrap().id, first);
    }

    #[test]
    fn test_move_card_across_lists() {
        let mut board = board_with_lists(&["Todo", "Doing"]);
        let source_id = board.lists[0].id.clone();
        let dest_id = board.lists[1].id.clone();
        add_card(&mut board, &source_id, "Task 1");
        add_card(&mut board, &dest_id, "Task 2");
        let moved_id = board.lists[0].cards[0].id.clone();

        let effect = apply(
            &mut board,
            BoardAction::MoveCard {
                source_list_id: source_id.clone(),
                destination_list_id: dest_id.clone(),
                source_index: 0,
                destination_index: 0,
            },
        );

        assert!(board.lists[0].cards.is_empty());
        let moved = &board.lists[1].cards[0];
        assert_eq!(moved.id, moved_id);
        assert_eq!(moved.parent_id, dest_id);
        assert_eq!(board.lists[1].cards[1].title, "Task 2");
        assert!(board.check_parent_links());

        match effect {
            Some(SyncEffect::CardMoved { card, lists }) => {
                assert_eq!(card.id, moved_id);
                assert_eq!(card.parent_id, dest_id);
                assert_eq!(lists, board.lists);
            }
            other => panic!("expected CardMoved, got {:?}", other),
        }
    }

    #[test]
    fn test_move_card_within_same_list() {
        let mut board = board_with_lists(&["Todo"]);
        let list_id = board.lists[0].id.clone();
        add_card(&mut board, &list_id, "first");
        add_card(&mut board, &list_id, "second");

        apply(
            &mut board,
            BoardAction::MoveCard {
                source_list_id: list_id.clone(),
                destination_list_id: list_id,
                source_index: 0,
                destination_index: 1,
            },
        );

        let titles: Vec<&str> = board.lists[0].cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[test]
    fn test_move_card_missing_list_is_noop() {
        let mut board = board_with_lists(&["Todo"]);
        let list_id = board.lists[0].id.clone();
        add_card(&mut board, &list_id, "Task 1");
        let before = board.clone();

        let effect = apply(
            &mut board,
            BoardAction::MoveCard {
                source_list_id: list_id,
                destination_list_id: "missing".into(),
                source_index: 0,
                destination_index: 0,
            },
        );
        assert!(effect.is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_card_bad_source_index_is_noop() {
        let mut board = board_with_lists(&["Todo", "Doing"]);
        let source_id = board.lists[0].id.clone();
        let dest_id = board.lists[1].id.clone();
        let before = board.clone();

        let effect = apply(
            &mut board,
            BoardAction::MoveCard {
                source_list_id: source_id,
                destination_list_id: dest_id,
                source_index: 3,
                destination_index: 0,
            },
        );
        assert!(effect.is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut board = Board::new();

        apply(
            &mut board,
            BoardAction::AddList {
                title: "Todo".into(),
            },
        );
        let todo_id = board.lists[0].id.clone();

        apply(
            &mut board,
            BoardAction::AddCard {
                parent_id: todo_id.clone(),
                title: "Task 1".into(),
                description: String::new(),
                due_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
            },
        );

        assert_eq!(board.lists.len(), 1);
        assert_eq!(board.lists[0].title, "Todo");
        assert_eq!(board.lists[0].cards.len(), 1);
        assert_eq!(board.lists[0].cards[0].title, "Task 1");

        let card_id = board.lists[0].cards[0].id.clone();
        apply(
            &mut board,
            BoardAction::DeleteCard {
                parent_id: todo_id,
                id: card_id,
            },
        );
        assert!(board.lists[0].cards.is_empty());
    }
}
