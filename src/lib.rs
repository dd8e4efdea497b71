//! # hoopoe-board
//!
//! Client-side state store for a kanban task board (lists containing cards)
//! backed by the hoopoe REST API, with optimistic local updates.
//!
//! Every mutation applies to the in-memory [`Board`] synchronously, then the
//! shared cache of the last-known collection is reconciled with the
//! optimistic value and the matching HTTP request fires as an unawaited
//! background task. The remote outcome is never observed: no retry, no
//! rollback, failures are logged and swallowed.
//!
//! The layers compose but test independently:
//!
//! ```text
//! BoardAction ──▶ transition::apply ──▶ Board mutated, Option<SyncEffect>
//!                                              │
//!                        SyncDispatcher ◀──────┘
//!                        ├─ BoardCache.mutate(fetch_url, optimistic value)
//!                        └─ tokio::spawn(RemoteStore request)   // unawaited
//! ```
//!
//! ```no_run
//! use hoopoe_board::{BoardStore, SyncConfig};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let mut store = BoardStore::new(&SyncConfig::from_env())?;
//! store.hydrate().await?;
//! store.add_list("Todo");
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod board;
pub mod config;
pub mod store;
pub mod sync;
pub mod transition;

pub use action::BoardAction;
pub use board::{Board, Card, List};
pub use config::SyncConfig;
pub use store::BoardStore;
pub use sync::{BoardCache, RemoteStore, RemoteStoreError, SyncDispatcher};
pub use transition::{apply, SyncEffect};
