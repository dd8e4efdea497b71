//! Cache reconciliation and remote persistence.
//!
//! The store applies every mutation locally first; this module carries the
//! consequences: an optimistic cache of the last-known remote collection,
//! an HTTP client for the task endpoints, and the dispatcher that glues a
//! [`crate::transition::SyncEffect`] to both.

pub mod cache;
pub mod dispatcher;
pub mod remote;

pub use cache::BoardCache;
pub use dispatcher::SyncDispatcher;
pub use remote::{RemoteStore, RemoteStoreError};
