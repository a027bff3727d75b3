//! Core types for Firn
//!
//! Domain model for journals and entries plus the [`Store`] port the
//! navigation engine reads through.
//!
//! # Components
//!
//! - [`Journal`], [`Entry`]: Immutable domain records
//! - [`Store`]: Read-only port (list journals, list entries, fetch entry)
//! - [`MemoryStore`], [`RedbStore`]: Store backends
//! - [`ChaoticStore`]: Fault-injecting wrapper for tests

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod journal;
pub mod seed;
pub mod store;

pub use journal::{DATETIME_FORMAT, Entry, Journal, format_timestamp};
pub use store::{
    ChaoticStore, DEFAULT_ENTRY_LIMIT, DEFAULT_JOURNAL_LIMIT, ListQuery, MemoryStore, RedbStore,
    SortOrder, Store, StoreError, StoreWriter,
};
