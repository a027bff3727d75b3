//! Application input events.
//!
//! This module defines [`AppEvent`], the complete set of inputs that drive
//! the [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (Keyboard, Resize) from the driver.
//! - Completions of store commands executed by the runtime.

use firn_core::{Entry, Journal, StoreError};

use crate::{KeyInput, Request};

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Journal listing completed.
    JournalsLoaded {
        /// Journals in store order.
        journals: Vec<Journal>,
    },

    /// Entry listing completed.
    EntriesLoaded {
        /// Journal the listing was requested for.
        journal_id: String,
        /// Entries in store order.
        entries: Vec<Entry>,
    },

    /// Single entry fetch completed.
    EntryLoaded {
        /// Journal the fetch was requested for.
        journal_id: String,
        /// Entry the fetch was requested for.
        entry_id: String,
        /// `None` if the entry does not exist.
        entry: Option<Entry>,
    },

    /// A store command failed.
    LoadFailed {
        /// The request that failed.
        request: Request,
        /// Cause reported by the store.
        error: StoreError,
    },
}
