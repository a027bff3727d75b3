#![allow(clippy::disallowed_types, reason = "Synchronous in-memory operations only")]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use super::{
    DEFAULT_ENTRY_LIMIT, DEFAULT_JOURNAL_LIMIT, ListQuery, Store, StoreError, StoreWriter,
    paginate,
};
use crate::{Entry, Journal};

/// In-memory store for tests, demos and simulation
///
/// Uses `HashMap` keyed by journal id, with each journal's entries in a nested
/// map keyed by entry id. All state is wrapped in Arc<Mutex<>> to allow Clone
/// and concurrent access. A poisoned mutex surfaces as [`StoreError::Io`]
/// rather than a panic.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryStoreInner>>,
}

#[derive(Default)]
struct MemoryStoreInner {
    journals: HashMap<String, Journal>,

    /// Entries by journal id, then entry id
    entries: HashMap<String, HashMap<String, Entry>>,
}

impl MemoryStore {
    /// Create a new empty `MemoryStore`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given journals and entries.
    ///
    /// Entries whose journal is not in `journals` are rejected.
    pub fn with_content(
        journals: impl IntoIterator<Item = Journal>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Result<Self, StoreError> {
        let store = Self::new();
        for journal in journals {
            store.put_journal(&journal)?;
        }
        for entry in entries {
            store.put_entry(&entry)?;
        }
        Ok(store)
    }

    /// Number of journals stored.
    pub fn journal_count(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.journals.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryStoreInner>, StoreError> {
        self.inner.lock().map_err(|_| StoreError::Io("memory store mutex poisoned".to_string()))
    }
}

impl Store for MemoryStore {
    fn list_journals(&self, query: &ListQuery) -> Result<Vec<Journal>, StoreError> {
        let inner = self.lock()?;
        let rows = inner.journals.values().cloned().collect();
        Ok(paginate(rows, query, DEFAULT_JOURNAL_LIMIT))
    }

    fn list_entries(&self, journal_id: &str, query: &ListQuery) -> Result<Vec<Entry>, StoreError> {
        let inner = self.lock()?;
        let rows = inner
            .entries
            .get(journal_id)
            .map(|entries| entries.values().cloned().collect())
            .unwrap_or_default();
        Ok(paginate(rows, query, DEFAULT_ENTRY_LIMIT))
    }

    fn get_entry(&self, journal_id: &str, entry_id: &str) -> Result<Option<Entry>, StoreError> {
        let inner = self.lock()?;
        Ok(inner.entries.get(journal_id).and_then(|entries| entries.get(entry_id)).cloned())
    }
}

impl StoreWriter for MemoryStore {
    fn put_journal(&self, journal: &Journal) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.journals.insert(journal.id.clone(), journal.clone());
        Ok(())
    }

    fn put_entry(&self, entry: &Entry) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        if !inner.journals.contains_key(&entry.journal_id) {
            return Err(StoreError::Query(format!("journal {} does not exist", entry.journal_id)));
        }

        inner
            .entries
            .entry(entry.journal_id.clone())
            .or_default()
            .insert(entry.id.clone(), entry.clone());
        Ok(())
    }
}
