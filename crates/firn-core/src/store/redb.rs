//! Redb-backed durable store implementation.
//!
//! Uses Redb's ACID transactions with Copy-on-Write for crash safety.
//! Records are CBOR-encoded so the on-disk format follows the serde model.

use std::{fmt::Display, path::Path, sync::Arc};

use redb::{Database, ReadableTable, TableDefinition};
use serde::{Serialize, de::DeserializeOwned};

use super::{
    DEFAULT_ENTRY_LIMIT, DEFAULT_JOURNAL_LIMIT, ListQuery, Store, StoreError, StoreWriter,
    paginate,
};
use crate::{Entry, Journal};

/// Table: journals
/// Key: journal id
/// Value: CBOR-encoded Journal
const JOURNALS: TableDefinition<&str, &[u8]> = TableDefinition::new("journals");

/// Table: entries
/// Key: [journal_id length: 4 bytes BE][journal_id][entry_id]
/// Value: CBOR-encoded Entry
const ENTRIES: TableDefinition<&[u8], &[u8]> = TableDefinition::new("entries");

/// Durable store backed by Redb.
///
/// Thread-safe through Redb's internal locking. Clone is cheap (Arc).
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open or create a Redb database at the given path.
    ///
    /// Creates tables if they don't exist (JOURNALS, ENTRIES).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the database cannot be opened or
    /// created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let db = Database::create(path)
            .map_err(|e| StoreError::Unavailable(format!("{}: {e}", path.display())))?;

        let txn = db.begin_write().map_err(io_err)?;
        {
            let _ = txn.open_table(JOURNALS).map_err(io_err)?;
            let _ = txn.open_table(ENTRIES).map_err(io_err)?;
        }
        txn.commit().map_err(io_err)?;

        tracing::debug!(path = %path.display(), "opened redb store");
        Ok(Self { db: Arc::new(db) })
    }
}

impl Store for RedbStore {
    fn list_journals(&self, query: &ListQuery) -> Result<Vec<Journal>, StoreError> {
        let txn = self.db.begin_read().map_err(io_err)?;
        let table = txn.open_table(JOURNALS).map_err(io_err)?;

        let mut journals = Vec::new();
        for result in table.iter().map_err(io_err)? {
            let (_, value) = result.map_err(io_err)?;
            journals.push(decode::<Journal>(value.value())?);
        }

        Ok(paginate(journals, query, DEFAULT_JOURNAL_LIMIT))
    }

    fn list_entries(&self, journal_id: &str, query: &ListQuery) -> Result<Vec<Entry>, StoreError> {
        let txn = self.db.begin_read().map_err(io_err)?;
        let table = txn.open_table(ENTRIES).map_err(io_err)?;

        let prefix = encode_journal_prefix(journal_id);

        let mut entries = Vec::new();
        for result in table.range(prefix.as_slice()..).map_err(io_err)? {
            let (key, value) = result.map_err(io_err)?;
            if !key.value().starts_with(&prefix) {
                break;
            }
            entries.push(decode::<Entry>(value.value())?);
        }

        Ok(paginate(entries, query, DEFAULT_ENTRY_LIMIT))
    }

    fn get_entry(&self, journal_id: &str, entry_id: &str) -> Result<Option<Entry>, StoreError> {
        let txn = self.db.begin_read().map_err(io_err)?;
        let table = txn.open_table(ENTRIES).map_err(io_err)?;

        let key = encode_entry_key(journal_id, entry_id);

        match table.get(key.as_slice()).map_err(io_err)? {
            Some(value) => Ok(Some(decode::<Entry>(value.value())?)),
            None => Ok(None),
        }
    }
}

impl StoreWriter for RedbStore {
    fn put_journal(&self, journal: &Journal) -> Result<(), StoreError> {
        let txn = self.db.begin_write().map_err(io_err)?;

        {
            let mut table = txn.open_table(JOURNALS).map_err(io_err)?;
            let bytes = encode(journal)?;
            table.insert(journal.id.as_str(), bytes.as_slice()).map_err(io_err)?;
        }

        txn.commit().map_err(io_err)?;

        Ok(())
    }

    fn put_entry(&self, entry: &Entry) -> Result<(), StoreError> {
        let txn = self.db.begin_write().map_err(io_err)?;

        {
            let journals = txn.open_table(JOURNALS).map_err(io_err)?;
            if journals.get(entry.journal_id.as_str()).map_err(io_err)?.is_none() {
                return Err(StoreError::Query(format!(
                    "journal {} does not exist",
                    entry.journal_id
                )));
            }

            let mut table = txn.open_table(ENTRIES).map_err(io_err)?;
            let key = encode_entry_key(&entry.journal_id, &entry.id);
            let bytes = encode(entry)?;
            table.insert(key.as_slice(), bytes.as_slice()).map_err(io_err)?;
        }

        txn.commit().map_err(io_err)?;

        Ok(())
    }
}

fn io_err(err: impl Display) -> StoreError {
    StoreError::Io(err.to_string())
}

fn encode<T: Serialize>(record: &T) -> Result<Vec<u8>, StoreError> {
    let mut bytes = Vec::new();
    ciborium::into_writer(record, &mut bytes)
        .map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(bytes)
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StoreError> {
    ciborium::from_reader(bytes).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Encode the key prefix shared by all entries of a journal.
///
/// Layout: [journal_id length: 4 bytes BE][journal_id bytes]
/// The length prefix keeps "ab" + "c" and "a" + "bc" from colliding.
fn encode_journal_prefix(journal_id: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(4 + journal_id.len());
    key.extend_from_slice(&(journal_id.len() as u32).to_be_bytes());
    key.extend_from_slice(journal_id.as_bytes());
    key
}

/// Encode (journal_id, entry_id) as a composite key.
fn encode_entry_key(journal_id: &str, entry_id: &str) -> Vec<u8> {
    let mut key = encode_journal_prefix(journal_id);
    key.extend_from_slice(entry_id.as_bytes());
    key
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use tempfile::tempdir;

    use super::*;
    use crate::SortOrder;

    fn at(hour: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_entry_keys_do_not_collide_across_journals() {
        assert_ne!(encode_entry_key("ab", "c"), encode_entry_key("a", "bc"));
        assert!(encode_entry_key("j1", "e1").starts_with(&encode_journal_prefix("j1")));
    }

    #[test]
    fn test_journal_roundtrip() {
        let dir = tempdir().unwrap();
        let store = RedbStore::open(dir.path().join("test.redb")).unwrap();

        let journal = Journal::new("j1", "Diary", at(1));
        store.put_journal(&journal).unwrap();

        let loaded = store.list_journals(&ListQuery::default()).unwrap();
        assert_eq!(loaded, vec![journal]);
    }

    #[test]
    fn test_list_entries_scoped_to_journal() {
        let dir = tempdir().unwrap();
        let store = RedbStore::open(dir.path().join("test.redb")).unwrap();

        store.put_journal(&Journal::new("j1", "Diary", at(1))).unwrap();
        store.put_journal(&Journal::new("j10", "Work", at(1))).unwrap();
        store.put_entry(&Entry::new("e1", "j1", "Day 1", "a", at(2))).unwrap();
        store.put_entry(&Entry::new("e2", "j1", "Day 2", "b", at(3))).unwrap();
        store.put_entry(&Entry::new("e1", "j10", "Standup", "c", at(4))).unwrap();

        let entries = store.list_entries("j1", &ListQuery::new(SortOrder::Descending)).unwrap();
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Day 2", "Day 1"]);
    }

    #[test]
    fn test_list_entries_pagination() {
        let dir = tempdir().unwrap();
        let store = RedbStore::open(dir.path().join("test.redb")).unwrap();

        store.put_journal(&Journal::new("j1", "Diary", at(0))).unwrap();
        for i in 0..20 {
            let entry = Entry::new(format!("e{i:02}"), "j1", format!("Day {i}"), "", at(0))
                .updated(at(0) + Duration::minutes(i));
            store.put_entry(&entry).unwrap();
        }

        let query = ListQuery::default().with_limit(10).with_offset(10);
        let page = store.list_entries("j1", &query).unwrap();
        assert_eq!(page.len(), 10);
        assert_eq!(page[0].id, "e10");
        assert_eq!(page[9].id, "e19");
    }

    #[test]
    fn test_get_entry_not_found() {
        let dir = tempdir().unwrap();
        let store = RedbStore::open(dir.path().join("test.redb")).unwrap();

        store.put_journal(&Journal::new("j1", "Diary", at(1))).unwrap();
        assert!(store.get_entry("j1", "missing").unwrap().is_none());
    }

    #[test]
    fn test_put_entry_requires_journal() {
        let dir = tempdir().unwrap();
        let store = RedbStore::open(dir.path().join("test.redb")).unwrap();

        let result = store.put_entry(&Entry::new("e1", "j1", "Day 1", "a", at(2)));
        match result {
            Err(StoreError::Query(_)) => {},
            other => panic!("Expected Query error, got: {other:?}"),
        }
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.redb");

        {
            let store = RedbStore::open(&path).unwrap();
            store.put_journal(&Journal::new("j1", "Diary", at(1))).unwrap();
            store.put_entry(&Entry::new("e1", "j1", "Day 1", "hello", at(2))).unwrap();
        }

        let store = RedbStore::open(&path).unwrap();
        let entry = store.get_entry("j1", "e1").unwrap().unwrap();
        assert_eq!(entry.content, "hello");
    }
}
