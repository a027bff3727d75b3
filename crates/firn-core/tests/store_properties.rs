//! Property tests for Store implementations
//!
//! These tests verify that every backend answers listings the same way:
//! - Memory and redb stores return identical pages for any query
//! - Pages are ordered by `updated_at`, ties broken by id
//! - A chaotic wrapper either fails with `Unavailable` or answers exactly
//!   like the store it wraps

use chrono::{Duration, TimeZone, Utc};
use firn_core::{
    ChaoticStore, Entry, Journal, ListQuery, MemoryStore, RedbStore, SortOrder, Store,
    StoreError, StoreWriter,
};
use proptest::prelude::*;

/// Journal `j` with one entry per element of `minutes`, entry `i` updated
/// `minutes[i]` after a fixed base time.
fn populate(store: &impl StoreWriter, minutes: &[i64]) -> Result<(), StoreError> {
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    store.put_journal(&Journal::new("j", "Journal", base))?;

    for (i, offset) in minutes.iter().enumerate() {
        let entry = Entry::new(format!("e{i:03}"), "j", format!("Entry {i}"), "", base)
            .updated(base + Duration::minutes(*offset));
        store.put_entry(&entry)?;
    }
    Ok(())
}

fn query_strategy() -> impl Strategy<Value = ListQuery> {
    (any::<bool>(), 0usize..8, 0usize..12).prop_map(|(descending, limit, offset)| {
        let order = if descending { SortOrder::Descending } else { SortOrder::Ascending };
        ListQuery::new(order).with_limit(limit).with_offset(offset)
    })
}

fn ids(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn prop_memory_and_redb_agree() {
    proptest!(|(
        minutes in prop::collection::vec(0i64..5, 0..10),
        query in query_strategy(),
    )| {
        let dir = tempfile::tempdir().unwrap();
        let redb = RedbStore::open(dir.path().join("prop.redb")).unwrap();
        let memory = MemoryStore::new();

        populate(&redb, &minutes).unwrap();
        populate(&memory, &minutes).unwrap();

        let from_redb = redb.list_entries("j", &query).unwrap();
        let from_memory = memory.list_entries("j", &query).unwrap();

        // ORACLE: both backends return the same page
        prop_assert_eq!(ids(&from_redb), ids(&from_memory));
    });
}

#[test]
fn prop_pages_are_sorted_windows() {
    proptest!(|(
        minutes in prop::collection::vec(0i64..5, 0..20),
        query in query_strategy(),
    )| {
        let store = MemoryStore::new();
        populate(&store, &minutes).unwrap();

        let page = store.list_entries("j", &query).unwrap();

        // ORACLE: window size follows offset and limit (0 = default page)
        let limit = query.effective_limit(firn_core::store::DEFAULT_ENTRY_LIMIT);
        let expected_len = minutes.len().saturating_sub(query.offset).min(limit);
        prop_assert_eq!(page.len(), expected_len);

        // ORACLE: ordered by (updated_at, id) in the requested direction
        for pair in page.windows(2) {
            let a = (&pair[0].updated_at, &pair[0].id);
            let b = (&pair[1].updated_at, &pair[1].id);
            match query.order {
                SortOrder::Ascending => prop_assert!(a < b),
                SortOrder::Descending => prop_assert!(a > b),
            }
        }
    });
}

#[test]
fn prop_chaotic_store_fails_cleanly() {
    proptest!(|(
        failure_rate in 0.0..1.0,
        seed in any::<u64>(),
        query in query_strategy(),
    )| {
        let inner = MemoryStore::new();
        populate(&inner, &[3, 1, 4, 1, 5, 2, 6]).unwrap();
        let chaotic = ChaoticStore::with_seed(inner.clone(), failure_rate, seed);

        for _ in 0..16 {
            match chaotic.list_entries("j", &query) {
                // ORACLE: a successful read is indistinguishable from the inner store
                Ok(page) => prop_assert_eq!(page, inner.list_entries("j", &query).unwrap()),
                Err(StoreError::Unavailable(_)) => {},
                Err(e) => prop_assert!(false, "Unexpected error: {:?}", e),
            }
        }

        prop_assert_eq!(chaotic.operation_count(), 16);
    });
}
