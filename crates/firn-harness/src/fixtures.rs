//! Store fixtures with fixed timestamps.

use chrono::{DateTime, Duration, TimeZone, Utc};
use firn_core::{Entry, Journal, MemoryStore, StoreError};

/// Base time for fixture records.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().unwrap_or_default()
}

/// Journal `id` named `name`, updated `minutes` after [`base_time`].
pub fn journal(id: &str, name: &str, minutes: i64) -> Journal {
    Journal::new(id, name, base_time()).updated(base_time() + Duration::minutes(minutes))
}

/// Entry `id` of `journal_id`, updated `minutes` after [`base_time`].
pub fn entry(journal_id: &str, id: &str, title: &str, minutes: i64) -> Entry {
    Entry::new(id, journal_id, title, format!("{title}\n\nwritten in {journal_id}"), base_time())
        .updated(base_time() + Duration::minutes(minutes))
}

/// One journal `j1` "Diary" with entries `e1` "Day 1" and `e2` "Day 2".
pub fn diary_store() -> Result<MemoryStore, StoreError> {
    MemoryStore::with_content([journal("j1", "Diary", 0)], [
        entry("j1", "e1", "Day 1", 1),
        entry("j1", "e2", "Day 2", 2),
    ])
}

/// `journals` journals `j0..`, each with `entries` entries `e0..`.
///
/// Listing order (ascending) matches the numbering.
pub fn grid_store(journals: usize, entries: usize) -> Result<MemoryStore, StoreError> {
    let journal_rows =
        (0..journals).map(|j| journal(&format!("j{j}"), &format!("Journal {j}"), j as i64));
    let entry_rows = (0..journals).flat_map(|j| {
        (0..entries).map(move |e| {
            entry(&format!("j{j}"), &format!("e{e}"), &format!("Entry {j}.{e}"), e as i64)
        })
    });
    MemoryStore::with_content(journal_rows, entry_rows)
}
