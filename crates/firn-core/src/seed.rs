//! Demo content for first runs and tests.
//!
//! Timestamps are fixed so listings are stable across runs.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::{Entry, Journal, Store, StoreError, StoreWriter, store::ListQuery};

/// A journal together with its entries.
pub type DemoJournal = (Journal, Vec<Entry>);

fn epoch() -> DateTime<Utc> {
    Utc.timestamp_opt(1_714_557_600, 0).single().unwrap_or_default()
}

/// The demo journals.
pub fn demo_journals() -> Vec<DemoJournal> {
    let start = epoch();
    let diary = Journal::new("diary", "Diary", start).updated(start + Duration::days(3));
    let work = Journal::new("work", "Work log", start).updated(start + Duration::days(2));
    let reading = Journal::new("reading", "Reading notes", start).updated(start + Duration::days(1));

    let diary_entries = (1..=6)
        .map(|day| {
            let at = start + Duration::days(day - 1) + Duration::hours(21);
            Entry::new(
                format!("d{day}"),
                "diary",
                format!("Day {day}"),
                format!("Dear diary,\n\nday {day} was uneventful.\nThe snow on the pass held."),
                at,
            )
        })
        .collect();

    let work_entries = vec![
        Entry::new(
            "w1",
            "work",
            "Standup",
            "- reviewed the store migration\n- paired on the layout bug",
            start + Duration::hours(9),
        ),
        Entry::new(
            "w2",
            "work",
            "Retro",
            "Went well: shipping cadence.\nTo improve: flaky terminal tests.",
            start + Duration::days(1) + Duration::hours(16),
        ),
    ];

    let reading_entries = vec![Entry::new(
        "r1",
        "reading",
        "The Ice Book",
        "Firn is granular snow that has survived one melt season\nbut has not yet become glacier ice.",
        start + Duration::hours(12),
    )];

    vec![(diary, diary_entries), (work, work_entries), (reading, reading_entries)]
}

/// Write the demo journals into `store` unless it already holds journals.
///
/// Returns the number of journals written (0 when the store was not empty).
pub fn populate<S: StoreWriter>(store: &S) -> Result<usize, StoreError> {
    if !store.list_journals(&ListQuery::default().with_limit(1))?.is_empty() {
        tracing::debug!("store already populated, skipping demo seed");
        return Ok(0);
    }

    let demo = demo_journals();
    for (journal, entries) in &demo {
        store.put_journal(journal)?;
        for entry in entries {
            store.put_entry(entry)?;
        }
    }

    tracing::info!(journals = demo.len(), "seeded demo journals");
    Ok(demo.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, SortOrder};

    #[test]
    fn populate_fills_an_empty_store_once() {
        let store = MemoryStore::new();

        assert_eq!(populate(&store).unwrap(), 3);
        assert_eq!(populate(&store).unwrap(), 0);
        assert_eq!(store.journal_count().unwrap(), 3);
    }

    #[test]
    fn newest_journal_first_when_descending() {
        let store = MemoryStore::new();
        populate(&store).unwrap();

        let journals = store.list_journals(&ListQuery::new(SortOrder::Descending)).unwrap();
        assert_eq!(journals[0].name, "Diary");
        assert_eq!(store.list_entries("diary", &ListQuery::default()).unwrap().len(), 6);
    }

    #[test]
    fn entries_belong_to_their_journal() {
        for (journal, entries) in demo_journals() {
            assert!(entries.iter().all(|e| e.journal_id == journal.id));
        }
    }
}
