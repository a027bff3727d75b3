//! Store port for journal content
//!
//! Trait-based abstraction over journal storage. The trait is synchronous (no
//! async): the navigation engine runs every call on a blocking worker, so
//! backends stay plain request/response code.

mod chaotic;
mod error;
mod memory;
mod redb;

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
pub use chaotic::ChaoticStore;
pub use error::StoreError;
pub use memory::MemoryStore;

pub use self::redb::RedbStore;
use crate::{Entry, Journal};

/// Page size applied to journal listings when the query limit is 0.
pub const DEFAULT_JOURNAL_LIMIT: usize = 100;

/// Page size applied to entry listings when the query limit is 0.
pub const DEFAULT_ENTRY_LIMIT: usize = 100;

/// Direction of a listing, by `updated_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Oldest first.
    #[default]
    Ascending,
    /// Newest first.
    Descending,
}

/// Ordering and pagination for list operations.
///
/// A `limit` of 0 means "the backend's default page size", never "no rows".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListQuery {
    /// Sort direction by `updated_at` (ties broken by id).
    pub order: SortOrder,
    /// Maximum rows to return. 0 selects the default page size.
    pub limit: usize,
    /// Rows to skip before the first returned row.
    pub offset: usize,
}

impl ListQuery {
    /// Query with the given order, default page size and no offset.
    pub fn new(order: SortOrder) -> Self {
        Self { order, limit: 0, offset: 0 }
    }

    /// Set the row limit.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the row offset.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Limit to apply, substituting `default` for 0.
    pub fn effective_limit(&self, default: usize) -> usize {
        if self.limit == 0 { default } else { self.limit }
    }
}

/// Read-only port to journal storage.
///
/// Must be Clone (handed to every in-flight command), Send + Sync (commands
/// run on worker threads) and synchronous. Implementations typically share
/// internal state via Arc, so clones read the same underlying storage.
/// Concurrent calls are allowed without external locking.
pub trait Store: Clone + Send + Sync + 'static {
    /// List journals ordered by `updated_at`.
    ///
    /// Fails with [`StoreError`] when the backend is unreachable or the query
    /// cannot be executed.
    fn list_journals(&self, query: &ListQuery) -> Result<Vec<Journal>, StoreError>;

    /// List the entries of one journal ordered by `updated_at`.
    ///
    /// An unknown journal yields an empty list.
    fn list_entries(&self, journal_id: &str, query: &ListQuery) -> Result<Vec<Entry>, StoreError>;

    /// Fetch one entry by its composite key.
    ///
    /// Returns `None` if no such entry exists.
    fn get_entry(&self, journal_id: &str, entry_id: &str) -> Result<Option<Entry>, StoreError>;
}

/// Write access used to populate a store (seeding, tests).
///
/// Not part of the navigation engine's port; the UI never writes.
pub trait StoreWriter: Store {
    /// Insert or replace a journal.
    fn put_journal(&self, journal: &Journal) -> Result<(), StoreError>;

    /// Insert or replace an entry.
    ///
    /// Fails with [`StoreError::Query`] if the owning journal does not exist.
    fn put_entry(&self, entry: &Entry) -> Result<(), StoreError>;
}

/// Records that lists are ordered by.
pub(crate) trait Listed {
    fn sort_key(&self) -> (&DateTime<Utc>, &str);
}

impl Listed for Journal {
    fn sort_key(&self) -> (&DateTime<Utc>, &str) {
        (&self.updated_at, &self.id)
    }
}

impl Listed for Entry {
    fn sort_key(&self) -> (&DateTime<Utc>, &str) {
        (&self.updated_at, &self.id)
    }
}

/// Sort `rows` per `query`, then apply offset and limit.
pub(crate) fn paginate<T: Listed>(mut rows: Vec<T>, query: &ListQuery, default_limit: usize) -> Vec<T> {
    rows.sort_by(|a, b| {
        let ord: Ordering = a.sort_key().cmp(&b.sort_key());
        match query.order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });

    rows.into_iter().skip(query.offset).take(query.effective_limit(default_limit)).collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn journals(count: usize) -> Vec<Journal> {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        (0..count)
            .map(|i| {
                Journal::new(format!("j{i}"), format!("Journal {i}"), base)
                    .updated(base + Duration::minutes(i as i64))
            })
            .collect()
    }

    #[test]
    fn zero_limit_means_default_page_size() {
        let query = ListQuery::new(SortOrder::Ascending);
        assert_eq!(query.effective_limit(DEFAULT_JOURNAL_LIMIT), DEFAULT_JOURNAL_LIMIT);

        let rows = paginate(journals(150), &query, DEFAULT_JOURNAL_LIMIT);
        assert_eq!(rows.len(), DEFAULT_JOURNAL_LIMIT);
    }

    #[test]
    fn descending_puts_newest_first() {
        let query = ListQuery::new(SortOrder::Descending);
        let rows = paginate(journals(3), &query, DEFAULT_JOURNAL_LIMIT);

        let ids: Vec<_> = rows.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, ["j2", "j1", "j0"]);
    }

    #[test]
    fn offset_and_limit_window_the_sorted_rows() {
        let query = ListQuery::new(SortOrder::Ascending).with_limit(2).with_offset(1);
        let rows = paginate(journals(5), &query, DEFAULT_JOURNAL_LIMIT);

        let ids: Vec<_> = rows.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, ["j1", "j2"]);
    }

    #[test]
    fn equal_timestamps_break_ties_by_id() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let rows = vec![Journal::new("b", "B", at), Journal::new("a", "A", at)];

        let sorted = paginate(rows, &ListQuery::default(), DEFAULT_JOURNAL_LIMIT);
        assert_eq!(sorted[0].id, "a");
    }
}
