//! Deferred store calls.
//!
//! A [`Command`] pairs a [`Store`] handle with a [`Request`]. Nothing happens
//! until [`Command::execute`] runs it, and executing yields exactly one
//! [`AppEvent`]: the typed result or [`AppEvent::LoadFailed`]. Dropping an
//! unexecuted command abandons it.

use firn_core::{ListQuery, Store};

use crate::AppEvent;

/// A store call the state machine wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// List all journals.
    ListJournals {
        /// Ordering and pagination.
        query: ListQuery,
    },

    /// List the entries of one journal.
    ListEntries {
        /// Journal to list.
        journal_id: String,
        /// Ordering and pagination.
        query: ListQuery,
    },

    /// Fetch a single entry.
    GetEntry {
        /// Owning journal.
        journal_id: String,
        /// Entry to fetch.
        entry_id: String,
    },
}

impl Request {
    /// Operation name for logs and error reporting.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::ListJournals { .. } => "list_journals",
            Self::ListEntries { .. } => "list_entries",
            Self::GetEntry { .. } => "get_entry",
        }
    }

    /// Journal the request targets, if any.
    pub fn journal_id(&self) -> Option<&str> {
        match self {
            Self::ListJournals { .. } => None,
            Self::ListEntries { journal_id, .. } | Self::GetEntry { journal_id, .. } => {
                Some(journal_id)
            },
        }
    }
}

/// A deferred store call producing one completion event.
pub struct Command<S: Store> {
    store: S,
    request: Request,
}

impl<S: Store> Command<S> {
    /// Bind `request` to `store` without running it.
    pub fn new(store: S, request: Request) -> Self {
        Self { store, request }
    }

    /// The request this command will perform.
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Perform the store call. Blocking.
    pub fn execute(self) -> AppEvent {
        let Self { store, request } = self;

        let result = match &request {
            Request::ListJournals { query } => {
                store.list_journals(query).map(|journals| AppEvent::JournalsLoaded { journals })
            },
            Request::ListEntries { journal_id, query } => {
                store.list_entries(journal_id, query).map(|entries| AppEvent::EntriesLoaded {
                    journal_id: journal_id.clone(),
                    entries,
                })
            },
            Request::GetEntry { journal_id, entry_id } => {
                store.get_entry(journal_id, entry_id).map(|entry| AppEvent::EntryLoaded {
                    journal_id: journal_id.clone(),
                    entry_id: entry_id.clone(),
                    entry,
                })
            },
        };

        result.unwrap_or_else(|error| {
            tracing::warn!(
                operation = request.operation(),
                journal_id = request.journal_id(),
                %error,
                "store command failed"
            );
            AppEvent::LoadFailed { request, error }
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use firn_core::{ChaoticStore, Entry, Journal, MemoryStore, StoreError};

    use super::*;

    fn store() -> MemoryStore {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        MemoryStore::with_content([Journal::new("j1", "Diary", at)], [Entry::new(
            "e1", "j1", "Day 1", "hello", at,
        )])
        .unwrap()
    }

    #[test]
    fn list_entries_tags_result_with_journal() {
        let request =
            Request::ListEntries { journal_id: "j1".into(), query: ListQuery::default() };
        let event = Command::new(store(), request).execute();

        match event {
            AppEvent::EntriesLoaded { journal_id, entries } => {
                assert_eq!(journal_id, "j1");
                assert_eq!(entries.len(), 1);
            },
            other => panic!("Expected EntriesLoaded, got: {other:?}"),
        }
    }

    #[test]
    fn missing_entry_is_not_an_error() {
        let request = Request::GetEntry { journal_id: "j1".into(), entry_id: "e9".into() };
        let event = Command::new(store(), request).execute();

        assert_eq!(event, AppEvent::EntryLoaded {
            journal_id: "j1".into(),
            entry_id: "e9".into(),
            entry: None,
        });
    }

    #[test]
    fn failure_carries_request_and_cause() {
        let request = Request::ListJournals { query: ListQuery::default() };
        let event = Command::new(ChaoticStore::new(store(), 1.0), request.clone()).execute();

        match event {
            AppEvent::LoadFailed { request: failed, error } => {
                assert_eq!(failed, request);
                assert_eq!(failed.operation(), "list_journals");
                assert_eq!(failed.journal_id(), None);
                assert!(matches!(error, StoreError::Unavailable(_)));
            },
            other => panic!("Expected LoadFailed, got: {other:?}"),
        }
    }

    #[test]
    fn entry_failure_names_its_journal() {
        let request = Request::GetEntry { journal_id: "j1".into(), entry_id: "e1".into() };
        let event = Command::new(ChaoticStore::new(store(), 1.0), request).execute();

        match event {
            AppEvent::LoadFailed { request, .. } => assert_eq!(request.journal_id(), Some("j1")),
            other => panic!("Expected LoadFailed, got: {other:?}"),
        }
    }

    #[test]
    fn unexecuted_command_touches_nothing() {
        let chaotic = ChaoticStore::new(store(), 0.0);
        let command = Command::new(chaotic.clone(), Request::ListJournals {
            query: ListQuery::default(),
        });
        assert_eq!(command.request().operation(), "list_journals");
        drop(command);

        assert_eq!(chaotic.operation_count(), 0);
    }
}
