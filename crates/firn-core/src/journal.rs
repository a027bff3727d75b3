//! Journal and entry records.
//!
//! Both records are plain data loaded from a [`crate::Store`]. The UI never
//! mutates them; display-only values (column widths) live in the pane items
//! that wrap them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format used everywhere a journal or entry time is displayed.
///
/// Fixed width (19 columns), which the list panes rely on when sizing the
/// right-aligned timestamp column.
pub const DATETIME_FORMAT: &str = "%H:%M:%S %d-%m-%Y";

/// Format a timestamp with [`DATETIME_FORMAT`].
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(DATETIME_FORMAT).to_string()
}

/// A named container of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time. Lists are ordered by this field.
    pub updated_at: DateTime<Utc>,
}

impl Journal {
    /// Create a journal whose `updated_at` equals `created_at`.
    pub fn new(id: impl Into<String>, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self { id: id.into(), name: name.into(), created_at, updated_at: created_at }
    }

    /// Set the last modification time.
    #[must_use]
    pub fn updated(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }
}

/// A titled, timestamped unit of content belonging to exactly one journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Identifier, unique within the owning journal.
    pub id: String,
    /// Owning journal.
    pub journal_id: String,
    /// Display title.
    pub title: String,
    /// Free-text body.
    pub content: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time. Lists are ordered by this field.
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Create an entry whose `updated_at` equals `created_at`.
    pub fn new(
        id: impl Into<String>,
        journal_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            journal_id: journal_id.into(),
            title: title.into(),
            content: content.into(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Set the last modification time.
    #[must_use]
    pub fn updated(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }
}
