//! Observable state snapshots for invariant checking.
//!
//! Snapshots capture the observable state of the [`App`] at a point in time.
//! Invariants operate on snapshots rather than live state to ensure
//! consistent, atomic checks.

use std::fmt::Display;

use firn_app::{App, Focus, pane::ListPane};
use serde::{Serialize, Serializer};
use unicode_width::UnicodeWidthStr;

/// Snapshot of the navigation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppSnapshot {
    /// Focus level.
    #[serde(serialize_with = "display")]
    pub focus: Focus,
    /// Selected journal.
    pub journal_id: Option<String>,
    /// Selected journal's display name.
    pub journal_name: Option<String>,
    /// Selected entry.
    pub entry_id: Option<String>,
    /// Journal index restored when leaving the entry list.
    pub last_journal_index: usize,
    /// Restore pending.
    pub restore_journal_selection: bool,
    /// Journal list state.
    pub journals: ListSnapshot,
    /// Entry list state.
    pub entries: ListSnapshot,
    /// Entry shown in the viewer, if one is loaded.
    pub viewer_entry_id: Option<String>,
    /// Text the viewer renders.
    pub viewer_text: String,
    /// Whether the viewer takes keyboard input.
    pub viewer_focused: bool,
    /// Viewer size (columns, rows).
    pub viewer_size: (u16, u16),
    /// Rows between header and footer.
    pub viewport: u16,
    /// Whether the terminal is wide enough for panes.
    pub fits: bool,
    /// Terminal size (columns, rows).
    pub terminal_size: (u16, u16),
    /// Columns reserved right of list timestamps.
    pub right_padding: usize,
    /// Most recent load failure.
    pub status_message: Option<String>,
}

/// Snapshot of one list pane.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ListSnapshot {
    /// Item ids in display order.
    pub ids: Vec<String>,
    /// Cursor position. `None` if the list is empty.
    pub cursor: Option<usize>,
    /// Id under the cursor.
    pub selected_id: Option<String>,
    /// Pane size (columns, rows).
    pub size: (u16, u16),
    /// Per item: (primary text width, id label width, title width, description width).
    pub widths: Vec<(usize, usize, usize, usize)>,
    /// Page indicator text.
    pub page: String,
    /// Inline error.
    pub error: Option<String>,
}

impl ListSnapshot {
    /// Capture a list pane.
    pub fn from_pane(pane: &ListPane) -> Self {
        Self {
            ids: pane.items().iter().map(|item| item.item().id().to_string()).collect(),
            cursor: pane.selected_index(),
            selected_id: pane.selected().map(|item| item.id().to_string()),
            size: (pane.size().width, pane.size().height),
            widths: pane
                .items()
                .iter()
                .map(|item| {
                    (
                        item.item().primary().width(),
                        item.item().id_label().width(),
                        item.title_width(),
                        item.desc_width(),
                    )
                })
                .collect(),
            page: pane.page_indicator(),
            error: pane.error().map(str::to_string),
        }
    }
}

impl AppSnapshot {
    /// Capture the observable state of `app`.
    pub fn from_app(app: &App) -> Self {
        let selection = app.selection();
        let viewer = app.viewer();
        let layout = app.layout();

        Self {
            focus: app.focus(),
            journal_id: selection.journal_id.clone(),
            journal_name: selection.journal_name.clone(),
            entry_id: selection.entry_id.clone(),
            last_journal_index: selection.last_journal_index,
            restore_journal_selection: selection.restore_journal_selection,
            journals: ListSnapshot::from_pane(app.journals()),
            entries: ListSnapshot::from_pane(app.entries()),
            viewer_entry_id: viewer.entry().map(|entry| entry.id.clone()),
            viewer_text: viewer.text(),
            viewer_focused: viewer.is_focused(),
            viewer_size: (viewer.size().width, viewer.size().height),
            viewport: layout.viewport,
            fits: layout.fits,
            terminal_size: app.terminal_size(),
            right_padding: app.config().right_padding,
            status_message: app.status_message().map(str::to_string),
        }
    }
}

fn display<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
