//! Navigation state machine.
//!
//! This module defines the [`App`] state machine, which owns the three panes,
//! the focus level and the drill-down selection, completely decoupled from
//! terminal and store I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Routes keys to the pane that owns the current focus level.
//! - Drills journals → entries → entry and back, restoring the journal
//!   cursor on the way out.
//! - Discards completions whose journal or entry is no longer selected.
//! - Re-runs the layout on every resize and focus change.

use firn_core::{Entry, Journal, ListQuery};

use crate::{
    AppAction, AppEvent, Focus, KeyInput, Request, Selection, UiConfig,
    layout::Layout,
    pane::{EntryViewer, ListOutcome, ListPane, PaneItem, ViewerOutcome},
};

/// Navigation state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    config: UiConfig,
    focus: Focus,
    selection: Selection,
    journals: ListPane,
    entries: ListPane,
    viewer: EntryViewer,
    layout: Layout,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Most recent load failure. `None` once a load succeeds.
    status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

impl App {
    /// Create an App at the journal list with nothing loaded.
    pub fn new(config: UiConfig) -> Self {
        let mut app = Self {
            config,
            focus: Focus::Journals,
            selection: Selection::default(),
            journals: ListPane::new("Journals", config),
            entries: ListPane::new("Entries", config),
            viewer: EntryViewer::new(),
            layout: Layout::default(),
            terminal_size: (80, 24),
            status_message: None,
        };
        app.relayout();
        app
    }

    /// Actions to run once before the first event: load the journals.
    pub fn start(&mut self) -> Vec<AppAction> {
        vec![AppAction::Fetch(self.list_journals_request()), AppAction::Render]
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                self.relayout();
                vec![AppAction::Render]
            },
            AppEvent::JournalsLoaded { journals } => self.journals_loaded(journals),
            AppEvent::EntriesLoaded { journal_id, entries } => {
                self.entries_loaded(&journal_id, entries)
            },
            AppEvent::EntryLoaded { journal_id, entry_id, entry } => {
                if !self.selection.is_current_entry(&journal_id, &entry_id) {
                    tracing::debug!(%journal_id, %entry_id, "dropping stale entry");
                    return vec![];
                }
                self.status_message = None;
                self.viewer.set_entry(entry);
                vec![AppAction::Render]
            },
            AppEvent::LoadFailed { request, error } => {
                let message = error.to_string();
                let routed = match &request {
                    Request::ListJournals { .. } => {
                        self.journals.set_error(&message);
                        true
                    },
                    Request::ListEntries { journal_id, .. } => {
                        let current = self.selection.is_current_journal(journal_id);
                        if current {
                            self.entries.set_error(&message);
                            self.drop_entry();
                        }
                        current
                    },
                    Request::GetEntry { journal_id, entry_id } => {
                        let current = self.selection.is_current_entry(journal_id, entry_id);
                        if current {
                            self.viewer.set_error(&message);
                        }
                        current
                    },
                };

                if !routed {
                    tracing::debug!(
                        operation = request.operation(),
                        journal_id = request.journal_id(),
                        "dropping stale failure"
                    );
                    return vec![];
                }
                self.status_message = Some(format!("{}: {message}", request.operation()));
                vec![AppAction::Render]
            },
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::CtrlC => return vec![AppAction::Quit],
            KeyInput::Char('q') if self.focus == Focus::Journals => return vec![AppAction::Quit],
            KeyInput::Enter => return self.select(),
            key if key.is_back() => return self.back(),
            _ => {},
        }

        match self.focus {
            Focus::Journals => {
                let (pane, outcome) = std::mem::take(&mut self.journals).update(key);
                self.journals = pane;
                match outcome {
                    ListOutcome::SelectionChanged => vec![AppAction::Render],
                    ListOutcome::Unchanged => vec![],
                }
            },
            Focus::Entries => {
                let (pane, outcome) = std::mem::take(&mut self.entries).update(key);
                self.entries = pane;
                let (viewer, _) = std::mem::take(&mut self.viewer).update(key);
                self.viewer = viewer;

                match outcome {
                    ListOutcome::SelectionChanged => {
                        let mut actions = self.follow_entry_selection();
                        actions.push(AppAction::Render);
                        actions
                    },
                    ListOutcome::Unchanged => vec![],
                }
            },
            Focus::Entry => {
                let (viewer, outcome) = std::mem::take(&mut self.viewer).update(key);
                self.viewer = viewer;
                match outcome {
                    ViewerOutcome::Scrolled => vec![AppAction::Render],
                    ViewerOutcome::Unchanged | ViewerOutcome::Ignored => vec![],
                }
            },
        }
    }

    /// Enter: drill into the selected item.
    fn select(&mut self) -> Vec<AppAction> {
        match self.focus {
            Focus::Journals => {
                let Some(PaneItem::Journal(journal)) = self.journals.selected().cloned() else {
                    return vec![];
                };

                self.selection.journal_id = Some(journal.id.clone());
                self.selection.journal_name = Some(journal.name);
                self.selection.last_journal_index = self.journals.selected_index().unwrap_or(0);
                self.selection.entry_id = None;
                self.entries.clear();
                self.viewer.clear();
                self.set_focus(Focus::Entries);

                let request =
                    Request::ListEntries { journal_id: journal.id, query: self.entries_query() };
                vec![AppAction::Fetch(request), AppAction::Render]
            },
            Focus::Entries => {
                let Some(PaneItem::Entry(entry)) = self.entries.selected() else {
                    return vec![];
                };

                let request = Request::GetEntry {
                    journal_id: entry.journal_id.clone(),
                    entry_id: entry.id.clone(),
                };
                self.selection.entry_id = Some(entry.id.clone());
                self.set_focus(Focus::Entry);
                vec![AppAction::Fetch(request), AppAction::Render]
            },
            Focus::Entry => vec![],
        }
    }

    /// Esc/Backspace: one level up.
    fn back(&mut self) -> Vec<AppAction> {
        match self.focus {
            Focus::Journals => return vec![],
            Focus::Entries => {
                self.selection.journal_id = None;
                self.selection.journal_name = None;
                self.selection.entry_id = None;
                self.selection.restore_journal_selection = true;
                self.entries.clear();
                self.viewer.clear();
            },
            Focus::Entry => {},
        }

        self.set_focus(self.focus.parent());
        self.restore_journal_selection();
        vec![AppAction::Render]
    }

    fn journals_loaded(&mut self, journals: Vec<Journal>) -> Vec<AppAction> {
        self.status_message = None;
        self.journals.set_items(journals.into_iter().map(PaneItem::Journal));
        self.restore_journal_selection();
        vec![AppAction::Render]
    }

    fn entries_loaded(&mut self, journal_id: &str, entries: Vec<Entry>) -> Vec<AppAction> {
        if !self.selection.is_current_journal(journal_id) {
            tracing::debug!(%journal_id, "dropping stale entries");
            return vec![];
        }

        self.status_message = None;
        let previous = self.selection.entry_id.take();
        self.entries.set_items(entries.into_iter().map(PaneItem::Entry));

        if self.entries.is_empty() {
            self.drop_entry();
            return vec![AppAction::Render];
        }

        let index = previous.as_deref().and_then(|id| self.entries.position(id)).unwrap_or(0);
        self.entries.select(index);

        let mut actions = self.follow_entry_selection();
        actions.push(AppAction::Render);
        actions
    }

    /// Record the entry under the entries cursor and fetch it.
    fn follow_entry_selection(&mut self) -> Vec<AppAction> {
        let Some(PaneItem::Entry(entry)) = self.entries.selected() else {
            return vec![];
        };

        if self.selection.entry_id.as_deref() != Some(entry.id.as_str())
            && self.viewer.entry().is_none_or(|shown| shown.id != entry.id)
        {
            self.viewer.clear();
        }

        let request =
            Request::GetEntry { journal_id: entry.journal_id.clone(), entry_id: entry.id.clone() };
        self.selection.entry_id = Some(entry.id.clone());
        vec![AppAction::Fetch(request)]
    }

    /// Forget the entry and leave the full-screen viewer if it was open.
    fn drop_entry(&mut self) {
        self.selection.entry_id = None;
        self.viewer.clear();
        if self.focus == Focus::Entry {
            self.set_focus(Focus::Entries);
        }
    }

    /// Apply a pending journal cursor restore if the list has items.
    fn restore_journal_selection(&mut self) {
        if self.selection.restore_journal_selection && !self.journals.is_empty() {
            self.journals.select(self.selection.last_journal_index);
            self.selection.restore_journal_selection = false;
        }
    }

    /// Move to `wanted`, or its nearest valid ancestor, and relayout.
    fn set_focus(&mut self, wanted: Focus) {
        self.focus = self.selection.clamp_focus(wanted);
        if self.focus == Focus::Entry {
            self.viewer.focus();
        } else {
            self.viewer.blur();
        }
        self.relayout();
    }

    fn relayout(&mut self) {
        let (width, height) = self.terminal_size;
        self.layout = Layout::compute(width, height, self.focus, &self.config);
        self.journals.set_size(self.layout.journals.width, self.layout.journals.height);
        self.entries.set_size(self.layout.entries.width, self.layout.entries.height);
        self.viewer.set_size(self.layout.viewer.width, self.layout.viewer.height);
    }

    fn list_journals_request(&self) -> Request {
        let query =
            ListQuery::new(self.config.order).with_limit(self.config.journal_limit);
        Request::ListJournals { query }
    }

    fn entries_query(&self) -> ListQuery {
        ListQuery::new(self.config.order).with_limit(self.config.entry_limit)
    }

    /// Current focus level.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Current drill-down selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Journal list pane.
    pub fn journals(&self) -> &ListPane {
        &self.journals
    }

    /// Entry list pane.
    pub fn entries(&self) -> &ListPane {
        &self.entries
    }

    /// Entry viewer pane.
    pub fn viewer(&self) -> &EntryViewer {
        &self.viewer
    }

    /// Layout for the current size and focus.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// UI constants.
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Most recent load failure. `None` if the last load succeeded.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Path of the current drill-down, outermost first.
    pub fn breadcrumb(&self) -> Vec<&str> {
        let mut path = vec!["Journals"];
        if let Some(name) = self.selection.journal_name.as_deref() {
            path.push(name);
        }
        if self.focus == Focus::Entry
            && let Some(entry) = self.viewer.entry()
        {
            path.push(&entry.title);
        }
        path
    }
}
