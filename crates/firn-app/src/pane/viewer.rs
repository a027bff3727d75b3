//! Read-only, scrollable entry viewer.

use firn_core::Entry;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{KeyInput, layout::PaneSize};

/// Shown when no entry is selected.
pub const PLACEHOLDER: &str = "No entry selected";

/// Shown when the selected entry does not exist in the store.
pub const NOT_FOUND: &str = "Entry not found";

/// What the viewer displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewerContent {
    /// Nothing selected.
    #[default]
    Empty,
    /// A loaded entry.
    Entry(Entry),
    /// The selected entry does not exist.
    NotFound,
    /// Loading failed.
    Error(String),
}

/// Result of routing a key to an [`EntryViewer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerOutcome {
    /// The viewer is blurred and did not look at the key.
    Ignored,
    /// The key was handled but the scroll offset did not move.
    Unchanged,
    /// The scroll offset moved.
    Scrolled,
}

/// Scrollable view of one entry's content.
///
/// Blurred while it sits below the entry list, so navigation keys meant for
/// the list do not scroll it; focused when it is full screen.
///
/// The text is word-wrapped to the pane width here, and renderers draw
/// [`EntryViewer::rows`] as is, so scroll bounds and the screen agree.
#[derive(Debug, Clone)]
pub struct EntryViewer {
    content: ViewerContent,
    rows: Vec<String>,
    scroll: usize,
    size: PaneSize,
    focused: bool,
}

impl Default for EntryViewer {
    fn default() -> Self {
        let mut viewer = Self {
            content: ViewerContent::Empty,
            rows: Vec::new(),
            scroll: 0,
            size: PaneSize::default(),
            focused: false,
        };
        viewer.rewrap();
        viewer
    }
}

impl EntryViewer {
    /// Blurred, empty viewer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize the viewer. The scroll offset is clamped to the new content
    /// height.
    pub fn set_size(&mut self, width: u16, height: u16) {
        let size = PaneSize::new(width, height);
        if size != self.size {
            self.size = size;
            self.rewrap();
        }
    }

    /// Current size.
    pub fn size(&self) -> PaneSize {
        self.size
    }

    /// Show `entry`, or the not-found notice for `None`.
    ///
    /// Scrolls to the top unless `entry` is a refresh of the entry already
    /// on display.
    pub fn set_entry(&mut self, entry: Option<Entry>) {
        let refresh = match (&entry, self.entry()) {
            (Some(new), Some(shown)) => new.id == shown.id && new.journal_id == shown.journal_id,
            _ => false,
        };

        self.content = entry.map_or(ViewerContent::NotFound, ViewerContent::Entry);
        if !refresh {
            self.scroll = 0;
        }
        self.rewrap();
    }

    /// Show a load failure.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.content = ViewerContent::Error(message.into());
        self.scroll = 0;
        self.rewrap();
    }

    /// Back to the placeholder.
    pub fn clear(&mut self) {
        self.content = ViewerContent::Empty;
        self.scroll = 0;
        self.rewrap();
    }

    /// Current content.
    pub fn content(&self) -> &ViewerContent {
        &self.content
    }

    /// Entry on display, if one is loaded.
    pub fn entry(&self) -> Option<&Entry> {
        match &self.content {
            ViewerContent::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    /// Text to render for the current content.
    pub fn text(&self) -> String {
        match &self.content {
            ViewerContent::Empty => PLACEHOLDER.to_string(),
            ViewerContent::Entry(entry) => entry.content.clone(),
            ViewerContent::NotFound => NOT_FOUND.to_string(),
            ViewerContent::Error(message) => format!("Error: {message}"),
        }
    }

    /// Text wrapped to the viewer width, one string per screen row.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// First visible row.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Take keyboard input.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Stop taking keyboard input.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Whether the viewer takes keyboard input.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Rows the content occupies when wrapped to the viewer width.
    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    /// Largest scroll offset: the last row at the top.
    fn max_scroll(&self) -> usize {
        self.line_count().saturating_sub(1)
    }

    fn rewrap(&mut self) {
        self.rows = wrap(&self.text(), usize::from(self.size.width));
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Route a key. Blurred viewers ignore everything.
    pub fn update(mut self, key: KeyInput) -> (Self, ViewerOutcome) {
        if !self.focused {
            return (self, ViewerOutcome::Ignored);
        }

        let before = self.scroll;
        let page = usize::from(self.size.height).max(1);
        let max = self.max_scroll();

        self.scroll = match key {
            KeyInput::Up | KeyInput::Char('k') => before.saturating_sub(1),
            KeyInput::Down | KeyInput::Char('j') => (before + 1).min(max),
            KeyInput::PageUp | KeyInput::Left | KeyInput::Char('h') => before.saturating_sub(page),
            KeyInput::PageDown | KeyInput::Right | KeyInput::Char('l') => (before + page).min(max),
            KeyInput::Home | KeyInput::Char('g') => 0,
            KeyInput::End | KeyInput::Char('G') => max,
            _ => before,
        };

        let outcome =
            if self.scroll == before { ViewerOutcome::Unchanged } else { ViewerOutcome::Scrolled };
        (self, outcome)
    }
}

/// Word-wrap `text` into rows at most `width` columns wide.
///
/// Words wider than a row are split between characters. A zero width leaves
/// lines unwrapped.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();

    for line in text.lines() {
        if width == 0 {
            rows.push(line.to_string());
            continue;
        }

        let mut row = String::new();
        let mut row_width = 0;

        for token in line.split_inclusive(' ') {
            let word_width = token.trim_end_matches(' ').width();

            if row_width > 0 && row_width + word_width > width {
                rows.push(row.trim_end_matches(' ').to_string());
                row.clear();
                row_width = 0;
            }

            if row_width + word_width <= width {
                row.push_str(token);
                row_width += token.width();
                continue;
            }

            for ch in token.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if row_width > 0 && row_width + ch_width > width {
                    rows.push(row.trim_end_matches(' ').to_string());
                    row.clear();
                    row_width = 0;
                }
                row.push(ch);
                row_width += ch_width;
            }
        }

        rows.push(row.trim_end_matches(' ').to_string());
    }

    rows
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn entry(lines: usize) -> Entry {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let content = (0..lines).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        Entry::new("e1", "j1", "Day 1", content, at)
    }

    fn focused_viewer(lines: usize) -> EntryViewer {
        let mut viewer = EntryViewer::new();
        viewer.set_size(40, 5);
        viewer.set_entry(Some(entry(lines)));
        viewer.focus();
        viewer
    }

    #[test]
    fn placeholder_and_not_found_texts() {
        let mut viewer = EntryViewer::new();
        assert_eq!(viewer.text(), "No entry selected");

        viewer.set_entry(None);
        assert_eq!(viewer.text(), "Entry not found");

        viewer.set_error("store unavailable: down");
        assert_eq!(viewer.text(), "Error: store unavailable: down");
    }

    #[test]
    fn blurred_viewer_ignores_navigation() {
        let mut viewer = focused_viewer(20);
        viewer.blur();

        let (viewer, outcome) = viewer.update(KeyInput::Down);
        assert_eq!(outcome, ViewerOutcome::Ignored);
        assert_eq!(viewer.scroll(), 0);
    }

    #[test]
    fn focused_viewer_scrolls_by_line_and_page() {
        let viewer = focused_viewer(20);

        let (viewer, outcome) = viewer.update(KeyInput::Char('j'));
        assert_eq!(outcome, ViewerOutcome::Scrolled);
        assert_eq!(viewer.scroll(), 1);

        let (viewer, _) = viewer.update(KeyInput::PageDown);
        assert_eq!(viewer.scroll(), 6);

        let (viewer, _) = viewer.update(KeyInput::End);
        assert_eq!(viewer.scroll(), 19);

        let (viewer, outcome) = viewer.update(KeyInput::Down);
        assert_eq!(outcome, ViewerOutcome::Unchanged);

        let (viewer, _) = viewer.update(KeyInput::Char('g'));
        assert_eq!(viewer.scroll(), 0);
    }

    #[test]
    fn long_lines_wrap_into_rows() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let mut viewer = EntryViewer::new();
        viewer.set_size(10, 5);
        viewer.set_entry(Some(Entry::new("e1", "j1", "t", "x".repeat(25), at)));

        assert_eq!(viewer.line_count(), 3);
    }

    #[test]
    fn prose_wraps_at_word_boundaries() {
        assert_eq!(wrap("alpha beta gamma", 10), ["alpha beta", "gamma"]);
        assert_eq!(wrap("one\n\ntwo", 10), ["one", "", "two"]);
        assert_eq!(wrap("ab abcdefghijkl", 5), ["ab", "abcde", "fghij", "kl"]);
    }

    #[test]
    fn end_reaches_last_wrapped_row() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let line = ["x", "y", "z", "w"].map(|c| c.repeat(16)).join(" ");
        let content = vec![line; 10].join("\n");

        let mut viewer = EntryViewer::new();
        viewer.set_size(30, 6);
        viewer.set_entry(Some(Entry::new("e1", "j1", "t", content, at)));
        viewer.focus();

        let (viewer, _) = viewer.update(KeyInput::End);

        assert_eq!(viewer.line_count(), 40);
        assert_eq!(viewer.scroll(), 39);
        assert_eq!(viewer.rows()[viewer.scroll()], "w".repeat(16));
    }

    #[test]
    fn refreshing_shown_entry_keeps_scroll() {
        let (mut viewer, _) = focused_viewer(20).update(KeyInput::PageDown);
        assert_eq!(viewer.scroll(), 5);

        viewer.set_entry(Some(entry(20)));

        assert_eq!(viewer.scroll(), 5);
    }

    #[test]
    fn new_entry_scrolls_to_top() {
        let (mut viewer, _) = focused_viewer(20).update(KeyInput::End);
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        viewer.set_entry(Some(Entry::new("e2", "j1", "Day 2", "short", at)));

        assert_eq!(viewer.scroll(), 0);
    }
}
