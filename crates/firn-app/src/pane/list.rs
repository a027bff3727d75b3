//! Paginated list pane for journals and entries.

use chrono::{DateTime, Utc};
use firn_core::{Entry, Journal, format_timestamp};
use unicode_width::UnicodeWidthStr;

use crate::{KeyInput, UiConfig, layout::PaneSize};

/// Record shown by a [`ListPane`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneItem {
    /// Row of the journal list.
    Journal(Journal),
    /// Row of the entry list.
    Entry(Entry),
}

impl PaneItem {
    /// Record id.
    pub fn id(&self) -> &str {
        match self {
            Self::Journal(journal) => &journal.id,
            Self::Entry(entry) => &entry.id,
        }
    }

    /// Text on the first line: journal name or entry title.
    pub fn primary(&self) -> &str {
        match self {
            Self::Journal(journal) => &journal.name,
            Self::Entry(entry) => &entry.title,
        }
    }

    /// Text on the second line.
    pub fn id_label(&self) -> String {
        format!("ID: {}", self.id())
    }

    /// Creation time.
    pub fn created_at(&self) -> &DateTime<Utc> {
        match self {
            Self::Journal(journal) => &journal.created_at,
            Self::Entry(entry) => &entry.created_at,
        }
    }

    /// Last modification time.
    pub fn updated_at(&self) -> &DateTime<Utc> {
        match self {
            Self::Journal(journal) => &journal.updated_at,
            Self::Entry(entry) => &entry.updated_at,
        }
    }
}

impl From<Journal> for PaneItem {
    fn from(journal: Journal) -> Self {
        Self::Journal(journal)
    }
}

impl From<Entry> for PaneItem {
    fn from(entry: Entry) -> Self {
        Self::Entry(entry)
    }
}

/// A [`PaneItem`] with its display column widths.
///
/// The title line is the primary text followed by the update time
/// right-aligned in `title_width` columns; the description line is the id
/// label followed by the creation time right-aligned in `desc_width` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    item: PaneItem,
    title_width: usize,
    desc_width: usize,
}

impl ListItem {
    /// Wrap an item with zero widths.
    pub fn new(item: PaneItem) -> Self {
        Self { item, title_width: 0, desc_width: 0 }
    }

    /// The wrapped record.
    pub fn item(&self) -> &PaneItem {
        &self.item
    }

    /// Columns for the right-aligned update time.
    pub fn title_width(&self) -> usize {
        self.title_width
    }

    /// Columns for the right-aligned creation time.
    pub fn desc_width(&self) -> usize {
        self.desc_width
    }

    /// Update time as displayed.
    pub fn updated_label(&self) -> String {
        format_timestamp(self.item.updated_at())
    }

    /// Creation time as displayed.
    pub fn created_label(&self) -> String {
        format!("Created At: {}", format_timestamp(self.item.created_at()))
    }

    /// Recompute widths for a pane `width` columns wide.
    pub fn update_widths(&mut self, width: usize, padding: usize) {
        self.title_width =
            width.saturating_sub(self.item.primary().width()).saturating_sub(padding);
        self.desc_width =
            width.saturating_sub(self.item.id_label().width()).saturating_sub(padding);
    }
}

/// Result of routing a key to a [`ListPane`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutcome {
    /// Selected item is the same as before.
    Unchanged,
    /// A different item is selected.
    SelectionChanged,
}

/// Paginated, single-selection list.
///
/// Each item takes [`UiConfig::item_height`] rows and the title plus page
/// indicator take [`UiConfig::list_chrome`] rows, so the pane height decides
/// how many items fit on one page (at least one).
#[derive(Debug, Clone, Default)]
pub struct ListPane {
    title: String,
    items: Vec<ListItem>,
    cursor: usize,
    size: PaneSize,
    error: Option<String>,
    config: UiConfig,
}

impl ListPane {
    /// Empty list titled `title`.
    pub fn new(title: impl Into<String>, config: UiConfig) -> Self {
        Self { title: title.into(), config, ..Self::default() }
    }

    /// Pane title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the items. Selects the first item and clears any error.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = PaneItem>) {
        self.items = items.into_iter().map(ListItem::new).collect();
        self.cursor = 0;
        self.error = None;
        self.update_widths(self.size.width);
    }

    /// Items in display order.
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resize the pane and recompute item widths.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.size = PaneSize::new(width, height);
        self.update_widths(width);
    }

    /// Current size.
    pub fn size(&self) -> PaneSize {
        self.size
    }

    /// Recompute every item's column widths for `width` columns.
    pub fn update_widths(&mut self, width: u16) {
        let padding = self.config.right_padding;
        for item in &mut self.items {
            item.update_widths(usize::from(width), padding);
        }
    }

    /// Selected item, `None` if the list is empty.
    pub fn selected(&self) -> Option<&PaneItem> {
        self.items.get(self.cursor).map(ListItem::item)
    }

    /// Index of the selected item, `None` if the list is empty.
    pub fn selected_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.cursor)
    }

    /// Select `index`, clamped to the last item. No-op on an empty list.
    pub fn select(&mut self, index: usize) {
        if let Some(last) = self.items.len().checked_sub(1) {
            self.cursor = index.min(last);
        }
    }

    /// Position of the item with `id`, if present.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.item().id() == id)
    }

    /// Drop all items and any error.
    pub fn clear(&mut self) {
        self.items.clear();
        self.cursor = 0;
        self.error = None;
    }

    /// Replace the items with an error message.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.clear();
        self.error = Some(message.into());
    }

    /// Error shown instead of items, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Items that fit on one page.
    pub fn per_page(&self) -> usize {
        let rows = self.size.height.saturating_sub(self.config.list_chrome);
        usize::from(rows / self.config.item_height.max(1)).max(1)
    }

    /// Zero-based page holding the selection.
    pub fn page(&self) -> usize {
        self.cursor / self.per_page()
    }

    /// Number of pages, at least 1.
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.per_page()).max(1)
    }

    /// Page indicator, `current/total`.
    pub fn page_indicator(&self) -> String {
        format!("{}/{}", self.page() + 1, self.page_count())
    }

    /// Index of the first visible item and the items on the current page.
    pub fn visible(&self) -> (usize, &[ListItem]) {
        let start = self.page() * self.per_page();
        let end = (start + self.per_page()).min(self.items.len());
        (start, self.items.get(start..end).unwrap_or_default())
    }

    /// Route a key. Returns the pane and whether the selection moved.
    pub fn update(mut self, key: KeyInput) -> (Self, ListOutcome) {
        let Some(last) = self.items.len().checked_sub(1) else {
            return (self, ListOutcome::Unchanged);
        };

        let before = self.cursor;
        let per_page = self.per_page();

        self.cursor = match key {
            KeyInput::Up | KeyInput::Char('k') => before.saturating_sub(1),
            KeyInput::Down | KeyInput::Char('j') => (before + 1).min(last),
            KeyInput::Left | KeyInput::PageUp | KeyInput::Char('h') => {
                if self.page() == 0 { before } else { before - per_page }
            },
            KeyInput::Right | KeyInput::PageDown | KeyInput::Char('l') => {
                if self.page() + 1 >= self.page_count() { before } else { (before + per_page).min(last) }
            },
            KeyInput::Home | KeyInput::Char('g') => 0,
            KeyInput::End | KeyInput::Char('G') => last,
            _ => before,
        };

        let outcome =
            if self.cursor == before { ListOutcome::Unchanged } else { ListOutcome::SelectionChanged };
        (self, outcome)
    }
}
