//! UI constants.

use firn_core::SortOrder;

/// Immutable UI configuration shared by the layout engine and the panes.
///
/// Handed out at construction; nothing mutates it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiConfig {
    /// Columns reserved right of the timestamp columns in list items.
    pub right_padding: usize,
    /// Rows taken by the header.
    pub header_height: u16,
    /// Rows taken by the footer.
    pub footer_height: u16,
    /// Share of the viewport given to the entries pane when the viewer sits
    /// below it, in percent.
    pub entries_split_percent: u16,
    /// Narrowest terminal the panes are laid out for.
    pub min_width: u16,
    /// Rows per list item (title, description, spacing).
    pub item_height: u16,
    /// Rows of list chrome (title and page indicator).
    pub list_chrome: u16,
    /// Listing direction for journals and entries.
    pub order: SortOrder,
    /// Journals requested per listing. 0 selects the store default.
    pub journal_limit: usize,
    /// Entries requested per listing. 0 selects the store default.
    pub entry_limit: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            right_padding: 3,
            header_height: 1,
            footer_height: 1,
            entries_split_percent: 60,
            min_width: 20,
            item_height: 3,
            list_chrome: 2,
            order: SortOrder::Ascending,
            journal_limit: 0,
            entry_limit: 0,
        }
    }
}

impl UiConfig {
    /// Set the listing direction.
    #[must_use]
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }
}
