//! Focus levels and navigation selection.

use std::fmt;

/// Which pane owns keyboard input and drives the layout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Focus {
    /// Journal list.
    #[default]
    Journals,
    /// Entry list of the selected journal, with the viewer below it.
    Entries,
    /// Full-screen entry viewer.
    Entry,
}

impl Focus {
    /// One level up the drill-down chain. `Journals` is its own parent.
    pub fn parent(self) -> Self {
        match self {
            Self::Journals | Self::Entries => Self::Journals,
            Self::Entry => Self::Entries,
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Journals => write!(f, "journals"),
            Self::Entries => write!(f, "entries"),
            Self::Entry => write!(f, "entry"),
        }
    }
}

/// What the user has drilled into.
///
/// `entry_id` is only meaningful while `journal_id` is set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// Journal whose entries are shown.
    pub journal_id: Option<String>,
    /// Display name of that journal, for the breadcrumb.
    pub journal_name: Option<String>,
    /// Entry shown in the viewer.
    pub entry_id: Option<String>,
    /// Index of the journal that was entered, restored on the way back.
    pub last_journal_index: usize,
    /// Re-select `last_journal_index` once the journal list has items.
    pub restore_journal_selection: bool,
}

impl Selection {
    /// Nearest focus level the selection supports, starting from `wanted`.
    ///
    /// `Entry` needs an entry, `Entries` needs a journal.
    pub fn clamp_focus(&self, wanted: Focus) -> Focus {
        let mut focus = wanted;
        if focus == Focus::Entry && (self.entry_id.is_none() || self.journal_id.is_none()) {
            focus = Focus::Entries;
        }
        if focus == Focus::Entries && self.journal_id.is_none() {
            focus = Focus::Journals;
        }
        focus
    }

    /// Whether a result for `journal_id` still matches the selection.
    pub fn is_current_journal(&self, journal_id: &str) -> bool {
        self.journal_id.as_deref() == Some(journal_id)
    }

    /// Whether a result for (`journal_id`, `entry_id`) still matches.
    pub fn is_current_entry(&self, journal_id: &str, entry_id: &str) -> bool {
        self.is_current_journal(journal_id) && self.entry_id.as_deref() == Some(entry_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_walks_to_nearest_valid_ancestor() {
        let empty = Selection::default();
        assert_eq!(empty.clamp_focus(Focus::Entry), Focus::Journals);
        assert_eq!(empty.clamp_focus(Focus::Entries), Focus::Journals);

        let journal_only =
            Selection { journal_id: Some("j1".into()), ..Selection::default() };
        assert_eq!(journal_only.clamp_focus(Focus::Entry), Focus::Entries);
        assert_eq!(journal_only.clamp_focus(Focus::Entries), Focus::Entries);

        let both = Selection { entry_id: Some("e1".into()), ..journal_only };
        assert_eq!(both.clamp_focus(Focus::Entry), Focus::Entry);
    }

    #[test]
    fn parent_climbs_one_level() {
        assert_eq!(Focus::Entry.parent(), Focus::Entries);
        assert_eq!(Focus::Entries.parent(), Focus::Journals);
        assert_eq!(Focus::Journals.parent(), Focus::Journals);
    }

    #[test]
    fn entry_without_journal_is_not_current() {
        let selection = Selection { entry_id: Some("e1".into()), ..Selection::default() };
        assert!(!selection.is_current_entry("j1", "e1"));
    }
}
