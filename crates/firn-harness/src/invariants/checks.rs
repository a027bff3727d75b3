//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use firn_app::Focus;

use super::{AppSnapshot, Invariant, InvariantKind, InvariantResult, ListSnapshot, Violation};

/// Focus level must be backed by the selection.
///
/// `Entries` requires a journal, `Entry` requires a journal and an entry, and
/// an entry is only ever selected inside a journal.
pub struct FocusGuard;

impl Invariant for FocusGuard {
    fn kind(&self) -> InvariantKind {
        InvariantKind::FocusGuard
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        let violation = |message: String| Err(Violation { invariant: self.kind(), message });

        if state.entry_id.is_some() && state.journal_id.is_none() {
            return violation(format!("entry {:?} selected without a journal", state.entry_id));
        }

        match state.focus {
            Focus::Journals => Ok(()),
            Focus::Entries if state.journal_id.is_none() => {
                violation("focus entries without a selected journal".to_string())
            },
            Focus::Entry if state.journal_id.is_none() || state.entry_id.is_none() => violation(
                format!(
                    "focus entry with journal {:?} and entry {:?}",
                    state.journal_id, state.entry_id
                ),
            ),
            Focus::Entries | Focus::Entry => Ok(()),
        }
    }
}

/// List cursors must point at an item, or be absent on empty lists.
pub struct CursorInBounds;

impl CursorInBounds {
    fn check_list(&self, name: &str, list: &ListSnapshot) -> InvariantResult {
        let ok = match list.cursor {
            Some(cursor) => cursor < list.ids.len(),
            None => list.ids.is_empty(),
        };
        if ok {
            Ok(())
        } else {
            Err(Violation {
                invariant: self.kind(),
                message: format!("{name}: cursor {:?} with {} items", list.cursor, list.ids.len()),
            })
        }
    }
}

impl Invariant for CursorInBounds {
    fn kind(&self) -> InvariantKind {
        InvariantKind::CursorInBounds
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        self.check_list("journals", &state.journals)?;
        self.check_list("entries", &state.entries)
    }
}

/// The selected entry is the one under the entries cursor.
///
/// Moving the cursor selects (and fetches) the new entry immediately, so the
/// two can only disagree if a key was routed without following it.
pub struct EntryFollowsCursor;

impl Invariant for EntryFollowsCursor {
    fn kind(&self) -> InvariantKind {
        InvariantKind::EntryFollowsCursor
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        if state.entries.ids.is_empty() || state.entry_id == state.entries.selected_id {
            return Ok(());
        }
        Err(Violation {
            invariant: self.kind(),
            message: format!(
                "selected entry {:?} but cursor on {:?}",
                state.entry_id, state.entries.selected_id
            ),
        })
    }
}

/// The viewer takes keys exactly when it is full screen.
pub struct ViewerFocusMatchesLevel;

impl Invariant for ViewerFocusMatchesLevel {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ViewerFocusMatchesLevel
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        let expected = state.focus == Focus::Entry;
        if state.viewer_focused == expected {
            return Ok(());
        }
        Err(Violation {
            invariant: self.kind(),
            message: format!("viewer focused={} at focus {}", state.viewer_focused, state.focus),
        })
    }
}

/// Viewer content never belongs to an entry other than the selected one.
pub struct ViewerShowsSelection;

impl Invariant for ViewerShowsSelection {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ViewerShowsSelection
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        match &state.viewer_entry_id {
            Some(shown) if state.entry_id.as_ref() != Some(shown) => Err(Violation {
                invariant: self.kind(),
                message: format!("viewer shows {shown} while {:?} is selected", state.entry_id),
            }),
            _ => Ok(()),
        }
    }
}

/// Pane sizes follow the layout rules for the focus level.
pub struct LayoutConsistent;

impl Invariant for LayoutConsistent {
    fn kind(&self) -> InvariantKind {
        InvariantKind::LayoutConsistent
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        let violation = |message: String| Err(Violation { invariant: self.kind(), message });
        let (width, _) = state.terminal_size;
        let viewport = state.viewport;

        if state.journals.size != (width, viewport) {
            return violation(format!(
                "journals pane {:?}, expected {:?}",
                state.journals.size,
                (width, viewport)
            ));
        }

        match state.focus {
            Focus::Journals => Ok(()),
            Focus::Entries => {
                let (entries, viewer) = (state.entries.size.1, state.viewer_size.1);
                if entries == 0 || viewer == 0 {
                    return violation(format!("split {entries}/{viewer} has an empty pane"));
                }
                if viewport >= 2 && entries + viewer != viewport {
                    return violation(format!("split {entries}/{viewer} of viewport {viewport}"));
                }
                Ok(())
            },
            Focus::Entry => {
                if state.viewer_size != (width, viewport) {
                    return violation(format!(
                        "full-screen viewer {:?} in viewport {viewport}",
                        state.viewer_size
                    ));
                }
                Ok(())
            },
        }
    }
}

/// Item column widths follow `width - text - padding`, clamped at zero.
pub struct WidthsClamped;

impl WidthsClamped {
    fn check_list(&self, name: &str, list: &ListSnapshot, padding: usize) -> InvariantResult {
        let width = usize::from(list.size.0);
        for (primary, id_label, title, desc) in &list.widths {
            let expected_title = width.saturating_sub(*primary).saturating_sub(padding);
            let expected_desc = width.saturating_sub(*id_label).saturating_sub(padding);
            if (*title, *desc) != (expected_title, expected_desc) {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "{name}: widths ({title}, {desc}), expected ({expected_title}, {expected_desc}) at width {width}"
                    ),
                });
            }
        }
        Ok(())
    }
}

impl Invariant for WidthsClamped {
    fn kind(&self) -> InvariantKind {
        InvariantKind::WidthsClamped
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        self.check_list("journals", &state.journals, state.right_padding)?;
        self.check_list("entries", &state.entries, state.right_padding)
    }
}
