//! Pane allocation from terminal geometry and focus.
//!
//! Recomputed on every resize and every focus transition. The layout only
//! sizes panes; stacking them on screen is the renderer's job.

use crate::{Focus, UiConfig};

/// Size handed to one pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaneSize {
    /// Columns.
    pub width: u16,
    /// Rows.
    pub height: u16,
}

impl PaneSize {
    /// Construct a size.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Allocation of the viewport between the three panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    /// Terminal columns.
    pub width: u16,
    /// Terminal rows.
    pub height: u16,
    /// Rows between header and footer.
    pub viewport: u16,
    /// Journal list size. Always the whole viewport.
    pub journals: PaneSize,
    /// Entry list size.
    pub entries: PaneSize,
    /// Entry viewer size.
    pub viewer: PaneSize,
    /// `false` when the terminal is narrower than [`UiConfig::min_width`].
    pub fits: bool,
}

impl Layout {
    /// Allocate `width` x `height` for `focus`.
    ///
    /// - `Journals`: the journal list takes the viewport; the other panes
    ///   get nothing.
    /// - `Entries`: entries above the viewer, split by
    ///   [`UiConfig::entries_split_percent`], each at least one row.
    /// - `Entry`: the viewer takes the viewport. The entry list keeps the
    ///   full viewport size while hidden.
    pub fn compute(width: u16, height: u16, focus: Focus, config: &UiConfig) -> Self {
        let viewport =
            height.saturating_sub(config.header_height).saturating_sub(config.footer_height);
        let full = PaneSize::new(width, viewport);

        let (entries, viewer) = match focus {
            Focus::Journals => (PaneSize::new(width, 0), PaneSize::new(width, 0)),
            Focus::Entries => {
                let (top, bottom) = split(viewport, config.entries_split_percent);
                (PaneSize::new(width, top), PaneSize::new(width, bottom))
            },
            Focus::Entry => (full, full),
        };

        Self {
            width,
            height,
            viewport,
            journals: full,
            entries,
            viewer,
            fits: width >= config.min_width,
        }
    }
}

/// Split `rows` into (top, bottom) with `percent` on top, each at least 1.
fn split(rows: u16, percent: u16) -> (u16, u16) {
    let top = (u32::from(rows) * u32::from(percent.min(100)) / 100) as u16;
    let top = top.max(1);
    let bottom = rows.saturating_sub(top).max(1);
    (top, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_excludes_header_and_footer() {
        let config = UiConfig::default();
        let layout = Layout::compute(80, 24, Focus::Journals, &config);

        assert_eq!(layout.viewport, 22);
        assert_eq!(layout.journals, PaneSize::new(80, 22));
        assert!(layout.fits);
    }

    #[test]
    fn viewport_floors_at_zero() {
        let layout = Layout::compute(80, 1, Focus::Journals, &UiConfig::default());
        assert_eq!(layout.viewport, 0);
        assert_eq!(layout.journals.height, 0);
    }

    #[test]
    fn entries_focus_splits_sixty_forty() {
        let layout = Layout::compute(80, 22, Focus::Entries, &UiConfig::default());

        assert_eq!(layout.viewport, 20);
        assert_eq!(layout.entries.height, 12);
        assert_eq!(layout.viewer.height, 8);
    }

    #[test]
    fn tiny_split_keeps_one_row_each() {
        let layout = Layout::compute(80, 3, Focus::Entries, &UiConfig::default());

        assert_eq!(layout.viewport, 1);
        assert_eq!(layout.entries.height, 1);
        assert_eq!(layout.viewer.height, 1);
    }

    #[test]
    fn entry_focus_is_full_screen() {
        let layout = Layout::compute(100, 40, Focus::Entry, &UiConfig::default());

        assert_eq!(layout.viewer, PaneSize::new(100, 38));
        assert_eq!(layout.entries, layout.viewer);
    }

    #[test]
    fn narrow_terminal_does_not_fit() {
        let config = UiConfig::default();
        assert!(!Layout::compute(config.min_width - 1, 24, Focus::Journals, &config).fits);
        assert!(Layout::compute(config.min_width, 24, Focus::Journals, &config).fits);
    }
}
