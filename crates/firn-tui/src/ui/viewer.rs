//! Entry viewer
//!
//! Scrolled entry content. Rows arrive already wrapped to the pane width.
//! Dimmed while the entry list above it takes input.

use firn_app::pane::EntryViewer;
use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};

use crate::Theme;

/// Render the entry viewer.
pub fn render(frame: &mut Frame, viewer: &EntryViewer, theme: &Theme, area: Rect) {
    let style = if viewer.is_focused() { theme.viewer_focused } else { theme.viewer_blurred };
    let scroll = u16::try_from(viewer.scroll()).unwrap_or(u16::MAX);

    let lines: Vec<Line> = viewer.rows().iter().map(|row| Line::raw(row.as_str())).collect();
    let paragraph = Paragraph::new(lines).style(style).scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}
