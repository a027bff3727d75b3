//! Colours and text styles.

use ratatui::style::{Color, Modifier, Style};

/// Immutable set of styles used by the renderer.
///
/// Built once by the driver and handed to every render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Application name in the header.
    pub brand: Style,
    /// Breadcrumb path in the header.
    pub crumb: Style,
    /// List pane title.
    pub list_title: Style,
    /// Title line of the selected list item.
    pub selected_title: Style,
    /// Description line of the selected list item.
    pub selected_desc: Style,
    /// Title line of other list items.
    pub title: Style,
    /// Description line of other list items.
    pub desc: Style,
    /// Page indicator and empty-list notice.
    pub muted: Style,
    /// Inline load errors and the status message.
    pub error: Style,
    /// Viewer text while the viewer takes input.
    pub viewer_focused: Style,
    /// Viewer text while the list above it takes input.
    pub viewer_blurred: Style,
    /// Footer key hints.
    pub hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let accent = Color::Rgb(0x7d, 0x56, 0xf4);

        Self {
            brand: Style::default().fg(Color::White).bg(accent).add_modifier(Modifier::BOLD),
            crumb: Style::default().fg(Color::Gray),
            list_title: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            selected_title: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            selected_desc: Style::default().fg(accent),
            title: Style::default(),
            desc: Style::default().fg(Color::DarkGray),
            muted: Style::default().fg(Color::DarkGray),
            error: Style::default().fg(Color::Red),
            viewer_focused: Style::default(),
            viewer_blurred: Style::default().fg(Color::Gray),
            hint: Style::default().fg(Color::DarkGray),
        }
    }
}
