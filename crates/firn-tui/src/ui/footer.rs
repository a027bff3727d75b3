//! Footer
//!
//! Key hints for the current focus level and the last load failure.

use firn_app::{App, Focus};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::Theme;

/// Key hints shown at `focus`.
pub fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Journals => "q quit • enter select",
        Focus::Entries => "esc back • enter select",
        Focus::Entry => "esc back",
    }
}

/// Render the footer.
pub fn render(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mut spans = vec![Span::raw(" "), Span::styled(hints(app.focus()), theme.hint)];

    if let Some(status) = app.status_message() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(status, theme.error));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
