//! Header
//!
//! Application name followed by the drill-down path.

use firn_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::Theme;

const BRAND: &str = " Firn ";
const SEPARATOR: &str = " › ";

/// Render the header.
pub fn render(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mut spans = vec![Span::styled(BRAND, theme.brand), Span::raw(" ")];

    for (depth, crumb) in app.breadcrumb().into_iter().enumerate() {
        if depth > 0 {
            spans.push(Span::styled(SEPARATOR, theme.crumb));
        }
        spans.push(Span::styled(crumb, theme.crumb));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
