//! Journal and entry lists
//!
//! Draws one page of a [`ListPane`]: title, two lines per item with the
//! timestamps right-aligned in the widths the pane computed, and the page
//! indicator on the last row.

use firn_app::pane::{ListItem, ListPane};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::Theme;

const SELECTED_PREFIX: &str = "│ ";
const UNSELECTED_PREFIX: &str = "  ";

/// Render a list pane.
pub fn render(frame: &mut Frame, pane: &ListPane, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let [title_area, body_area, page_area] = chunks.as_ref() else {
        return;
    };

    let title = Line::from(Span::styled(format!(" {} ", pane.title()), theme.list_title));
    frame.render_widget(Paragraph::new(title), *title_area);

    frame.render_widget(Paragraph::new(body(pane, theme)), *body_area);

    let indicator = Line::from(Span::styled(format!(" {}", pane.page_indicator()), theme.muted));
    frame.render_widget(Paragraph::new(indicator), *page_area);
}

fn body(pane: &ListPane, theme: &Theme) -> Vec<Line<'static>> {
    if let Some(error) = pane.error() {
        let message = format!("{UNSELECTED_PREFIX}Error: {error}");
        return vec![Line::from(Span::styled(message, theme.error))];
    }

    if pane.is_empty() {
        let notice = format!("{UNSELECTED_PREFIX}No {}.", pane.title().to_lowercase());
        return vec![Line::from(Span::styled(notice, theme.muted))];
    }

    let (start, items) = pane.visible();
    let selected = pane.selected_index();

    items
        .iter()
        .enumerate()
        .flat_map(|(offset, item)| {
            let is_selected = selected == Some(start + offset);
            item_lines(item, is_selected, theme)
        })
        .collect()
}

/// Title line, description line and a spacer.
fn item_lines(item: &ListItem, selected: bool, theme: &Theme) -> [Line<'static>; 3] {
    let (prefix, title_style, desc_style) = if selected {
        (SELECTED_PREFIX, theme.selected_title, theme.selected_desc)
    } else {
        (UNSELECTED_PREFIX, theme.title, theme.desc)
    };

    let title = format!(
        "{}{:>width$}",
        item.item().primary(),
        item.updated_label(),
        width = item.title_width()
    );
    let desc = format!(
        "{}{:>width$}",
        item.item().id_label(),
        item.created_label(),
        width = item.desc_width()
    );

    [
        Line::from(vec![Span::styled(prefix, title_style), Span::styled(title, title_style)]),
        Line::from(vec![Span::styled(prefix, desc_style), Span::styled(desc, desc_style)]),
        Line::default(),
    ]
}
