//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.
//!
//! Pane sizes come from [`firn_app::Layout`]; the renderer only stacks the
//! panes the current focus level shows.

mod footer;
mod header;
mod list;
mod viewer;

use firn_app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Wrap},
};

use crate::Theme;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let config = app.config();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(config.header_height),
            Constraint::Min(0),
            Constraint::Length(config.footer_height),
        ])
        .split(frame.area());

    let [header_area, content_area, footer_area] = chunks.as_ref() else {
        return;
    };

    header::render(frame, app, theme, *header_area);
    footer::render(frame, app, theme, *footer_area);

    if app.layout().fits {
        render_content(frame, app, theme, *content_area);
    } else {
        render_too_small(frame, app, theme, *content_area);
    }
}

/// Render the panes of the current focus level.
fn render_content(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    match app.focus() {
        Focus::Journals => list::render(frame, app.journals(), theme, area),
        Focus::Entries => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(app.layout().entries.height),
                    Constraint::Min(0),
                ])
                .split(area);

            let [entries_area, viewer_area] = chunks.as_ref() else {
                return;
            };

            list::render(frame, app.entries(), theme, *entries_area);
            viewer::render(frame, app.viewer(), theme, *viewer_area);
        },
        Focus::Entry => viewer::render(frame, app.viewer(), theme, area),
    }
}

fn render_too_small(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let notice = format!("terminal too small: need {} columns", app.config().min_width);
    let paragraph = Paragraph::new(Line::styled(notice, theme.error))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
