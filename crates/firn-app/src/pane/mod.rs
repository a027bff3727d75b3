//! Pane widgets.
//!
//! Panes own their cursor, scroll position and size. Key handling consumes
//! the pane and hands it back with an outcome, so the state machine decides
//! what a movement means (for example fetching the newly selected entry).

mod list;
mod viewer;

pub use list::{ListItem, ListOutcome, ListPane, PaneItem};
pub use viewer::{EntryViewer, NOT_FOUND, PLACEHOLDER, ViewerContent, ViewerOutcome};
