//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use crate::Request;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Load data from the store.
    ///
    /// The runtime turns the request into a [`crate::Command`] and feeds the
    /// resulting completion event back into the state machine.
    Fetch(Request),
}
