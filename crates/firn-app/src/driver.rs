//! Driver trait for abstracting terminal I/O.
//!
//! The [`Driver`] trait decouples the runtime from a specific terminal
//! library. The TUI implements it over crossterm and ratatui, the harness
//! implements it with scripted input, and the generic [`crate::Runtime`]
//! handles all orchestration for both.

use std::future::Future;

use crate::{App, AppEvent};

/// Abstracts input and rendering for the runtime.
///
/// Store access is not part of the driver: the runtime executes commands
/// against a [`firn_core::Store`] itself, so the same completion handling
/// runs in production and in tests.
///
/// # Implementations
///
/// - **TUI**: crossterm event stream, ratatui rendering
/// - **Simulation**: scripted events, snapshot capture
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next input event.
    ///
    /// Returns `None` when the input source is closed; the runtime then
    /// stops. Must be cancel-safe: the runtime races it against command
    /// completions and drops the future when a completion wins.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Release resources before the runtime returns.
    fn stop(&mut self);
}
