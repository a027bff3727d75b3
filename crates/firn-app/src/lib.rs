//! Navigation engine for Firn
//!
//! Pure state machine, pane widgets, layout engine and a generic runtime for
//! browsing journals → entries → entry, enabling deterministic simulation
//! testing with the same code that runs in the terminal.
//!
//! # Components
//!
//! - [`App`]: Navigation state machine (focus, selection, key routing)
//! - [`pane`]: List and viewer widgets
//! - [`Layout`]: Pane allocation from terminal size and focus
//! - [`Command`]: Deferred store call producing one completion event
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod command;
mod config;
mod driver;
mod event;
mod focus;
mod input;
pub mod layout;
pub mod pane;
mod runtime;

pub use action::AppAction;
pub use app::App;
pub use command::{Command, Request};
pub use config::UiConfig;
pub use driver::Driver;
pub use event::AppEvent;
pub use focus::{Focus, Selection};
pub use input::KeyInput;
pub use layout::{Layout, PaneSize};
pub use runtime::Runtime;
