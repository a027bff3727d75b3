//! Terminal UI for Firn
//!
//! A thin shell over [`firn_app::Driver`] that provides terminal-specific
//! I/O. All navigation logic lives in the pure [`firn_app::App`] and the
//! generic [`firn_app::Runtime`].
//!
//! This crate only handles terminal input, rendering, command-line options
//! and log setup.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod logging;
pub mod startup;
pub mod terminal;
pub mod theme;
pub mod ui;

pub use cli::{Args, StoreKind};
pub use firn_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use logging::LogFormat;
pub use startup::prepare_store;
pub use terminal::{TerminalDriver, TerminalError};
pub use theme::Theme;
