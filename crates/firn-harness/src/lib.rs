//! Deterministic test harness for the Firn navigation engine.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks over [`AppSnapshot`]s. Invariants verify WHAT must be true across
//! all event orders, not specific scenarios. Use
//! [`InvariantRegistry::standard()`] for the navigation invariants.
//!
//! # Drivers
//!
//! - [`Scenario`]: synchronous, test-controlled delivery of store results
//! - [`SimDriver`]: scripted [`firn_app::Driver`] for running the real
//!   [`firn_app::Runtime`]

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod invariants;
pub mod scenario;
pub mod sim_driver;

pub use invariants::{
    AppSnapshot, CursorInBounds, EntryFollowsCursor, FocusGuard, Invariant, InvariantKind,
    InvariantRegistry, InvariantResult, LayoutConsistent, ListSnapshot, Violation,
    ViewerFocusMatchesLevel, ViewerShowsSelection, WidthsClamped,
};
pub use scenario::Scenario;
pub use sim_driver::{Gate, SimDriver, SimDriverError, SimHandle};
