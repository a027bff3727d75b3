//! Runtime tests: the production event loop driven by a scripted driver.
//!
//! Store commands run on the blocking pool exactly as in the terminal, so
//! every script step after the first is gated on the rendered state it
//! depends on.
//!
//! # Oracle Pattern
//!
//! Tests end with oracle checks that verify:
//! - The runtime stopped the driver on quit or closed input
//! - The final render reflects the scripted navigation

use std::time::Duration;

use firn_app::{Focus, KeyInput, Runtime, UiConfig};
use firn_core::ChaoticStore;
use firn_harness::{InvariantRegistry, SimDriver, fixtures};

const DEADLINE: Duration = Duration::from_secs(5);

#[tokio::test]
async fn navigates_and_quits() {
    let store = fixtures::diary_store().unwrap();
    let driver = SimDriver::new()
        .with_invariants(InvariantRegistry::standard())
        .when_key(|s| s.journals.ids.len() == 1, KeyInput::Enter)
        .when_key(|s| s.viewer_entry_id.as_deref() == Some("e1"), KeyInput::Down)
        .when_key(|s| s.viewer_entry_id.as_deref() == Some("e2"), KeyInput::Enter)
        .when_key(
            |s| s.focus == Focus::Entry && s.viewer_entry_id.as_deref() == Some("e2"),
            KeyInput::Esc,
        )
        .when_key(|s| s.focus == Focus::Entries, KeyInput::Esc)
        .when_key(|s| s.focus == Focus::Journals, KeyInput::Char('q'));
    let handle = driver.handle();

    let runtime = Runtime::new(driver, store, UiConfig::default());
    tokio::time::timeout(DEADLINE, runtime.run()).await.unwrap().unwrap();

    // Oracle: stopped at journals with the visited journal highlighted
    assert!(handle.stopped());
    let last = handle.last_render().unwrap();
    assert_eq!(last.focus, Focus::Journals);
    assert_eq!(last.journals.selected_id.as_deref(), Some("j1"));
    assert!(handle.renders().iter().any(|s| s.focus == Focus::Entry));
}

#[tokio::test]
async fn store_failure_renders_inline() {
    let store = ChaoticStore::new(fixtures::diary_store().unwrap(), 1.0);
    let driver = SimDriver::new().when_key(|s| s.journals.error.is_some(), KeyInput::CtrlC);
    let handle = driver.handle();

    let runtime = Runtime::new(driver, store.clone(), UiConfig::default());
    tokio::time::timeout(DEADLINE, runtime.run()).await.unwrap().unwrap();

    // Oracle: one attempt, no retries, error on screen
    assert_eq!(store.operation_count(), 1);
    let last = handle.last_render().unwrap();
    assert!(last.status_message.is_some_and(|s| s.starts_with("list_journals")));
}

#[tokio::test]
async fn closed_input_stops_runtime() {
    let driver = SimDriver::new();
    let handle = driver.handle();

    let runtime = Runtime::new(driver, fixtures::diary_store().unwrap(), UiConfig::default());
    tokio::time::timeout(DEADLINE, runtime.run()).await.unwrap().unwrap();

    assert!(handle.stopped());
    assert!(!handle.renders().is_empty());
}
