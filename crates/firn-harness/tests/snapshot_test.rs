//! Snapshot of the observable navigation state.
//!
//! Pins the whole [`AppSnapshot`] after a drill-down so changes to focus,
//! selection, pane sizing or item widths show up as a reviewable diff.

use firn_app::KeyInput;
use firn_harness::{AppSnapshot, Scenario, fixtures};

#[test]
fn entries_focus_state() {
    let store = fixtures::diary_store().unwrap();
    let mut scenario = Scenario::started(store);
    scenario.resize(60, 12).press(KeyInput::Enter).deliver_all();

    let snapshot: AppSnapshot = scenario.snapshot();
    insta::assert_json_snapshot!(snapshot);
}

#[test]
fn failed_listing_state() {
    let store = firn_core::ChaoticStore::new(fixtures::diary_store().unwrap(), 1.0);
    let mut scenario = Scenario::new(store);
    scenario.resize(60, 12).deliver_all();

    insta::assert_json_snapshot!(scenario.snapshot(), {
        ".entries" => "[empty]",
        ".journals.widths" => "[empty]",
    });
}
