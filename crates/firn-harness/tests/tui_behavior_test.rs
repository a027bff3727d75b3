//! End-to-end tests for browser behavior verification.
//!
//! # Test Strategy
//!
//! Each test simulates what a user does in the terminal:
//! 1. Press keys (Enter to drill in, Esc to back out, j/k to move)
//! 2. Let the store answer the fetches the App issued, in a chosen order
//! 3. Verify App state matches expected browser behavior
//!
//! # Oracle Pattern
//!
//! Tests end with oracle checks that verify:
//! - Focus level and breadcrumb match the drill-down depth
//! - Panes show data for the live selection, never a stale one
//! - The journal cursor survives a round trip

use firn_app::{AppAction, AppEvent, Focus, KeyInput, Request, pane::PaneItem};
use firn_core::ListQuery;
use firn_harness::{Scenario, fixtures};

#[test]
fn drill_into_diary_and_back() {
    let store = fixtures::diary_store().unwrap();
    let mut scenario = Scenario::started(store);

    assert_eq!(scenario.snapshot().journals.ids, ["j1"]);

    scenario.press(KeyInput::Enter);
    assert_eq!(scenario.pending().front(), Some(&Request::ListEntries {
        journal_id: "j1".into(),
        query: ListQuery::default(),
    }));

    // Entries arrive: first entry selected and fetched
    scenario.deliver_next();
    assert_eq!(scenario.app().selection().entry_id.as_deref(), Some("e1"));
    assert_eq!(scenario.pending().front(), Some(&Request::GetEntry {
        journal_id: "j1".into(),
        entry_id: "e1".into(),
    }));
    scenario.deliver_all();

    scenario.press(KeyInput::Esc);

    // Oracle: back at journals with j1 highlighted
    let snapshot = scenario.snapshot();
    assert_eq!(snapshot.focus, Focus::Journals);
    assert_eq!(snapshot.journals.selected_id.as_deref(), Some("j1"));
    assert_eq!(snapshot.journal_id, None);
    assert_eq!(snapshot.entries.ids, Vec::<String>::new());
    assert_eq!(snapshot.viewer_text, "No entry selected");
}

#[test]
fn late_entry_a_does_not_overwrite_entry_b() {
    let store = fixtures::diary_store().unwrap();
    let mut scenario = Scenario::started(store);
    scenario.press(KeyInput::Enter);
    scenario.deliver_next();

    // GetEntry(e1) still in flight when the user moves to e2
    scenario.press(KeyInput::Char('j'));
    let pending = scenario.take_pending();
    assert_eq!(pending.len(), 2);

    scenario.deliver(pending[1].clone());
    scenario.deliver(pending[0].clone());

    // Oracle: viewer shows e2
    let viewer = scenario.app().viewer();
    assert_eq!(viewer.entry().map(|e| e.id.as_str()), Some("e2"));
    assert!(viewer.text().starts_with("Day 2"));
}

#[test]
fn late_entries_for_previous_journal_are_dropped() {
    let store = fixtures::grid_store(2, 3).unwrap();
    let mut scenario = Scenario::started(store);

    scenario.press(KeyInput::Enter);
    let for_j0 = scenario.take_pending();

    scenario.press(KeyInput::Esc).press(KeyInput::Down).press(KeyInput::Enter);
    scenario.deliver_all();
    let renders = scenario.renders();

    scenario.deliver(for_j0[0].clone());

    // Oracle: j1's entries remain, the late delivery did not even render
    let snapshot = scenario.snapshot();
    assert_eq!(snapshot.journal_id.as_deref(), Some("j1"));
    assert!(snapshot.entries.ids.iter().all(|id| id.starts_with('e')));
    assert_eq!(scenario.app().entries().selected().map(|item| match item {
        PaneItem::Entry(entry) => entry.journal_id.as_str(),
        PaneItem::Journal(journal) => journal.id.as_str(),
    }), Some("j1"));
    assert_eq!(scenario.renders(), renders);
}

#[test]
fn empty_journal_leaves_viewer_on_placeholder() {
    let store = fixtures::grid_store(1, 0).unwrap();
    let mut scenario = Scenario::started(store);

    scenario.press(KeyInput::Enter).deliver_all();
    scenario.press(KeyInput::Enter);

    // Oracle: nothing to open, still at entries
    let snapshot = scenario.snapshot();
    assert_eq!(snapshot.focus, Focus::Entries);
    assert_eq!(snapshot.entry_id, None);
    assert_eq!(snapshot.viewer_text, "No entry selected");
    assert!(scenario.pending().is_empty());
}

#[test]
fn blurred_viewer_does_not_scroll_under_entry_list() {
    let store = fixtures::grid_store(1, 3).unwrap();
    let mut scenario = Scenario::started(store);
    scenario.press(KeyInput::Enter).deliver_all();

    scenario.press(KeyInput::Down).deliver_all();

    // Oracle: the key moved the list, the viewer stayed at the top
    assert_eq!(scenario.snapshot().entries.cursor, Some(1));
    assert_eq!(scenario.app().viewer().scroll(), 0);
    assert!(!scenario.snapshot().viewer_focused);
}

#[test]
fn entries_view_splits_viewport() {
    let store = fixtures::diary_store().unwrap();
    let mut scenario = Scenario::started(store);
    scenario.resize(100, 32);
    scenario.press(KeyInput::Enter).deliver_all();

    let snapshot = scenario.snapshot();
    assert_eq!(snapshot.viewport, 30);
    assert_eq!(snapshot.entries.size, (100, 18));
    assert_eq!(snapshot.viewer_size, (100, 12));

    scenario.press(KeyInput::Enter).deliver_all();
    assert_eq!(scenario.snapshot().viewer_size, (100, 30));
}

#[test]
fn quit_only_from_journals_with_q() {
    let store = fixtures::diary_store().unwrap();
    let mut scenario = Scenario::started(store);

    scenario.press(KeyInput::Enter).deliver_all();
    scenario.press(KeyInput::Char('q'));
    assert!(!scenario.quit_requested());

    scenario.press(KeyInput::Esc).press(KeyInput::Char('q'));
    assert!(scenario.quit_requested());
}

#[test]
fn journals_loaded_restores_pending_selection() {
    let store = fixtures::grid_store(4, 1).unwrap();
    let mut scenario = Scenario::started(store);
    scenario.press_all(&[KeyInput::End, KeyInput::Enter]);

    // Journal list emptied while inside (e.g. a reload raced the drill-in)
    scenario.event(AppEvent::JournalsLoaded { journals: vec![] });
    scenario.press(KeyInput::Esc);
    assert!(scenario.snapshot().restore_journal_selection);

    let journals = (0..2).map(|j| fixtures::journal(&format!("j{j}"), "J", j)).collect();
    scenario.event(AppEvent::JournalsLoaded { journals });

    // Oracle: clamped to the last item
    assert_eq!(scenario.snapshot().journals.cursor, Some(1));
    assert!(!scenario.snapshot().restore_journal_selection);
}

#[test]
fn start_issues_journal_listing_once() {
    let store = fixtures::diary_store().unwrap();
    let scenario = Scenario::new(store);

    assert_eq!(scenario.pending().len(), 1);
    assert!(matches!(scenario.pending().front(), Some(Request::ListJournals { .. })));

    let mut app = scenario.app().clone();
    assert!(app.start().contains(&AppAction::Render));
}
