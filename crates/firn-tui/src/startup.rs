//! Store preparation before the terminal is taken over.
//!
//! Failures here exit the program; once the UI runs, store errors are shown
//! inline instead.

use firn_core::{ListQuery, StoreError, StoreWriter, seed};

/// Seed the store if asked to and check that it answers a listing.
///
/// Returns the number of journals written by the demo seed.
pub fn prepare_store<S: StoreWriter>(store: &S, seed_demo: bool) -> Result<usize, StoreError> {
    let seeded = if seed_demo { seed::populate(store)? } else { 0 };

    let probe = store.list_journals(&ListQuery::default().with_limit(1))?;
    tracing::debug!(seeded, empty = probe.is_empty(), "store reachable");

    Ok(seeded)
}
