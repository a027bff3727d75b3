//! Chaotic store wrapper for fault injection testing
//!
//! Store wrapper that randomly fails reads so the navigation engine's failure
//! paths (error surfaced in the pane, no state corruption) can be exercised
//! deterministically.

#![allow(clippy::disallowed_types, reason = "Locking simple RNG state")]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use super::{ListQuery, Store, StoreError, StoreWriter};
use crate::{Entry, Journal};

/// Store wrapper that randomly injects [`StoreError::Unavailable`]
///
/// Reads are delegated to the inner store unless the RNG decides to fail
/// them. Writes always pass through so fixtures can be populated through the
/// wrapper. Clones share the RNG and the operation counter.
#[derive(Clone)]
pub struct ChaoticStore<S: Store> {
    inner: S,
    /// Failure rate (0.0 = never fail, 1.0 = always fail)
    failure_rate: f64,
    rng: Arc<Mutex<ChaoticRng>>,
    operation_count: Arc<AtomicUsize>,
}

/// Linear congruential generator, reproducible from its seed.
struct ChaoticRng {
    state: u64,
}

impl ChaoticRng {
    /// Next value in [0.0, 1.0)
    fn next(&mut self) -> f64 {
        // Numerical Recipes constants
        const A: u64 = 1_664_525;
        const C: u64 = 1_013_904_223;
        const M: u64 = 1u64 << 32;

        self.state = (A.wrapping_mul(self.state).wrapping_add(C)) % M;
        (self.state as f64) / (M as f64)
    }
}

impl<S: Store> ChaoticStore<S> {
    /// Wrap `inner` with the default seed.
    ///
    /// # Panics
    ///
    /// Panics if `failure_rate` is not in [0.0, 1.0]
    pub fn new(inner: S, failure_rate: f64) -> Self {
        Self::with_seed(inner, failure_rate, 0x1234_5678_9ABC_DEF0)
    }

    /// Wrap `inner` with an explicit seed for reproducible chaos.
    ///
    /// # Panics
    ///
    /// Panics if `failure_rate` is not in [0.0, 1.0]
    pub fn with_seed(inner: S, failure_rate: f64, seed: u64) -> Self {
        assert!(
            (0.0..=1.0).contains(&failure_rate),
            "failure_rate must be between 0.0 and 1.0, got {failure_rate}"
        );

        Self {
            inner,
            failure_rate,
            rng: Arc::new(Mutex::new(ChaoticRng { state: seed })),
            operation_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Underlying store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Total number of read operations attempted, failed or not.
    pub fn operation_count(&self) -> usize {
        self.operation_count.load(Ordering::Relaxed)
    }

    /// Count the operation and decide whether it fails.
    fn inject(&self) -> Result<(), StoreError> {
        self.operation_count.fetch_add(1, Ordering::Relaxed);

        // A poisoned RNG is still a valid LCG state.
        let roll = self.rng.lock().unwrap_or_else(std::sync::PoisonError::into_inner).next();
        if roll < self.failure_rate {
            tracing::debug!("injecting store failure");
            return Err(StoreError::Unavailable("chaotic failure injection".to_string()));
        }
        Ok(())
    }
}

impl<S: Store> Store for ChaoticStore<S> {
    fn list_journals(&self, query: &ListQuery) -> Result<Vec<Journal>, StoreError> {
        self.inject()?;
        self.inner.list_journals(query)
    }

    fn list_entries(&self, journal_id: &str, query: &ListQuery) -> Result<Vec<Entry>, StoreError> {
        self.inject()?;
        self.inner.list_entries(journal_id, query)
    }

    fn get_entry(&self, journal_id: &str, entry_id: &str) -> Result<Option<Entry>, StoreError> {
        self.inject()?;
        self.inner.get_entry(journal_id, entry_id)
    }
}

impl<S: StoreWriter> StoreWriter for ChaoticStore<S> {
    fn put_journal(&self, journal: &Journal) -> Result<(), StoreError> {
        self.inner.put_journal(journal)
    }

    fn put_entry(&self, entry: &Entry) -> Result<(), StoreError> {
        self.inner.put_entry(entry)
    }
}
