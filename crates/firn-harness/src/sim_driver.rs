//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as the terminal driver but plays a
//! scripted list of events. It implements [`Driver`] so the same
//! [`firn_app::Runtime`] orchestration code runs in both production and
//! simulation.
//!
//! Completions arrive from the blocking pool in whatever order the scheduler
//! picks, so script steps can be gated on the rendered state: a gated step is
//! only handed to the runtime once the last render satisfies its predicate.

#![allow(clippy::disallowed_types, reason = "Synchronous locking operations only")]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use firn_app::{App, AppEvent, Driver, KeyInput};

use crate::invariants::{AppSnapshot, InvariantRegistry};

/// Error type for simulation driver.
#[derive(Debug, Clone)]
pub struct SimDriverError(pub String);

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimDriverError: {}", self.0)
    }
}

impl std::error::Error for SimDriverError {}

/// Predicate over the last rendered state.
pub type Gate = Box<dyn Fn(&AppSnapshot) -> bool + Send>;

struct Step {
    gate: Option<Gate>,
    event: AppEvent,
}

/// State observable from outside the runtime.
#[derive(Default)]
struct SharedState {
    renders: Vec<AppSnapshot>,
    stopped: bool,
}

/// Read access to what a [`SimDriver`] observed, usable after the driver
/// has been moved into a runtime.
#[derive(Clone)]
pub struct SimHandle {
    state: Arc<Mutex<SharedState>>,
}

impl SimHandle {
    fn lock(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every rendered state, in order.
    pub fn renders(&self) -> Vec<AppSnapshot> {
        self.lock().renders.clone()
    }

    /// The most recent render.
    pub fn last_render(&self) -> Option<AppSnapshot> {
        self.lock().renders.last().cloned()
    }

    /// Whether the runtime stopped the driver.
    pub fn stopped(&self) -> bool {
        self.lock().stopped
    }
}

/// Simulation driver for deterministic testing.
///
/// Implements [`Driver`] so the same [`firn_app::Runtime`] orchestration code
/// runs in both the terminal and simulation tests. When the script is
/// exhausted the driver reports closed input and the runtime returns.
pub struct SimDriver {
    script: VecDeque<Step>,
    last: Option<AppSnapshot>,
    state: Arc<Mutex<SharedState>>,
    invariants: Option<InvariantRegistry>,
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDriver {
    /// Create a driver with an empty script.
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            last: None,
            state: Arc::new(Mutex::new(SharedState::default())),
            invariants: None,
        }
    }

    /// Enable invariant checking on every render.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(registry);
        self
    }

    /// Handle for inspecting renders after the driver is moved.
    pub fn handle(&self) -> SimHandle {
        SimHandle { state: Arc::clone(&self.state) }
    }

    /// Script an event delivered as soon as the runtime asks for input.
    #[must_use]
    pub fn then(mut self, event: AppEvent) -> Self {
        self.script.push_back(Step { gate: None, event });
        self
    }

    /// Script a key press.
    #[must_use]
    pub fn then_key(self, key: KeyInput) -> Self {
        self.then(AppEvent::Key(key))
    }

    /// Script an event delivered once a render satisfies `gate`.
    #[must_use]
    pub fn when(
        mut self,
        gate: impl Fn(&AppSnapshot) -> bool + Send + 'static,
        event: AppEvent,
    ) -> Self {
        self.script.push_back(Step { gate: Some(Box::new(gate)), event });
        self
    }

    /// Script a key press delivered once a render satisfies `gate`.
    #[must_use]
    pub fn when_key(self, gate: impl Fn(&AppSnapshot) -> bool + Send + 'static, key: KeyInput) -> Self {
        self.when(gate, AppEvent::Key(key))
    }

    fn front_ready(&self) -> bool {
        match self.script.front() {
            Some(Step { gate: Some(gate), .. }) => self.last.as_ref().is_some_and(|last| gate(last)),
            Some(Step { gate: None, .. }) | None => true,
        }
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        if !self.front_ready() {
            tracing::trace!(remaining = self.script.len(), "script step waiting for render");
            // Woken only by cancellation: the runtime drops this future when
            // a completion arrives and asks again after rendering it.
            std::future::pending::<()>().await;
        }
        Ok(self.script.pop_front().map(|step| step.event))
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        let snapshot = AppSnapshot::from_app(app);

        if let Some(registry) = &self.invariants
            && let Err(violations) = registry.check_all(&snapshot)
        {
            let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
            tracing::error!(violations = messages.len(), "invariant violated on render");
            return Err(SimDriverError(messages.join("; ")));
        }

        self.state.lock().unwrap_or_else(PoisonError::into_inner).renders.push(snapshot.clone());
        self.last = Some(snapshot);
        Ok(())
    }

    fn stop(&mut self) {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).stopped = true;
    }
}
