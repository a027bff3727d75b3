//! Synchronous scenario runner.
//!
//! Drives an [`App`] against a store without a runtime. Fetches issued by the
//! App are queued instead of executed, so tests decide when (and in which
//! order) each completion is delivered. Every event is followed by a full
//! invariant check.

use std::collections::VecDeque;

use firn_app::{App, AppAction, AppEvent, Command, KeyInput, Request, UiConfig};
use firn_core::Store;

use crate::invariants::{AppSnapshot, InvariantRegistry};

/// Step-by-step driver for the navigation state machine.
pub struct Scenario<S: Store> {
    app: App,
    store: S,
    pending: VecDeque<Request>,
    invariants: InvariantRegistry,
    quit: bool,
    renders: usize,
}

impl<S: Store> Scenario<S> {
    /// Start an App with the default config. The initial journal listing is
    /// queued, not delivered.
    pub fn new(store: S) -> Self {
        Self::with_config(store, UiConfig::default())
    }

    /// Start an App with `config`.
    pub fn with_config(store: S, config: UiConfig) -> Self {
        let mut scenario = Self {
            app: App::new(config),
            store,
            pending: VecDeque::new(),
            invariants: InvariantRegistry::standard(),
            quit: false,
            renders: 0,
        };
        let actions = scenario.app.start();
        scenario.apply(actions, "start");
        scenario
    }

    /// Start and deliver every queued fetch.
    pub fn started(store: S) -> Self {
        let mut scenario = Self::new(store);
        scenario.deliver_all();
        scenario
    }

    /// Feed an event to the App.
    pub fn event(&mut self, event: AppEvent) -> &mut Self {
        let context = format!("after {event:?}");
        let actions = self.app.handle(event);
        self.apply(actions, &context);
        self
    }

    /// Press a key.
    pub fn press(&mut self, key: KeyInput) -> &mut Self {
        self.event(AppEvent::Key(key))
    }

    /// Press each key in order.
    pub fn press_all(&mut self, keys: &[KeyInput]) -> &mut Self {
        for key in keys {
            self.press(*key);
        }
        self
    }

    /// Resize the terminal.
    pub fn resize(&mut self, width: u16, height: u16) -> &mut Self {
        self.event(AppEvent::Resize(width, height))
    }

    /// Execute the oldest queued fetch. Returns `false` if none was queued.
    pub fn deliver_next(&mut self) -> bool {
        match self.pending.pop_front() {
            Some(request) => {
                self.deliver(request);
                true
            },
            None => false,
        }
    }

    /// Execute the newest queued fetch. Returns `false` if none was queued.
    pub fn deliver_last(&mut self) -> bool {
        match self.pending.pop_back() {
            Some(request) => {
                self.deliver(request);
                true
            },
            None => false,
        }
    }

    /// Execute queued fetches (including ones they trigger) until none remain.
    pub fn deliver_all(&mut self) -> &mut Self {
        while self.deliver_next() {}
        self
    }

    /// Take the queued fetches without executing them.
    pub fn take_pending(&mut self) -> Vec<Request> {
        self.pending.drain(..).collect()
    }

    /// Queued fetches, oldest first.
    pub fn pending(&self) -> &VecDeque<Request> {
        &self.pending
    }

    /// Execute `request` against the store and feed the completion.
    pub fn deliver(&mut self, request: Request) -> &mut Self {
        let completion = Command::new(self.store.clone(), request).execute();
        self.event(completion)
    }

    /// The App under test.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Snapshot of the App.
    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot::from_app(&self.app)
    }

    /// Whether the App asked to quit.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Number of render requests so far.
    pub fn renders(&self) -> usize {
        self.renders
    }

    fn apply(&mut self, actions: Vec<AppAction>, context: &str) {
        for action in actions {
            match action {
                AppAction::Render => self.renders += 1,
                AppAction::Quit => self.quit = true,
                AppAction::Fetch(request) => self.pending.push_back(request),
            }
        }
        self.invariants.assert_all(&self.snapshot(), context);
    }
}
