//! Generic runtime for application orchestration.
//!
//! The Runtime drives the event loop, coordinating between:
//! - [`App`]: navigation state machine
//! - [`Command`]: store calls run on the blocking pool
//! - [`Driver`]: platform-specific input and rendering
//!
//! Commands report back through an unbounded channel; the loop races driver
//! input against those completions and feeds whichever arrives first into
//! [`App::handle`]. All state mutation happens on the loop task.

use firn_core::Store;
use tokio::sync::mpsc;

use crate::{App, AppAction, AppEvent, Command, Driver, Request, UiConfig};

/// Generic runtime that orchestrates App, store commands and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `S`: Store the commands read from
pub struct Runtime<D, S>
where
    D: Driver,
    S: Store,
{
    driver: D,
    app: App,
    store: S,
    completions_tx: mpsc::UnboundedSender<AppEvent>,
    completions_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl<D, S> Runtime<D, S>
where
    D: Driver,
    S: Store,
{
    /// Create a new runtime with the given driver and store.
    pub fn new(driver: D, store: S, config: UiConfig) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self { driver, app: App::new(config), store, completions_tx, completions_rx }
    }

    /// Run the main event loop until the App asks to quit or input closes.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails to read input or render.
    pub async fn run(mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;

        let actions = self.app.start();
        let mut quit = self.process_actions(actions)?;

        while !quit {
            let event = tokio::select! {
                input = self.driver.poll_event() => match input? {
                    Some(event) => event,
                    None => {
                        tracing::debug!("input closed");
                        break;
                    },
                },
                Some(completion) = self.completions_rx.recv() => completion,
            };

            let actions = self.app.handle(event);
            quit = self.process_actions(actions)?;
        }

        self.driver.stop();
        Ok(())
    }

    /// Execute actions returned by the App.
    ///
    /// Renders at most once per batch. Returns `true` if the App asked to
    /// quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        let mut needs_render = false;

        for action in actions {
            match action {
                AppAction::Render => needs_render = true,
                AppAction::Quit => return Ok(true),
                AppAction::Fetch(request) => self.spawn(request),
            }
        }

        if needs_render {
            self.driver.render(&self.app)?;
        }
        Ok(false)
    }

    /// Run `request` on the blocking pool and route its completion back.
    fn spawn(&self, request: Request) {
        let command = Command::new(self.store.clone(), request);
        tracing::debug!(operation = command.request().operation(), "issuing fetch");

        let completions = self.completions_tx.clone();
        tokio::task::spawn_blocking(move || {
            if completions.send(command.execute()).is_err() {
                tracing::debug!("runtime stopped before completion was delivered");
            }
        });
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }
}
