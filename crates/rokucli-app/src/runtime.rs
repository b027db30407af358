//! Generic runtime for application orchestration.
//!
//! The Runtime drives the session loop, coordinating between:
//! - [`App`]: session state machine
//! - [`Navigator`]: plans text typed through the on-screen keyboard
//! - [`Driver`]: platform-specific I/O
//! - [`Environment`]: time, for the caps settle delay

use std::{sync::Arc, time::Duration};

use rokucli_client::ClientError;
use rokucli_core::{Environment, KeyboardLayout, Navigator, Step};
use rokucli_proto::Command;
use thiserror::Error;

use crate::{App, AppAction, AppEvent, Driver};

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Pause after selecting the caps key, so the device applies the shift
    /// before the next move.
    pub caps_settle: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { caps_settle: Duration::from_secs(1) }
    }
}

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum RuntimeError<E>
where
    E: std::error::Error + 'static,
{
    /// Input or rendering failed.
    #[error("driver error: {0}")]
    Driver(#[source] E),

    /// A command could not be delivered. The rest of any plan in flight was
    /// abandoned.
    #[error("Unable to communicate with device at {device}")]
    Communication {
        /// Device address (host:port).
        device: String,
        /// Underlying failure.
        #[source]
        source: ClientError,
    },
}

/// Generic runtime that orchestrates App, Navigator, and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `E`: Environment providing the settle sleep
pub struct Runtime<D, E>
where
    D: Driver,
    E: Environment,
{
    driver: D,
    env: E,
    app: App,
    layout: Arc<KeyboardLayout>,
    config: RuntimeConfig,
}

impl<D, E> Runtime<D, E>
where
    D: Driver,
    E: Environment,
{
    /// Create a new runtime with the given driver and environment.
    pub fn new(driver: D, env: E, layout: Arc<KeyboardLayout>, config: RuntimeConfig) -> Self {
        let app = App::new(driver.device_addr().to_string());
        Self { driver, env, app, layout, config }
    }

    /// Run the session loop.
    ///
    /// Renders once, then feeds every input event through the [`App`] and
    /// executes the resulting actions until the user quits or input ends.
    /// The driver is stopped on every exit path.
    ///
    /// # Errors
    ///
    /// - [`RuntimeError::Driver`] if input or rendering fails
    /// - [`RuntimeError::Communication`] if a command cannot be delivered
    pub async fn run(&mut self) -> Result<(), RuntimeError<D::Error>> {
        tracing::info!(device = %self.app.device_addr(), "session started");

        let result = self.event_loop().await;
        self.driver.stop();

        match &result {
            Ok(()) => tracing::info!(sent = self.app.commands_sent(), "session ended"),
            Err(e) => tracing::warn!(error = %e, "session failed"),
        }
        result
    }

    async fn event_loop(&mut self) -> Result<(), RuntimeError<D::Error>> {
        self.driver.render(&self.app).map_err(RuntimeError::Driver)?;

        loop {
            let event = self.driver.poll_event().await.map_err(RuntimeError::Driver)?;
            let Some(event) = event else { return Ok(()) };

            let actions = self.app.handle(event);
            if self.process_actions(actions).await? {
                return Ok(());
            }
        }
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit.
    async fn process_actions(
        &mut self,
        initial_actions: Vec<AppAction>,
    ) -> Result<bool, RuntimeError<D::Error>> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render => self.render()?,
                    AppAction::Quit => return Ok(true),
                    AppAction::Send(command) => {
                        let actions = self.send(command).await?;
                        pending_actions.extend(actions);
                    },
                    AppAction::TypeText { text } => {
                        let actions = self.type_text(&text).await?;
                        pending_actions.extend(actions);
                    },
                }
            }
        }
        Ok(false)
    }

    /// Send one command and report it to the App.
    async fn send(
        &mut self,
        command: Command,
    ) -> Result<Vec<AppAction>, RuntimeError<D::Error>> {
        if let Err(source) = self.driver.send_command(command).await {
            return Err(RuntimeError::Communication {
                device: self.driver.device_addr().to_string(),
                source,
            });
        }
        Ok(self.app.handle(AppEvent::CommandSent(command)))
    }

    /// Plan `text` on the keyboard layout and execute the plan.
    ///
    /// A planning failure is reported to the App and nothing is sent.
    async fn type_text(
        &mut self,
        text: &str,
    ) -> Result<Vec<AppAction>, RuntimeError<D::Error>> {
        let plan = match Navigator::new(&self.layout).plan(text) {
            Ok(plan) => plan,
            Err(e) => {
                tracing::warn!(error = %e, "cannot type text on device keyboard");
                return Ok(self.app.handle(AppEvent::Error { message: e.to_string() }));
            },
        };

        let (glyphs, moves) = (plan.glyphs(), plan.moves());
        for step in plan {
            match step {
                Step::Send(command) => {
                    let actions = self.send(command).await?;
                    self.process_actions_sync(actions)?;
                },
                Step::Settle => self.env.sleep(self.config.caps_settle).await,
            }
        }

        Ok(self.app.handle(AppEvent::TypingFinished { glyphs, moves }))
    }

    /// Process actions produced while a plan is running.
    fn process_actions_sync(
        &mut self,
        actions: Vec<AppAction>,
    ) -> Result<(), RuntimeError<D::Error>> {
        for action in actions {
            match action {
                AppAction::Render => self.render()?,
                AppAction::Quit | AppAction::Send(_) | AppAction::TypeText { .. } => {
                    tracing::warn!(?action, "unexpected action while typing");
                },
            }
        }
        Ok(())
    }

    fn render(&mut self) -> Result<(), RuntimeError<D::Error>> {
        self.driver.render(&self.app).map_err(RuntimeError::Driver)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Consume the runtime, returning the Driver
    pub fn into_driver(self) -> D {
        self.driver
    }
}
