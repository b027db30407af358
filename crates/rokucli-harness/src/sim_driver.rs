//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as `TerminalDriver` but for
//! deterministic testing. It implements [`Driver`] so the same
//! [`rokucli_app::Runtime`] orchestration code runs in both production and
//! simulation.
//!
//! Keys are scripted up front; once the script runs out the session ends.
//! Every delivered command is replayed on a [`VirtualKeyboard`].

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use rokucli_app::{App, AppEvent, Driver, KeyInput};
use rokucli_client::ClientError;
use rokucli_core::KeyboardLayout;
use rokucli_proto::Command;

use crate::{
    VirtualKeyboard,
    invariants::{InvariantRegistry, SystemSnapshot},
};

/// Device address reported by default.
const SIM_DEVICE_ADDR: &str = "192.0.2.10:8060";

/// Error type for simulation driver.
#[derive(Debug, Clone)]
pub struct SimDriverError(pub String);

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimDriverError: {}", self.0)
    }
}

impl std::error::Error for SimDriverError {}

/// Shared state for event injection.
///
/// This allows injection and inspection from outside async contexts.
struct SharedState {
    pending_events: VecDeque<AppEvent>,
    sent: Vec<Command>,
    keyboard: VirtualKeyboard,
    /// Number of commands delivered before every further send fails.
    fail_after: Option<usize>,
    /// Fail the next render with this message.
    render_failure: Option<String>,
    renders: usize,
    stopped: bool,
}

/// Simulation driver for deterministic testing.
///
/// Implements [`Driver`] trait so the same [`rokucli_app::Runtime`]
/// orchestration code runs in both production TUI and simulation tests.
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
    device_addr: String,
    invariants: Option<InvariantRegistry>,
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new(Arc::new(KeyboardLayout::roku()))
    }
}

impl SimDriver {
    /// Create a driver whose virtual device uses `layout`.
    pub fn new(layout: Arc<KeyboardLayout>) -> Self {
        let state = SharedState {
            pending_events: VecDeque::new(),
            sent: Vec::new(),
            keyboard: VirtualKeyboard::new(layout),
            fail_after: None,
            render_failure: None,
            renders: 0,
            stopped: false,
        };
        Self {
            state: Arc::new(Mutex::new(state)),
            device_addr: SIM_DEVICE_ADDR.to_string(),
            invariants: None,
        }
    }

    /// Enable invariant checking on every render.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(registry);
        self
    }

    /// Report a different device address.
    #[must_use]
    pub fn with_device_addr(mut self, addr: impl Into<String>) -> Self {
        self.device_addr = addr.into();
        self
    }

    fn state(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every send fail once `delivered` commands have gone through.
    pub fn fail_after(&self, delivered: usize) {
        self.state().fail_after = Some(delivered);
    }

    /// Make the next render fail.
    pub fn fail_next_render(&self, message: impl Into<String>) {
        self.state().render_failure = Some(message.into());
    }

    /// Inject an `AppEvent` for processing.
    pub fn inject_event(&self, event: AppEvent) {
        self.state().pending_events.push_back(event);
    }

    /// Inject a sequence of keys.
    pub fn inject_keys(&self, keys: impl IntoIterator<Item = KeyInput>) {
        let mut state = self.state();
        state.pending_events.extend(keys.into_iter().map(AppEvent::Key));
    }

    /// Inject every character of `text` as a key.
    pub fn inject_text(&self, text: &str) {
        self.inject_keys(text.chars().map(KeyInput::Char));
    }

    /// Check if there are pending events to process.
    pub fn has_pending(&self) -> bool {
        !self.state().pending_events.is_empty()
    }

    /// Commands delivered so far.
    pub fn sent(&self) -> Vec<Command> {
        self.state().sent.clone()
    }

    /// Copy of the virtual keyboard.
    pub fn keyboard(&self) -> VirtualKeyboard {
        self.state().keyboard.clone()
    }

    /// Number of renders.
    pub fn renders(&self) -> usize {
        self.state().renders
    }

    /// True once the runtime stopped the driver.
    pub fn is_stopped(&self) -> bool {
        self.state().stopped
    }

    /// Create a snapshot from App and device state for invariant checking.
    pub fn snapshot(&self, app: &App) -> SystemSnapshot {
        let state = self.state();
        SystemSnapshot::capture(app, &state.keyboard, state.sent.len())
    }

    /// Check invariants against App and device state.
    pub fn check_invariants(&self, app: &App, context: &str) {
        if let Some(ref registry) = self.invariants {
            registry.assert_all(&self.snapshot(app), context);
        }
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        Ok(self.state().pending_events.pop_front())
    }

    async fn send_command(&mut self, command: Command) -> Result<(), ClientError> {
        let mut state = self.state();
        if state.fail_after.is_some_and(|limit| state.sent.len() >= limit) {
            tracing::warn!(device = %self.device_addr, %command, "injected send failure");
            return Err(ClientError::Communication {
                addr: self.device_addr.clone(),
                reason: "connection reset by peer".to_string(),
            });
        }

        state.sent.push(command);
        state.keyboard.apply(command);
        tracing::debug!(%command, cursor = %state.keyboard.cursor(), "simulated keypress");
        Ok(())
    }

    fn device_addr(&self) -> &str {
        &self.device_addr
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        {
            let mut state = self.state();
            if let Some(message) = state.render_failure.take() {
                return Err(SimDriverError(message));
            }
            state.renders += 1;
        }

        let context = format!("after render {}", self.renders());
        self.check_invariants(app, &context);
        Ok(())
    }

    fn stop(&mut self) {
        self.state().stopped = true;
    }
}
