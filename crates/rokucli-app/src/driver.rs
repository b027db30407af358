//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::future::Future;

use rokucli_client::ClientError;
use rokucli_proto::Command;

use crate::{App, AppEvent};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in the production TUI and in simulation.
///
/// # Implementations
///
/// - **TUI**: crossterm for terminal events, ECP over HTTP for commands
/// - **Simulation**: scripted keys and an in-memory command log
pub trait Driver: Send {
    /// Platform-specific error type for input and rendering.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next input event.
    ///
    /// Returns `None` once the input source is exhausted, which ends the
    /// session like the quit key.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Send one command to the device and wait for it to be accepted.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`] is fatal to the session.
    fn send_command(
        &mut self,
        command: Command,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Address of the controlled device (host:port).
    fn device_addr(&self) -> &str;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Release resources at the end of the session.
    fn stop(&mut self);
}
