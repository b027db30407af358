//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering. Commands go to the device over
//! ECP.

use std::{
    io::{self, Stdout, stdout},
    panic,
    sync::Once,
};

use crossterm::{
    ExecutableCommand,
    cursor::Show,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use rokucli_app::{App, AppEvent, Driver, KeyInput};
use rokucli_client::{ClientError, Command, EcpClient, TransportConfig};
use thiserror::Error;

use crate::ui;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The device could not be reached.
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Raw mode and the alternate screen are held for the driver's lifetime and
/// released in [`Drop`].
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    client: EcpClient,
}

impl TerminalDriver {
    /// Connect to the device at `addr`, then take over the terminal.
    ///
    /// The device is contacted first so a connection failure is reported on
    /// a normal terminal.
    ///
    /// # Errors
    ///
    /// - [`TerminalError::Client`] if the device does not answer
    /// - [`TerminalError::Io`] if the terminal cannot be set up
    pub async fn connect(addr: &str, config: TransportConfig) -> Result<Self, TerminalError> {
        let client = EcpClient::connect(addr, config).await?;
        Self::new(client)
    }

    /// Take over the terminal for an already connected client.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Io`] if raw mode or the alternate screen
    /// cannot be entered.
    pub fn new(client: EcpClient) -> Result<Self, TerminalError> {
        let terminal = unwind_on_error(
            || {
                enable_raw_mode()?;
                stdout().execute(EnterAlternateScreen)?;
                Terminal::new(CrosstermBackend::new(stdout()))
            },
            restore,
        )?;
        install_panic_hook();
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, client })
    }
}

/// Hand the terminal back: cooked mode, main screen, visible cursor.
fn restore() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = stdout().execute(Show);
}

/// Run `setup`, calling `undo` if it fails part way.
fn unwind_on_error<T>(setup: impl FnOnce() -> io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    setup().inspect_err(|_| undo())
}

/// Restore the terminal before the panic message is printed.
///
/// Release builds abort on panic, so `Drop` never runs there.
fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore();
            previous(info);
        }));
    });
}

/// Convert a crossterm key press into a session event.
///
/// Ctrl+C becomes [`AppEvent::Interrupt`]. Keys the session never reacts to
/// yield `None`.
pub fn convert_key(event: KeyEvent) -> Option<AppEvent> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(event.code, KeyCode::Char('c' | 'C')).then_some(AppEvent::Interrupt);
    }

    let key = match event.code {
        KeyCode::Char(c) => KeyInput::Char(c),
        KeyCode::Enter => KeyInput::Enter,
        KeyCode::Esc => KeyInput::Esc,
        KeyCode::Backspace => KeyInput::Backspace,
        KeyCode::Delete => KeyInput::Delete,
        KeyCode::Up => KeyInput::Up,
        KeyCode::Down => KeyInput::Down,
        KeyCode::Left => KeyInput::Left,
        KeyCode::Right => KeyInput::Right,
        _ => return None,
    };
    Some(AppEvent::Key(key))
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        loop {
            match self.event_stream.next().await {
                Some(Ok(Event::Key(key_event))) => {
                    if let Some(event) = convert_key(key_event) {
                        return Ok(Some(event));
                    }
                },
                Some(Ok(Event::Resize(cols, rows))) => {
                    return Ok(Some(AppEvent::Resize(cols, rows)));
                },
                Some(Ok(_)) => {},
                Some(Err(e)) => return Err(TerminalError::Io(e)),
                None => return Ok(None),
            }
        }
    }

    async fn send_command(&mut self, command: Command) -> Result<(), ClientError> {
        self.client.send(command).await
    }

    fn device_addr(&self) -> &str {
        self.client.addr()
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }

    fn stop(&mut self) {
        tracing::debug!(device = self.client.addr(), "terminal driver stopped");
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        restore();
    }
}
