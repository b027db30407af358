//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the
//! interactive state of the session completely decoupled from terminal and
//! network I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Dispatches keys through [`crate::keymap`] in idle mode.
//! - Owns the active [`TextCapture`] while a text-entry sub-mode runs.
//! - Tracks what the device has been sent, for the status bar.

use rokucli_proto::Command;

use crate::{
    AppAction, AppEvent, Binding, CaptureOutcome, KeyInput, Mode, TextCapture, keymap,
};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// Device address (host:port), for display.
    device_addr: String,
    /// Active text capture. `None` in idle mode.
    capture: Option<TextCapture>,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
    /// Most recent command the device accepted.
    last_command: Option<Command>,
    /// Commands the device accepted this session.
    commands_sent: u64,
}

impl App {
    /// Create a new App controlling the device at `device_addr`.
    pub fn new(device_addr: String) -> Self {
        Self {
            device_addr,
            capture: None,
            terminal_size: (80, 24),
            status_message: None,
            last_command: None,
            commands_sent: 0,
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Interrupt => vec![AppAction::Quit],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::CommandSent(command) => {
                self.last_command = Some(command);
                self.commands_sent += 1;
                vec![AppAction::Render]
            },
            AppEvent::TypingFinished { glyphs, moves } => {
                self.status_message = Some(format!("Typed {glyphs} keys in {moves} moves"));
                vec![AppAction::Render]
            },
            AppEvent::Error { message } => {
                self.status_message = Some(format!("Error: {message}"));
                vec![AppAction::Render]
            },
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        if let Some(capture) = self.capture.as_mut() {
            return match capture.handle(key) {
                CaptureOutcome::Pending(mut actions) => {
                    actions.push(AppAction::Render);
                    actions
                },
                CaptureOutcome::Finished(mut actions) => {
                    self.capture = None;
                    actions.push(AppAction::Render);
                    actions
                },
                CaptureOutcome::Ignored => vec![],
            };
        }

        if keymap::is_quit(key) {
            return vec![AppAction::Quit];
        }

        match keymap::lookup(key) {
            Some(Binding::Send(command)) => vec![AppAction::Send(command)],
            Some(Binding::Capture(kind)) => {
                self.capture = Some(TextCapture::new(kind));
                self.status_message = None;
                vec![AppAction::Render]
            },
            None => vec![],
        }
    }

    /// Set a status message to display to the user.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Current input mode.
    pub fn mode(&self) -> Mode {
        self.capture.as_ref().map_or(Mode::Idle, |capture| capture.kind().mode())
    }

    /// Device address (host:port).
    pub fn device_addr(&self) -> &str {
        &self.device_addr
    }

    /// Local echo of the active capture. `None` in idle mode.
    pub fn capture_text(&self) -> Option<&str> {
        self.capture.as_ref().map(TextCapture::text)
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Most recent command the device accepted.
    pub fn last_command(&self) -> Option<Command> {
        self.last_command
    }

    /// Number of commands the device accepted this session.
    pub fn commands_sent(&self) -> u64 {
        self.commands_sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CaptureKind;

    fn app() -> App {
        App::new("192.168.1.20:8060".into())
    }

    fn press(app: &mut App, c: char) -> Vec<AppAction> {
        app.handle(AppEvent::Key(KeyInput::Char(c)))
    }

    #[test]
    fn bound_key_sends_command_without_state_change() {
        let mut app = app();
        let before = app.clone();

        let actions = press(&mut app, 'j');

        assert_eq!(actions, vec![AppAction::Send(Command::Down)]);
        assert_eq!(app, before);
    }

    #[test]
    fn command_sent_updates_status_bar_state() {
        let mut app = app();
        let actions = app.handle(AppEvent::CommandSent(Command::Home));

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.last_command(), Some(Command::Home));
        assert_eq!(app.commands_sent(), 1);
    }

    #[test]
    fn quit_only_from_idle() {
        let mut app = app();
        assert_eq!(press(&mut app, 'Q'), vec![AppAction::Quit]);

        let _ = press(&mut app, 'u');
        assert_eq!(press(&mut app, 'q'), vec![AppAction::Render]);
        assert_eq!(app.capture_text(), Some("q"));
    }

    #[test]
    fn interrupt_quits_from_capture() {
        let mut app = app();
        let _ = press(&mut app, '/');
        assert_eq!(app.handle(AppEvent::Interrupt), vec![AppAction::Quit]);
    }

    #[test]
    fn slash_enters_direct_entry() {
        let mut app = app();
        app.set_status("stale");

        assert_eq!(press(&mut app, '/'), vec![AppAction::Render]);
        assert_eq!(app.mode(), Mode::DirectEntry);
        assert_eq!(app.capture_text(), Some(""));
        assert_eq!(app.status_message(), None);

        assert_eq!(press(&mut app, 'x'), vec![
            AppAction::Send(Command::Literal('x')),
            AppAction::Render
        ]);
    }

    #[test]
    fn buffered_entry_commits_on_enter() {
        let mut app = app();
        let _ = press(&mut app, 'u');
        assert_eq!(app.mode(), CaptureKind::Buffered.mode());

        let _ = press(&mut app, 'h');
        let _ = press(&mut app, 'i');
        let actions = app.handle(AppEvent::Key(KeyInput::Enter));

        assert_eq!(actions, vec![AppAction::TypeText { text: "hi".into() }, AppAction::Render]);
        assert_eq!(app.mode(), Mode::Idle);
        assert_eq!(app.capture_text(), None);
    }

    #[test]
    fn escape_returns_to_idle_silently() {
        let mut app = app();
        let _ = press(&mut app, 'u');
        let _ = press(&mut app, 'a');

        assert_eq!(app.handle(AppEvent::Key(KeyInput::Esc)), vec![AppAction::Render]);
        assert_eq!(app.mode(), Mode::Idle);
    }

    #[test]
    fn unbound_key_is_ignored() {
        let mut app = app();
        let before = app.clone();

        assert!(press(&mut app, 'z').is_empty());
        assert!(app.handle(AppEvent::Key(KeyInput::Esc)).is_empty());
        assert_eq!(app, before);
    }

    #[test]
    fn navigation_error_is_reported_in_status() {
        let mut app = app();
        let _ = app.handle(AppEvent::Error { message: "no key for '!'".into() });

        assert_eq!(app.status_message(), Some("Error: no key for '!'"));
        assert_eq!(app.mode(), Mode::Idle);
    }

    #[test]
    fn typing_summary_is_reported_in_status() {
        let mut app = app();
        let _ = app.handle(AppEvent::TypingFinished { glyphs: 3, moves: 14 });
        assert_eq!(app.status_message(), Some("Typed 3 keys in 14 moves"));
    }
}
