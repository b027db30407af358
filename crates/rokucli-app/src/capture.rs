//! Text capture shared by the two text-entry sub-modes.
//!
//! A [`TextCapture`] keeps the local echo of what the user typed. Its
//! [`CaptureKind`] decides what a character, a delete and a confirm do:
//!
//! | key        | [`CaptureKind::Direct`]         | [`CaptureKind::Buffered`]  |
//! |------------|---------------------------------|----------------------------|
//! | character  | send `Literal(c)`, echo it      | echo it                    |
//! | delete     | send `Backspace`, trim the echo | trim the echo              |
//! | Enter      | send `Enter`, finish            | type the echo, finish      |
//! | Escape     | finish                          | finish, discard the echo   |

use rokucli_proto::Command;

use crate::{AppAction, KeyInput, Mode};

/// Prompt shown in front of the echo.
pub const CAPTURE_PROMPT: &str = "Enter text (<Esc> to abort) : ";

/// Which text-entry sub-mode a capture implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureKind {
    /// Characters go to the device one at a time as literals.
    Direct,
    /// Characters are collected and typed through the on-screen keyboard.
    Buffered,
}

impl CaptureKind {
    /// Session mode while this capture is active.
    pub fn mode(self) -> Mode {
        match self {
            CaptureKind::Direct => Mode::DirectEntry,
            CaptureKind::Buffered => Mode::BufferedEntry,
        }
    }
}

/// Result of feeding one key to a capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Still capturing. Actions may be empty.
    Pending(Vec<AppAction>),
    /// Capture is over; run these actions and return to idle.
    Finished(Vec<AppAction>),
    /// The key means nothing here.
    Ignored,
}

/// Local echo of an active text-entry sub-mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCapture {
    kind: CaptureKind,
    text: String,
}

impl TextCapture {
    /// Start an empty capture.
    pub fn new(kind: CaptureKind) -> Self {
        Self { kind, text: String::new() }
    }

    /// Sub-mode this capture implements.
    pub fn kind(&self) -> CaptureKind {
        self.kind
    }

    /// Text echoed so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Feed one key.
    pub fn handle(&mut self, key: KeyInput) -> CaptureOutcome {
        match key {
            KeyInput::Char(c) => {
                self.text.push(c);
                CaptureOutcome::Pending(self.on_char(c))
            },
            KeyInput::Backspace | KeyInput::Delete => {
                // the echo never shrinks past the prompt
                self.text.pop();
                CaptureOutcome::Pending(self.on_delete())
            },
            KeyInput::Enter => CaptureOutcome::Finished(self.on_confirm()),
            KeyInput::Esc => CaptureOutcome::Finished(Vec::new()),
            KeyInput::Up | KeyInput::Down | KeyInput::Left | KeyInput::Right => {
                CaptureOutcome::Ignored
            },
        }
    }

    fn on_char(&self, c: char) -> Vec<AppAction> {
        match self.kind {
            CaptureKind::Direct => vec![AppAction::Send(Command::Literal(c))],
            CaptureKind::Buffered => Vec::new(),
        }
    }

    fn on_delete(&self) -> Vec<AppAction> {
        match self.kind {
            CaptureKind::Direct => vec![AppAction::Send(Command::Backspace)],
            CaptureKind::Buffered => Vec::new(),
        }
    }

    fn on_confirm(&mut self) -> Vec<AppAction> {
        match self.kind {
            CaptureKind::Direct => vec![AppAction::Send(Command::Enter)],
            CaptureKind::Buffered => {
                vec![AppAction::TypeText { text: std::mem::take(&mut self.text) }]
            },
        }
    }
}
