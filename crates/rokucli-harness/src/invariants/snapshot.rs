//! Observable state extracted for invariant checks.

use rokucli_app::{App, Mode};
use rokucli_core::Position;

use crate::VirtualKeyboard;

/// Session state as the App reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Current input mode.
    pub mode: Mode,
    /// Local echo, if any.
    pub capture_text: Option<String>,
    /// Commands the App believes the device accepted.
    pub commands_acknowledged: u64,
    /// Commands the device actually received.
    pub commands_delivered: usize,
}

/// Device keyboard state as the model reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardSnapshot {
    /// Current focus.
    pub cursor: Position,
    /// Whether focus is on a selectable key.
    pub on_key: bool,
    /// Shift state.
    pub caps: bool,
    /// Faults recorded so far, rendered for messages.
    pub faults: Vec<String>,
    /// Submissions made with shift on.
    pub unbalanced_submits: usize,
}

/// Complete system state at one point in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSnapshot {
    /// App side.
    pub session: SessionSnapshot,
    /// Device side.
    pub keyboard: KeyboardSnapshot,
}

impl SystemSnapshot {
    /// Capture the state of `app` and `keyboard`.
    pub fn capture(app: &App, keyboard: &VirtualKeyboard, delivered: usize) -> Self {
        Self {
            session: SessionSnapshot {
                mode: app.mode(),
                capture_text: app.capture_text().map(str::to_string),
                commands_acknowledged: app.commands_sent(),
                commands_delivered: delivered,
            },
            keyboard: KeyboardSnapshot {
                cursor: keyboard.cursor(),
                on_key: keyboard.on_key(),
                caps: keyboard.caps(),
                faults: keyboard.faults().iter().map(ToString::to_string).collect(),
                unbalanced_submits: keyboard.unbalanced_submits(),
            },
        }
    }

    /// Fresh session on the built-in layout: idle, nothing sent.
    pub fn idle() -> Self {
        Self {
            session: SessionSnapshot {
                mode: Mode::Idle,
                capture_text: None,
                commands_acknowledged: 0,
                commands_delivered: 0,
            },
            keyboard: KeyboardSnapshot {
                cursor: Position::new(0, 1),
                on_key: true,
                caps: false,
                faults: Vec::new(),
                unbalanced_submits: 0,
            },
        }
    }
}
