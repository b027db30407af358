//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (keyboard, Ctrl+C, resize) produced by the driver.
//! - Execution reports fed back by the runtime after it acts on an action.

use rokucli_proto::Command;

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Ctrl+C. Raw mode swallows the terminal's SIGINT, so the driver
    /// reports it as an event.
    Interrupt,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// The device accepted a command.
    CommandSent(Command),

    /// A text plan ran to completion.
    TypingFinished {
        /// Keys selected, including caps toggles and the Done key.
        glyphs: usize,
        /// Directional moves sent.
        moves: usize,
    },

    /// Recoverable error to show to the user.
    Error {
        /// Error description.
        message: String,
    },
}
