//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use rokucli_proto::Command;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Send one command to the device.
    Send(Command),

    /// Type text through the on-screen keyboard.
    TypeText {
        /// Text exactly as entered, case preserved.
        text: String,
    },
}
