//! Observable session state.

use std::fmt;

/// Current input mode of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys map to remote-control commands.
    #[default]
    Idle,
    /// Each printable key is sent to the device as it is typed.
    DirectEntry,
    /// Keys fill a local buffer that is typed through the on-screen keyboard
    /// on Enter.
    BufferedEntry,
}

impl Mode {
    /// True in either text-capture sub-mode.
    pub fn is_capturing(&self) -> bool {
        !matches!(self, Mode::Idle)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Idle => "remote",
            Mode::DirectEntry => "text entry",
            Mode::BufferedEntry => "keyboard entry",
        })
    }
}
