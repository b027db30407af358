//! Remote-control commands and their ECP key names.
//!
//! Every [`Command`] maps to exactly one ECP key. Named keys are sent as-is
//! (`/keypress/Select`); literal characters are sent as `Lit_` followed by
//! the percent-encoded UTF-8 of the character (`/keypress/Lit_%40` for `@`).

use std::{borrow::Cow, fmt};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::errors::{ProtocolError, Result};

/// TCP port the ECP HTTP service listens on.
pub const ECP_PORT: u16 = 8060;

/// Characters left unescaped inside a `Lit_` key.
///
/// Matches the unreserved set of RFC 3986, which is what the device accepts
/// without decoding.
const LITERAL_ENCODE_SET: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Prefix of literal keypress names.
const LITERAL_PREFIX: &str = "Lit_";

/// Atomic instruction sent to a device.
///
/// Stateless and fire-and-forget: the device acknowledges a command only by
/// the success or failure of the request carrying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move focus up.
    Up,
    /// Move focus down.
    Down,
    /// Move focus left.
    Left,
    /// Move focus right.
    Right,
    /// Activate the focused item (the remote's OK button).
    Select,
    /// Return to the previous screen.
    Back,
    /// Return to the home screen.
    Home,
    /// Type one character into the focused text field.
    Literal(char),
    /// Delete the character before the text cursor.
    Backspace,
    /// Submit the focused text field.
    Enter,
    /// Jump back a few seconds in the current stream.
    Replay,
    /// Show the info/settings overlay.
    Info,
    /// Rewind.
    Reverse,
    /// Fast-forward.
    Forward,
    /// Toggle play/pause.
    Play,
}

impl Command {
    /// Every command without a payload, in remote-control order.
    pub const NAMED: [Command; 14] = [
        Command::Up,
        Command::Down,
        Command::Left,
        Command::Right,
        Command::Select,
        Command::Back,
        Command::Home,
        Command::Backspace,
        Command::Enter,
        Command::Replay,
        Command::Info,
        Command::Reverse,
        Command::Forward,
        Command::Play,
    ];

    /// ECP key name for this command (the last segment of `/keypress/<key>`).
    pub fn ecp_key(&self) -> Cow<'static, str> {
        let name = match self {
            Command::Up => "Up",
            Command::Down => "Down",
            Command::Left => "Left",
            Command::Right => "Right",
            Command::Select => "Select",
            Command::Back => "Back",
            Command::Home => "Home",
            Command::Backspace => "Backspace",
            Command::Enter => "Enter",
            Command::Replay => "InstantReplay",
            Command::Info => "Info",
            Command::Reverse => "Rev",
            Command::Forward => "Fwd",
            Command::Play => "Play",
            Command::Literal(c) => {
                let mut buf = [0u8; 4];
                let encoded = utf8_percent_encode(c.encode_utf8(&mut buf), LITERAL_ENCODE_SET);
                return Cow::Owned(format!("{LITERAL_PREFIX}{encoded}"));
            },
        };
        Cow::Borrowed(name)
    }

    /// Decode an ECP key name back into a command.
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::UnknownKey`] if the name is not an ECP key we send
    /// - [`ProtocolError::InvalidLiteral`] if a `Lit_` payload does not decode
    ///   to exactly one character
    pub fn from_ecp_key(key: &str) -> Result<Self> {
        if let Some(encoded) = key.strip_prefix(LITERAL_PREFIX) {
            let decoded = percent_decode_str(encoded)
                .decode_utf8()
                .map_err(|_| ProtocolError::InvalidLiteral(key.to_string()))?;
            let mut chars = decoded.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Command::Literal(c)),
                _ => Err(ProtocolError::InvalidLiteral(key.to_string())),
            };
        }

        Self::NAMED
            .into_iter()
            .find(|command| command.ecp_key() == key)
            .ok_or_else(|| ProtocolError::UnknownKey(key.to_string()))
    }

    /// True for the four focus-moving commands.
    pub fn is_direction(&self) -> bool {
        matches!(self, Command::Up | Command::Down | Command::Left | Command::Right)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Literal(c) => write!(f, "Literal({c:?})"),
            Command::Replay => f.write_str("Replay"),
            Command::Reverse => f.write_str("Rewind"),
            Command::Forward => f.write_str("Fast-Fwd"),
            Command::Play => f.write_str("Play/Pause"),
            other => f.write_str(&other.ecp_key()),
        }
    }
}
